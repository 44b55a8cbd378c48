use crate::core::git::{package_prefix, repository_root};
use crate::domain::model::{Manifest, Version};
use crate::domain::ports::{GitOutput, GitRunner};
use crate::utils::error::{Result, UpmError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PushOptions {
    /// 自增補丁號後再發佈
    pub bump: bool,
    /// 發佈前寫入指定版本號
    pub set_version: Option<String>,
    pub branch: String,
    pub remote: String,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            bump: false,
            set_version: None,
            branch: "upm".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// Package 發佈流程
///
/// 固定三步: subtree split -> tag -> push.
/// 無重試, 無並行, 任一步失敗即中止 (以 exit code 判定成敗,
/// git 的進度訊息走 stderr, 只記 log 不當作失敗).
pub struct Publisher<G: GitRunner> {
    git: G,
    package_dir: PathBuf,
    options: PushOptions,
}

impl<G: GitRunner> Publisher<G> {
    pub fn new(git: G, package_dir: impl Into<PathBuf>, options: PushOptions) -> Self {
        Self {
            git,
            package_dir: package_dir.into(),
            options,
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// 執行發佈, 回傳發佈的版本號
    pub fn run(&self) -> Result<Version> {
        let version = self.prepare_manifest()?;

        let repo_root = repository_root(&self.git, &self.package_dir)?;
        tracing::info!("Repository root: {}", repo_root.display());

        let prefix = package_prefix(&repo_root, &self.package_dir)?;
        tracing::info!("Package prefix: {}", prefix);

        let branch = &self.options.branch;

        self.run_git_step(
            &[
                "subtree",
                "split",
                &format!("--prefix={}", prefix),
                "--branch",
                branch,
            ],
            &repo_root,
        )?;
        tracing::info!("Split {} into branch {}", prefix, branch);

        let tag = version.to_string();
        self.run_git_step(&["tag", &tag, branch], &repo_root)?;
        tracing::info!("Tagged branch {} as {}", branch, tag);

        self.run_git_step(
            &["push", &self.options.remote, branch, "--tags"],
            &repo_root,
        )?;
        tracing::info!(
            "Pushed branch {} and tags to {}",
            branch,
            self.options.remote
        );

        Ok(version)
    }

    /// 更新 manifest 的版本號, 回傳要發佈的版本
    fn prepare_manifest(&self) -> Result<Version> {
        let manifest_path = self.package_dir.join("package.json");
        let mut manifest = Manifest::from_file(&manifest_path)?;
        let mut dirty = false;

        // 缺 version 欄位時補 1.0.0, 與建立工具的預設一致
        if manifest.version.is_empty() {
            manifest.version = "1.0.0".to_string();
            dirty = true;
        }

        let version = if let Some(explicit) = &self.options.set_version {
            let version: Version = explicit.parse()?;
            if manifest.version != version.to_string() {
                manifest.version = version.to_string();
                dirty = true;
            }
            version
        } else if self.options.bump {
            let current: Version = manifest.version.parse()?;
            let bumped = current.bump_patch();
            tracing::info!("Version bump: {} -> {}", current, bumped);
            manifest.version = bumped.to_string();
            dirty = true;
            bumped
        } else {
            manifest.version.parse()?
        };

        if dirty {
            manifest.write_to(&manifest_path)?;
            tracing::info!("Updated package.json version to {}", manifest.version);
        }

        Ok(version)
    }

    fn run_git_step(&self, arguments: &[&str], repo_root: &Path) -> Result<()> {
        let output = self.git.run(arguments, repo_root)?;
        log_git_output(&output);

        if !output.success() {
            return Err(UpmError::GitCommandError {
                arguments: arguments.join(" "),
                code: output.code,
            });
        }

        Ok(())
    }
}

fn log_git_output(output: &GitOutput) {
    if !output.stdout.trim().is_empty() {
        tracing::info!("{}", output.stdout.trim());
    }
    if !output.stderr.trim().is_empty() {
        tracing::warn!("{}", output.stderr.trim());
    }
}
