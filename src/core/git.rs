use crate::domain::ports::{GitOutput, GitRunner};
use crate::utils::error::{Result, UpmError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// 透過 `std::process::Command` 同步呼叫外部 git
#[derive(Debug, Clone, Default)]
pub struct ProcessGit;

impl GitRunner for ProcessGit {
    fn run(&self, arguments: &[&str], working_directory: &Path) -> Result<GitOutput> {
        tracing::debug!(
            "Running: git {} (in {})",
            arguments.join(" "),
            working_directory.display()
        );

        let output = Command::new("git")
            .args(arguments)
            .current_dir(working_directory)
            .output()
            .map_err(|e| UpmError::GitLaunchError {
                reason: e.to_string(),
            })?;

        Ok(GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// 取得 git 倉庫根目錄
pub fn repository_root<G: GitRunner>(git: &G, start_dir: &Path) -> Result<PathBuf> {
    let output = git.run(&["rev-parse", "--show-toplevel"], start_dir)?;

    if !output.success() {
        if !output.stderr.trim().is_empty() {
            tracing::error!("{}", output.stderr.trim());
        }
        return Err(UpmError::GitCommandError {
            arguments: "rev-parse --show-toplevel".to_string(),
            code: output.code,
        });
    }

    Ok(PathBuf::from(output.stdout.trim()))
}

/// package 資料夾相對倉庫根目錄的路徑 (斜線分隔, 給 --prefix 用)
pub fn package_prefix(repo_root: &Path, package_dir: &Path) -> Result<String> {
    // canonicalize 兩邊, 避免符號連結造成 strip_prefix 失敗
    let repo_root = repo_root.canonicalize()?;
    let package_dir = package_dir.canonicalize()?;

    let relative = package_dir.strip_prefix(&repo_root).map_err(|_| {
        UpmError::OutsideRepositoryError {
            path: package_dir.display().to_string(),
        }
    })?;

    let prefix = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if prefix.is_empty() {
        return Err(UpmError::ConfigError {
            message: "Package folder must be a subdirectory of the repository root".to_string(),
        });
    }

    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_package_prefix_nested_folder() {
        let repo = TempDir::new().unwrap();
        let package = repo.path().join("Packages").join("Kiwi Tools");
        std::fs::create_dir_all(&package).unwrap();

        let prefix = package_prefix(repo.path(), &package).unwrap();
        assert_eq!(prefix, "Packages/Kiwi Tools");
    }

    #[test]
    fn test_package_prefix_outside_repository() {
        let repo = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();

        let result = package_prefix(repo.path(), elsewhere.path());
        assert!(matches!(
            result,
            Err(UpmError::OutsideRepositoryError { .. })
        ));
    }

    #[test]
    fn test_package_prefix_repo_root_itself() {
        let repo = TempDir::new().unwrap();

        let result = package_prefix(repo.path(), repo.path());
        assert!(result.is_err());
    }
}
