use crate::domain::model::{Asmdef, Manifest};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Package 結構產生器
///
/// 固定線性流程, 任一步失敗即中止後續步驟.
/// 已存在的檔案一律跳過, 重複執行不會覆寫任何內容.
pub struct Scaffolder {
    company_name: String,
    package_name: String,
    packages_dir: PathBuf,
    full_layout: bool,
}

impl Scaffolder {
    pub fn new(
        company_name: impl Into<String>,
        package_name: impl Into<String>,
        packages_dir: impl Into<PathBuf>,
        full_layout: bool,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            package_name: package_name.into(),
            packages_dir: packages_dir.into(),
            full_layout,
        }
    }

    /// package 根目錄: `<packages-dir>/<Company> <Package>`
    pub fn package_path(&self) -> PathBuf {
        self.packages_dir
            .join(format!("{} {}", self.company_name, self.package_name))
    }

    fn assembly_name(&self) -> String {
        format!("{}.{}", self.company_name, self.package_name)
    }

    /// 建立 package 結構
    pub fn run(&self) -> Result<PathBuf> {
        let package_path = self.package_path();

        self.create_root_folder(&package_path)?;
        self.create_package_json(&package_path)?;
        self.create_readme(&package_path)?;
        self.create_changelog(&package_path)?;
        self.create_editor_folder(&package_path)?;
        self.create_runtime_folder(&package_path)?;

        if self.full_layout {
            self.create_tests_folders(&package_path)?;
            self.create_documentation(&package_path)?;
        }

        Ok(package_path)
    }

    fn create_root_folder(&self, package_path: &Path) -> Result<()> {
        if !package_path.exists() {
            std::fs::create_dir_all(package_path)?;
            tracing::info!("Created package folder: {}", package_path.display());
        }
        Ok(())
    }

    fn create_package_json(&self, package_path: &Path) -> Result<()> {
        let json_path = package_path.join("package.json");
        if json_path.exists() {
            tracing::debug!("package.json already exists, skipping");
            return Ok(());
        }

        let manifest = Manifest::new(&self.company_name, &self.package_name);
        manifest.write_to(&json_path)?;
        tracing::info!("Created package.json ({})", manifest.name);

        Ok(())
    }

    fn create_readme(&self, package_path: &Path) -> Result<()> {
        let readme_path = package_path.join("README.md");
        if readme_path.exists() {
            tracing::debug!("README.md already exists, skipping");
            return Ok(());
        }

        std::fs::write(&readme_path, format!("{}\n---", self.package_name))?;
        tracing::info!("Created README.md");

        Ok(())
    }

    fn create_changelog(&self, package_path: &Path) -> Result<()> {
        let changelog_path = package_path.join("CHANGELOG.md");
        if changelog_path.exists() {
            tracing::debug!("CHANGELOG.md already exists, skipping");
            return Ok(());
        }

        let today = chrono::Local::now().format("%Y-%m-%d");
        let content = format!(
            "# Changelog\n\n\
             All notable changes to this package will be documented in this file.\n\n\
             The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).\n\n\
             ## [1.0.0] - {}\n\n\
             ### Added\n\n\
             - Initial package layout.\n",
            today
        );

        std::fs::write(&changelog_path, content)?;
        tracing::info!("Created CHANGELOG.md");

        Ok(())
    }

    fn create_editor_folder(&self, package_path: &Path) -> Result<()> {
        let assembly = format!("{}.Editor", self.assembly_name());
        self.create_assembly_folder(
            &package_path.join("Editor"),
            &assembly,
            Asmdef::editor(&assembly),
        )
    }

    fn create_runtime_folder(&self, package_path: &Path) -> Result<()> {
        let assembly = self.assembly_name();
        self.create_assembly_folder(
            &package_path.join("Runtime"),
            &assembly,
            Asmdef::runtime(&assembly),
        )
    }

    fn create_tests_folders(&self, package_path: &Path) -> Result<()> {
        let editor_assembly = format!("{}.Editor", self.assembly_name());
        let editor_tests = format!("{}.Editor.Tests", self.assembly_name());
        self.create_assembly_folder(
            &package_path.join("Tests").join("Editor"),
            &editor_tests,
            Asmdef::tests(&editor_tests, &editor_assembly, true),
        )?;

        let runtime_tests = format!("{}.Tests", self.assembly_name());
        self.create_assembly_folder(
            &package_path.join("Tests").join("Runtime"),
            &runtime_tests,
            Asmdef::tests(&runtime_tests, &self.assembly_name(), false),
        )?;

        Ok(())
    }

    fn create_documentation(&self, package_path: &Path) -> Result<()> {
        let docs_path = package_path.join("Documentation~");
        if !docs_path.exists() {
            std::fs::create_dir_all(&docs_path)?;
        }

        let doc_file = docs_path.join(format!("{}.md", self.package_name));
        if doc_file.exists() {
            tracing::debug!("Documentation page already exists, skipping");
            return Ok(());
        }

        std::fs::write(&doc_file, format!("# {}\n", self.package_name))?;
        tracing::info!("Created Documentation~/{}.md", self.package_name);

        Ok(())
    }

    /// 建立資料夾及對應的 .asmdef 檔案
    fn create_assembly_folder(
        &self,
        folder_path: &Path,
        assembly_name: &str,
        asmdef: Asmdef,
    ) -> Result<()> {
        if !folder_path.exists() {
            std::fs::create_dir_all(folder_path)?;
        }

        let asmdef_path = folder_path.join(format!("{}.asmdef", assembly_name));
        if asmdef_path.exists() {
            tracing::debug!("{}.asmdef already exists, skipping", assembly_name);
            return Ok(());
        }

        asmdef.write_to(&asmdef_path)?;
        tracing::info!("Created {}.asmdef", assembly_name);

        Ok(())
    }
}
