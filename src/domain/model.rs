use crate::utils::error::{Result, UpmError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// UPM package.json 配置
///
/// 只關心 name / version / displayName 三個欄位,
/// 其餘欄位原封不動寫回 (flatten).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "displayName")]
    pub display_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// 建立新 package 的預設 manifest
    pub fn new(company_name: &str, package_name: &str) -> Self {
        Self {
            name: format!(
                "com.{}.{}",
                company_name.to_lowercase(),
                package_name.to_lowercase()
            ),
            version: "1.0.0".to_string(),
            display_name: format!("{} {}", company_name, package_name),
            extra: Map::new(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 版本號: 以 '.' 分隔的三段非負整數
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// 自增補丁號: 1.2.3 -> 1.2.4
    pub fn bump_patch(self) -> Self {
        Self {
            patch: self.patch + 1,
            ..self
        }
    }
}

impl FromStr for Version {
    type Err = UpmError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| UpmError::InvalidConfigValueError {
            field: "version".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid(
                "Version must be three dot-separated components (major.minor.patch)",
            ));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u32>()
                .map_err(|_| invalid("Version components must be non-negative integers"))?;
        }

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Unity assembly definition (.asmdef) 檔案內容
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asmdef {
    pub name: String,
    pub root_namespace: String,
    pub references: Vec<String>,
    pub include_platforms: Vec<String>,
    pub exclude_platforms: Vec<String>,
    pub allow_unsafe_code: bool,
    pub override_references: bool,
    pub precompiled_references: Vec<String>,
    pub auto_referenced: bool,
    pub define_constraints: Vec<String>,
    pub version_defines: Vec<String>,
    pub no_engine_references: bool,
}

impl Asmdef {
    fn base(assembly_name: &str) -> Self {
        Self {
            name: assembly_name.to_string(),
            root_namespace: assembly_name.to_string(),
            references: Vec::new(),
            include_platforms: Vec::new(),
            exclude_platforms: Vec::new(),
            allow_unsafe_code: false,
            override_references: false,
            precompiled_references: Vec::new(),
            auto_referenced: true,
            define_constraints: Vec::new(),
            version_defines: Vec::new(),
            no_engine_references: false,
        }
    }

    /// Runtime 程式集: 無平台限制
    pub fn runtime(assembly_name: &str) -> Self {
        Self::base(assembly_name)
    }

    /// Editor 程式集: 只包含 Editor 平台
    pub fn editor(assembly_name: &str) -> Self {
        let mut asmdef = Self::base(assembly_name);
        asmdef.include_platforms = vec!["Editor".to_string()];
        asmdef
    }

    /// 測試程式集: 引用被測程式集
    pub fn tests(assembly_name: &str, tested_assembly: &str, editor_only: bool) -> Self {
        let mut asmdef = Self::base(assembly_name);
        asmdef.references = vec![tested_assembly.to_string()];
        if editor_only {
            asmdef.include_platforms = vec!["Editor".to_string()];
        }
        asmdef
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
