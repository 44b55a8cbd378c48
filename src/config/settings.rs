use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 工具設定檔 (upm-kit.toml)
///
/// 記住上次使用的名稱當作預設值,
/// 對應原 Unity 工具透過 EditorUserSettings 儲存的兩個 key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "default_company_name")]
    pub company_name: String,

    #[serde(default = "default_package_name")]
    pub package_name: String,
}

fn default_company_name() -> String {
    "company".to_string()
}

fn default_package_name() -> String {
    "package".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            package_name: default_package_name(),
        }
    }
}

impl ToolSettings {
    pub const FILE_NAME: &'static str = "upm-kit.toml";

    /// 從設定檔載入, 檔案不存在時回傳預設值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = toml::from_str(content)?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
