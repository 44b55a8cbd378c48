use crate::utils::error::Result;
use std::path::Path;

/// 單次 git 呼叫的結果
#[derive(Debug, Clone)]
pub struct GitOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// 外部 git 程序的邊界
///
/// Production 實作透過 `std::process::Command` 呼叫 git;
/// 測試可以用腳本化的 runner 取代.
pub trait GitRunner: Send + Sync {
    fn run(&self, arguments: &[&str], working_directory: &Path) -> Result<GitOutput>;
}
