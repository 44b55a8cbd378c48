pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::settings::ToolSettings;
pub use config::{Cli, Commands};
pub use core::git::ProcessGit;
pub use core::publish::{Publisher, PushOptions};
pub use core::scaffold::Scaffolder;
pub use utils::error::{Result, UpmError};
