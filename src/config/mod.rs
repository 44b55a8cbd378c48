pub mod settings;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "upm-kit")]
#[command(about = "Create and publish Unity UPM packages via git subtree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a UPM-compliant package folder
    Create {
        /// Company name (defaults to the last used value)
        #[arg(long)]
        company: Option<String>,

        /// Package name (defaults to the last used value)
        #[arg(long)]
        package: Option<String>,

        /// Destination root for package folders
        #[arg(long, default_value = "Packages")]
        packages_dir: PathBuf,

        /// Also scaffold Tests folders and Documentation~
        #[arg(long)]
        full: bool,
    },

    /// Publish a package folder as a standalone branch via git subtree
    Push {
        /// Package folder containing package.json
        package_dir: PathBuf,

        /// Increment the patch version before publishing
        #[arg(long)]
        bump: bool,

        /// Write an explicit version before publishing
        #[arg(long, conflicts_with = "bump")]
        set_version: Option<String>,

        /// Branch to split the package folder into
        #[arg(long, default_value = "upm")]
        branch: String,

        /// Remote to push the branch and tags to
        #[arg(long, default_value = "origin")]
        remote: String,
    },
}

impl Validate for Commands {
    fn validate(&self) -> Result<()> {
        match self {
            Commands::Create {
                company, package, ..
            } => {
                // 預設值來自設定檔, 解析後由 create 流程再驗證一次
                if let Some(company) = company {
                    validation::validate_name("company", company)?;
                }
                if let Some(package) = package {
                    validation::validate_name("package", package)?;
                }
                Ok(())
            }
            Commands::Push {
                set_version,
                branch,
                remote,
                ..
            } => {
                if let Some(version) = set_version {
                    validation::validate_version("set-version", version)?;
                }
                validation::validate_non_empty_string("branch", branch)?;
                validation::validate_non_empty_string("remote", remote)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_special_characters() {
        let command = Commands::Create {
            company: Some("kiwi tools".to_string()),
            package: None,
            packages_dir: PathBuf::from("Packages"),
            full: false,
        };
        assert!(command.validate().is_err());
    }

    #[test]
    fn test_create_accepts_missing_names() {
        let command = Commands::Create {
            company: None,
            package: None,
            packages_dir: PathBuf::from("Packages"),
            full: false,
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn test_push_rejects_malformed_set_version() {
        let command = Commands::Push {
            package_dir: PathBuf::from("Packages/Kiwi Tools"),
            bump: false,
            set_version: Some("1.2".to_string()),
            branch: "upm".to_string(),
            remote: "origin".to_string(),
        };
        assert!(command.validate().is_err());
    }

    #[test]
    fn test_push_rejects_empty_branch() {
        let command = Commands::Push {
            package_dir: PathBuf::from("Packages/Kiwi Tools"),
            bump: true,
            set_version: None,
            branch: "  ".to_string(),
            remote: "origin".to_string(),
        };
        assert!(command.validate().is_err());
    }
}
