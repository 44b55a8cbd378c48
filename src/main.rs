use clap::Parser;
use std::path::{Path, PathBuf};
use upm_kit::utils::{logger, validation};
use upm_kit::utils::validation::Validate;
use upm_kit::{Cli, Commands, ProcessGit, Publisher, PushOptions, Scaffolder, ToolSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting upm-kit CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證參數
    if let Err(e) = cli.command.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let result = match &cli.command {
        Commands::Create {
            company,
            package,
            packages_dir,
            full,
        } => run_create(company.as_deref(), package.as_deref(), packages_dir, *full),
        Commands::Push {
            package_dir,
            bump,
            set_version,
            branch,
            remote,
        } => run_push(
            package_dir,
            PushOptions {
                bump: *bump,
                set_version: set_version.clone(),
                branch: branch.clone(),
                remote: remote.clone(),
            },
        ),
    };

    match result {
        Ok(summary) => {
            tracing::info!("✅ {}", summary);
            println!("✅ {}", summary);
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_create(
    company: Option<&str>,
    package: Option<&str>,
    packages_dir: &Path,
    full: bool,
) -> upm_kit::Result<String> {
    let settings_path = PathBuf::from(ToolSettings::FILE_NAME);
    let mut settings = ToolSettings::load(&settings_path)?;

    let company = company.unwrap_or(&settings.company_name).to_string();
    let package = package.unwrap_or(&settings.package_name).to_string();

    // 預設值可能來自設定檔, 這裡驗證最終採用的名稱
    validation::validate_name("company", &company)?;
    validation::validate_name("package", &package)?;

    let scaffolder = Scaffolder::new(company.as_str(), package.as_str(), packages_dir, full);
    let package_path = scaffolder.run()?;

    // 記住這次的名稱當作下次的預設值
    settings.company_name = company;
    settings.package_name = package;
    settings.save(&settings_path)?;

    Ok(format!("Package created at {}", package_path.display()))
}

fn run_push(package_dir: &Path, options: PushOptions) -> upm_kit::Result<String> {
    let branch = options.branch.clone();
    let remote = options.remote.clone();

    let publisher = Publisher::new(ProcessGit, package_dir, options);
    let version = publisher.run()?;

    Ok(format!(
        "Published version {} on branch {} to {}",
        version, branch, remote
    ))
}
