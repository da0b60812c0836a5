// src/main.rs
use clap::Parser;
use sportim_loader::cli::{Args, is_config_operation};
use sportim_loader::commands::{
    ImportSettings, handle_config_update, handle_list_config_command, resolve_host, run_import,
    validate_args,
};
use sportim_loader::config::Config;
use sportim_loader::error::AppError;
use sportim_loader::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Configuration operations exit without importing
    if args.list_config {
        return handle_list_config_command().await;
    }
    if is_config_operation(&args) {
        return handle_config_update(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let host = resolve_host(&args, &config).await?;
    let settings = ImportSettings::new(&args, &config, host)?;

    run_import(&settings).await
}
