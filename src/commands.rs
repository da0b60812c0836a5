use crate::cli::{Args, is_config_operation};
use crate::config::user_prompts::prompt_for_host;
use crate::config::{Config, normalize_host};
use crate::error::AppError;
use crate::importer::Importer;
use crate::importer::api::{ServiceClient, build_base_url};
use tracing::{error, info};

/// Validates command line argument combinations.
///
/// Import runs need both input files; config operations need neither.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.timeout == Some(0) {
        return Err(AppError::config_error("--timeout must be at least 1 second"));
    }

    if is_config_operation(args) {
        return Ok(());
    }

    if args.team_file.is_none() || args.player_file.is_none() {
        return Err(AppError::config_error(
            "Both a team file (-T) and a player file (-P) are required",
        ));
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles --set-host, --set-port, --set-log-file and --clear-log-file.
pub async fn handle_config_update(args: &Args) -> Result<(), AppError> {
    let mut config = match Config::load_from_path(&Config::get_config_path()).await {
        Ok(config) => config,
        Err(_) => Config::default(),
    };

    if let Some(new_host) = &args.new_host {
        config.host = Some(normalize_host(new_host));
    }

    if let Some(new_port) = args.new_port {
        config.port = new_port;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Picks the service host: command line, then environment/config file, then
/// an interactive prompt whose answer is saved for later runs.
pub async fn resolve_host(args: &Args, config: &Config) -> Result<String, AppError> {
    if let Some(host) = &args.host {
        return Ok(normalize_host(host));
    }

    if let Some(host) = &config.host {
        return Ok(host.clone());
    }

    let host = normalize_host(&prompt_for_host().await?);
    let config = Config {
        host: Some(host.clone()),
        ..config.clone()
    };
    config.validate()?;
    config.save().await?;
    info!("Saved service host {host} to {}", Config::get_config_path());
    Ok(host)
}

/// Everything an import run needs, merged from arguments and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub sport: String,
    pub player_file: String,
    pub team_file: String,
}

impl ImportSettings {
    /// Command line values win over config values.
    pub fn new(args: &Args, config: &Config, host: String) -> Result<Self, AppError> {
        let port = args.port.unwrap_or(config.port);
        crate::config::validation::validate_config(Some(host.as_str()), port, args.timeout, &None)?;

        let player_file = args
            .player_file
            .clone()
            .ok_or_else(|| AppError::config_error("A player file (-P) is required"))?;
        let team_file = args
            .team_file
            .clone()
            .ok_or_else(|| AppError::config_error("A team file (-T) is required"))?;

        Ok(ImportSettings {
            base_url: build_base_url(&host, port),
            timeout_seconds: args.timeout.or(config.http_timeout_seconds),
            sport: args.sport.clone().unwrap_or_else(|| config.sport.clone()),
            player_file,
            team_file,
        })
    }
}

/// Runs the three import phases against the configured service.
pub async fn run_import(settings: &ImportSettings) -> Result<(), AppError> {
    info!("Importing into {}", settings.base_url);
    let client = ServiceClient::new(settings.base_url.clone(), settings.timeout_seconds)?;
    let importer = Importer::new(client, settings.sport.clone());

    importer
        .run(&settings.player_file, &settings.team_file)
        .await
        .inspect_err(|e| {
            if e.is_input_error() {
                error!("Import aborted on bad input: {e}");
            } else {
                error!("Import aborted: {e}");
            }
        })
}
