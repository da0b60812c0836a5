use crate::cli::Args;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Resolves the log directory and file name.
///
/// `--log-file` wins over the configured path; without either the log goes to
/// the platform config directory.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    let default_file_name = format!("{APP_NAME}.log");
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());

    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or(default_file_name);
            (parent.to_string_lossy().to_string(), file_name)
        }
        None => (Config::get_log_dir_path(), default_file_name),
    }
}

fn env_filter(level: &str) -> Result<EnvFilter, AppError> {
    let directive: Directive = format!("{APP_NAME}={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging to both stdout and a daily rolling log file.
///
/// Progress and per-record failures go to both outputs. `--debug` lowers the
/// level to include request and response details.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if args.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_target(false)
                .with_filter(env_filter(level)?),
        )
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(level)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_log_file_argument_wins_over_config() {
        let args = Args::try_parse_from(["sportim_loader", "--log-file", "/tmp/run/import.log"])
            .unwrap();
        let config = Config {
            log_file_path: Some("/var/log/sportim.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp/run");
        assert_eq!(file, "import.log");
    }

    #[test]
    fn test_config_log_path_is_used() {
        let args = Args::try_parse_from(["sportim_loader"]).unwrap();
        let config = Config {
            log_file_path: Some("/var/log/sportim.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/var/log");
        assert_eq!(file, "sportim.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_directory() {
        let args = Args::try_parse_from(["sportim_loader", "--log-file", "import.log"]).unwrap();

        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, ".");
        assert_eq!(file, "import.log");
    }

    #[test]
    fn test_default_log_location() {
        let args = Args::try_parse_from(["sportim_loader"]).unwrap();

        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, "sportim_loader.log");
    }
}
