use crate::error::AppError;
use std::path::Path;

/// Strips a leading `http://` or `https://` and any trailing slashes from a host.
///
/// # Example
/// ```
/// use sportim_loader::config::normalize_host;
///
/// assert_eq!(normalize_host(" http://league.example.com/ "), "league.example.com");
/// assert_eq!(normalize_host("localhost"), "localhost");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("http://")
        .or_else(|| host.strip_prefix("https://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Host, when set, cannot be empty and must be a bare host name
/// - Port cannot be zero
/// - Timeout, when set, cannot be zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    host: Option<&str>,
    port: u16,
    http_timeout_seconds: Option<u64>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(host) = host {
        if host.trim().is_empty() {
            return Err(AppError::config_error("Service host cannot be empty"));
        }
        if host.contains("://") || host.contains('/') || host.contains(char::is_whitespace) {
            return Err(AppError::config_error(format!(
                "Service host '{host}' must be a bare host name without scheme or path"
            )));
        }
    }

    if port == 0 {
        return Err(AppError::config_error("Service port cannot be zero"));
    }

    if http_timeout_seconds == Some(0) {
        return Err(AppError::config_error("HTTP timeout cannot be zero"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
