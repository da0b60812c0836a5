use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to reach league service: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Network-specific errors
    #[error("Network timeout while calling: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Response body errors
    #[error("Service returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("Service returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Service returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Service response has no status (URL: {url})")]
    ApiMissingStatus { url: String },

    // The service answered but reported a failure in the body
    #[error("Service rejected request ({code}): {message} (URL: {url})")]
    ServiceRejected {
        code: i64,
        message: String,
        url: String,
    },

    // Input file errors
    #[error("Cannot open input file {path}: {source}")]
    InputFile {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row} of {path} has {found} fields, expected at least {expected}")]
    RowTooShort {
        path: String,
        row: u64,
        expected: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a missing status error
    pub fn api_missing_status(url: impl Into<String>) -> Self {
        Self::ApiMissingStatus { url: url.into() }
    }

    /// Create an error for a response whose status code is not 200
    pub fn service_rejected(code: i64, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServiceRejected {
            code,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for an input file that cannot be opened
    pub fn input_file(path: impl Into<String>, source: csv::Error) -> Self {
        Self::InputFile {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a row with fewer fields than its positional schema
    pub fn row_too_short(path: impl Into<String>, row: u64, expected: usize, found: usize) -> Self {
        Self::RowTooShort {
            path: path.into(),
            row,
            expected,
            found,
        }
    }

    /// Input errors abort the whole import run
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InputFile { .. } | AppError::Csv(_) | AppError::RowTooShort { .. }
        )
    }

    /// Service errors are reported per record and the run continues
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
                | AppError::ApiMissingStatus { .. }
                | AppError::ServiceRejected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_service_rejected_helper() {
        let error = AppError::service_rejected(
            401,
            "Not authorized",
            "http://localhost:8080/rest/team",
        );
        assert!(matches!(error, AppError::ServiceRejected { code: 401, .. }));
        assert_eq!(
            error.to_string(),
            "Service rejected request (401): Not authorized (URL: http://localhost:8080/rest/team)"
        );
        assert!(error.is_service_error());
        assert!(!error.is_input_error());
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("http://localhost:8080/rest/user", "Connection refused");
        assert!(matches!(error, AppError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: http://localhost:8080/rest/user - Connection refused"
        );
        assert!(error.is_service_error());
    }

    #[test]
    fn test_api_missing_status_helper() {
        let error = AppError::api_missing_status("http://localhost:8080/rest/login");
        assert_eq!(
            error.to_string(),
            "Service response has no status (URL: http://localhost:8080/rest/login)"
        );
    }

    #[test]
    fn test_row_too_short_helper() {
        let error = AppError::row_too_short("players.csv", 3, 6, 4);
        assert!(matches!(error, AppError::RowTooShort { .. }));
        assert_eq!(
            error.to_string(),
            "Row 3 of players.csv has 4 fields, expected at least 6"
        );
        assert!(error.is_input_error());
        assert!(!error.is_service_error());
    }

    #[test]
    fn test_api_malformed_json_helper() {
        let error = AppError::api_malformed_json("Response is not valid JSON", "http://h/rest/team");
        assert!(matches!(error, AppError::ApiMalformedJson { .. }));
        assert_eq!(
            error.to_string(),
            "Service returned malformed JSON: Response is not valid JSON (URL: http://h/rest/team)"
        );
    }
}
