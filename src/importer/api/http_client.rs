//! HTTP client creation

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client used for every service call.
///
/// Without `timeout_seconds` a request waits until the service answers or the
/// connection fails.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build()
}
