//! User interaction for first-run configuration
//!
//! Used when no service host is given on the command line, in the
//! environment, or in the config file.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the service host and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use sportim_loader::config::user_prompts::prompt_for_host;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let host = prompt_for_host().await?;
/// println!("Got host: {}", host);
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_host() -> Result<String, AppError> {
    println!("Please enter the league service host: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
