//! Sportim demo data loader
//!
//! Reads a player CSV file and a team CSV file and drives the league service's
//! REST API to create the users, create the teams as their owners, and add each
//! player to their team.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sportim_loader::error::AppError;
//! use sportim_loader::importer::{Importer, ServiceClient};
//! use sportim_loader::importer::api::build_base_url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = ServiceClient::new(build_base_url("localhost", 8080), None)?;
//!     let importer = Importer::new(client, "soccer");
//!
//!     importer.run("players.csv", "teams.csv").await
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod importer;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use importer::{Importer, ServiceClient};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
