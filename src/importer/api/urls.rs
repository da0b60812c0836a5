//! URL building utilities for the league service endpoints

use crate::constants::REST_PATH;
use crate::importer::models::TeamId;

/// Builds the REST base URL for a service host and port.
///
/// # Example
/// ```
/// use sportim_loader::importer::api::build_base_url;
///
/// let url = build_base_url("localhost", 8080);
/// assert_eq!(url, "http://localhost:8080/rest");
/// ```
pub fn build_base_url(host: &str, port: u16) -> String {
    format!("http://{host}:{port}{REST_PATH}")
}

/// Builds the user creation URL.
///
/// # Example
/// ```
/// use sportim_loader::importer::api::build_user_url;
///
/// assert_eq!(build_user_url("http://localhost:8080/rest"), "http://localhost:8080/rest/user");
/// ```
pub fn build_user_url(base_url: &str) -> String {
    format!("{base_url}/user")
}

/// Builds the authentication URL.
///
/// # Example
/// ```
/// use sportim_loader::importer::api::build_login_url;
///
/// assert_eq!(build_login_url("http://localhost:8080/rest"), "http://localhost:8080/rest/login");
/// ```
pub fn build_login_url(base_url: &str) -> String {
    format!("{base_url}/login")
}

/// Builds the team creation URL.
pub fn build_team_url(base_url: &str) -> String {
    format!("{base_url}/team")
}

/// Builds the URL that adds a player to a team. The player's login is sent
/// as the `login` query parameter.
///
/// # Example
/// ```
/// use sportim_loader::importer::api::build_add_player_url;
/// use sportim_loader::importer::models::TeamId;
///
/// let url = build_add_player_url("http://localhost:8080/rest", TeamId(12));
/// assert_eq!(url, "http://localhost:8080/rest/team/12/add");
/// ```
pub fn build_add_player_url(base_url: &str, team_id: TeamId) -> String {
    format!("{base_url}/team/{team_id}/add")
}
