//! Default values for player cells marked `auto`

use crate::constants::defaults::{LOGIN_DOMAIN_SUFFIX, PASSWORD_SUFFIX, PHONE};
use crate::importer::models::{PlayerRecord, PlayerRow};

/// Builds a login from the player's name and team.
///
/// The result is `first initial + last name + "@" + team + "sportim.com"`,
/// lowercased and with all whitespace removed. An empty team or first name
/// simply contributes nothing.
///
/// # Example
/// ```
/// use sportim_loader::importer::defaults::default_login;
///
/// assert_eq!(default_login("Jane", "Doe", "Red"), "jdoe@redsportim.com");
/// assert_eq!(default_login("Ana", "De la Cruz", "Blue Sox"), "adelacruz@bluesoxsportim.com");
/// ```
pub fn default_login(first_name: &str, last_name: &str, team: &str) -> String {
    let initial = first_name.chars().next();
    initial
        .into_iter()
        .chain(last_name.chars())
        .chain(std::iter::once('@'))
        .chain(team.chars())
        .chain(LOGIN_DOMAIN_SUFFIX.chars())
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Builds a password from the lowercased last name followed by `123`.
pub fn default_password(last_name: &str) -> String {
    format!("{}{PASSWORD_SUFFIX}", last_name.to_lowercase())
}

/// Resolves every `auto` cell of a player row.
pub fn apply_defaults(row: PlayerRow) -> PlayerRecord {
    let PlayerRow {
        first_name,
        last_name,
        phone,
        password,
        team,
        login,
    } = row;

    let login = login.resolve_with(|| default_login(&first_name, &last_name, &team));
    let password = password.resolve_with(|| default_password(&last_name));
    let phone = phone.resolve_with(|| PHONE.to_string());

    PlayerRecord {
        first_name,
        last_name,
        phone,
        password,
        team,
        login,
    }
}
