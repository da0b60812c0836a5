use crate::constants::defaults::AUTO_SENTINEL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player cell that is either a literal value or a request for a generated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Given(String),
    Auto,
}

impl FieldValue {
    /// Parses a raw CSV cell. Only the exact text `auto` selects the default.
    pub fn from_cell(cell: &str) -> Self {
        if cell == AUTO_SENTINEL {
            FieldValue::Auto
        } else {
            FieldValue::Given(cell.to_string())
        }
    }

    /// Returns the given value, or computes the default with `generate`.
    pub fn resolve_with(self, generate: impl FnOnce() -> String) -> String {
        match self {
            FieldValue::Given(value) => value,
            FieldValue::Auto => generate(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(cell: &str) -> Self {
        FieldValue::from_cell(cell)
    }
}

/// One row of the player file before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub first_name: String,
    pub last_name: String,
    pub phone: FieldValue,
    pub password: FieldValue,
    pub team: String,
    pub login: FieldValue,
}

/// Player as submitted to `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
    pub team: String,
    pub login: String,
}

impl PlayerRecord {
    /// Whether the player should be attached to a team after import.
    pub fn has_team(&self) -> bool {
        !self.team.is_empty()
    }
}

/// Login/password pair sent to `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

// Keeps passwords out of log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Team as submitted to `POST /team`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    pub sport: String,
}

/// One row of the team file: the team plus the owner who creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRow {
    pub team: NewTeam,
    pub owner: Credentials,
}

/// Identifier assigned to a team by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Placeholder recorded for a team the service failed to create.
    pub const INVALID: TeamId = TeamId(0);
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque session credential returned by `POST /login`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        SessionToken(token.into())
    }

    /// Token used after a failed login. Requests carrying it fail at the service.
    pub fn empty() -> Self {
        SessionToken::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("SessionToken(<empty>)")
        } else {
            f.write_str("SessionToken(<redacted>)")
        }
    }
}

/// `status` object present in every service response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseStatus {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope shared by all service responses. Only the fields the loader
/// reads are modelled; anything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceResponse {
    #[serde(default)]
    pub status: Option<ResponseStatus>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<TeamId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_from_cell() {
        assert_eq!(FieldValue::from_cell("auto"), FieldValue::Auto);
        assert_eq!(
            FieldValue::from_cell("Auto"),
            FieldValue::Given("Auto".to_string())
        );
        assert_eq!(FieldValue::from_cell(""), FieldValue::Given(String::new()));
    }

    #[test]
    fn test_player_record_serializes_camel_case() {
        let player = PlayerRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: String::new(),
            password: "doe123".to_string(),
            team: "Red".to_string(),
            login: "jdoe@redsportim.com".to_string(),
        };

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "phone": "",
                "password": "doe123",
                "team": "Red",
                "login": "jdoe@redsportim.com",
            })
        );
    }

    #[test]
    fn test_service_response_parses_partial_bodies() {
        let login: ServiceResponse =
            serde_json::from_str(r#"{"status":{"code":200,"message":""},"token":"abc"}"#).unwrap();
        assert_eq!(login.status.as_ref().map(|s| s.code), Some(200));
        assert_eq!(login.token.as_deref(), Some("abc"));
        assert_eq!(login.id, None);

        let team: ServiceResponse =
            serde_json::from_str(r#"{"status":{"code":422},"id":-1,"team":{"name":"x"}}"#).unwrap();
        let status = team.status.unwrap();
        assert_eq!(status.code, 422);
        assert_eq!(status.message, None);
        assert_eq!(team.id, Some(TeamId(-1)));
    }

    #[test]
    fn test_secrets_are_not_debug_printed() {
        let credentials = Credentials {
            login: "coach1".to_string(),
            password: "pass1".to_string(),
        };
        let token = SessionToken::new("secret-token");

        assert!(!format!("{credentials:?}").contains("pass1"));
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
