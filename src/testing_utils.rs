use crate::error::AppError;
use crate::importer::models::{Credentials, FieldValue, NewTeam, PlayerRow, TeamRow};
use csv::WriterBuilder;

/// Header of a player input file
pub const PLAYER_HEADER: &[&str] = &["firstName", "lastName", "phone", "password", "team", "login"];

/// Header of a team input file
pub const TEAM_HEADER: &[&str] = &["name", "league", "ownerLogin", "ownerPassword"];

/// Test utilities for building input rows and CSV files
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player row whose phone, password and login are all `auto`
    pub fn create_auto_player(first_name: &str, last_name: &str, team: &str) -> PlayerRow {
        PlayerRow {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: FieldValue::Auto,
            password: FieldValue::Auto,
            team: team.to_string(),
            login: FieldValue::Auto,
        }
    }

    /// Creates a team row owned by `owner_login`
    pub fn create_team_row(name: &str, owner_login: &str, owner_password: &str) -> TeamRow {
        TeamRow {
            team: NewTeam {
                name: name.to_string(),
                sport: crate::constants::DEFAULT_SPORT.to_string(),
            },
            owner: Credentials {
                login: owner_login.to_string(),
                password: owner_password.to_string(),
            },
        }
    }

    /// Builds player file content from raw `[first, last, phone, password, team, login]` cells
    pub fn players_csv(rows: &[[&str; 6]]) -> Result<String, AppError> {
        Self::csv(PLAYER_HEADER, rows)
    }

    /// Builds team file content from raw `[name, unused, ownerLogin, ownerPassword]` cells
    pub fn teams_csv(rows: &[[&str; 4]]) -> Result<String, AppError> {
        Self::csv(TEAM_HEADER, rows)
    }

    fn csv<const N: usize>(header: &[&str], rows: &[[&str; N]]) -> Result<String, AppError> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(header)?;
        for row in rows {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
