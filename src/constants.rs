//! Application-wide constants
//!
//! Literal values used by the import pipeline and the ambient layers live here
//! so the rest of the code never repeats a magic string.

/// Default port of the league service
pub const DEFAULT_PORT: u16 = 8080;

/// Path prefix under which the service exposes its REST resources
pub const REST_PATH: &str = "/rest";

/// Sport assigned to every imported team unless overridden
pub const DEFAULT_SPORT: &str = "soccer";

/// Name used for the config directory and the log file
pub const APP_NAME: &str = "sportim_loader";

/// Header carrying the session token on authenticated requests
pub const TOKEN_HEADER: &str = "token";

/// Status code the service reports for a successful operation
pub const STATUS_OK: i64 = 200;

/// Field defaulting rules for player rows
pub mod defaults {
    /// Cell value requesting a generated default
    pub const AUTO_SENTINEL: &str = "auto";

    /// Phone number assigned when the phone cell is `auto`
    pub const PHONE: &str = "1234567890";

    /// Appended to the team name when generating a login
    pub const LOGIN_DOMAIN_SUFFIX: &str = "sportim.com";

    /// Appended to the lowercased last name when generating a password
    pub const PASSWORD_SUFFIX: &str = "123";
}

/// Positional layout of the input CSV files
pub mod columns {
    pub const PLAYER_FIRST_NAME: usize = 0;
    pub const PLAYER_LAST_NAME: usize = 1;
    pub const PLAYER_PHONE: usize = 2;
    pub const PLAYER_PASSWORD: usize = 3;
    pub const PLAYER_TEAM: usize = 4;
    pub const PLAYER_LOGIN: usize = 5;
    /// Minimum number of fields in a player row
    pub const PLAYER_FIELD_COUNT: usize = 6;

    pub const TEAM_NAME: usize = 0;
    pub const TEAM_OWNER_LOGIN: usize = 2;
    pub const TEAM_OWNER_PASSWORD: usize = 3;
    /// Minimum number of fields in a team row
    pub const TEAM_FIELD_COUNT: usize = 4;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const HOST: &str = "SPORTIM_HOST";
    pub const PORT: &str = "SPORTIM_PORT";
    pub const HTTP_TIMEOUT: &str = "SPORTIM_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "SPORTIM_LOG_FILE";
}
