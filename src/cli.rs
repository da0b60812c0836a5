use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only manage the config file
/// and no import should run.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_host.is_some()
        || args.new_port.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Sportim demo data loader
///
/// Creates the players listed in a player CSV file, creates the teams listed in
/// a team CSV file (logging in as each team's owner), then adds every player to
/// their team.
///
/// Player file columns: firstName, lastName, phone, password, team, login.
/// The value `auto` in phone, password or login generates a default.
///
/// Team file columns: name, (unused), ownerLogin, ownerPassword.
#[derive(Parser, Debug)]
#[command(about, long_about, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// League service host. Falls back to SPORTIM_HOST or the config file.
    #[arg(short = 's', long = "host", help_heading = "Service")]
    pub host: Option<String>,

    /// League service port [default: 8080, or the configured port]
    #[arg(short = 'p', long = "port", help_heading = "Service")]
    pub port: Option<u16>,

    /// Team CSV file
    #[arg(short = 'T', long = "teamfile", value_name = "FILE", help_heading = "Input")]
    pub team_file: Option<String>,

    /// Player CSV file
    #[arg(short = 'P', long = "playerfile", value_name = "FILE", help_heading = "Input")]
    pub player_file: Option<String>,

    /// Sport assigned to created teams [default: soccer, or the configured sport]
    #[arg(long = "sport", help_heading = "Input")]
    pub sport: Option<String>,

    /// Give up on a request after this many seconds. By default requests wait indefinitely.
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Service")]
    pub timeout: Option<u64>,

    /// Save the service host in the config file and exit.
    #[arg(long = "set-host", value_name = "HOST", help_heading = "Configuration")]
    pub new_host: Option<String>,

    /// Save the service port in the config file and exit.
    #[arg(long = "set-port", value_name = "PORT", help_heading = "Configuration")]
    pub new_port: Option<u16>,

    /// Save a persistent custom log file location and exit.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log request and response details.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
