//! Three-phase import: players, then teams, then player/team associations.
//!
//! A remote failure is logged and the phase moves on to the next record.
//! Only input errors (unreadable file, short row) stop the run.

use std::path::Path;

use tracing::{error, info, warn};

use super::api::ServiceClient;
use super::defaults::apply_defaults;
use super::mappings::{LoginTeamMap, TeamIdMap};
use super::models::{PlayerRecord, PlayerRow, SessionToken, TeamId, TeamRow};
use super::reader::{PlayerRows, TeamRows};
use crate::error::AppError;

/// Result of the team phase.
#[derive(Debug, Default)]
pub struct TeamPhase {
    pub team_ids: TeamIdMap,
    /// Token of the last authenticated owner, used for the association phase.
    pub token: SessionToken,
}

/// Drives the import against one service.
pub struct Importer {
    client: ServiceClient,
    sport: String,
}

impl Importer {
    pub fn new(client: ServiceClient, sport: impl Into<String>) -> Self {
        Importer {
            client,
            sport: sport.into(),
        }
    }

    /// Runs all three phases. Both input files are opened before any request
    /// is sent.
    pub async fn run(
        &self,
        player_file: impl AsRef<Path>,
        team_file: impl AsRef<Path>,
    ) -> Result<(), AppError> {
        let players = PlayerRows::open(player_file)?;
        let teams = TeamRows::open(team_file, self.sport.clone())?;

        info!("Adding players...");
        let login_to_team = self.import_players(players).await?;

        info!("Adding teams...");
        let TeamPhase { team_ids, token } = self.import_teams(teams).await?;

        info!("Adding players to teams...");
        self.attach_players(&login_to_team, &team_ids, &token).await;

        info!("Done");
        Ok(())
    }

    /// Player phase. Returns the login → team map of players that name a team.
    pub async fn import_players(
        &self,
        rows: impl IntoIterator<Item = Result<PlayerRow, AppError>>,
    ) -> Result<LoginTeamMap, AppError> {
        let mut login_to_team = LoginTeamMap::new();

        for row in rows {
            let player = apply_defaults(row?);
            let login = self.register_player(&player).await;

            if player.has_team()
                && let Some(previous) = login_to_team.insert(login.clone(), player.team.clone())
            {
                warn!(
                    "Login {} appears more than once; team {} replaced by {}",
                    login, previous, player.team
                );
            }
        }

        info!("Processed players, {} to attach to teams", login_to_team.len());
        Ok(login_to_team)
    }

    /// Creates one user. The login is returned even when creation fails so the
    /// player can still be attached to a team.
    pub async fn register_player(&self, player: &PlayerRecord) -> String {
        if let Err(e) = self.client.create_user(player).await {
            error!(
                "Failed to add user {} ({} {}, team '{}'): {}",
                player.login, player.first_name, player.last_name, player.team, e
            );
        }
        player.login.clone()
    }

    /// Team phase. An owner is authenticated when its login differs from the
    /// owner of the previous row; consecutive rows of the same owner share a token.
    pub async fn import_teams(
        &self,
        rows: impl IntoIterator<Item = Result<TeamRow, AppError>>,
    ) -> Result<TeamPhase, AppError> {
        let mut phase = TeamPhase::default();
        let mut last_owner: Option<String> = None;

        for row in rows {
            let TeamRow { team, owner } = row?;

            if last_owner.as_deref() != Some(owner.login.as_str()) {
                phase.token = match self.client.authenticate(&owner).await {
                    Ok(token) => token,
                    Err(e) => {
                        error!("Failed to log in as {}: {}", owner.login, e);
                        SessionToken::empty()
                    }
                };
                last_owner = Some(owner.login);
            }

            let team_id = match self.client.create_team(&team, &phase.token).await {
                Ok(id) => id,
                Err(e) => {
                    error!("Failed to add team {}: {}", team.name, e);
                    TeamId::INVALID
                }
            };

            if let Some(previous) = phase.team_ids.insert(team.name.clone(), team_id) {
                warn!(
                    "Team {} appears more than once; id {} replaced by {}",
                    team.name, previous, team_id
                );
            }
        }

        info!("Processed {} teams", phase.team_ids.len());
        Ok(phase)
    }

    /// Association phase, in the order players were imported. A player whose
    /// team was never created is reported and skipped.
    pub async fn attach_players(
        &self,
        login_to_team: &LoginTeamMap,
        team_ids: &TeamIdMap,
        token: &SessionToken,
    ) {
        if login_to_team.is_empty() {
            info!("No players name a team");
            return;
        }
        if team_ids.is_empty() {
            warn!("No teams were read; every player will be reported as unassigned");
        }

        for (login, team) in login_to_team.iter() {
            let Some(team_id) = team_ids.get(team) else {
                error!("Cannot add player {} to unknown team {}", login, team);
                continue;
            };

            if let Err(e) = self.client.add_player_to_team(login, team_id, token).await {
                error!("Failed to add player {} to team {}: {}", login, team_id, e);
            }
        }
    }
}
