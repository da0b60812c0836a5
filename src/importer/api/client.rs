//! Client for the four league service operations the loader uses.
//!
//! Every response carries a `status` object; an operation succeeds only when
//! `status.code` is 200. Each call is a single attempt.

use reqwest::{Client, RequestBuilder};
use tracing::{debug, instrument};

use super::http_client::create_http_client;
use super::urls::{build_add_player_url, build_login_url, build_team_url, build_user_url};
use crate::constants::{STATUS_OK, TOKEN_HEADER};
use crate::error::AppError;
use crate::importer::models::{
    Credentials, NewTeam, PlayerRecord, ServiceResponse, SessionToken, TeamId,
};

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    /// Creates a client for the REST API rooted at `base_url`
    /// (e.g. `http://localhost:8080/rest`).
    pub fn new(base_url: impl Into<String>, timeout_seconds: Option<u64>) -> Result<Self, AppError> {
        let client = create_http_client(timeout_seconds)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ServiceClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /user` with the resolved player.
    #[instrument(skip(self, player), fields(login = %player.login))]
    pub async fn create_user(&self, player: &PlayerRecord) -> Result<(), AppError> {
        let url = build_user_url(&self.base_url);
        self.send(self.client.post(&url).json(player), &url).await?;
        Ok(())
    }

    /// `POST /login` with the owner's credentials; returns the session token.
    #[instrument(skip(self, credentials), fields(login = %credentials.login))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AppError> {
        let url = build_login_url(&self.base_url);
        let response = self.send(self.client.post(&url).json(credentials), &url).await?;

        response
            .token
            .map(SessionToken::new)
            .ok_or_else(|| AppError::api_no_data("Login response has no token", url))
    }

    /// `POST /team` as the owner identified by `token`; returns the new team id.
    #[instrument(skip(self, team, token), fields(team = %team.name))]
    pub async fn create_team(
        &self,
        team: &NewTeam,
        token: &SessionToken,
    ) -> Result<TeamId, AppError> {
        let url = build_team_url(&self.base_url);
        let request = self
            .client
            .post(&url)
            .header(TOKEN_HEADER, token.as_str())
            .json(team);
        let response = self.send(request, &url).await?;

        response
            .id
            .ok_or_else(|| AppError::api_no_data("Team response has no id", url))
    }

    /// `PUT /team/{id}/add?login={login}`.
    #[instrument(skip(self, token))]
    pub async fn add_player_to_team(
        &self,
        login: &str,
        team_id: TeamId,
        token: &SessionToken,
    ) -> Result<(), AppError> {
        let url = build_add_player_url(&self.base_url, team_id);
        let request = self
            .client
            .put(&url)
            .query(&[("login", login)])
            .header(TOKEN_HEADER, token.as_str());
        self.send(request, &url).await?;
        Ok(())
    }

    /// Sends one request and checks the `status` object of the response body.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<ServiceResponse, AppError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Request failed for URL {}: {}", url, e);
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                });
            }
        };

        let http_status = response.status();
        debug!("Response status: {http_status}");

        let response_text = response.text().await.map_err(|e| {
            debug!("Failed to read response text from URL {}: {}", url, e);
            AppError::ApiFetch(e)
        })?;

        let preview: String = response_text.chars().take(512).collect();
        debug!("Response text (first 512 chars): {preview}");

        let parsed = match serde_json::from_str::<ServiceResponse>(&response_text) {
            Ok(parsed) => parsed,
            Err(e) => {
                let trimmed = response_text.trim_start();
                return Err(if trimmed.is_empty() {
                    AppError::api_no_data(format!("HTTP {http_status} with empty body"), url)
                } else if !trimmed.starts_with('{') {
                    AppError::api_malformed_json(
                        format!("HTTP {http_status} response is not a JSON object"),
                        url,
                    )
                } else {
                    AppError::api_unexpected_structure(e.to_string(), url)
                });
            }
        };

        let status = parsed
            .status
            .as_ref()
            .ok_or_else(|| AppError::api_missing_status(url))?;
        if status.code != STATUS_OK {
            return Err(AppError::service_rejected(
                status.code,
                status.message.clone().unwrap_or_default(),
                url,
            ));
        }

        Ok(parsed)
    }
}
