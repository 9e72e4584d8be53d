//! The backend client: one method per endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tapcoin_protocol::{
    ClickRequest, GameSnapshot, HealthStatus, LeaderboardEntry,
    LeaderboardResponse, PlayerStats, StatsRequest, UserId, UserRequest,
    WithdrawReceipt, WithdrawRequest,
};

use crate::{ApiError, ClientConfig};

/// A handle to the Tapcoin backend.
///
/// Cheap to clone: `reqwest::Client` is an `Arc` around a connection
/// pool internally, so clones share connections.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] if the underlying HTTP client
    /// cannot be constructed (e.g. no TLS backend available).
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /user`: fetches the caller's record, creating it on first
    /// contact. Returns the authoritative counters.
    pub async fn fetch_user(
        &self,
        request: &UserRequest,
    ) -> Result<GameSnapshot, ApiError> {
        self.post("/user", request).await
    }

    /// `POST /click`: registers one click and returns the updated
    /// counters. Coin math happens entirely on the backend.
    pub async fn click(
        &self,
        user_id: UserId,
    ) -> Result<GameSnapshot, ApiError> {
        self.post("/click", &ClickRequest { user_id }).await
    }

    /// `POST /withdraw`: debits `amount` coins.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] carries the backend's error text (e.g. an
    /// insufficient balance) for the caller to surface verbatim.
    pub async fn withdraw(
        &self,
        user_id: UserId,
        amount: u64,
    ) -> Result<WithdrawReceipt, ApiError> {
        self.post("/withdraw", &WithdrawRequest { user_id, amount })
            .await
    }

    /// `POST /stats`: fetches the caller's summary.
    pub async fn stats(
        &self,
        user_id: UserId,
    ) -> Result<PlayerStats, ApiError> {
        self.post("/stats", &StatsRequest { user_id }).await
    }

    /// `GET /leaderboard`: fetches the top players, server-ordered.
    pub async fn leaderboard(
        &self,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let resp: LeaderboardResponse = self.get("/leaderboard").await?;
        Ok(resp.leaderboard)
    }

    /// `GET /health`: checks that the backend is reachable at all.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }

    // -- plumbing ----------------------------------------------------------

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

/// Splits the two failure families: non-2xx becomes [`ApiError::Rejected`]
/// with the backend's error text; a 2xx body that doesn't parse becomes
/// [`ApiError::Decode`].
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::rejected(status.as_u16(), &body));
    }
    Ok(serde_json::from_slice(&body)?)
}
