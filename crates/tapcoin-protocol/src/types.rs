//! Request and response bodies for the backend API.
//!
//! One type per endpoint payload. Responses use `#[serde(default)]` on
//! counter fields because the backend returns the full stored user record
//! from `POST /user`, and older records may predate a field. Unknown fields
//! are ignored on decode, which also lets the leaderboard carry full user
//! records while the client only reads the two fields it displays.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A unique identifier for a player, as assigned by the host platform
/// (or synthesized locally for guest sessions).
///
/// Newtype over `u64` so a user id can't be confused with a coin amount
/// or a click count in a function signature. `#[serde(transparent)]`
/// keeps the JSON representation a plain number, which is what the
/// backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /user`: the identity fields the backend stores on first
/// contact. The backend creates the record if it doesn't exist and returns
/// it either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub user_id: UserId,
    pub first_name: String,
    pub username: Option<String>,
}

/// Body of `POST /click`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRequest {
    pub user_id: UserId,
}

/// Body of `POST /withdraw`. The minimum amount is enforced client-side
/// before this is ever built; the backend additionally checks the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub user_id: UserId,
    pub amount: u64,
}

/// Body of `POST /stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRequest {
    pub user_id: UserId,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// The counter pair returned by `POST /user` and `POST /click`.
///
/// These are the authoritative values: the client overwrites its local
/// mirror with them wholesale and never computes either number itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub balance: u64,
}

/// Response of a successful `POST /withdraw`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WithdrawReceipt {
    #[serde(default)]
    pub success: bool,
    /// Human-readable confirmation from the backend.
    pub message: Option<String>,
    pub balance: u64,
}

/// Response of `POST /stats`: a per-player summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerStats {
    pub user_id: UserId,
    pub first_name: String,
    pub username: Option<String>,
    pub total_clicks: u64,
    pub current_balance: u64,
    /// ISO-8601 timestamp of when the backend first saw this player.
    pub created_at: String,
}

/// One row of the leaderboard, ordered by the server. The client renders
/// rows in the order received and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    pub first_name: String,
    pub balance: u64,
}

/// Response of `GET /leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

/// The structured error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// =========================================================================
// Tests
// =========================================================================
