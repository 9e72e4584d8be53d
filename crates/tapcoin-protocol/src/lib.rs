//! Wire types for the Tapcoin backend API.
//!
//! This crate defines every structure that travels between the client and
//! the backend as JSON: request bodies, response payloads, and the error
//! body the backend attaches to non-2xx responses.
//!
//! The protocol layer knows nothing about HTTP, identity, or rendering;
//! it only pins down the exact JSON shapes both sides agree on. The shapes
//! are covered by tests because a field rename here silently breaks the
//! backend contract.

mod types;

pub use types::{
    ClickRequest, ErrorBody, GameSnapshot, HealthStatus, LeaderboardEntry,
    LeaderboardResponse, PlayerStats, StatsRequest, UserId, UserRequest,
    WithdrawReceipt, WithdrawRequest,
};
