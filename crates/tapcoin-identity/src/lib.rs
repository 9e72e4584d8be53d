//! Host-platform integration and identity resolution for Tapcoin.
//!
//! The client runs embedded in a chat-platform mini-app container. The
//! container owns the user's real identity; this crate is the narrow seam
//! between that container and the rest of the client:
//!
//! 1. **Host capability**: the [`Host`] trait: lifecycle signals
//!    (ready/expand) plus an accessor for the logged-in user's profile.
//! 2. **Resolution**: [`resolve_identity`] maps the host profile into an
//!    [`Identity`], or synthesizes a guest identity when the client runs
//!    outside the container (local development).
//!
//! Resolution is infallible: every session gets an identity before any
//! backend exchange runs.

mod host;
mod identity;

pub use host::{DetachedHost, EnvHost, Host, HostUser, INIT_USER_VAR};
pub use identity::{resolve_identity, Identity, GUEST_ID_SPAN};
