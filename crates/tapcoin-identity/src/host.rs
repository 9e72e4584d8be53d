//! The host-platform capability: lifecycle signals and profile access.
//!
//! The mini-app container exposes two things the client cares about: a
//! ready/expand signal pair (tell the container the app has loaded and
//! wants the full viewport) and an accessor for the logged-in user's
//! profile fields. The [`Host`] trait abstracts both so the rest of the
//! client never touches container specifics.
//!
//! Two implementations ship with the crate:
//! - [`EnvHost`]: reads the profile blob the container injects into the
//!   process environment.
//! - [`DetachedHost`]: no container at all; used for local development.

use serde::Deserialize;

/// Environment variable the container uses to inject the logged-in
/// user's profile as a JSON blob.
pub const INIT_USER_VAR: &str = "TAPCOIN_INIT_USER";

/// The profile fields the host platform exposes for the current user.
///
/// This mirrors the container's own shape, which is why the id field is
/// called `id` here and `user_id` everywhere else in the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostUser {
    pub id: u64,
    pub first_name: String,
    pub username: Option<String>,
    pub is_premium: Option<bool>,
}

impl HostUser {
    /// Parses a profile from the container's JSON blob.
    ///
    /// Returns `None` on malformed input: an unreadable profile is
    /// treated the same as no profile, so the guest fallback kicks in.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "host profile blob is malformed");
                None
            }
        }
    }
}

/// The mini-app container as seen by the client.
///
/// `ready` and `expand` are fire-and-forget signals; the container does
/// not acknowledge them. `user` is the convenient-but-unverified profile
/// accessor; the client trusts whatever the container says.
pub trait Host: Send + Sync + 'static {
    /// Signals the container that the client has finished loading.
    fn ready(&self);

    /// Asks the container for the full viewport.
    fn expand(&self);

    /// Returns the logged-in user's profile, if the container has one.
    fn user(&self) -> Option<HostUser>;
}

/// A [`Host`] backed by the container-injected process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHost;

impl Host for EnvHost {
    fn ready(&self) {
        tracing::debug!("signaled ready to host container");
    }

    fn expand(&self) {
        tracing::debug!("requested expanded viewport from host container");
    }

    fn user(&self) -> Option<HostUser> {
        let raw = std::env::var(INIT_USER_VAR).ok()?;
        HostUser::from_json(&raw)
    }
}

/// A [`Host`] for running outside any container. Signals are no-ops and
/// there is never a profile, so every session resolves to a guest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl Host for DetachedHost {
    fn ready(&self) {}

    fn expand(&self) {}

    fn user(&self) -> Option<HostUser> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_user_parses_full_profile() {
        let raw = r#"{
            "id": 42,
            "first_name": "Ann",
            "username": "ann",
            "is_premium": true
        }"#;
        let user = HostUser::from_json(raw).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.username.as_deref(), Some("ann"));
        assert_eq!(user.is_premium, Some(true));
    }

    #[test]
    fn test_host_user_parses_minimal_profile() {
        // Only id and first_name are guaranteed by the container.
        let user =
            HostUser::from_json(r#"{"id": 7, "first_name": "Bob"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, None);
        assert_eq!(user.is_premium, None);
    }

    #[test]
    fn test_host_user_malformed_blob_is_none() {
        assert!(HostUser::from_json("not json").is_none());
        assert!(HostUser::from_json(r#"{"first_name": "Ann"}"#).is_none());
    }

    #[test]
    fn test_detached_host_has_no_user() {
        assert!(DetachedHost.user().is_none());
    }
}
