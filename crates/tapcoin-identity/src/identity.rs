//! Identity resolution: host profile or guest fallback.

use rand::Rng;
use tapcoin_protocol::UserId;

use crate::Host;

/// Guest ids are drawn from `[0, GUEST_ID_SPAN)`.
///
/// The guest path exists so the client can run outside the container
/// during development. It is deliberately not collision-resistant; the
/// backend treats a colliding guest as the same player, which is fine
/// for local testing.
pub const GUEST_ID_SPAN: u64 = 1_000_000;

/// Who the current session belongs to.
///
/// Resolved exactly once at startup and immutable for the session's
/// lifetime. Every backend exchange carries `user_id` from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub first_name: String,
    pub username: Option<String>,
    pub is_premium: Option<bool>,
}

impl Identity {
    /// A guest identity with a pseudo-random id and placeholder names.
    fn guest() -> Self {
        let mut rng = rand::rng();
        Self {
            user_id: UserId(rng.random_range(0..GUEST_ID_SPAN)),
            first_name: "Guest".to_string(),
            username: Some("guest".to_string()),
            is_premium: None,
        }
    }
}

/// Resolves the current user's identity from the host container.
///
/// Maps the host profile field-for-field when one exists; otherwise falls
/// back to a guest identity. Never fails: by the time this returns, the
/// session has someone to be.
pub fn resolve_identity(host: &dyn Host) -> Identity {
    match host.user() {
        Some(user) => {
            let identity = Identity {
                user_id: UserId(user.id),
                first_name: user.first_name,
                username: user.username,
                is_premium: user.is_premium,
            };
            tracing::info!(
                user_id = %identity.user_id,
                first_name = %identity.first_name,
                "host user authorized"
            );
            identity
        }
        None => {
            let identity = Identity::guest();
            tracing::warn!(
                user_id = %identity.user_id,
                "no host profile, running as guest"
            );
            identity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DetachedHost, HostUser};

    /// A host with a fixed profile, for exercising the mapping path.
    struct FixedHost(HostUser);

    impl Host for FixedHost {
        fn ready(&self) {}
        fn expand(&self) {}
        fn user(&self) -> Option<HostUser> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn test_host_profile_maps_field_for_field() {
        let host = FixedHost(HostUser {
            id: 42,
            first_name: "Ann".into(),
            username: Some("ann".into()),
            is_premium: Some(true),
        });

        let identity = resolve_identity(&host);
        assert_eq!(identity.user_id, UserId(42));
        assert_eq!(identity.first_name, "Ann");
        assert_eq!(identity.username.as_deref(), Some("ann"));
        assert_eq!(identity.is_premium, Some(true));
    }

    #[test]
    fn test_guest_fallback_has_usable_identity() {
        let identity = resolve_identity(&DetachedHost);
        assert!(identity.user_id.0 < GUEST_ID_SPAN);
        assert_eq!(identity.first_name, "Guest");
        assert_eq!(identity.username.as_deref(), Some("guest"));
    }

    #[test]
    fn test_resolution_always_yields_a_name() {
        // Both paths must produce a non-empty first_name; the display
        // layer renders it unconditionally.
        let host = FixedHost(HostUser {
            id: 1,
            first_name: "Bob".into(),
            username: None,
            is_premium: None,
        });
        assert!(!resolve_identity(&host).first_name.is_empty());
        assert!(!resolve_identity(&DetachedHost).first_name.is_empty());
    }
}
