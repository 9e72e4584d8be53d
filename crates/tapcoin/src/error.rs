//! Unified error type for the Tapcoin client.

use tapcoin_api::ApiError;

/// Top-level error for the client binary and command parsing.
///
/// Exchange failures inside a running session never surface here: the
/// session absorbs them (log, optional notice, state unchanged) so the
/// interface stays interactive. This type covers what can fail *around*
/// the session: building the client, reading input, naming an action.
#[derive(Debug, thiserror::Error)]
pub enum TapcoinError {
    /// A backend exchange failed outside session handling (e.g. the
    /// HTTP client could not be constructed).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The named user action has no handler in the dispatch table.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Reading user input failed.
    #[error("input failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_error() {
        let err = ApiError::Rejected {
            status: 400,
            message: "no".into(),
        };
        let top: TapcoinError = err.into();
        assert!(matches!(top, TapcoinError::Api(_)));
        assert!(top.to_string().contains("no"));
    }

    #[test]
    fn test_unknown_action_names_the_action() {
        let err = TapcoinError::UnknownAction("dance".into());
        assert_eq!(err.to_string(), "unknown action: dance");
    }
}
