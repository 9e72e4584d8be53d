//! Named user actions and the dispatch table.
//!
//! Interactive controls don't call handlers directly; they name an
//! action, the table maps the name to a [`Command`], and the session
//! executes it. Adding a control to the page never touches session code.

use crate::TapcoinError;

/// A user action the session knows how to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register one click with the backend.
    Click,
    /// Request a withdrawal. The amount is kept as the raw user input;
    /// validation (numeric, minimum) is the withdraw handler's job.
    Withdraw { amount: String },
    /// Show the caller's stats summary.
    Stats,
    /// Show the leaderboard as a text notice.
    Leaderboard,
    /// Re-fetch the caller's counters from the backend.
    Refresh,
}

/// The dispatch table: action name → command builder.
///
/// The builder receives the rest of the input line as its argument
/// (only `withdraw` uses it).
pub const ACTIONS: &[(&str, fn(&str) -> Command)] = &[
    ("click", |_| Command::Click),
    ("withdraw", |arg| Command::Withdraw {
        amount: arg.trim().to_string(),
    }),
    ("stats", |_| Command::Stats),
    ("leaderboard", |_| Command::Leaderboard),
    ("refresh", |_| Command::Refresh),
];

impl Command {
    /// Parses one input line into a command via the dispatch table.
    ///
    /// # Errors
    /// Returns [`TapcoinError::UnknownAction`] if the first word names
    /// no table entry. Unknown actions are reported, never fatal.
    pub fn parse(line: &str) -> Result<Self, TapcoinError> {
        let line = line.trim();
        let (action, rest) = match line.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest),
            None => (line, ""),
        };

        ACTIONS
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, build)| build(rest))
            .ok_or_else(|| TapcoinError::UnknownAction(action.to_string()))
    }

    /// The action names the table knows, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ACTIONS.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_parses() {
        assert_eq!(Command::parse("click").unwrap(), Command::Click);
        assert_eq!(Command::parse("stats").unwrap(), Command::Stats);
        assert_eq!(
            Command::parse("leaderboard").unwrap(),
            Command::Leaderboard
        );
        assert_eq!(Command::parse("refresh").unwrap(), Command::Refresh);
    }

    #[test]
    fn test_withdraw_keeps_raw_amount() {
        // Validation happens in the handler, so even junk survives parse.
        assert_eq!(
            Command::parse("withdraw 150").unwrap(),
            Command::Withdraw { amount: "150".into() }
        );
        assert_eq!(
            Command::parse("withdraw lots").unwrap(),
            Command::Withdraw { amount: "lots".into() }
        );
        assert_eq!(
            Command::parse("withdraw").unwrap(),
            Command::Withdraw { amount: String::new() }
        );
    }

    #[test]
    fn test_unknown_action_is_reported() {
        let err = Command::parse("dance").unwrap_err();
        assert!(matches!(err, TapcoinError::UnknownAction(name) if name == "dance"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Command::parse("  click  ").unwrap(), Command::Click);
    }
}
