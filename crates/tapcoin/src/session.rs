//! The session: identity, state mirror, and command handlers.
//!
//! One `Session` per page load. It owns everything a handler needs:
//! the resolved identity, the local state mirror, the backend client,
//! and the page. Nothing lives in ambient globals.
//!
//! Failure policy (uniform across handlers): log with severity, show a
//! notice only where the user explicitly asked for something (withdraw,
//! stats), and leave the state mirror untouched. No failure ends the
//! session; the user can retry any action manually.

use std::sync::Arc;
use std::time::Duration;

use tapcoin_api::{ApiClient, ApiError};
use tapcoin_identity::{resolve_identity, Host, Identity};
use tapcoin_protocol::{GameSnapshot, UserRequest};
use tapcoin_view::{
    format_stats, leaderboard_text, render_counters, render_identity,
    render_leaderboard, Element, Page, BALANCE_PULSE_MARKER,
};

use crate::Command;

/// Smallest amount the backend will pay out. Checked client-side before
/// any network call; this is the only client-side validation in the system.
pub const MIN_WITHDRAWAL: u64 = 100;

/// How long the balance element carries its animation marker after a
/// successful click.
pub const BALANCE_PULSE: Duration = Duration::from_millis(300);

/// The client-local mirror of the caller's counters.
///
/// Not authoritative: every field is overwritten wholesale from server
/// responses and never computed locally. `last_balance` is the balance
/// as of the last full reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub clicks: u64,
    pub balance: u64,
    pub last_balance: u64,
}

impl GameState {
    fn apply(&mut self, snapshot: GameSnapshot) {
        self.clicks = snapshot.clicks;
        self.balance = snapshot.balance;
    }
}

/// A running client session: the context threaded through every handler.
pub struct Session {
    identity: Identity,
    state: GameState,
    api: ApiClient,
    page: Arc<dyn Page>,
}

impl Session {
    /// Runs the startup sequence and returns the live session.
    ///
    /// Order matters: the host gets its lifecycle signals first, then
    /// identity resolution, then the initial exchanges. A failed initial
    /// exchange is logged and the session starts with zeroed counters;
    /// startup itself cannot fail.
    pub async fn start(
        host: &dyn Host,
        api: ApiClient,
        page: Arc<dyn Page>,
    ) -> Session {
        host.ready();
        host.expand();
        let identity = resolve_identity(host);
        tracing::info!(
            user_id = %identity.user_id,
            "initializing session"
        );

        let mut session = Session {
            identity,
            state: GameState::default(),
            api,
            page,
        };
        session.load_user().await;
        session.refresh_leaderboard().await;
        render_identity(session.page.as_ref(), &session.identity);
        session.render();
        session
    }

    /// The identity this session runs as.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The current state mirror.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Executes one user action. Never fails: every handler absorbs
    /// its own errors per the session failure policy.
    pub async fn handle(&mut self, command: Command) {
        match command {
            Command::Click => self.handle_click().await,
            Command::Withdraw { amount } => {
                self.handle_withdraw(&amount).await;
            }
            Command::Stats => self.handle_stats().await,
            Command::Leaderboard => self.handle_leaderboard().await,
            Command::Refresh => self.handle_refresh().await,
        }
    }

    // -- handlers ----------------------------------------------------------

    async fn handle_click(&mut self) {
        match self.api.click(self.identity.user_id).await {
            Ok(snapshot) => {
                self.state.apply(snapshot);
                self.pulse_balance();
                self.render();
                tracing::info!(
                    clicks = self.state.clicks,
                    balance = self.state.balance,
                    "click registered"
                );
            }
            // Silent to the user; the previous counters stay up.
            Err(e) => tracing::error!(error = %e, "click failed"),
        }
    }

    async fn handle_withdraw(&mut self, raw_amount: &str) {
        let amount = match raw_amount.trim().parse::<u64>() {
            Ok(amount) if amount >= MIN_WITHDRAWAL => amount,
            _ => {
                self.page.notice(&format!(
                    "Invalid amount. Minimum is {MIN_WITHDRAWAL} coins."
                ));
                return;
            }
        };

        match self.api.withdraw(self.identity.user_id, amount).await {
            Ok(receipt) => {
                self.state.balance = receipt.balance;
                self.render();
                self.page.notice(&format!(
                    "Withdrawal successful! New balance: {}",
                    receipt.balance
                ));
                tracing::info!(
                    amount,
                    balance = receipt.balance,
                    "withdrawal completed"
                );
            }
            Err(e @ ApiError::Rejected { .. }) => {
                // The backend's error text is shown verbatim.
                self.page.notice(&format!("Withdrawal failed: {e}"));
                tracing::error!(error = %e, "withdrawal rejected");
            }
            Err(e) => {
                self.page.notice("Network error. Please try again.");
                tracing::error!(error = %e, "withdrawal exchange failed");
            }
        }
    }

    async fn handle_stats(&mut self) {
        match self.api.stats(self.identity.user_id).await {
            Ok(stats) => self.page.notice(&format_stats(&stats)),
            Err(e @ ApiError::Rejected { .. }) => {
                self.page.notice("Failed to load statistics");
                tracing::error!(error = %e, "stats rejected");
            }
            Err(e) => {
                self.page.notice("Network error. Please try again.");
                tracing::error!(error = %e, "stats exchange failed");
            }
        }
    }

    async fn handle_leaderboard(&mut self) {
        match self.api.leaderboard().await {
            Ok(entries) => {
                self.page.notice(&leaderboard_text(&entries));
            }
            // Silent to the user; whatever is on the page stays.
            Err(e) => tracing::error!(error = %e, "leaderboard load failed"),
        }
    }

    async fn handle_refresh(&mut self) {
        self.load_user().await;
        self.render();
    }

    // -- plumbing ----------------------------------------------------------

    /// Fetches (or creates) the caller's record and overwrites the
    /// state mirror. On failure the mirror is left untouched.
    async fn load_user(&mut self) {
        let request = UserRequest {
            user_id: self.identity.user_id,
            first_name: self.identity.first_name.clone(),
            username: self.identity.username.clone(),
        };
        match self.api.fetch_user(&request).await {
            Ok(snapshot) => {
                self.state.apply(snapshot);
                self.state.last_balance = snapshot.balance;
                tracing::info!(
                    clicks = self.state.clicks,
                    balance = self.state.balance,
                    "user data loaded"
                );
            }
            Err(e) => tracing::error!(error = %e, "failed to load user data"),
        }
    }

    /// Renders the leaderboard container. On failure the previous
    /// rendering stays in place.
    async fn refresh_leaderboard(&mut self) {
        match self.api.leaderboard().await {
            Ok(entries) => {
                render_leaderboard(self.page.as_ref(), &entries);
            }
            Err(e) => tracing::error!(error = %e, "leaderboard load failed"),
        }
    }

    fn render(&self) {
        render_counters(
            self.page.as_ref(),
            self.state.clicks,
            self.state.balance,
        );
    }

    /// Sets the balance animation marker and clears it after
    /// [`BALANCE_PULSE`]. The clear runs as a fire-and-forget task so
    /// the handler never blocks on the animation.
    fn pulse_balance(&self) {
        self.page.set_marker(Element::Balance, BALANCE_PULSE_MARKER);
        let page = Arc::clone(&self.page);
        tokio::spawn(async move {
            tokio::time::sleep(BALANCE_PULSE).await;
            page.clear_marker(Element::Balance, BALANCE_PULSE_MARKER);
        });
    }
}
