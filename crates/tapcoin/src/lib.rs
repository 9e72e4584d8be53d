//! # Tapcoin
//!
//! Session client for a clicker game embedded in a chat-platform
//! mini-app container.
//!
//! The client resolves the logged-in user's identity from the host
//! container (guest fallback included), performs one-shot HTTP exchanges
//! with the game backend, and projects every response onto the page.
//! The backend owns all game math; the client only mirrors what it is
//! told.
//!
//! A [`Session`] is built once at startup and threaded through every
//! handler; there is no ambient global state. User actions arrive as
//! [`Command`]s and are routed through a dispatch table, so the page
//! structure and the behavior stay decoupled.

mod command;
mod error;
mod session;

pub use command::{Command, ACTIONS};
pub use error::TapcoinError;
pub use session::{GameState, Session, BALANCE_PULSE, MIN_WITHDRAWAL};
