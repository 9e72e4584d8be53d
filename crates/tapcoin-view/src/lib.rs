//! Display rendering for the Tapcoin client.
//!
//! Rendering is a pure projection: the session hands over the latest
//! server-returned values and this crate writes them onto named page
//! elements. Nothing here computes game values, and projecting the same
//! state twice produces the same page.
//!
//! The page itself is a capability ([`Page`]) so the session can run
//! against a terminal page, a recording page in tests, or whatever the
//! embedding container provides.

mod page;
mod render;

pub use page::{Element, Page, TextPage, BALANCE_PULSE_MARKER};
pub use render::{
    display_name, format_stats, leaderboard_text, render_counters,
    render_identity, render_leaderboard,
};
