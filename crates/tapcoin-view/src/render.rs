//! Projection of session state onto page elements.
//!
//! Every function here takes the latest server-returned values and
//! writes text. No game math, no state: calling a renderer twice with
//! the same input writes the same text.

use tapcoin_identity::Identity;
use tapcoin_protocol::{LeaderboardEntry, PlayerStats};

use crate::{Element, Page};

/// Medal marks for the top three leaderboard rows, in rank order.
const RANK_MARKS: [&str; 3] = ["\u{1f947}", "\u{1f948}", "\u{1f949}"];

/// Mark for every rank past the medals.
const PLAIN_MARK: &str = "\u{1f4cd}";

/// The user's display name: first name, with a star suffix for premium
/// accounts.
pub fn display_name(identity: &Identity) -> String {
    if identity.is_premium == Some(true) {
        format!("{} \u{2b50}", identity.first_name)
    } else {
        identity.first_name.clone()
    }
}

/// Writes the user-name element.
pub fn render_identity(page: &dyn Page, identity: &Identity) {
    page.set_text(Element::UserName, &display_name(identity));
}

/// Writes the click and balance counters.
pub fn render_counters(page: &dyn Page, clicks: u64, balance: u64) {
    page.set_text(Element::Clicks, &clicks.to_string());
    page.set_text(Element::Balance, &balance.to_string());
}

/// Writes the ranked leaderboard container: one row per entry, in the
/// order received, with the top three visually distinguished.
pub fn render_leaderboard(page: &dyn Page, entries: &[LeaderboardEntry]) {
    let mut lines = vec!["\u{1f3c6} Top Players".to_string()];
    for (index, entry) in entries.iter().enumerate() {
        let mark = RANK_MARKS.get(index).copied().unwrap_or(PLAIN_MARK);
        lines.push(format!(
            "{mark} {}. {} - {} coins",
            index + 1,
            entry.first_name,
            entry.balance
        ));
    }
    page.set_text(Element::Leaderboard, &lines.join("\n"));
}

/// The leaderboard as a plain text block, for the alert-style view.
pub fn leaderboard_text(entries: &[LeaderboardEntry]) -> String {
    let mut text = String::from("\u{1f3c6} Top 10 Players\n");
    for (index, entry) in entries.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} - {} coins\n",
            index + 1,
            entry.first_name,
            entry.balance
        ));
    }
    text
}

/// A player's stats as a formatted multi-line summary.
///
/// `created_at` is an ISO-8601 timestamp; only the date part is shown.
pub fn format_stats(stats: &PlayerStats) -> String {
    let member_since =
        stats.created_at.split('T').next().unwrap_or(&stats.created_at);
    format!(
        "\u{1f4ca} Your Statistics\n\
         Name: {}\n\
         ID: {}\n\
         Clicks: {}\n\
         Balance: {}\n\
         Member since: {member_since}",
        stats.first_name,
        stats.user_id,
        stats.total_clicks,
        stats.current_balance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextPage;
    use tapcoin_protocol::UserId;

    fn entries(n: usize) -> Vec<LeaderboardEntry> {
        (0..n)
            .map(|i| LeaderboardEntry {
                first_name: format!("Player{i}"),
                balance: 1000 - i as u64,
            })
            .collect()
    }

    fn ann() -> Identity {
        Identity {
            user_id: UserId(42),
            first_name: "Ann".into(),
            username: Some("ann".into()),
            is_premium: None,
        }
    }

    #[test]
    fn test_leaderboard_renders_one_row_per_entry() {
        let page = TextPage::new();
        render_leaderboard(&page, &entries(7));
        let text = page.text_of(Element::Leaderboard).unwrap();
        // Header line plus one row per entry.
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_top_three_rows_carry_medal_marks() {
        let page = TextPage::new();
        render_leaderboard(&page, &entries(5));
        let text = page.text_of(Element::Leaderboard).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();

        for (i, mark) in RANK_MARKS.iter().enumerate() {
            assert!(rows[i].starts_with(mark), "row {i} missing medal");
        }
        assert!(rows[3].starts_with(PLAIN_MARK));
        assert!(rows[4].starts_with(PLAIN_MARK));
    }

    #[test]
    fn test_leaderboard_rows_keep_input_order() {
        let page = TextPage::new();
        let list = vec![
            LeaderboardEntry { first_name: "Low".into(), balance: 10 },
            LeaderboardEntry { first_name: "High".into(), balance: 900 },
        ];
        render_leaderboard(&page, &list);
        let text = page.text_of(Element::Leaderboard).unwrap();
        // Not re-sorted: the low balance stays first because the server
        // put it first.
        assert!(text.find("Low").unwrap() < text.find("High").unwrap());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let page = TextPage::new();
        render_counters(&page, 5, 50);
        render_leaderboard(&page, &entries(3));
        let clicks = page.text_of(Element::Clicks);
        let board = page.text_of(Element::Leaderboard);

        render_counters(&page, 5, 50);
        render_leaderboard(&page, &entries(3));
        assert_eq!(page.text_of(Element::Clicks), clicks);
        assert_eq!(page.text_of(Element::Leaderboard), board);
    }

    #[test]
    fn test_counters_render_exact_values() {
        let page = TextPage::new();
        render_counters(&page, 6, 51);
        assert_eq!(page.text_of(Element::Clicks).as_deref(), Some("6"));
        assert_eq!(page.text_of(Element::Balance).as_deref(), Some("51"));
    }

    #[test]
    fn test_display_name_plain_and_premium() {
        let mut identity = ann();
        assert_eq!(display_name(&identity), "Ann");

        identity.is_premium = Some(true);
        assert_eq!(display_name(&identity), "Ann \u{2b50}");
    }

    #[test]
    fn test_format_stats_shows_date_part_only() {
        let stats = PlayerStats {
            user_id: UserId(42),
            first_name: "Ann".into(),
            username: Some("ann".into()),
            total_clicks: 12,
            current_balance: 120,
            created_at: "2024-05-01T12:00:00".into(),
        };
        let text = format_stats(&stats);
        assert!(text.contains("Member since: 2024-05-01"));
        assert!(!text.contains("12:00:00"));
        assert!(text.contains("Clicks: 12"));
        assert!(text.contains("Balance: 120"));
    }

    #[test]
    fn test_leaderboard_text_numbers_every_entry() {
        let text = leaderboard_text(&entries(4));
        assert!(text.contains("1. Player0 - 1000 coins"));
        assert!(text.contains("4. Player3 - 997 coins"));
    }
}
