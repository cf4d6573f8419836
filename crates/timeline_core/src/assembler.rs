//! Header and footer lines wrapped around the event log.

use crate::events::format_duration;
use crate::players::PlayerRegistry;
use crate::replay::Replay;

/// Width of the separator line under the header.
pub const SEPARATOR_WIDTH: usize = 40;

/// Map, players, duration, optional date, then a separator.
#[must_use]
pub fn header_lines(replay: &Replay) -> Vec<String> {
    let mut lines = Vec::with_capacity(replay.players.len() + 5);
    lines.push(format!("Map: {}", replay.map_name));
    lines.push("Players:".to_string());
    lines.extend(
        replay
            .players
            .iter()
            .map(|p| format!("- {} ({})", p.name, p.faction)),
    );
    lines.push(format!("Duration: {}", format_duration(replay.duration_secs)));
    if let Some(date) = &replay.date {
        lines.push(format!("Date: {date}"));
    }
    lines.push("=".repeat(SEPARATOR_WIDTH));
    lines
}

/// Winner line for the first team that won, or `None` without a winner.
#[must_use]
pub fn game_end_line(replay: &Replay, players: &PlayerRegistry) -> Option<String> {
    let team = replay.winning_team()?;
    let names = team
        .players
        .iter()
        .map(|id| players.label_for(*id))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "[Game End] Winner: {names}. Game length: {}.",
        format_duration(replay.duration_secs)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{Player, Team};

    fn replay() -> Replay {
        Replay {
            map_name: "Alcyone LE".to_string(),
            players: vec![
                Player::new(1, "Alice", "Terran"),
                Player::new(2, "Bob", "Zerg"),
            ],
            teams: vec![
                Team {
                    result: Some("Loss".to_string()),
                    players: vec![2],
                },
                Team {
                    result: Some("Win".to_string()),
                    players: vec![1],
                },
            ],
            duration_secs: 754,
            date: Some("2024-03-01 18:22:05".to_string()),
            events: Vec::new(),
        }
    }

    #[test]
    fn test_header() {
        let lines = header_lines(&replay());
        assert_eq!(lines, vec![
            "Map: Alcyone LE",
            "Players:",
            "- Alice (Terran)",
            "- Bob (Zerg)",
            "Duration: 12 minutes and 34 seconds",
            "Date: 2024-03-01 18:22:05",
            "========================================",
        ]);
    }

    #[test]
    fn test_header_without_date() {
        let mut r = replay();
        r.date = None;
        let lines = header_lines(&r);
        assert!(!lines.iter().any(|l| l.starts_with("Date:")));
        assert_eq!(lines.last().map(String::len), Some(SEPARATOR_WIDTH));
    }

    #[test]
    fn test_game_end_line() {
        let r = replay();
        let players = PlayerRegistry::from_players(&r.players);
        assert_eq!(
            game_end_line(&r, &players).as_deref(),
            Some("[Game End] Winner: Alice. Game length: 12 minutes and 34 seconds.")
        );
    }

    #[test]
    fn test_joint_winners() {
        let mut r = replay();
        r.players.push(Player::new(3, "Cara", "Protoss"));
        r.teams[1].players.push(3);
        let players = PlayerRegistry::from_players(&r.players);
        let line = game_end_line(&r, &players).unwrap();
        assert!(line.starts_with("[Game End] Winner: Alice, Cara."));
    }

    #[test]
    fn test_no_winner_no_line() {
        let mut r = replay();
        r.teams[1].result = Some("Tie".to_string());
        let players = PlayerRegistry::from_players(&r.players);
        assert!(game_end_line(&r, &players).is_none());
    }
}
