//! Test fixtures and helpers.
//!
//! Short constructors for events and a builder for whole replays, so
//! tests read as a list of things that happened in the match.

use timeline_core::events::{EventKind, GameEvent, PlayerStats, UnitDescriptor};
use timeline_core::players::{Player, PlayerId, Team};
use timeline_core::replay::Replay;

/// PlayerStats snapshot.
#[must_use]
pub fn stats(
    second: u32,
    pid: PlayerId,
    food_used: u32,
    food_made: u32,
    workers: u32,
    minerals: u32,
    gas: u32,
) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::PlayerStats(PlayerStats {
            pid,
            food_used,
            food_made,
            workers_active_count: workers,
            minerals_collection_rate: minerals,
            vespene_collection_rate: gas,
        }),
    )
}

/// Supply-only snapshot with zero economy fields.
#[must_use]
pub fn supply(second: u32, pid: PlayerId, food_used: u32, food_made: u32) -> GameEvent {
    stats(second, pid, food_used, food_made, 0, 0, 0)
}

/// Army unit born for `pid`.
#[must_use]
pub fn army_born(second: u32, pid: PlayerId, name: &str) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::UnitBorn {
            control_pid: Some(pid),
            unit: UnitDescriptor::army(name, pid),
        },
    )
}

/// Structure started for `pid`.
#[must_use]
pub fn building_init(second: u32, pid: PlayerId, name: &str) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::UnitInit {
            control_pid: Some(pid),
            unit: UnitDescriptor::building(name, pid),
        },
    )
}

/// Army unit owned by `owner` died.
#[must_use]
pub fn army_died(second: u32, owner: PlayerId, name: &str) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::UnitDied {
            killer_pid: None,
            unit: UnitDescriptor::army(name, owner),
        },
    )
}

/// Upgrade finished for `pid`.
#[must_use]
pub fn upgrade(second: u32, pid: PlayerId, name: &str) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::UpgradeComplete {
            pid,
            upgrade_name: name.to_string(),
        },
    )
}

/// An event the timeline ignores.
#[must_use]
pub fn ignored(second: u32, name: &str) -> GameEvent {
    GameEvent::new(
        second,
        EventKind::Other {
            name: name.to_string(),
        },
    )
}

/// Builder for [`Replay`] fixtures.
#[derive(Debug, Clone)]
pub struct ReplayBuilder {
    replay: Replay,
}

impl ReplayBuilder {
    /// Start a replay on `map_name` with a ten minute length.
    #[must_use]
    pub fn new(map_name: &str) -> Self {
        Self {
            replay: Replay {
                map_name: map_name.to_string(),
                duration_secs: 600,
                ..Replay::default()
            },
        }
    }

    /// Add a player.
    #[must_use]
    pub fn player(mut self, id: PlayerId, name: &str, faction: &str) -> Self {
        self.replay.players.push(Player::new(id, name, faction));
        self
    }

    /// Add a team with a result.
    #[must_use]
    pub fn team(mut self, result: &str, players: &[PlayerId]) -> Self {
        self.replay.teams.push(Team {
            result: Some(result.to_string()),
            players: players.to_vec(),
        });
        self
    }

    /// Set the game length.
    #[must_use]
    pub fn duration(mut self, secs: u64) -> Self {
        self.replay.duration_secs = secs;
        self
    }

    /// Set the match date.
    #[must_use]
    pub fn date(mut self, date: &str) -> Self {
        self.replay.date = Some(date.to_string());
        self
    }

    /// Append one event.
    #[must_use]
    pub fn event(mut self, event: GameEvent) -> Self {
        self.replay.events.push(event);
        self
    }

    /// Append several events.
    #[must_use]
    pub fn events(mut self, events: impl IntoIterator<Item = GameEvent>) -> Self {
        self.replay.events.extend(events);
        self
    }

    /// Finish the replay.
    #[must_use]
    pub fn build(self) -> Replay {
        self.replay
    }
}

/// Alice (Terran, id 1) against Bob (Zerg, id 2) with no events.
#[must_use]
pub fn one_vs_one() -> ReplayBuilder {
    ReplayBuilder::new("Test Arena")
        .player(1, "Alice", "Terran")
        .player(2, "Bob", "Zerg")
}
