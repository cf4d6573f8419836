//! Game event model consumed from a decoded replay.
//!
//! Events arrive in chronological order. Each carries the game second it
//! happened at and one of a closed set of kinds; anything the timeline does
//! not care about is kept as [`EventKind::Other`] so stream order is never
//! disturbed.

use serde::{Deserialize, Serialize};

use crate::players::PlayerId;

/// Identity of the unit an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDescriptor {
    /// Unit type name, e.g. `"Marine"` or `"Barracks"`.
    pub name: String,
    /// Whether the unit is a structure.
    #[serde(default)]
    pub is_building: bool,
    /// Whether the unit counts as army (never true for buildings).
    #[serde(default)]
    pub is_army: bool,
    /// Owning player, if any. Neutral units have none.
    #[serde(default)]
    pub owner: Option<PlayerId>,
}

impl UnitDescriptor {
    /// Describe an army unit owned by `owner`.
    #[must_use]
    pub fn army(name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            name: name.into(),
            is_building: false,
            is_army: true,
            owner: Some(owner),
        }
    }

    /// Describe a structure owned by `owner`.
    #[must_use]
    pub fn building(name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            name: name.into(),
            is_building: true,
            is_army: false,
            owner: Some(owner),
        }
    }

    /// Describe a unit that is neither army nor building (workers, larva...).
    #[must_use]
    pub fn other(name: impl Into<String>, owner: Option<PlayerId>) -> Self {
        Self {
            name: name.into(),
            is_building: false,
            is_army: false,
            owner,
        }
    }
}

/// Periodic economy and supply snapshot for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Player the snapshot belongs to.
    pub pid: PlayerId,
    /// Supply in use.
    pub food_used: u32,
    /// Supply capacity.
    pub food_made: u32,
    /// Workers currently harvesting.
    pub workers_active_count: u32,
    /// Primary resource income per minute.
    pub minerals_collection_rate: u32,
    /// Secondary resource income per minute.
    pub vespene_collection_rate: u32,
}

/// The kinds of event the timeline distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A unit finished and entered the game.
    UnitBorn {
        /// Player controlling the new unit.
        control_pid: Option<PlayerId>,
        /// The unit.
        unit: UnitDescriptor,
    },
    /// Construction of a unit (usually a structure) started.
    UnitInit {
        /// Player controlling the unit under construction.
        control_pid: Option<PlayerId>,
        /// The unit.
        unit: UnitDescriptor,
    },
    /// A unit died.
    UnitDied {
        /// Player credited with the kill, if known.
        killer_pid: Option<PlayerId>,
        /// The unit that died.
        unit: UnitDescriptor,
    },
    /// A research upgrade finished.
    UpgradeComplete {
        /// Player who researched it.
        pid: PlayerId,
        /// Upgrade type name.
        upgrade_name: String,
    },
    /// Economy and supply snapshot.
    PlayerStats(PlayerStats),
    /// Anything else the decoder produced.
    Other {
        /// Decoder's name for the event.
        name: String,
    },
}

/// One event from the replay's chronological stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Game time offset in seconds.
    pub second: u32,
    /// What happened.
    pub kind: EventKind,
}

impl GameEvent {
    /// Create a new event.
    #[must_use]
    pub const fn new(second: u32, kind: EventKind) -> Self {
        Self { second, kind }
    }

    /// Controlling player for born/init events.
    #[must_use]
    pub fn controller_id(&self) -> Option<PlayerId> {
        match &self.kind {
            EventKind::UnitBorn { control_pid, .. } | EventKind::UnitInit { control_pid, .. } => {
                *control_pid
            }
            _ => None,
        }
    }

    /// Acting player for upgrade and stats events.
    #[must_use]
    pub fn actor_id(&self) -> Option<PlayerId> {
        match &self.kind {
            EventKind::UpgradeComplete { pid, .. } => Some(*pid),
            EventKind::PlayerStats(stats) => Some(stats.pid),
            _ => None,
        }
    }

    /// Owner of the dead unit for death events.
    #[must_use]
    pub fn owner_id(&self) -> Option<PlayerId> {
        match &self.kind {
            EventKind::UnitDied { unit, .. } => unit.owner,
            _ => None,
        }
    }

    /// Stats payload, if this is a PlayerStats event.
    #[must_use]
    pub fn stats(&self) -> Option<&PlayerStats> {
        match &self.kind {
            EventKind::PlayerStats(stats) => Some(stats),
            _ => None,
        }
    }

    /// `MM:SS` clock for this event.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.second)
    }
}

/// Format a game second as `MM:SS`. Minutes keep growing past 99.
#[must_use]
pub fn format_clock(second: u32) -> String {
    format!("{:02}:{:02}", second / 60, second % 60)
}

/// Format a game length as `"{minutes} minutes and {seconds} seconds"`.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    format!(
        "{} minutes and {} seconds",
        total_secs / 60,
        total_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(754), "12 minutes and 34 seconds");
        assert_eq!(format_duration(59), "0 minutes and 59 seconds");
    }

    #[test]
    fn test_id_accessors_per_kind() {
        let born = GameEvent::new(
            10,
            EventKind::UnitBorn {
                control_pid: Some(1),
                unit: UnitDescriptor::army("Marine", 1),
            },
        );
        assert_eq!(born.controller_id(), Some(1));
        assert_eq!(born.actor_id(), None);
        assert_eq!(born.owner_id(), None);

        let died = GameEvent::new(
            12,
            EventKind::UnitDied {
                killer_pid: Some(2),
                unit: UnitDescriptor::army("Marine", 1),
            },
        );
        assert_eq!(died.controller_id(), None);
        assert_eq!(died.owner_id(), Some(1));

        let stats = GameEvent::new(
            60,
            EventKind::PlayerStats(PlayerStats {
                pid: 2,
                ..PlayerStats::default()
            }),
        );
        assert_eq!(stats.actor_id(), Some(2));
        assert!(stats.stats().is_some());
    }

    #[test]
    fn test_descriptor_constructors_are_disjoint() {
        let b = UnitDescriptor::building("Pylon", 1);
        assert!(b.is_building && !b.is_army);
        let a = UnitDescriptor::army("Zealot", 1);
        assert!(a.is_army && !a.is_building);
        let o = UnitDescriptor::other("Probe", None);
        assert!(!o.is_army && !o.is_building && o.owner.is_none());
    }
}
