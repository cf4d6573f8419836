//! Rolling per-player supply state.

use std::collections::HashMap;

use crate::events::{EventKind, GameEvent};
use crate::players::PlayerId;

/// Most recent supply snapshot for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Supply {
    /// Supply in use.
    pub used: u32,
    /// Supply capacity.
    pub made: u32,
}

impl Supply {
    /// Suffix appended to log lines, e.g. `" [20/30]"`.
    #[must_use]
    pub fn annotation(&self) -> String {
        format!(" [{}/{}]", self.used, self.made)
    }
}

/// Latest `(used, made)` pair per player. No history is kept.
#[derive(Debug, Clone, Default)]
pub struct PopulationTracker {
    latest: HashMap<PlayerId, Supply>,
}

impl PopulationTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored pair for `pid`.
    pub fn record(&mut self, pid: PlayerId, used: u32, made: u32) {
        self.latest.insert(pid, Supply { used, made });
    }

    /// Latest pair for `pid`, or `None` if it was never recorded.
    #[must_use]
    pub fn lookup(&self, pid: PlayerId) -> Option<Supply> {
        self.latest.get(&pid).copied()
    }

    /// Resolve the supply to annotate `event` with.
    ///
    /// Tries the controller first, then the acting player, then (deaths
    /// only) the unit's owner. Each candidate is skipped unless it has a
    /// recorded snapshot.
    #[must_use]
    pub fn resolve(&self, event: &GameEvent) -> Option<Supply> {
        let recorded = |pid: Option<PlayerId>| pid.and_then(|pid| self.lookup(pid));
        recorded(event.controller_id())
            .or_else(|| recorded(event.actor_id()))
            .or_else(|| match event.kind {
                EventKind::UnitDied { .. } => recorded(event.owner_id()),
                _ => None,
            })
    }

    /// Annotation suffix for `event`, empty when nothing is recorded.
    #[must_use]
    pub fn annotation_for(&self, event: &GameEvent) -> String {
        self.resolve(event)
            .map(|supply| supply.annotation())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PlayerStats, UnitDescriptor};

    #[test]
    fn test_record_overwrites() {
        let mut tracker = PopulationTracker::new();
        assert_eq!(tracker.lookup(1), None);
        tracker.record(1, 12, 15);
        tracker.record(1, 10, 23);
        assert_eq!(tracker.lookup(1), Some(Supply { used: 10, made: 23 }));
    }

    #[test]
    fn test_controller_falls_back_to_actor() {
        let mut tracker = PopulationTracker::new();
        tracker.record(2, 30, 46);

        // Controller 1 has no snapshot and born events have no actor.
        let born = GameEvent::new(
            5,
            EventKind::UnitBorn {
                control_pid: Some(1),
                unit: UnitDescriptor::army("Marine", 1),
            },
        );
        assert_eq!(tracker.annotation_for(&born), "");

        let upgrade = GameEvent::new(
            5,
            EventKind::UpgradeComplete {
                pid: 2,
                upgrade_name: "Stimpack".to_string(),
            },
        );
        assert_eq!(tracker.annotation_for(&upgrade), " [30/46]");
    }

    #[test]
    fn test_death_falls_back_to_owner() {
        let mut tracker = PopulationTracker::new();
        tracker.record(1, 44, 60);
        let died = GameEvent::new(
            90,
            EventKind::UnitDied {
                killer_pid: Some(2),
                unit: UnitDescriptor::army("Marine", 1),
            },
        );
        assert_eq!(tracker.resolve(&died), Some(Supply { used: 44, made: 60 }));
    }

    #[test]
    fn test_owner_fallback_only_for_deaths() {
        let mut tracker = PopulationTracker::new();
        tracker.record(1, 44, 60);
        let born = GameEvent::new(
            90,
            EventKind::UnitBorn {
                control_pid: None,
                unit: UnitDescriptor::army("Marine", 1),
            },
        );
        assert_eq!(tracker.resolve(&born), None);
    }

    #[test]
    fn test_stats_event_resolves_to_own_player() {
        let mut tracker = PopulationTracker::new();
        tracker.record(3, 8, 15);
        let stats = GameEvent::new(
            60,
            EventKind::PlayerStats(PlayerStats {
                pid: 3,
                ..PlayerStats::default()
            }),
        );
        assert_eq!(tracker.annotation_for(&stats), " [8/15]");
    }
}
