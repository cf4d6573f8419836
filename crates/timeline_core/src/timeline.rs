//! Single-pass classification of the event stream into a readable log.
//!
//! [`TimelineProcessor`] owns all mutable state for one run (supply
//! snapshots, the death buffer, the series collectors) and is consumed by
//! [`TimelineProcessor::run`]. Events are handled strictly in stream
//! order, so the log order always matches the input order.

use serde::{Deserialize, Serialize};

use crate::assembler::{game_end_line, header_lines};
use crate::combat::{CombatWindow, MajorFight};
use crate::config::AnalysisConfig;
use crate::events::{EventKind, GameEvent, PlayerStats};
use crate::players::PlayerRegistry;
use crate::population::PopulationTracker;
use crate::replay::Replay;
use crate::series::{PivotTable, SeriesCollector, SeriesRow};

/// Counts of what ended up in the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStats {
    /// Events consumed.
    pub events: usize,
    /// Building Constructed lines.
    pub buildings: usize,
    /// Unit Produced lines.
    pub units_produced: usize,
    /// Unit Lost lines.
    pub units_lost: usize,
    /// Upgrade Completed lines.
    pub upgrades: usize,
    /// Economy lines.
    pub economy_ticks: usize,
    /// Major fights detected.
    pub major_fights: usize,
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Default)]
pub struct ReplayAnalysis {
    /// Full timeline, header and footer included.
    pub lines: Vec<String>,
    /// Population samples (`"{player} Used"` / `"{player} Limit"`).
    pub population_rows: Vec<SeriesRow>,
    /// Income samples (`"{player} Minerals"` / `"{player} Gas"`).
    pub income_rows: Vec<SeriesRow>,
    /// Major fights in detection order.
    pub fights: Vec<MajorFight>,
    /// Line counts.
    pub stats: TimelineStats,
}

impl ReplayAnalysis {
    /// The timeline as a single newline-joined document.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Population chart table.
    #[must_use]
    pub fn population_table(&self) -> PivotTable {
        PivotTable::from_rows(&self.population_rows)
    }

    /// Income chart table.
    #[must_use]
    pub fn income_table(&self) -> PivotTable {
        PivotTable::from_rows(&self.income_rows)
    }
}

/// Processor for one replay: construct, run, discard.
#[derive(Debug)]
pub struct TimelineProcessor<'a> {
    replay: &'a Replay,
    config: AnalysisConfig,
    players: PlayerRegistry,
    population: PopulationTracker,
    combat: CombatWindow,
    series: SeriesCollector,
    lines: Vec<String>,
    fights: Vec<MajorFight>,
    stats: TimelineStats,
}

impl<'a> TimelineProcessor<'a> {
    /// Prepare a run over `replay`.
    #[must_use]
    pub fn new(replay: &'a Replay, config: AnalysisConfig) -> Self {
        Self {
            replay,
            config,
            players: PlayerRegistry::from_players(&replay.players),
            population: PopulationTracker::new(),
            combat: CombatWindow::new(&config),
            series: SeriesCollector::new(),
            lines: Vec::new(),
            fights: Vec::new(),
            stats: TimelineStats::default(),
        }
    }

    /// Process the whole event stream and assemble the timeline.
    #[must_use]
    pub fn run(mut self) -> ReplayAnalysis {
        let replay = self.replay;
        self.lines.extend(header_lines(replay));

        for event in &replay.events {
            self.process_event(event);
        }

        if let Some(line) = game_end_line(replay, &self.players) {
            self.lines.push(line);
        }

        tracing::info!(
            map = %replay.map_name,
            events = self.stats.events,
            lines = self.lines.len(),
            major_fights = self.stats.major_fights,
            "Timeline assembled"
        );

        let (population_rows, income_rows) = self.series.into_parts();
        ReplayAnalysis {
            lines: self.lines,
            population_rows,
            income_rows,
            fights: self.fights,
            stats: self.stats,
        }
    }

    fn process_event(&mut self, event: &GameEvent) {
        self.stats.events += 1;

        if let Some(stats) = event.stats() {
            self.population
                .record(stats.pid, stats.food_used, stats.food_made);
            let label = self.players.label_for(stats.pid);
            self.series.record(event.second, &label, stats);
        }

        let clock = event.clock();
        let annotation = self.population.annotation_for(event);

        if let Some(line) = self.classify(event, &clock, &annotation) {
            self.lines.push(line);
        }

        if let Some(stats) = event.stats() {
            if self.config.is_tick(event.second) {
                self.economy_tick(event.second, stats, &clock, &annotation);
            }
        }
    }

    /// Log line for the event's category, if it has one.
    fn classify(&mut self, event: &GameEvent, clock: &str, annotation: &str) -> Option<String> {
        match &event.kind {
            EventKind::UnitBorn { control_pid, unit } | EventKind::UnitInit { control_pid, unit }
                if unit.is_building =>
            {
                self.stats.buildings += 1;
                let player = self.players.name_or_unknown(*control_pid);
                Some(format!(
                    "[{clock}] [{player}] [Building Constructed] {}{annotation}",
                    unit.name
                ))
            }
            EventKind::UnitBorn { control_pid, unit } if unit.is_army => {
                self.stats.units_produced += 1;
                let player = self.players.name_or_unknown(*control_pid);
                Some(format!(
                    "[{clock}] [{player}] [Unit Produced] {}{annotation}",
                    unit.name
                ))
            }
            EventKind::UnitDied { unit, .. } if unit.is_army => {
                self.stats.units_lost += 1;
                let owner = match unit.owner {
                    Some(pid) => self.players.name_or_unknown(Some(pid)).to_string(),
                    None => "Neutral".to_string(),
                };
                self.combat
                    .record_death(event.second, owner.as_str(), unit.name.as_str());
                Some(format!(
                    "[{clock}] [{owner}] [Unit Lost] {}{annotation}",
                    unit.name
                ))
            }
            EventKind::UpgradeComplete { pid, upgrade_name } => {
                self.stats.upgrades += 1;
                let player = self.players.name_or_unknown(Some(*pid));
                Some(format!(
                    "[{clock}] [{player}] [Upgrade Completed] {upgrade_name}{annotation}"
                ))
            }
            EventKind::UnitBorn { .. }
            | EventKind::UnitInit { .. }
            | EventKind::UnitDied { .. }
            | EventKind::PlayerStats(_)
            | EventKind::Other { .. } => None,
        }
    }

    /// Economy line, then the fight summary if the window fires.
    fn economy_tick(&mut self, second: u32, stats: &PlayerStats, clock: &str, annotation: &str) {
        self.stats.economy_ticks += 1;
        let player = self.players.name_or_unknown(Some(stats.pid));
        self.lines.push(format!(
            "[{clock}] [{player}] [Economy] Workers: {}, Minerals Income: {}/min, Gas Income: {}/min{annotation}",
            stats.workers_active_count,
            stats.minerals_collection_rate,
            stats.vespene_collection_rate,
        ));
        tracing::trace!(second, pid = stats.pid, "Economy tick");

        if let Some(fight) = self.combat.evaluate(second) {
            self.stats.major_fights += 1;
            self.lines.push(fight.log_line());
            self.fights.push(fight);
        }
    }
}

/// Analyze a replay with the default configuration.
#[must_use]
pub fn analyze(replay: &Replay) -> ReplayAnalysis {
    analyze_with(replay, AnalysisConfig::default())
}

/// Analyze a replay with an explicit configuration.
#[must_use]
pub fn analyze_with(replay: &Replay, config: AnalysisConfig) -> ReplayAnalysis {
    TimelineProcessor::new(replay, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::UnitDescriptor;
    use crate::players::Player;

    fn replay_with(events: Vec<GameEvent>) -> Replay {
        Replay {
            map_name: "Test Map".to_string(),
            players: vec![
                Player::new(1, "Alice", "Terran"),
                Player::new(2, "Bob", "Zerg"),
            ],
            teams: Vec::new(),
            duration_secs: 600,
            date: None,
            events,
        }
    }

    fn body(analysis: &ReplayAnalysis) -> Vec<&str> {
        analysis
            .lines
            .iter()
            .skip_while(|l| !l.starts_with("===="))
            .skip(1)
            .map(String::as_str)
            .collect()
    }

    fn stats_event(second: u32, pid: u32, used: u32, made: u32) -> GameEvent {
        GameEvent::new(
            second,
            EventKind::PlayerStats(PlayerStats {
                pid,
                food_used: used,
                food_made: made,
                workers_active_count: 12,
                minerals_collection_rate: 600,
                vespene_collection_rate: 0,
            }),
        )
    }

    #[test]
    fn test_building_from_init_event() {
        let analysis = analyze(&replay_with(vec![GameEvent::new(
            20,
            EventKind::UnitInit {
                control_pid: Some(1),
                unit: UnitDescriptor::building("SupplyDepot", 1),
            },
        )]));
        assert_eq!(body(&analysis), vec![
            "[00:20] [Alice] [Building Constructed] SupplyDepot"
        ]);
        assert_eq!(analysis.stats.buildings, 1);
    }

    #[test]
    fn test_init_army_unit_not_produced() {
        let analysis = analyze(&replay_with(vec![GameEvent::new(
            20,
            EventKind::UnitInit {
                control_pid: Some(1),
                unit: UnitDescriptor::army("Marine", 1),
            },
        )]));
        assert!(body(&analysis).is_empty());
    }

    #[test]
    fn test_unit_produced_with_annotation() {
        let analysis = analyze(&replay_with(vec![
            stats_event(10, 2, 14, 14),
            GameEvent::new(
                25,
                EventKind::UnitBorn {
                    control_pid: Some(2),
                    unit: UnitDescriptor::army("Zergling", 2),
                },
            ),
        ]));
        assert_eq!(body(&analysis), vec![
            "[00:25] [Bob] [Unit Produced] Zergling [14/14]"
        ]);
    }

    #[test]
    fn test_worker_born_is_not_logged() {
        let analysis = analyze(&replay_with(vec![GameEvent::new(
            12,
            EventKind::UnitBorn {
                control_pid: Some(1),
                unit: UnitDescriptor::other("SCV", Some(1)),
            },
        )]));
        assert!(body(&analysis).is_empty());
        assert_eq!(analysis.stats.events, 1);
    }

    #[test]
    fn test_neutral_and_unknown_owners() {
        let analysis = analyze(&replay_with(vec![
            GameEvent::new(
                300,
                EventKind::UnitDied {
                    killer_pid: Some(1),
                    unit: UnitDescriptor {
                        name: "Broodling".to_string(),
                        is_building: false,
                        is_army: true,
                        owner: None,
                    },
                },
            ),
            GameEvent::new(
                301,
                EventKind::UnitDied {
                    killer_pid: Some(1),
                    unit: UnitDescriptor::army("Marine", 7),
                },
            ),
        ]));
        assert_eq!(body(&analysis), vec![
            "[05:00] [Neutral] [Unit Lost] Broodling",
            "[05:01] [Unknown] [Unit Lost] Marine",
        ]);
    }

    #[test]
    fn test_upgrade_line() {
        let analysis = analyze(&replay_with(vec![GameEvent::new(
            400,
            EventKind::UpgradeComplete {
                pid: 1,
                upgrade_name: "Stimpack".to_string(),
            },
        )]));
        assert_eq!(body(&analysis), vec![
            "[06:40] [Alice] [Upgrade Completed] Stimpack"
        ]);
    }

    #[test]
    fn test_non_tick_stats_only_feed_series() {
        let analysis = analyze(&replay_with(vec![stats_event(10, 1, 12, 15)]));
        assert!(body(&analysis).is_empty());
        assert_eq!(analysis.population_rows.len(), 2);
        assert_eq!(analysis.income_rows.len(), 2);
    }

    #[test]
    fn test_tick_emits_economy_line() {
        let analysis = analyze(&replay_with(vec![stats_event(120, 1, 22, 31)]));
        assert_eq!(body(&analysis), vec![
            "[02:00] [Alice] [Economy] Workers: 12, Minerals Income: 600/min, Gas Income: 0/min [22/31]"
        ]);
        assert_eq!(analysis.stats.economy_ticks, 1);
    }

    #[test]
    fn test_fight_line_follows_economy_line() {
        let mut events: Vec<GameEvent> = (0..15)
            .map(|i| {
                GameEvent::new(
                    100 + i,
                    EventKind::UnitDied {
                        killer_pid: Some(1),
                        unit: UnitDescriptor::army("Zergling", 2),
                    },
                )
            })
            .collect();
        events.push(stats_event(120, 1, 40, 60));
        events.push(stats_event(120, 2, 30, 44));

        let analysis = analyze(&replay_with(events));
        let lines = body(&analysis);
        assert_eq!(lines.len(), 18);
        assert!(lines[15].contains("[Alice] [Economy]"));
        assert_eq!(
            lines[16],
            "[02:00] [Meta] Big fight happened. Losses - Bob: 15 units (375M/0G). Favored: Bob"
        );
        // Buffer was cleared, so Bob's tick does not fire again.
        assert!(lines[17].contains("[Bob] [Economy]"));
        assert_eq!(analysis.fights.len(), 1);
    }

    #[test]
    fn test_unknown_stats_player_gets_placeholder_label() {
        let analysis = analyze(&replay_with(vec![stats_event(60, 9, 1, 2)]));
        assert_eq!(analysis.population_rows[0].label, "Player 9 Used");
        assert!(body(&analysis)[0].starts_with("[01:00] [Unknown] [Economy]"));
    }

    #[test]
    fn test_custom_config() {
        let config = AnalysisConfig {
            tick_interval_secs: 30,
            fight_window_secs: 30,
            fight_death_threshold: 2,
        };
        let analysis = analyze_with(
            &replay_with(vec![
                GameEvent::new(
                    25,
                    EventKind::UnitDied {
                        killer_pid: None,
                        unit: UnitDescriptor::army("Marine", 1),
                    },
                ),
                GameEvent::new(
                    28,
                    EventKind::UnitDied {
                        killer_pid: None,
                        unit: UnitDescriptor::army("Marine", 1),
                    },
                ),
                stats_event(30, 1, 10, 15),
            ]),
            config,
        );
        assert_eq!(analysis.stats.economy_ticks, 1);
        assert_eq!(analysis.stats.major_fights, 1);
    }
}
