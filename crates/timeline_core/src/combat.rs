//! Major-fight detection over army deaths.
//!
//! Deaths accumulate in a buffer. At every economy tick the buffer is
//! filtered to the trailing window ending at the tick; if enough deaths
//! fall inside it, a [`MajorFight`] summary is produced and the whole
//! buffer is cleared, including deaths older than the window. Below the
//! threshold the buffer is left untouched.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::costs::cost_of;
use crate::events::format_clock;

/// One army unit death.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathRecord {
    /// Game second of the death.
    pub second: u32,
    /// Name of the player who lost the unit.
    pub player: String,
    /// Unit type name.
    pub unit_name: String,
}

/// Aggregate losses for one player within a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LossSummary {
    /// Units lost.
    pub units: u32,
    /// Minerals lost.
    pub minerals: u32,
    /// Gas lost.
    pub gas: u32,
}

impl LossSummary {
    /// Add one unit's death to the summary.
    pub fn add(&mut self, unit_name: &str) {
        let cost = cost_of(unit_name);
        self.units += 1;
        self.minerals += cost.minerals;
        self.gas += cost.gas;
    }

    /// Combined resources lost.
    #[must_use]
    pub const fn resource_total(&self) -> u32 {
        self.minerals + self.gas
    }
}

/// Summary of a detected major fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorFight {
    /// Tick at which the fight was detected.
    pub second: u32,
    /// Per-player losses, in order of each player's first death in the window.
    pub losses: Vec<(String, LossSummary)>,
    /// Player with the smallest resource loss.
    pub favored: String,
}

impl MajorFight {
    /// Build a fight summary from the deaths inside the window.
    ///
    /// Returns `None` for an empty batch. Equal minimum losses go to the
    /// player listed first.
    #[must_use]
    pub fn from_deaths<'a>(
        second: u32,
        deaths: impl IntoIterator<Item = &'a DeathRecord>,
    ) -> Option<Self> {
        let mut losses: Vec<(String, LossSummary)> = Vec::new();
        for death in deaths {
            match losses.iter_mut().find(|(name, _)| *name == death.player) {
                Some((_, summary)) => summary.add(&death.unit_name),
                None => {
                    let mut summary = LossSummary::default();
                    summary.add(&death.unit_name);
                    losses.push((death.player.clone(), summary));
                }
            }
        }

        let favored = losses
            .iter()
            .min_by_key(|(_, summary)| summary.resource_total())
            .map(|(name, _)| name.clone())?;

        Some(Self {
            second,
            losses,
            favored,
        })
    }

    /// Total units lost by all players.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.losses.iter().map(|(_, s)| s.units).sum()
    }

    /// Log line for this fight.
    #[must_use]
    pub fn log_line(&self) -> String {
        let summary = self
            .losses
            .iter()
            .map(|(name, s)| format!("{name}: {} units ({}M/{}G)", s.units, s.minerals, s.gas))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "[{}] [Meta] Big fight happened. Losses - {summary}. Favored: {}",
            format_clock(self.second),
            self.favored
        )
    }
}

/// Buffer of army deaths since the last major fight.
#[derive(Debug, Clone)]
pub struct CombatWindow {
    window_secs: u32,
    threshold: usize,
    deaths: Vec<DeathRecord>,
}

impl Default for CombatWindow {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl CombatWindow {
    /// Create an empty window using the fight settings from `config`.
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window_secs: config.fight_window_secs,
            threshold: config.fight_death_threshold,
            deaths: Vec::new(),
        }
    }

    /// Append an army death.
    pub fn record_death(&mut self, second: u32, player: impl Into<String>, unit_name: impl Into<String>) {
        self.deaths.push(DeathRecord {
            second,
            player: player.into(),
            unit_name: unit_name.into(),
        });
    }

    /// Deaths inside `[tick - window, tick]`.
    pub fn in_window(&self, tick: u32) -> impl Iterator<Item = &DeathRecord> {
        let start = tick.saturating_sub(self.window_secs);
        self.deaths
            .iter()
            .filter(move |d| d.second >= start && d.second <= tick)
    }

    /// Evaluate the window at an economy tick.
    ///
    /// Fires when at least `threshold` deaths fall inside the window; the
    /// entire buffer is then cleared.
    pub fn evaluate(&mut self, tick: u32) -> Option<MajorFight> {
        let count = self.in_window(tick).count();
        if count < self.threshold || count == 0 {
            return None;
        }

        let fight = MajorFight::from_deaths(tick, self.in_window(tick))?;
        tracing::debug!(
            tick,
            deaths = count,
            buffered = self.deaths.len(),
            favored = %fight.favored,
            "Major fight detected"
        );
        self.deaths.clear();
        Some(fight)
    }

    /// Deaths currently buffered, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[DeathRecord] {
        &self.deaths
    }
}
