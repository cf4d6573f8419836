//! Analysis configuration.
//!
//! The defaults reproduce the standard timeline exactly: one economy tick
//! per game minute and a major fight at 15 army deaths inside a trailing
//! 60 second window. A RON file can override them.
//!
//! ```ron
//! AnalysisConfig(
//!     tick_interval_secs: 60,
//!     fight_window_secs: 60,
//!     fight_death_threshold: 15,
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Seconds between economy ticks.
pub const DEFAULT_TICK_INTERVAL_SECS: u32 = 60;

/// Length of the trailing window evaluated at each tick.
pub const DEFAULT_FIGHT_WINDOW_SECS: u32 = 60;

/// Army deaths inside the window needed to call it a major fight.
pub const DEFAULT_FIGHT_DEATH_THRESHOLD: usize = 15;

/// Tunables for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// A PlayerStats event is a tick when its second is a multiple of this.
    pub tick_interval_secs: u32,
    /// Trailing window, inclusive on both ends, measured back from the tick.
    pub fight_window_secs: u32,
    /// Minimum deaths inside the window for a major fight.
    pub fight_death_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            fight_window_secs: DEFAULT_FIGHT_WINDOW_SECS,
            fight_death_threshold: DEFAULT_FIGHT_DEATH_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&contents).map_err(|e| match e {
            TimelineError::Config { message, .. } => TimelineError::Config {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse a config from RON text.
    pub fn from_ron(contents: &str) -> Result<Self> {
        let config: Self = ron::from_str(contents).map_err(|e| TimelineError::Config {
            path: String::new(),
            message: e.to_string(),
        })?;
        if config.tick_interval_secs == 0 {
            return Err(TimelineError::Config {
                path: String::new(),
                message: "tick_interval_secs must be greater than zero".to_string(),
            });
        }
        Ok(config)
    }

    /// Whether an event at `second` falls on a tick boundary.
    #[must_use]
    pub const fn is_tick(&self, second: u32) -> bool {
        second % self.tick_interval_secs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_timeline() {
        let config = AnalysisConfig::default();
        assert_eq!(config.tick_interval_secs, 60);
        assert_eq!(config.fight_window_secs, 60);
        assert_eq!(config.fight_death_threshold, 15);
    }

    #[test]
    fn test_is_tick() {
        let config = AnalysisConfig::default();
        assert!(config.is_tick(0));
        assert!(config.is_tick(120));
        assert!(!config.is_tick(61));
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = AnalysisConfig::from_ron("(fight_death_threshold: 5)").unwrap();
        assert_eq!(config.fight_death_threshold, 5);
        assert_eq!(config.tick_interval_secs, 60);
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let result = AnalysisConfig::from_ron("(tick_interval_secs: 0)");
        assert!(matches!(result, Err(TimelineError::Config { .. })));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = std::env::temp_dir().join("timeline_config_test_bad.ron");
        std::fs::write(&dir, "not ron at all (").unwrap();
        let err = AnalysisConfig::load(&dir).unwrap_err();
        assert!(err.to_string().contains("timeline_config_test_bad.ron"));
        let _ = std::fs::remove_file(dir);
    }
}
