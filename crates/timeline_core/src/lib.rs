//! # Timeline Core
//!
//! Turns a decoded real-time strategy replay into a readable match
//! timeline plus two chart datasets (supply and income over time).
//!
//! The pipeline is a single synchronous pass over the chronological event
//! stream:
//! - every event is classified into at most one log category
//! - PlayerStats snapshots update per-player supply, which annotates
//!   every following line for that player
//! - army deaths feed a trailing window that reports major fights at
//!   each economy tick
//! - PlayerStats snapshots also append population and income samples
//!
//! Decoding raw replay files is outside this crate; [`replay`] defines
//! the boundary a decoder must satisfy.
//!
//! ## Crate Structure
//!
//! - [`events`] - Game event model
//! - [`replay`] - Decoded replay model and decoders
//! - [`players`] - Player registry
//! - [`costs`] - Static unit cost table
//! - [`population`] - Rolling supply tracker
//! - [`combat`] - Major-fight detection
//! - [`series`] - Time series and pivot tables
//! - [`timeline`] - Event classifier and analysis entry points
//! - [`assembler`] - Timeline header and footer

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod assembler;
pub mod combat;
pub mod config;
pub mod costs;
pub mod error;
pub mod events;
pub mod players;
pub mod population;
pub mod replay;
pub mod series;
pub mod timeline;

pub use timeline::{analyze, analyze_with, ReplayAnalysis, TimelineProcessor};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combat::{CombatWindow, DeathRecord, LossSummary, MajorFight};
    pub use crate::config::AnalysisConfig;
    pub use crate::costs::{cost_of, UnitCost};
    pub use crate::error::{Result, TimelineError};
    pub use crate::events::{EventKind, GameEvent, PlayerStats, UnitDescriptor};
    pub use crate::players::{Player, PlayerId, PlayerRegistry, Team};
    pub use crate::population::{PopulationTracker, Supply};
    pub use crate::replay::{decode_file, Replay, ReplayDecoder};
    pub use crate::series::{PivotTable, SeriesRow};
    pub use crate::timeline::{
        analyze, analyze_with, ReplayAnalysis, TimelineProcessor, TimelineStats,
    };
}
