//! Static unit cost table used to value combat losses.
//!
//! Only a handful of common army units are listed. Anything else is valued
//! at zero rather than treated as an error.

use serde::{Deserialize, Serialize};

/// Resource cost of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitCost {
    /// Primary resource (minerals).
    pub minerals: u32,
    /// Secondary resource (vespene gas).
    pub gas: u32,
}

impl UnitCost {
    /// Create a new cost.
    #[must_use]
    pub const fn new(minerals: u32, gas: u32) -> Self {
        Self { minerals, gas }
    }

    /// Combined resource value.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.minerals + self.gas
    }
}

const UNIT_COSTS: &[(&str, UnitCost)] = &[
    ("Marine", UnitCost::new(50, 0)),
    ("Zealot", UnitCost::new(100, 0)),
    // Zerglings hatch in pairs; this is the per-unit share.
    ("Zergling", UnitCost::new(25, 0)),
    ("Stalker", UnitCost::new(125, 50)),
    ("Marauder", UnitCost::new(100, 25)),
    ("Reaper", UnitCost::new(50, 50)),
    ("Hellion", UnitCost::new(100, 0)),
    ("SiegeTank", UnitCost::new(150, 125)),
    ("Adept", UnitCost::new(100, 25)),
    ("Immortal", UnitCost::new(275, 100)),
    ("Roach", UnitCost::new(75, 25)),
    ("Hydralisk", UnitCost::new(100, 50)),
    ("Baneling", UnitCost::new(25, 25)),
    ("Queen", UnitCost::new(150, 0)),
];

/// Look up the cost of a unit by type name. Unknown names cost nothing.
#[must_use]
pub fn cost_of(unit_name: &str) -> UnitCost {
    UNIT_COSTS
        .iter()
        .find(|(name, _)| *name == unit_name)
        .map(|(_, cost)| *cost)
        .unwrap_or_default()
}

/// Whether the table has an entry for `unit_name`.
#[must_use]
pub fn is_known(unit_name: &str) -> bool {
    UNIT_COSTS.iter().any(|(name, _)| *name == unit_name)
}
