//! Population and income time series, and their pivoted chart tables.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::events::PlayerStats;

/// One long-format sample: a value for a series label at a game minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    /// Game second the sample was taken at.
    pub second: u32,
    /// `second / 60` as a real number.
    pub minute: f64,
    /// Series label, e.g. `"Alice Used"`.
    pub label: String,
    /// Sample value.
    pub value: u32,
}

impl SeriesRow {
    /// Create a row, deriving the minute from the second.
    #[must_use]
    pub fn new(second: u32, label: impl Into<String>, value: u32) -> Self {
        Self {
            second,
            minute: f64::from(second) / 60.0,
            label: label.into(),
            value,
        }
    }
}

/// Append-only collector for the two chart datasets.
#[derive(Debug, Clone, Default)]
pub struct SeriesCollector {
    population: Vec<SeriesRow>,
    income: Vec<SeriesRow>,
}

impl SeriesCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the supply and income samples from one stats snapshot.
    pub fn record(&mut self, second: u32, player: &str, stats: &PlayerStats) {
        self.population
            .push(SeriesRow::new(second, format!("{player} Used"), stats.food_used));
        self.population
            .push(SeriesRow::new(second, format!("{player} Limit"), stats.food_made));
        self.income.push(SeriesRow::new(
            second,
            format!("{player} Minerals"),
            stats.minerals_collection_rate,
        ));
        self.income.push(SeriesRow::new(
            second,
            format!("{player} Gas"),
            stats.vespene_collection_rate,
        ));
    }

    /// Population rows recorded so far.
    #[must_use]
    pub fn population(&self) -> &[SeriesRow] {
        &self.population
    }

    /// Income rows recorded so far.
    #[must_use]
    pub fn income(&self) -> &[SeriesRow] {
        &self.income
    }

    /// Consume the collector, returning `(population, income)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SeriesRow>, Vec<SeriesRow>) {
        (self.population, self.income)
    }
}

/// One row of a pivoted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    /// Game minute (x axis).
    pub minute: f64,
    /// One cell per column; `None` where the series has no sample.
    pub values: Vec<Option<u32>>,
}

/// Wide table with one column per series label and one row per minute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotTable {
    /// Series labels, sorted.
    pub columns: Vec<String>,
    /// Rows in ascending minute order.
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Pivot long-format rows into a wide table.
    ///
    /// If a label has more than one sample at the same second the last one
    /// is kept.
    #[must_use]
    pub fn from_rows(rows: &[SeriesRow]) -> Self {
        let columns: Vec<String> = rows
            .iter()
            .map(|r| r.label.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut by_second: BTreeMap<u32, Vec<Option<u32>>> = BTreeMap::new();
        for row in rows {
            let Ok(col) = columns.binary_search(&row.label) else {
                continue;
            };
            let cells = by_second
                .entry(row.second)
                .or_insert_with(|| vec![None; columns.len()]);
            if cells[col].replace(row.value).is_some() {
                tracing::warn!(
                    second = row.second,
                    label = %row.label,
                    "Duplicate sample in series, keeping the later value"
                );
            }
        }

        Self {
            columns,
            rows: by_second
                .into_iter()
                .map(|(second, values)| PivotRow {
                    minute: f64::from(second) / 60.0,
                    values,
                })
                .collect(),
        }
    }

    /// Whether the table has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell for `label` in row `row`, if both exist and the cell is filled.
    #[must_use]
    pub fn value(&self, row: usize, label: &str) -> Option<u32> {
        let col = self.columns.iter().position(|c| c == label)?;
        self.rows.get(row)?.values.get(col).copied().flatten()
    }

    /// All `(minute, value)` points for one column, skipping gaps.
    #[must_use]
    pub fn series(&self, label: &str) -> Vec<(f64, u32)> {
        let Some(col) = self.columns.iter().position(|c| c == label) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|r| r.values[col].map(|v| (r.minute, v)))
            .collect()
    }

    /// Pretty-printed JSON for the presentation layer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TimelineError::Encode {
            message: e.to_string(),
        })
    }
}
