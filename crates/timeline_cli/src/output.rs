//! Writing analysis results for the presentation layer.

use std::path::{Path, PathBuf};

use timeline_core::error::{Result, TimelineError};
use timeline_core::ReplayAnalysis;

/// File name of the downloadable timeline.
pub const TIMELINE_FILE: &str = "replay_events.txt";

/// File name of the population chart table.
pub const POPULATION_FILE: &str = "population.json";

/// File name of the income chart table.
pub const INCOME_FILE: &str = "income.json";

/// Where each output landed.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Timeline text.
    pub timeline: PathBuf,
    /// Population table, absent when there were no samples.
    pub population: Option<PathBuf>,
    /// Income table, absent when there were no samples.
    pub income: Option<PathBuf>,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| TimelineError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Write the timeline and both chart tables into `dir`.
///
/// Tables with no samples are skipped rather than written empty.
pub fn write_outputs(analysis: &ReplayAnalysis, dir: &Path) -> Result<OutputPaths> {
    std::fs::create_dir_all(dir).map_err(|source| TimelineError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let timeline = dir.join(TIMELINE_FILE);
    write_file(&timeline, &analysis.text())?;

    let mut paths = OutputPaths {
        timeline,
        population: None,
        income: None,
    };

    let population = analysis.population_table();
    if population.is_empty() {
        tracing::info!("No population samples, skipping chart table");
    } else {
        let path = dir.join(POPULATION_FILE);
        write_file(&path, &population.to_json()?)?;
        paths.population = Some(path);
    }

    let income = analysis.income_table();
    if income.is_empty() {
        tracing::info!("No income samples, skipping chart table");
    } else {
        let path = dir.join(INCOME_FILE);
        write_file(&path, &income.to_json()?)?;
        paths.income = Some(path);
    }

    Ok(paths)
}
