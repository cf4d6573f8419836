//! Decoded replay model and the decoders that produce it.
//!
//! Turning a raw game replay into events is the job of an external
//! decoder. This module defines the boundary: the [`Replay`] it must
//! produce, a [`ReplayDecoder`] trait, and decoders for the pre-decoded
//! formats we read directly (a versioned bincode archive, JSON and RON).
//! Decoding is all-or-nothing; a failure never yields a partial replay.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::events::GameEvent;
use crate::players::{Player, Team};

/// Replay archive format version for compatibility.
pub const ARCHIVE_VERSION: u32 = 1;

/// Everything the timeline needs from a decoded replay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Replay {
    /// Map the match was played on.
    pub map_name: String,
    /// Participants, in replay order.
    pub players: Vec<Player>,
    /// Teams and their results.
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Game length in seconds.
    pub duration_secs: u64,
    /// Date the match was played, as recorded by the decoder.
    #[serde(default)]
    pub date: Option<String>,
    /// Chronological event stream.
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

impl Replay {
    /// Game length.
    #[must_use]
    pub const fn length(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// The first team with a `"Win"` result, if any.
    #[must_use]
    pub fn winning_team(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.is_winner())
    }

    /// Whether event seconds never decrease.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.events.windows(2).all(|w| w[0].second <= w[1].second)
    }

    /// Save the replay as a versioned binary archive.
    pub fn save_archive<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = encode_archive(self)?;
        let path = path.as_ref();
        std::fs::write(path, bytes).map_err(|source| TimelineError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// On-disk wrapper carrying the format version.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayArchive {
    version: u32,
    replay: Replay,
}

/// Serialize a replay into archive bytes.
pub fn encode_archive(replay: &Replay) -> Result<Vec<u8>> {
    let archive = ReplayArchive {
        version: ARCHIVE_VERSION,
        replay: replay.clone(),
    };
    bincode::serialize(&archive).map_err(|e| TimelineError::Encode {
        message: format!("Failed to serialize replay archive: {e}"),
    })
}

/// Source of decoded replays.
pub trait ReplayDecoder {
    /// Short name of the format, used in error messages.
    fn format(&self) -> &'static str;

    /// Decode a complete replay from raw bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Replay>;
}

/// Versioned bincode archive written by [`Replay::save_archive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveDecoder;

impl ReplayDecoder for ArchiveDecoder {
    fn format(&self) -> &'static str {
        "archive"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Replay> {
        let archive: ReplayArchive =
            bincode::deserialize(bytes).map_err(|e| TimelineError::Decode {
                path: String::new(),
                format: self.format(),
                message: e.to_string(),
            })?;

        if archive.version != ARCHIVE_VERSION {
            return Err(TimelineError::VersionMismatch {
                expected: ARCHIVE_VERSION,
                found: archive.version,
            });
        }

        Ok(archive.replay)
    }
}

/// Pre-decoded replay as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ReplayDecoder for JsonDecoder {
    fn format(&self) -> &'static str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Replay> {
        serde_json::from_slice(bytes).map_err(|e| TimelineError::Decode {
            path: String::new(),
            format: self.format(),
            message: e.to_string(),
        })
    }
}

/// Pre-decoded replay as RON.
#[derive(Debug, Clone, Copy, Default)]
pub struct RonDecoder;

impl ReplayDecoder for RonDecoder {
    fn format(&self) -> &'static str {
        "ron"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Replay> {
        let text = std::str::from_utf8(bytes).map_err(|e| TimelineError::Decode {
            path: String::new(),
            format: self.format(),
            message: e.to_string(),
        })?;
        ron::from_str(text).map_err(|e| TimelineError::Decode {
            path: String::new(),
            format: self.format(),
            message: e.to_string(),
        })
    }
}

/// Pick a decoder from the file extension. Unknown extensions are archives.
#[must_use]
pub fn decoder_for(path: &Path) -> Box<dyn ReplayDecoder> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Box::new(JsonDecoder),
        Some("ron") => Box::new(RonDecoder),
        _ => Box::new(ArchiveDecoder),
    }
}

/// Read and decode a replay file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Replay> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| TimelineError::Io {
        path: label.clone(),
        source,
    })?;

    let decoder = decoder_for(path);
    tracing::debug!(path = %label, format = decoder.format(), bytes = bytes.len(), "Decoding replay");
    let replay = decoder.decode(&bytes).map_err(|e| e.with_path(&label))?;

    if !replay.is_chronological() {
        tracing::warn!(path = %label, "Replay events are not in chronological order");
    }
    Ok(replay)
}
