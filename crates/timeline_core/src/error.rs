//! Error types for replay decoding and timeline analysis.

use thiserror::Error;

/// Result type alias using [`TimelineError`].
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Top-level error type for everything that can fail around an analysis run.
///
/// Missing cost entries and unknown player ids are not errors; they fall
/// back to defaults at the point of lookup.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Failed to read or write a file.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid or supported replay.
    #[error("Failed to decode {format} replay '{path}': {message}")]
    Decode {
        /// Path (or other label) of the input.
        path: String,
        /// Decoder that rejected the input.
        format: &'static str,
        /// Error message from the decoder.
        message: String,
    },

    /// Replay archive written by an incompatible version.
    #[error("Replay archive version mismatch: expected {expected}, got {found}")]
    VersionMismatch {
        /// Version this build understands.
        expected: u32,
        /// Version found in the archive.
        found: u32,
    },

    /// Failed to parse an analysis config file.
    #[error("Failed to parse config '{path}': {message}")]
    Config {
        /// Path to the config file.
        path: String,
        /// Error message.
        message: String,
    },

    /// Failed to encode a replay archive or output table.
    #[error("Failed to encode output: {message}")]
    Encode {
        /// Error message.
        message: String,
    },
}

impl TimelineError {
    /// Attach a path to a decode error produced without one.
    #[must_use]
    pub fn with_path(self, label: &str) -> Self {
        match self {
            Self::Decode {
                format, message, ..
            } => Self::Decode {
                path: label.to_string(),
                format,
                message,
            },
            other => other,
        }
    }
}
