//! # Replay Timeline CLI
//!
//! Command-line front end for `timeline_core`:
//! - Decode one replay and write the timeline plus chart tables
//! - Pack pre-decoded JSON/RON replays into the binary archive format

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod output;
