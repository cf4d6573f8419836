//! Replay timeline command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Write replay_events.txt, population.json and income.json
//! cargo run -p timeline_cli -- parse match.SC2Replay --output-dir out/
//!
//! # Print the timeline as well
//! cargo run -p timeline_cli -- parse match.json --print
//!
//! # Convert a pre-decoded JSON/RON replay into the binary archive format
//! cargo run -p timeline_cli -- pack match.json match.SC2Replay
//! ```
//!
//! Logs go to stderr; `RUST_LOG` refines the level set by `--verbose`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timeline_cli::output::write_outputs;
use timeline_core::config::AnalysisConfig;
use timeline_core::error::Result;
use timeline_core::replay::decode_file;
use timeline_core::TimelineProcessor;

#[derive(Parser)]
#[command(name = "replay-timeline")]
#[command(about = "Turn an RTS replay into a readable match timeline")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one replay and write the timeline and chart tables
    Parse {
        /// Replay file (.json, .ron, or binary archive)
        file: PathBuf,

        /// Directory for output files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// RON file overriding the analysis settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also print the timeline to stdout
        #[arg(long)]
        print: bool,
    },

    /// Convert a JSON/RON replay into the binary archive format
    Pack {
        /// Input replay (.json or .ron)
        input: PathBuf,

        /// Output archive path
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // RUST_LOG directives win over the --verbose default
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::from_level(log_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Parse {
            file,
            output_dir,
            config,
            print,
        } => cmd_parse(&file, &output_dir, config, print),
        Commands::Pack { input, output } => cmd_pack(&input, &output),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Decode, analyze and write outputs for one replay.
fn cmd_parse(
    file: &std::path::Path,
    output_dir: &std::path::Path,
    config: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    tracing::debug!(?config, "Analysis configuration");

    let replay = decode_file(file)?;
    tracing::info!(
        path = %file.display(),
        map = %replay.map_name,
        players = replay.players.len(),
        events = replay.events.len(),
        "Replay decoded"
    );

    let analysis = TimelineProcessor::new(&replay, config).run();
    let paths = write_outputs(&analysis, output_dir)?;

    if print {
        println!("{}", analysis.text());
    }

    tracing::info!(
        timeline = %paths.timeline.display(),
        units_produced = analysis.stats.units_produced,
        units_lost = analysis.stats.units_lost,
        major_fights = analysis.stats.major_fights,
        "Timeline written"
    );
    Ok(())
}

/// Re-encode a pre-decoded replay as a binary archive.
fn cmd_pack(input: &std::path::Path, output: &std::path::Path) -> Result<()> {
    let replay = decode_file(input)?;
    replay.save_archive(output)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        events = replay.events.len(),
        "Replay packed"
    );
    Ok(())
}
