//! armeasure CLI - replay recorded measurement sessions
//!
//! Reads a JSON event recording, runs it through a measurement session and
//! prints the measured lengths, areas and fitted diagram.

use anyhow::{Context, Result};
use armeasure::{
    Diagram, LengthUnit, MeasureConfig, MeasurementReport, Path, Recording, ReplaySummary,
    Session, Viewport,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "armeasure")]
#[command(about = "Snap-assisted distance and area measurement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session and report every measured path
    Replay {
        /// JSON recording of probe, commit, mode and finish events
        recording: PathBuf,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Label unit (m, cm, mm, in), overrides the configuration
        #[arg(short, long)]
        unit: Option<LengthUnit>,
        /// Diagram viewport width
        #[arg(long, default_value_t = 400.0)]
        width: f32,
        /// Diagram viewport height
        #[arg(long, default_value_t = 800.0)]
        height: f32,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a length given in meters
    Format {
        /// Length in meters
        meters: f32,
        /// Unit (m, cm, mm, in); all units when omitted
        #[arg(short, long)]
        unit: Option<LengthUnit>,
    },
    /// Print the default configuration as TOML
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            recording,
            config,
            unit,
            width,
            height,
            json,
        } => {
            replay(&recording, config, unit, width, height, json)?;
        }
        Commands::Format { meters, unit } => match unit {
            Some(unit) => println!("{}", unit.format(meters)),
            None => {
                for unit in LengthUnit::ALL {
                    println!("{:>3}  {}", unit.symbol(), unit.format(meters));
                }
            }
        },
        Commands::Config => {
            print!("{}", MeasureConfig::default().to_toml_string()?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct PathOutput {
    report: MeasurementReport,
    diagram: Option<Diagram>,
}

#[derive(Serialize)]
struct ReplayOutput {
    frames: usize,
    skipped_frames: usize,
    snaps: usize,
    commits: usize,
    ignored_commits: usize,
    paths: Vec<PathOutput>,
}

fn replay(
    recording: &std::path::Path,
    config: Option<PathBuf>,
    unit: Option<LengthUnit>,
    width: f32,
    height: f32,
    json: bool,
) -> Result<()> {
    let mut config = match config {
        Some(path) => MeasureConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MeasureConfig::default(),
    };
    if let Some(unit) = unit {
        config.unit = unit;
    }

    let events = Recording::load(recording)
        .with_context(|| format!("reading recording {}", recording.display()))?;
    info!(events = events.events.len(), "replaying {}", recording.display());

    let mut session = Session::new(config);
    let summary = events.replay(&mut session);
    let viewport = session.viewport(width, height);

    let outputs: Vec<PathOutput> = summary
        .paths
        .iter()
        .map(|path| path_output(path, &session, &viewport))
        .collect();

    if json {
        let out = replay_output(&summary, outputs);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("recording: {}", recording.display());
    println!(
        "  frames: {} ({} without hit), snaps: {}, commits: {} ({} ignored)",
        summary.frames,
        summary.skipped_frames,
        summary.snaps,
        summary.commits,
        summary.ignored_commits
    );
    for (i, out) in outputs.iter().enumerate() {
        println!("\npath {}: {}", i + 1, out.report);
        match &out.diagram {
            Some(d) => println!(
                "  diagram: {} edge(s), scale {:.1}, {:.0} x {:.0}",
                d.edges.len(),
                d.scale,
                d.bounds.width(),
                d.bounds.height()
            ),
            None => println!("  diagram: none"),
        }
    }

    Ok(())
}

fn path_output(path: &Path, session: &Session, viewport: &Viewport) -> PathOutput {
    PathOutput {
        report: session.report_of(path),
        diagram: session.diagram_of(path, viewport, 1.0),
    }
}

fn replay_output(summary: &ReplaySummary, paths: Vec<PathOutput>) -> ReplayOutput {
    ReplayOutput {
        frames: summary.frames,
        skipped_frames: summary.skipped_frames,
        snaps: summary.snaps,
        commits: summary.commits,
        ignored_commits: summary.ignored_commits,
        paths,
    }
}
