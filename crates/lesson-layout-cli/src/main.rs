//! `lesson-layout` CLI — compute side-by-side columns for a day's events.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a JSON array of {id, start, end} events (stdin → stdout)
//! cat week.json | lesson-layout layout
//!
//! # From file to file, pretty-printed
//! lesson-layout layout -i week.json -o layout.json --pretty
//!
//! # Drop malformed or duplicate events instead of failing
//! lesson-layout -v layout -i week.json --lenient
//!
//! # Show which events end up in the same overlap cluster
//! lesson-layout clusters -i week.json
//! ```
//!
//! Logs go to stderr. `LESSON_LAYOUT_LOG` accepts a `tracing` filter
//! directive and overrides `-v`.

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lesson_layout::{overlap_clusters, CalendarEvent, Layout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LESSON_LAYOUT_LOG";

#[derive(Parser)]
#[command(
    name = "lesson-layout",
    version,
    about = "Lay out overlapping calendar events into side-by-side columns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the column layout for every day in the input
    Layout {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Drop malformed and duplicate events instead of failing
        #[arg(long)]
        lenient: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the overlap clusters of every day, one line per cluster
    Clusters {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout {
            input,
            output,
            lenient,
            pretty,
        } => {
            let events = read_events(input.as_deref())?;
            let layouts = layout_days(events, lenient)?;
            info!(days = layouts.len(), "layout computed");

            let rendered = if pretty {
                serde_json::to_string_pretty(&layouts)?
            } else {
                serde_json::to_string(&layouts)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Clusters { input } => {
            let events = read_events(input.as_deref())?;
            let days = lesson_layout::partition_by_day(events)
                .context("Failed to bucket events by day")?;
            for (day, events) in &days {
                for cluster in overlap_clusters(events) {
                    println!("{}: {}", day, cluster.join(", "));
                }
            }
        }
    }

    Ok(())
}

/// Bucket events per day and lay each day out, either strictly or after
/// dropping offending events.
fn layout_days(
    events: Vec<CalendarEvent<String>>,
    lenient: bool,
) -> Result<BTreeMap<NaiveDate, Layout<String>>> {
    if !lenient {
        return lesson_layout::layout_by_day(events).context("Failed to lay out events");
    }

    let days = lesson_layout::partition_by_day(events).context("Failed to bucket events by day")?;
    let mut layouts = BTreeMap::new();
    for (day, events) in days {
        let sanitized = lesson_layout::sanitize(events);
        if !sanitized.rejected.is_empty() {
            info!(%day, dropped = sanitized.rejected.len(), "dropped events");
        }
        layouts.insert(day, lesson_layout::compute_layout(&sanitized.kept));
    }
    Ok(layouts)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_events(path: Option<&str>) -> Result<Vec<CalendarEvent<String>>> {
    let json = read_input(path)?;
    let events: Vec<CalendarEvent<String>> =
        serde_json::from_str(&json).context("Failed to parse events JSON")?;
    debug!(count = events.len(), "read events");
    Ok(events)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
