use algokit::geom2::rand::{sample_cloud, Bounds2, CloudCfg};
use algokit::geom2::{convex_hull, Area};
use algokit::strmatch::find_occurrences_str;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

use report::{FindReport, HullReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Prefix-function search and integer convex hulls over stdin")]
struct Cmd {
    /// Raise log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Read input from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every start offset of `pattern` in `text` (input: text pattern)
    Find,
    /// Print the convex hull and its area (input: n, then n pairs x y)
    Hull,
    /// Print a random `hull` input
    Gen {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinates are drawn from [-bound, bound]
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(i64).range(0..))]
        bound: i64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cmd.action {
        Action::Find => find(cmd.input.as_deref(), cmd.json, &mut out)?,
        Action::Hull => hull(cmd.input.as_deref(), cmd.json, &mut out)?,
        Action::Gen { count, seed, bound } => gen(count, seed, bound, &mut out)?,
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn find<W: Write>(path: Option<&Path>, json: bool, out: &mut W) -> Result<()> {
    tracing::info!(path = ?path, json, "find");
    let src = input::read_source(path)?;
    let args = input::parse_find_input(&src)?;
    tracing::debug!(
        text_len = args.text.len(),
        pattern_len = args.pattern.len(),
        "find_input"
    );
    let offsets = find_occurrences_str(args.pattern, args.text)
        .with_context(|| format!("searching for {:?}", args.pattern))?;
    tracing::info!(occurrences = offsets.len(), "find_done");

    let report = FindReport {
        pattern: args.pattern.to_string(),
        text_len: args.text.chars().count(),
        offsets,
    };
    if json {
        report::write_json(out, &report)
    } else {
        report.write_text(out)
    }
}

fn hull<W: Write>(path: Option<&Path>, json: bool, out: &mut W) -> Result<()> {
    tracing::info!(path = ?path, json, "hull");
    let src = input::read_source(path)?;
    let points = input::parse_hull_input(&src)?;
    tracing::debug!(points = points.len(), "hull_input");
    let poly = convex_hull(&points)
        .with_context(|| format!("convex hull of {} points", points.len()))?;
    let area = Area::of_polygon(&poly);
    tracing::info!(
        vertices = poly.len(),
        doubled_area = area.doubled(),
        "hull_done"
    );

    let report = HullReport::new(&poly, area);
    if json {
        report::write_json(out, &report)
    } else {
        report.write_text(out)
    }
}

fn gen<W: Write>(count: usize, seed: u64, bound: i64, out: &mut W) -> Result<()> {
    tracing::info!(count, seed, bound, "gen");
    let cfg = CloudCfg {
        count,
        bounds: Bounds2::symmetric(bound),
    };
    report::write_cloud(out, &sample_cloud(cfg, seed))
}
