use anyhow::Result;
use clap::Parser;
use graham::hull::{compute_hull, MIN_POINTS};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;

use points_io::{read_points, write_points};

const DEFAULT_INPUT: &str = "InputPoints.txt";

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull of a point file (Graham's scan, two-thread chains)")]
struct Cmd {
    /// Point file: a count line, then one `x y` pair per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the hull in the same format; stdout if omitted
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with a hull printed on stdout.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd.input, cmd.output)
}

fn run(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = %input.display(), output = ?output, "run");
    let points = read_points(&input)?;
    if points.len() < MIN_POINTS {
        tracing::error!(
            count = points.len(),
            "input point set must contain at least {MIN_POINTS} points"
        );
        return Ok(());
    }

    let Some(hull) = compute_hull(&points) else {
        tracing::error!(
            count = points.len(),
            "input point set must contain at least {MIN_POINTS} unique points"
        );
        return Ok(());
    };
    tracing::info!(input = points.len(), hull = hull.len(), "hull computed");
    let ring = hull.into_points();
    write_points(&ring, output.as_deref())
}
