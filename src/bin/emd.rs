//! Earth Mover's Distance CLI
//!
//! Reads two signatures as JSON arrays of `[weight, feature]` pairs, where a
//! feature is a number or an array of numbers, and prints the solution as JSON.
//!
//! ```text
//! emd lhs.json rhs.json --metric manhattan --flows
//! ```

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use earthmover::*;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compute the Earth Mover's Distance between two signatures", long_about = None)]
struct Args {
    /// Source signature (JSON)
    #[arg(required = true)]
    lhs: PathBuf,
    /// Target signature (JSON)
    #[arg(required = true)]
    rhs: PathBuf,
    /// Ground distance between features
    #[arg(short, long, value_enum, default_value_t = Metric::Euclidean)]
    metric: Metric,
    /// Maximum simplex pivots (scales with problem size if omitted)
    #[arg(short, long)]
    iterations: Option<usize>,
    /// Include the flow matrix in the output
    #[arg(short, long)]
    flows: bool,
    /// Report a truncated solve instead of failing
    #[arg(short, long)]
    partial: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Metric {
    Euclidean,
    Manhattan,
    Chebyshev,
}

/// scalars are promoted to one-dimensional vectors
#[derive(Deserialize)]
#[serde(untagged)]
enum Point {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        match point {
            Point::Scalar(x) => vec![x],
            Point::Vector(x) => x,
        }
    }
}

fn read(path: &Path) -> anyhow::Result<Signature<Vec<f64>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let points = serde_json::from_str::<Vec<(Mass, Point)>>(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(points.into_iter().map(|(w, x)| (w, x.into())).collect())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });
    let ref p = read(&args.lhs)?;
    let ref q = read(&args.rhs)?;
    let settings = Settings {
        iterations: args.iterations,
        flows: args.flows,
        partial: args.partial,
    };
    log::info!("{:<32}{} x {}", "comparing signatures", p.len(), q.len());
    let solution = match args.metric {
        Metric::Euclidean => emd(p, q, &Euclidean, &settings),
        Metric::Manhattan => emd(p, q, &Manhattan, &settings),
        Metric::Chebyshev => emd(p, q, &Chebyshev, &settings),
    }?;
    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}
