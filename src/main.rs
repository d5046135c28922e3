use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use delivery_planner::{DeliveryOptimizer, DeliveryRequest, SolveOptions, Strategy};

/// Compute a pickup/delivery route for one courier.
///
/// Reads a JSON delivery request and prints the timed route as JSON.
/// `DELIVERY_SPEED_KMH` and `DELIVERY_STRATEGY` set defaults; flags win.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Request file; stdin when omitted
    input: Option<PathBuf>,

    /// `eft` (greedy) or `tsp` (exhaustive)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Courier speed in km/h
    #[arg(long)]
    speed_kmh: Option<f64>,

    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut options = SolveOptions::from_env()?;
    if let Some(strategy) = cli.strategy {
        options = options.with_strategy(strategy);
    }
    if let Some(speed) = cli.speed_kmh {
        options = options.with_speed(speed)?;
    }

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading request from stdin")?;
            buffer
        }
    };

    let request: DeliveryRequest = serde_json::from_str(&raw).context("parsing delivery request")?;
    info!(
        orders = request.orders.len(),
        strategy = %options.strategy,
        speed_kmh = options.speed_kmh,
        "optimizing route"
    );

    let result = DeliveryOptimizer::from_options(&options).optimize_validated(&request)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
