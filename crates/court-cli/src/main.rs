//! `courtsim` — run the shared-court simulation from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use court_core::{RunConfig, SimParams, StopRule};
use court_output::{CsvWriter, RunReport, SnapshotRow, render_history};
use court_sim::{NoopObserver, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "courtsim",
    about = "Discrete-event simulation of a single court shared by handball, \
             football and basketball teams",
    long_about = None
)]
#[command(group(ArgGroup::new("stop").required(true).args(["minutes", "iterations"])))]
struct Cli {
    /// Stop once the next event would pass this many simulated minutes
    #[arg(long, value_name = "MIN")]
    minutes: Option<f64>,

    /// Stop after exactly this many events
    #[arg(long, value_name = "N")]
    iterations: Option<u64>,

    /// RNG seed; omit for a non-reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of leading history rows to print (the last two always show)
    #[arg(long, value_name = "ROWS", default_value_t = 10)]
    show: usize,

    /// Export the full history as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        // clap's group guarantees exactly one of the two is set.
        let stop = match (self.minutes, self.iterations) {
            (Some(limit_min), None) => StopRule::SimTime { limit_min },
            (None, Some(limit)) => StopRule::Iterations { limit },
            _ => unreachable!("clap enforces exactly one stop flag"),
        };
        RunConfig { stop, seed: self.seed }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.run_config();

    let mut sim = Simulation::from_config(SimParams::default(), config)
        .context("invalid run configuration")?;
    sim.run(&mut NoopObserver);

    print!("{}", render_history(sim.history(), cli.show));
    println!();
    print!("{}", RunReport::new(sim.summary()));

    if let Some(path) = &cli.csv {
        let mut writer = CsvWriter::new(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        writer.write_rows(&SnapshotRow::from_history(sim.history()))?;
        writer.finish()?;
        info!(path = %path.display(), rows = sim.history().len(), "history exported");
    }

    Ok(())
}
