mod aggregate;
mod analysis;
mod config;
mod manager;
mod plot;
mod record;
mod report;
mod stats;
mod store;

use crate::config::Config;
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Benchmark CSV file.
    #[arg(long, default_value = "data/6000Msg.csv")]
    input: PathBuf,

    /// Directory the charts are written to.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// TOML file with chart and output settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };

    let mgr = Manager::new(&args.input, &args.out_dir, cfg);
    mgr.run_analysis()
        .context("failed to run analysis")?;

    Ok(())
}
