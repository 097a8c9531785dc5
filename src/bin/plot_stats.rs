use anyhow::Result;
use log::info;

use route_plots::{Config, pipeline};

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::from_env()?;
    info!(
        "Rendering aggregate stat charts from {}",
        config.stats_csv.display()
    );

    pipeline::run_stats(&config)?;
    info!("Done: mean_weights.png, steps.png, min_weight.png");

    Ok(())
}
