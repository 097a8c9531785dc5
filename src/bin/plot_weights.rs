use anyhow::Result;
use log::info;

use route_plots::{Config, pipeline};

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::from_env()?;
    info!(
        "Rendering weight chart from {} and route plots from {}",
        config.weights_csv.display(),
        config.routes_dir.display()
    );

    let route_count = pipeline::run_weights(&config)?;
    info!("Done: weights.png plus {route_count} route image(s)");

    Ok(())
}
