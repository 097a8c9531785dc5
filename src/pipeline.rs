use crate::chart;
use crate::config::Config;
use crate::error::{PlotError, Result};
use crate::route;
use crate::table::ResultTable;

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// The three fixed chart groups of the aggregate-stats report:
/// (title, output filename, metric columns).
pub const CHART_GROUPS: [(&str, &str, &[&str]); 3] = [
    (
        "Mean Weights",
        "mean_weights.png",
        &["mst_weight", "dfs_mean", "random_mean", "mod_random_mean"],
    ),
    (
        "Steps",
        "steps.png",
        &["dfs_steps", "random_steps", "mod_random_steps"],
    ),
    (
        "Min Weight",
        "min_weight.png",
        &["mst_weight", "dfs_min", "random_min", "mod_random_min"],
    ),
];

/// Pipeline A: weight chart plus one polygon plot per route blob.
///
/// Renders `weights.png` from the weights table, then scans the routes
/// directory and renders each `.bin` file. A corrupt or degenerate route file
/// is logged and skipped; the rest of the batch still renders.
///
/// Returns the number of route images written.
pub fn run_weights(config: &Config) -> Result<usize> {
    ensure_plots_dir(&config.plots_dir)?;

    let mut table = ResultTable::from_path(&config.weights_csv)?;
    debug!(
        "Loaded {} rows, {} metric columns from {}",
        table.len(),
        table.columns().len(),
        config.weights_csv.display()
    );
    table.sort_by_map();

    let out = config.plots_dir.join("weights.png");
    chart::render_line_chart(&table.melt(), "Weights", &out)?;
    info!("Wrote {}", out.display());

    let mut rendered = 0;
    for path in route::scan_routes(&config.routes_dir)? {
        match render_one_route(&path, &config.plots_dir) {
            Ok(out) => {
                info!("Wrote {}", out.display());
                rendered += 1;
            }
            Err(e) => warn!("Skipping route file {}: {e}", path.display()),
        }
    }
    Ok(rendered)
}

fn render_one_route(path: &Path, plots_dir: &Path) -> Result<PathBuf> {
    let points = route::load_route(path)?;
    let ring = route::closed_ring(&points);
    let stem = route::route_stem(path);
    let out = route::output_path(plots_dir, &stem);
    chart::render_route(&ring, &stem, &out)?;
    Ok(out)
}

/// Pipeline B: three fixed-group line charts from the aggregate-stats table.
///
/// A missing column aborts before that group's file is created, so a failed
/// group never leaves a partial image behind.
pub fn run_stats(config: &Config) -> Result<()> {
    ensure_plots_dir(&config.plots_dir)?;

    let mut table = ResultTable::from_path(&config.stats_csv)?;
    debug!(
        "Loaded {} rows, {} metric columns from {}",
        table.len(),
        table.columns().len(),
        config.stats_csv.display()
    );
    table.sort_by_map();

    for (title, filename, columns) in CHART_GROUPS {
        let subset = table.select(columns)?;
        let out = config.plots_dir.join(filename);
        chart::render_line_chart(&subset.melt(), title, &out)?;
        info!("Wrote {}", out.display());
    }
    Ok(())
}

fn ensure_plots_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| PlotError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}
