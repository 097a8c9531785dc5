use crate::error::{PlotError, Result};
use std::{env, path::PathBuf};

const ENV_DATA_DIR: &str = "ROUTE_PLOTS_DATA_DIR";
const ENV_OUTPUT_DIR: &str = "ROUTE_PLOTS_OUTPUT_DIR";

/// Input and output locations for both pipelines.
///
/// Defaults match the conventional layout: `weights.csv`, `ls.csv` and
/// `routes/` next to the binary, images under `./plots`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub weights_csv: PathBuf,
    pub stats_csv: PathBuf,
    pub routes_dir: PathBuf,
    pub plots_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights_csv: PathBuf::from("weights.csv"),
            stats_csv: PathBuf::from("ls.csv"),
            routes_dir: PathBuf::from("routes"),
            plots_dir: PathBuf::from("plots"),
        }
    }
}

impl Config {
    /// Builds a config from the environment, falling back to the defaults.
    ///
    /// `ROUTE_PLOTS_DATA_DIR` relocates the two CSV files and the `routes`
    /// directory; `ROUTE_PLOTS_OUTPUT_DIR` relocates the `plots` directory.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = read_dir_var(ENV_DATA_DIR)? {
            config.weights_csv = dir.join("weights.csv");
            config.stats_csv = dir.join("ls.csv");
            config.routes_dir = dir.join("routes");
        }
        if let Some(dir) = read_dir_var(ENV_OUTPUT_DIR)? {
            config.plots_dir = dir.join("plots");
        }

        Ok(config)
    }
}

fn read_dir_var(name: &str) -> Result<Option<PathBuf>> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            let path = PathBuf::from(value);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(PlotError::InvalidConfiguration(format!(
                    "{} is not a directory: {}",
                    name,
                    path.display()
                )));
            }

            Ok(Some(path))
        }
        _ => Ok(None),
    }
}
