pub mod chart;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod route;
pub mod table;

pub use chart::{render_line_chart, render_route};
pub use config::Config;
pub use error::{PlotError, Result};
pub use pipeline::{CHART_GROUPS, run_stats, run_weights};
pub use route::{closed_ring, load_route, scan_routes};
pub use table::{LongRecord, MAP_COLUMN, ResultTable};
