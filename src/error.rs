use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV header: {0}")]
    Header(String),

    #[error("Column not found: {name}")]
    MissingColumn { name: String },

    #[error("Invalid value at row {row}, column {column}: {value}")]
    ValueParse {
        row: usize,
        column: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Failed to decode route blob: {0}")]
    Pickle(#[from] serde_pickle::Error),

    #[error("Bad route file {path}: {message}")]
    Route { path: PathBuf, message: String },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Chart rendering failed: {0}")]
    Render(String),
}
