use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, CleanError>;
