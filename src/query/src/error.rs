use std::io;
use std::result;

use arrow::error::ArrowError;
use thiserror::Error;

pub type Result<T> = result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("missing column {0:?}")]
    MissingColumn(String),
    #[error("csv {0}")]
    CSV(#[from] csv::Error),
    #[error("arrow {0}")]
    Arrow(#[from] ArrowError),
    #[error("io {0}")]
    StdIO(#[from] io::Error),
}
