use std::error::Error as StdError;
use std::io;
use std::result;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type Result<T> = result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("drawing {0}")]
    Drawing(String),
    #[error("font unavailable: {0}")]
    FontUnavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io {0}")]
    StdIO(#[from] io::Error),
}

impl<E: StdError + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}
