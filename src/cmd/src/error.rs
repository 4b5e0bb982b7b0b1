use std::io;
use std::result;

use charts::ChartError;
use models::ModelError;
use query::error::QueryError;
use sampling::error::SamplingError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Query(#[from] QueryError),
    #[error("chart {0}")]
    Chart(#[from] ChartError),
    #[error("sampling {0}")]
    Sampling(#[from] SamplingError),
    #[error("model {0}")]
    Model(#[from] ModelError),
    #[error("config {0}")]
    Config(#[from] config::ConfigError),
    #[error("StdIO: {0}")]
    StdIO(#[from] io::Error),
    #[error("other: {0}")]
    Other(#[from] anyhow::Error),
}
