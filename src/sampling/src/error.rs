use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, SamplingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    #[error("InvalidSides: a die needs at least one side, got {0}")]
    InvalidSides(u32),
    #[error("SampleTooLarge: requested {requested} items from a pool of {available}")]
    SampleTooLarge { requested: usize, available: usize },
}
