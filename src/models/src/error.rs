use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Number served cannot be negative: {0}")]
    NegativeNumberServed(i64),
    #[error("Increment must be positive: {0}")]
    NonPositiveIncrement(i64),
}
