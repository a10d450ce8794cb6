//! Error types for the marshalling layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Value(#[from] smew_value::Error),

    #[error("Cannot create a vector of type ANY")]
    AnyVector,

    #[error("Row index {index} out of bounds for vector of length {len}")]
    RowOutOfBounds { index: usize, len: usize },

    #[error("Column index {0} out of range")]
    ColumnOutOfRange(usize),

    #[error("Row has {found} values but the chunk has {expected} columns")]
    RowArityMismatch { expected: usize, found: usize },

    #[error("Parameter index {0} out of range")]
    ParameterOutOfRange(usize),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Parameter \"{0}\" has not been bound")]
    UnboundParameter(String),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Result has already been taken from this pending query")]
    ResultAlreadyTaken,
}
