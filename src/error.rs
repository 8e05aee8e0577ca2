use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointSetError {
    /// An argument could not be ordered or measured, e.g. a NaN coordinate or an inverted
    /// rectangle. The set is left untouched.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PointSetError>;
