use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The endpoints are stored as strings so the error stays independent of the
    /// coordinate type.
    #[error("Invalid interval: low ({low}) is greater than high ({high})")]
    InvalidInterval { low: String, high: String },
}

pub type Result<T> = std::result::Result<T, IntervalError>;
