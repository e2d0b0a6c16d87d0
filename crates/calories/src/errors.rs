use thiserror::Error;

/// Failures raised when an input violates a physical or geographic precondition.
///
/// Every variant carries the offending value so callers can report exactly
/// which argument was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalorieError {
    #[error("Invalid coordinate: {field} = {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CalorieError {
    fn from(e: serde_json::Error) -> Self {
        CalorieError::InvalidConfig(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CalorieError>;
