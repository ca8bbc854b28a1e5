use thiserror::Error;

/// Errors raised while reading chart data.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The chart's overall structure is missing or unusable.
    #[error("chart could not be loaded: {0}")]
    Format(String),

    /// A single field of a single entry could not be used.
    #[error("invalid {field} value '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("unknown chart kind '{0}', expected json or txt")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
