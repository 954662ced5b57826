use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid PWM format: {0}")]
    InvalidPwm(String),

    #[error("Invalid PWM value on line {line}: {token:?} is not a number")]
    InvalidValue { line: usize, token: String },

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    #[error(
        "Degenerate score input at motif column {column}: base {base:?} has p = {p}, q = {q} \
         (probabilities must be positive)"
    )]
    DegenerateScore {
        column: usize,
        base: char,
        p: f64,
        q: f64,
    },

    #[error("Data error: {0}")]
    DataError(String),
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidPwm error
    pub fn invalid_pwm(message: impl Into<String>) -> Self {
        MotifError::InvalidPwm(message.into())
    }

    /// Create a new InvalidParameter error
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        MotifError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for MotifError {
    fn from(e: polars::prelude::PolarsError) -> Self {
        MotifError::DataError(e.to_string())
    }
}
