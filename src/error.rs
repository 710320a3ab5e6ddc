//! Fatal errors detected by the generator itself.
//! Anything raised here terminates the run before output is written.
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub enum GeneratorError {
    /// Setting must be a non-negative integer.
    NegativeValue(String, i64),

    /// Log level not recognised.
    InvalidLogLevel(String),
}

impl Error for GeneratorError {}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use GeneratorError::*;
        match *self {
            NegativeValue(ref key, value) => {
                write!(f, "{} must be non-negative, got {}", key, value)
            }
            InvalidLogLevel(ref level) => write!(f, "log level not recognised: {}", level),
        }
    }
}
