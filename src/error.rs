//! Crate error type.

use std::fmt;

/// Errors produced while mapping symbols or validating configuration.
///
/// Every variant reflects a configuration or programming mistake, never a
/// transient condition, so a render that hits one simply fails before any
/// output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scale-degree symbol outside I-VII (in either case).
    InvalidDegree(String),
    /// A waveform name outside the fixed set of four shapes.
    UnsupportedWaveform(String),
    /// An enumerated option was given a value outside its set.
    InvalidConfiguration {
        option: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDegree(symbol) => write!(f, "invalid scale degree '{symbol}'"),
            Error::UnsupportedWaveform(name) => write!(f, "unsupported waveform '{name}'"),
            Error::InvalidConfiguration { option, value } => {
                write!(f, "invalid {option} '{value}'")
            }
        }
    }
}

impl std::error::Error for Error {}
