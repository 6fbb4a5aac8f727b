//! Errors raised while configuring a picker.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("range bound must be finite, got {0}")]
    NonFiniteBound(f64),
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("a picker needs at least one step")]
    ZeroSteps,
}

pub type Result<T, E = PickerError> = std::result::Result<T, E>;
