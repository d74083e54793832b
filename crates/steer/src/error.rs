//! Steering error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteerError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("agent {0} is already registered")]
    DuplicateAgent(u64),
}

pub type SteerResult<T> = Result<T, SteerError>;

pub(crate) fn require_positive(name: &'static str, value: f32) -> SteerResult<()> {
    if !value.is_finite() {
        return Err(SteerError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SteerError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> SteerResult<()> {
    if !value.is_finite() {
        return Err(SteerError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(SteerError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
