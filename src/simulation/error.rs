//! Error type for the simulation core

use thiserror::Error;

/// Everything the core can reject. These are configuration or usage
/// errors, never transient faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("{phase} time must be a positive number of seconds, got {value}")]
    InvalidDuration { phase: &'static str, value: f32 },

    #[error("total cycle must be positive, got {0}")]
    EmptyCycle(f32),

    #[error("elapsed time must not be negative, got {0}")]
    NegativeElapsed(f32),

    #[error("elapsed time must be finite, got {0}")]
    NonFiniteElapsed(f32),

    #[error("clock went backwards from {previous}s to {current}s")]
    ClockWentBackwards { previous: f32, current: f32 },

    #[error("tick delta must be a positive number of seconds, got {0}")]
    InvalidDelta(f32),
}
