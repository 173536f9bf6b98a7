// crates/scramgen-core/src/error.rs

//! Crate-local error type.
//!
//! The core has exactly one failure mode: asking for a zero-length scramble.
//! Internal redraws during rejection sampling are invisible implementation
//! detail, never surfaced as errors.

use thiserror::Error;

/// Errors raised by scramble generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScrambleError {
    /// The requested length was zero; a scramble needs at least one move.
    #[error("scramble length must be at least 1")]
    InvalidLength,
}
