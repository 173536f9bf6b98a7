// crates/scramgen-core/src/lib.rs

//! scramgen-core — move alphabet, composition rule, and constrained sampler.
//!
//! This crate defines the **stable boundary** used by the scramgen CLI:
//! - the canonical move alphabet (`Face`, `Axis`, `Rotation`, `Move`),
//! - the pure same-face composition rule (`combine`, [`CombineResult`]),
//! - the constrained rejection sampler ([`generate`], [`generate_with_rng`]), and
//! - canonical notation rendering via `Display`.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use scramgen_core::{generate_with_rng, ScrambleOptions};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let scramble = generate_with_rng(20, &ScrambleOptions::default(), &mut rng)?;
//! assert_eq!(scramble.len(), 20);
//! println!("{scramble}");
//! # Ok::<(), scramgen_core::ScrambleError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

/// Pure same-face composition rule and the axis-adjacency verdict.
pub mod combiner;
/// Crate-local error type.
pub mod error;
/// Constrained sampler: draw, reject, merge, append.
pub mod generator;
/// Canonical scramble notation (face letters and rotation suffixes).
pub mod notation;
/// Canonical move alphabet shared across the workspace.
pub mod types;

// ---- Re-exports for workspace compatibility ----
pub use combiner::{adjacency, combine, AdjacencyVerdict, CombineResult};
pub use error::ScrambleError;
pub use generator::{
    apply_candidate, generate, generate_with_rng, Scramble, ScrambleOptions, StepOutcome,
};
pub use types::{Axis, Face, Move, Rotation, BASE_FACES, ROTATIONS, WIDE_FACES};
