// crates/scramgen-core/src/generator.rs

//! Constrained rejection sampler: draw a candidate move, then append it,
//! merge it into the tail, cancel the tail, or discard it and redraw.
//!
//! Only appends count toward the requested length. Cancellation shortens the
//! sequence and the loop continues against the new tail (or unconstrained if
//! the sequence emptied). Termination holds with probability 1: with three
//! orthogonal axes there is always at least one face that is neither the
//! tail's face nor on the tail's axis, so the expected redraw count per step
//! is O(1).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combiner::{adjacency, AdjacencyVerdict};
use crate::error::ScrambleError;
use crate::types::{Face, Move, BASE_FACES, ROTATIONS, WIDE_FACES};

/// Options controlling the active move alphabet.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrambleOptions {
    /// Also draw the six wide pairs (`l r u d f b`). Off by default.
    pub wide_moves: bool,
}

impl ScrambleOptions {
    /// The face alphabet selected by these options.
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &'static [Face] {
        if self.wide_moves {
            &WIDE_FACES
        } else {
            &BASE_FACES
        }
    }
}

/// A finalized scramble: an ordered, read-only sequence of moves.
///
/// Guarantees, for every generated value:
/// - adjacent moves never share a face or an axis,
/// - every rotation is non-identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scramble {
    moves: Vec<Move>,
}

impl Scramble {
    /// Number of moves.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` for an empty sequence (never produced by generation).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves as an ordered slice.
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

impl IntoIterator for Scramble {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scramble {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// What happened to one candidate draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Appended as a new tail move; the only outcome that makes progress.
    Appended,
    /// Same face as the tail, net non-identity: tail rotation replaced.
    Merged,
    /// Same face as the tail, net identity: tail deleted.
    Cancelled,
    /// Same axis as the tail but a different face: discarded.
    Rejected,
}

/// Apply one candidate draw to the sequence under construction.
///
/// This is the deterministic core of the sampler, split out so a scripted
/// sequence of raw draws reproduces a scramble exactly.
pub fn apply_candidate(moves: &mut Vec<Move>, candidate: Move) -> StepOutcome {
    let Some(tail) = moves.last_mut() else {
        // Empty sequence: the first move (or a fresh start after a full
        // cancellation) is unconstrained.
        moves.push(candidate);
        return StepOutcome::Appended;
    };

    match adjacency(*tail, candidate) {
        AdjacencyVerdict::SameAxis => StepOutcome::Rejected,
        AdjacencyVerdict::SameFace => match tail.rotation.compose(candidate.rotation) {
            Some(rotation) => {
                tail.rotation = rotation;
                StepOutcome::Merged
            }
            None => {
                moves.pop();
                StepOutcome::Cancelled
            }
        },
        AdjacencyVerdict::Independent => {
            moves.push(candidate);
            StepOutcome::Appended
        }
    }
}

/// Draw a uniformly random move from the given alphabet.
fn draw_move<R: Rng + ?Sized>(alphabet: &[Face], rng: &mut R) -> Move {
    let face = alphabet[rng.random_range(0..alphabet.len())];
    let rotation = ROTATIONS[rng.random_range(0..ROTATIONS.len())];
    Move::new(face, rotation)
}

/// Generate a scramble of exactly `length` moves using the supplied RNG.
///
/// The caller owns the random source, so a seeded `StdRng` reproduces the
/// same scramble on every run (useful for regression tests and `--seed`).
pub fn generate_with_rng<R: Rng + ?Sized>(
    length: usize,
    options: &ScrambleOptions,
    rng: &mut R,
) -> Result<Scramble, ScrambleError> {
    if length == 0 {
        return Err(ScrambleError::InvalidLength);
    }

    let alphabet = options.alphabet();
    let mut moves = Vec::with_capacity(length);

    while moves.len() < length {
        let candidate = draw_move(alphabet, rng);
        apply_candidate(&mut moves, candidate);
    }

    Ok(Scramble { moves })
}

/// Generate a scramble of exactly `length` moves using the thread-local RNG.
pub fn generate(length: usize, options: &ScrambleOptions) -> Result<Scramble, ScrambleError> {
    generate_with_rng(length, options, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_with_rng(0, &ScrambleOptions::default(), &mut rng),
            Err(ScrambleError::InvalidLength)
        );
    }

    #[test]
    fn single_move_scramble() {
        let mut rng = StdRng::seed_from_u64(7);
        let scramble = generate_with_rng(1, &ScrambleOptions::default(), &mut rng)
            .unwrap_or_else(|e| panic!("length 1 must succeed: {e}"));
        assert_eq!(scramble.len(), 1);
    }

    #[test]
    fn cancellation_deletes_the_tail() {
        // R then R' nets to nothing; the sequence must shrink, not keep a
        // zero-rotation move.
        let mut moves = vec![Move::new(Face::Right, Rotation::Clockwise)];
        let outcome =
            apply_candidate(&mut moves, Move::new(Face::Right, Rotation::Counterclockwise));
        assert_eq!(outcome, StepOutcome::Cancelled);
        assert!(moves.is_empty());

        // After a full cancellation the next draw is unconstrained, even on
        // the face that was just deleted.
        let outcome = apply_candidate(&mut moves, Move::new(Face::Right, Rotation::Double));
        assert_eq!(outcome, StepOutcome::Appended);
        assert_eq!(moves, vec![Move::new(Face::Right, Rotation::Double)]);
    }

    #[test]
    fn merge_replaces_the_tail_rotation_in_place() {
        let mut moves = vec![
            Move::new(Face::Up, Rotation::Double),
            Move::new(Face::Front, Rotation::Clockwise),
        ];
        let outcome = apply_candidate(&mut moves, Move::new(Face::Front, Rotation::Clockwise));
        assert_eq!(outcome, StepOutcome::Merged);
        assert_eq!(
            moves,
            vec![
                Move::new(Face::Up, Rotation::Double),
                Move::new(Face::Front, Rotation::Double),
            ]
        );
    }

    #[test]
    fn same_axis_candidates_are_rejected_without_mutation() {
        let mut moves = vec![Move::new(Face::Left, Rotation::Clockwise)];
        for candidate in [
            Move::new(Face::Right, Rotation::Clockwise),
            Move::new(Face::Middle, Rotation::Double),
            Move::new(Face::LeftWide, Rotation::Counterclockwise),
        ] {
            assert_eq!(apply_candidate(&mut moves, candidate), StepOutcome::Rejected);
        }
        assert_eq!(moves, vec![Move::new(Face::Left, Rotation::Clockwise)]);
    }

    #[test]
    fn merge_then_cancel_round_trip() {
        // F + F merges to F2, then F2 + F2 cancels the move entirely.
        let mut moves = vec![Move::new(Face::Front, Rotation::Clockwise)];
        assert_eq!(
            apply_candidate(&mut moves, Move::new(Face::Front, Rotation::Clockwise)),
            StepOutcome::Merged
        );
        assert_eq!(
            apply_candidate(&mut moves, Move::new(Face::Front, Rotation::Double)),
            StepOutcome::Cancelled
        );
        assert!(moves.is_empty());
    }
}
