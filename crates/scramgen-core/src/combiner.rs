// crates/scramgen-core/src/combiner.rs

//! Pure composition rule for same-face moves, plus the adjacency verdict.
//!
//! Two consecutive turns of the same face are never shown as two notation
//! tokens; they reduce to a single net move or cancel outright. [`combine`]
//! answers that question for a (tail, candidate) pair. [`adjacency`] answers
//! the independent question of whether two moves may sit next to each other
//! at all: same-axis neighbours (a face then its opposite, or a parallel
//! slice) are forbidden even though they do not cancel algebraically.
//!
//! ## Invariants
//! - `combine` returns [`CombineResult::Independent`] exactly when the faces
//!   differ; it never inspects axes.
//! - `adjacency` returns [`AdjacencyVerdict::SameFace`] exactly when
//!   `combine` would compose; the two rules partition all face pairs.

use crate::types::{Move, Rotation};

/// Outcome of composing a candidate move onto the current tail move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineResult {
    /// Same face, net non-identity: the tail's rotation becomes this value.
    Merged(Rotation),
    /// Same face, net identity: the tail move must be deleted.
    Cancelled,
    /// Different faces: no composition applies; check [`adjacency`] instead.
    Independent,
}

/// Relationship between the tail move's face and a candidate's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjacencyVerdict {
    /// Exactly the same face: composition applies.
    SameFace,
    /// Distinct faces on the same axis: forbidden adjacency, redraw.
    SameAxis,
    /// Different axes entirely: the candidate may be appended.
    Independent,
}

/// Compose `candidate` onto `previous` when they act on the same face.
///
/// This is addition modulo four quarter turns, projected back onto the
/// representable set: `90°+90° → 180°`, `90°+270° →` cancelled, and so on.
/// Pure function of two small values; no allocation.
#[inline]
#[must_use]
pub fn combine(previous: Move, candidate: Move) -> CombineResult {
    if previous.face != candidate.face {
        return CombineResult::Independent;
    }
    match previous.rotation.compose(candidate.rotation) {
        Some(rotation) => CombineResult::Merged(rotation),
        None => CombineResult::Cancelled,
    }
}

/// Classify a candidate against the tail by face and axis.
#[inline]
#[must_use]
pub fn adjacency(previous: Move, candidate: Move) -> AdjacencyVerdict {
    if previous.face == candidate.face {
        AdjacencyVerdict::SameFace
    } else if previous.face.axis() == candidate.face.axis() {
        AdjacencyVerdict::SameAxis
    } else {
        AdjacencyVerdict::Independent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Face;

    fn mv(face: Face, rotation: Rotation) -> Move {
        Move::new(face, rotation)
    }

    #[test]
    fn composition_table_is_addition_mod_four() {
        use Rotation::{Clockwise, Counterclockwise, Double};

        let cases = [
            (Clockwise, Clockwise, CombineResult::Merged(Double)),
            (Clockwise, Double, CombineResult::Merged(Counterclockwise)),
            (Clockwise, Counterclockwise, CombineResult::Cancelled),
            (Double, Clockwise, CombineResult::Merged(Counterclockwise)),
            (Double, Double, CombineResult::Cancelled),
            (Double, Counterclockwise, CombineResult::Merged(Clockwise)),
            (Counterclockwise, Clockwise, CombineResult::Cancelled),
            (Counterclockwise, Double, CombineResult::Merged(Clockwise)),
            (Counterclockwise, Counterclockwise, CombineResult::Merged(Double)),
        ];

        for (prev, cand, expected) in cases {
            assert_eq!(
                combine(mv(Face::Front, prev), mv(Face::Front, cand)),
                expected,
                "F{prev:?} then F{cand:?}"
            );
        }
    }

    #[test]
    fn different_faces_are_independent_even_on_the_same_axis() {
        let prev = mv(Face::Left, Rotation::Clockwise);
        let cand = mv(Face::Right, Rotation::Counterclockwise);
        // `combine` only ever looks at face identity.
        assert_eq!(combine(prev, cand), CombineResult::Independent);
        assert_eq!(adjacency(prev, cand), AdjacencyVerdict::SameAxis);
    }

    #[test]
    fn adjacency_partitions_face_pairs() {
        let up = mv(Face::Up, Rotation::Double);
        assert_eq!(
            adjacency(up, mv(Face::Up, Rotation::Clockwise)),
            AdjacencyVerdict::SameFace
        );
        assert_eq!(
            adjacency(up, mv(Face::Equator, Rotation::Clockwise)),
            AdjacencyVerdict::SameAxis
        );
        // A wide pair shares its base face's axis.
        assert_eq!(
            adjacency(up, mv(Face::DownWide, Rotation::Clockwise)),
            AdjacencyVerdict::SameAxis
        );
        assert_eq!(
            adjacency(up, mv(Face::Front, Rotation::Clockwise)),
            AdjacencyVerdict::Independent
        );
    }
}
