// crates/scramgen-core/src/notation.rs

//! Canonical scramble notation.
//!
//! One letter per face — uppercase for single layers, lowercase for wide
//! pairs — optionally followed by `2` (half turn) or `'` (reverse quarter
//! turn). A plain quarter turn has no suffix. Moves are joined with single
//! spaces.

use std::fmt;

use crate::generator::Scramble;
use crate::types::{Face, Move, Rotation};

impl Face {
    /// Canonical notation letter for this face.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Middle => 'M',
            Self::Right => 'R',
            Self::Up => 'U',
            Self::Equator => 'E',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Standing => 'S',
            Self::Back => 'B',
            Self::LeftWide => 'l',
            Self::RightWide => 'r',
            Self::UpWide => 'u',
            Self::DownWide => 'd',
            Self::FrontWide => 'f',
            Self::BackWide => 'b',
        }
    }
}

impl Rotation {
    /// Notation suffix, if any: `None` for a plain quarter turn.
    #[inline]
    #[must_use]
    pub const fn suffix(self) -> Option<char> {
        match self {
            Self::Clockwise => None,
            Self::Double => Some('2'),
            Self::Counterclockwise => Some('\''),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.letter())?;
        if let Some(suffix) = self.rotation.suffix() {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, mv) in self.moves().iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
