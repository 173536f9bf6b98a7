// crates/scramgen-core/src/types.rs

//! Canonical move alphabet for the 3×3 puzzle.
//!
//! The alphabet is a fixed sum type, not a bitmask: each [`Face`] is one of
//! nine single layers or six wide pairs, and its [`Axis`] membership is a
//! total function baked into [`Face::axis`]. This removes the aliasing risk
//! of packing faces, axes, and wide combinations into overlapping bit ranges.
//!
//! The serialized forms are conservative and portable (serde).

use serde::{Deserialize, Serialize};

/// One of the three orthogonal rotation axes of the cube.
///
/// Two opposite faces and their shared middle slice belong to the same axis.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left–right axis (`L`, `M`, `R` and the wide pairs `l`, `r`).
    X,
    /// Up–down axis (`U`, `E`, `D` and the wide pairs `u`, `d`).
    Y,
    /// Front–back axis (`F`, `S`, `B` and the wide pairs `f`, `b`).
    Z,
}

/// A rotatable layer (or wide pair of adjacent layers) of the cube.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Face {
    /// Left layer (`L`).
    Left,
    /// Middle slice between left and right (`M`).
    Middle,
    /// Right layer (`R`).
    Right,
    /// Top layer (`U`).
    Up,
    /// Equator slice between top and bottom (`E`).
    Equator,
    /// Bottom layer (`D`).
    Down,
    /// Front layer (`F`).
    Front,
    /// Standing slice between front and back (`S`).
    Standing,
    /// Back layer (`B`).
    Back,
    /// Left layer together with the middle slice (`l`).
    LeftWide,
    /// Right layer together with the middle slice (`r`).
    RightWide,
    /// Top layer together with the equator slice (`u`).
    UpWide,
    /// Bottom layer together with the equator slice (`d`).
    DownWide,
    /// Front layer together with the standing slice (`f`).
    FrontWide,
    /// Back layer together with the standing slice (`b`).
    BackWide,
}

impl Face {
    /// Axis this face rotates around. Wide pairs share their base face's axis.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Middle | Self::Right | Self::LeftWide | Self::RightWide => Axis::X,
            Self::Up | Self::Equator | Self::Down | Self::UpWide | Self::DownWide => Axis::Y,
            Self::Front | Self::Standing | Self::Back | Self::FrontWide | Self::BackWide => Axis::Z,
        }
    }

    /// Returns `true` for the six wide pairs (`l r u d f b`).
    #[inline]
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(
            self,
            Self::LeftWide
                | Self::RightWide
                | Self::UpWide
                | Self::DownWide
                | Self::FrontWide
                | Self::BackWide
        )
    }
}

/// Quarter-turn amount of a move, an element of the order-4 cyclic group
/// with the identity removed.
///
/// The identity (0°) is representable only as `Option<Rotation>::None` and is
/// never stored in a [`Move`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// One quarter turn, 90° (no notation suffix).
    Clockwise,
    /// Half turn, 180° (suffix `2`).
    Double,
    /// Reverse quarter turn, 270° (suffix `'`).
    Counterclockwise,
}

impl Rotation {
    /// Number of quarter turns in `{1, 2, 3}`.
    #[inline]
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::Double => 2,
            Self::Counterclockwise => 3,
        }
    }

    /// Project a quarter-turn count back onto the representable set.
    ///
    /// `None` is the identity: a net rotation of 0° has no move token.
    #[inline]
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Self::Clockwise),
            2 => Some(Self::Double),
            3 => Some(Self::Counterclockwise),
            _ => None,
        }
    }

    /// Compose two rotations of the same face: addition modulo four quarter
    /// turns. `None` means the turns cancel to the identity.
    #[inline]
    #[must_use]
    pub const fn compose(self, other: Self) -> Option<Self> {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

/// A single finalized (or candidate) move: a face plus a non-identity rotation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Move {
    /// The layer (or wide pair) being turned.
    pub face: Face,
    /// How far it is turned; never the identity.
    pub rotation: Rotation,
}

impl Move {
    /// Construct a new `Move`.
    #[inline]
    #[must_use]
    pub const fn new(face: Face, rotation: Rotation) -> Self {
        Self { face, rotation }
    }
}

/// The nine single layers, the alphabet when wide moves are disabled.
pub const BASE_FACES: [Face; 9] = [
    Face::Left,
    Face::Middle,
    Face::Right,
    Face::Up,
    Face::Equator,
    Face::Down,
    Face::Front,
    Face::Standing,
    Face::Back,
];

/// The full fifteen-face alphabet used when wide moves are enabled.
pub const WIDE_FACES: [Face; 15] = [
    Face::Left,
    Face::Middle,
    Face::Right,
    Face::Up,
    Face::Equator,
    Face::Down,
    Face::Front,
    Face::Standing,
    Face::Back,
    Face::LeftWide,
    Face::RightWide,
    Face::UpWide,
    Face::DownWide,
    Face::FrontWide,
    Face::BackWide,
];

/// The three non-identity rotations, each drawn with equal weight.
pub const ROTATIONS: [Rotation; 3] = [
    Rotation::Clockwise,
    Rotation::Double,
    Rotation::Counterclockwise,
];
