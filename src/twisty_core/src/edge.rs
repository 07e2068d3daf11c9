//! Size-specific geometry for the two supported cubes.
//!
//! Only the U, L, F and R turns carry hand-written index tables. B and D
//! turns are conjugates of U and F by whole-cube rotations, see
//! [`Cube::turn`](crate::Cube::turn).

use crate::{CubeError, Face};
use enum_dispatch::enum_dispatch;

/// A run of stickers on one face that a face turn carries along.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    pub face: Face,
    pub indices: &'static [usize],
}

/// The four strips moved by a clockwise face turn. Strip `k` receives the
/// stickers of strip `k + 1` (mod 4), pairing indices position by position.
/// An anticlockwise turn runs the cycle the other way.
pub type TurnCycle = [Strip; 4];

/// Turn cycles for the faces that have their own tables.
#[derive(Debug)]
pub struct TurnCycles {
    pub u: TurnCycle,
    pub l: TurnCycle,
    pub f: TurnCycle,
    pub r: TurnCycle,
}

/// The capabilities that differ between cube sizes.
#[enum_dispatch]
pub trait EdgeGeometry {
    /// Number of stickers along one edge of a face.
    fn edge_length(&self) -> usize;

    /// The sticker inspected to decide which way a face is painted. This is
    /// the true centre on odd cubes and a fixed corner on even ones.
    fn face_centre_index(&self) -> usize;

    fn turn_cycles(&self) -> &'static TurnCycles;

    fn face_len(&self) -> usize {
        self.edge_length() * self.edge_length()
    }

    fn sticker_count(&self) -> usize {
        6 * self.face_len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeTwo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeThree;

/// The edge length of a cube.
#[enum_dispatch(EdgeGeometry)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    EdgeTwo,
    EdgeThree,
}

impl Edge {
    pub const TWO: Self = Edge::EdgeTwo(EdgeTwo);
    pub const THREE: Self = Edge::EdgeThree(EdgeThree);

    /// The edge whose serialized cube has exactly `len` stickers.
    #[must_use]
    pub fn from_sticker_count(len: usize) -> Option<Self> {
        [Self::TWO, Self::THREE]
            .into_iter()
            .find(|edge| edge.sticker_count() == len)
    }
}

/// The standard 3x3x3.
impl Default for Edge {
    fn default() -> Self {
        Self::THREE
    }
}

impl TryFrom<usize> for Edge {
    type Error = CubeError;

    fn try_from(edge_length: usize) -> Result<Self, Self::Error> {
        match edge_length {
            2 => Ok(Self::TWO),
            3 => Ok(Self::THREE),
            _ => Err(CubeError::UnsupportedSize(edge_length)),
        }
    }
}

const fn strip(face: Face, indices: &'static [usize]) -> Strip {
    Strip { face, indices }
}

static TWO_CYCLES: TurnCycles = TurnCycles {
    u: [
        strip(Face::L, &[0, 1]),
        strip(Face::F, &[0, 1]),
        strip(Face::R, &[0, 1]),
        strip(Face::B, &[0, 1]),
    ],
    l: [
        strip(Face::F, &[0, 2]),
        strip(Face::U, &[0, 2]),
        strip(Face::B, &[3, 1]),
        strip(Face::D, &[0, 2]),
    ],
    f: [
        strip(Face::L, &[1, 3]),
        strip(Face::D, &[0, 1]),
        strip(Face::R, &[2, 0]),
        strip(Face::U, &[3, 2]),
    ],
    r: [
        strip(Face::F, &[1, 3]),
        strip(Face::D, &[1, 3]),
        strip(Face::B, &[2, 0]),
        strip(Face::U, &[1, 3]),
    ],
};

static THREE_CYCLES: TurnCycles = TurnCycles {
    u: [
        strip(Face::L, &[0, 1, 2]),
        strip(Face::F, &[0, 1, 2]),
        strip(Face::R, &[0, 1, 2]),
        strip(Face::B, &[0, 1, 2]),
    ],
    l: [
        strip(Face::F, &[0, 3, 6]),
        strip(Face::U, &[0, 3, 6]),
        strip(Face::B, &[8, 5, 2]),
        strip(Face::D, &[0, 3, 6]),
    ],
    f: [
        strip(Face::L, &[2, 5, 8]),
        strip(Face::D, &[0, 1, 2]),
        strip(Face::R, &[6, 3, 0]),
        strip(Face::U, &[8, 7, 6]),
    ],
    r: [
        strip(Face::F, &[2, 5, 8]),
        strip(Face::D, &[2, 5, 8]),
        strip(Face::B, &[6, 3, 0]),
        strip(Face::U, &[2, 5, 8]),
    ],
};

impl EdgeGeometry for EdgeTwo {
    fn edge_length(&self) -> usize {
        2
    }

    fn face_centre_index(&self) -> usize {
        0
    }

    fn turn_cycles(&self) -> &'static TurnCycles {
        &TWO_CYCLES
    }
}

impl EdgeGeometry for EdgeThree {
    fn edge_length(&self) -> usize {
        3
    }

    fn face_centre_index(&self) -> usize {
        4
    }

    fn turn_cycles(&self) -> &'static TurnCycles {
        &THREE_CYCLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles_are_well_formed(edge: Edge) {
        let cycles = edge.turn_cycles();
        for (turned, cycle) in [
            (Face::U, &cycles.u),
            (Face::L, &cycles.l),
            (Face::F, &cycles.f),
            (Face::R, &cycles.r),
        ] {
            for strip in cycle {
                assert_eq!(strip.indices.len(), edge.edge_length());
                assert!(strip.indices.iter().all(|&i| i < edge.face_len()));
                assert_ne!(strip.face, turned);
                assert_ne!(strip.face, turned.opposite());
            }
        }
    }

    #[test]
    fn test_cycles_are_well_formed() {
        cycles_are_well_formed(Edge::TWO);
        cycles_are_well_formed(Edge::THREE);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Edge::try_from(2).unwrap(), Edge::TWO);
        assert_eq!(Edge::try_from(3).unwrap(), Edge::THREE);
        assert!(matches!(
            Edge::try_from(4),
            Err(CubeError::UnsupportedSize(4))
        ));
    }

    #[test]
    fn test_default_is_three() {
        assert_eq!(Edge::default(), Edge::THREE);
        assert_eq!(Edge::default().edge_length(), 3);
    }

    #[test]
    fn test_from_sticker_count() {
        assert_eq!(Edge::from_sticker_count(24), Some(Edge::TWO));
        assert_eq!(Edge::from_sticker_count(54), Some(Edge::THREE));
        assert_eq!(Edge::from_sticker_count(25), None);
    }
}
