//! Whole-cube rotations and orientation normalization.

use crate::{Amount, Axis, Cube, Face, geometry::rotate_face};
use itertools::Itertools;
use log::{debug, trace};

/// For each target face in serialization order, the face whose stickers
/// move there and how many clockwise quarter turns they pick up on the way.
type Relabeling = [(Face, u8); 6];

const X: Relabeling = [
    (Face::B, 2),
    (Face::L, 1),
    (Face::U, 0),
    (Face::R, 3),
    (Face::D, 2),
    (Face::F, 0),
];

const X_PRIME: Relabeling = [
    (Face::F, 0),
    (Face::L, 3),
    (Face::D, 0),
    (Face::R, 1),
    (Face::U, 2),
    (Face::B, 2),
];

const Y: Relabeling = [
    (Face::U, 3),
    (Face::B, 0),
    (Face::L, 0),
    (Face::F, 0),
    (Face::R, 0),
    (Face::D, 1),
];

const Y_PRIME: Relabeling = [
    (Face::U, 1),
    (Face::F, 0),
    (Face::R, 0),
    (Face::B, 0),
    (Face::L, 0),
    (Face::D, 3),
];

const Z: Relabeling = [
    (Face::R, 3),
    (Face::U, 3),
    (Face::F, 3),
    (Face::D, 3),
    (Face::B, 1),
    (Face::L, 3),
];

const Z_PRIME: Relabeling = [
    (Face::L, 1),
    (Face::D, 1),
    (Face::F, 1),
    (Face::U, 1),
    (Face::B, 3),
    (Face::R, 1),
];

/// Orientations sharing an up face, one per quarter turn about Y.
const Y_TURNS: usize = 4;

impl Cube {
    /// Rotate the whole cube about `axis`. No sticker changes its physical
    /// neighbours; only the face names move.
    #[must_use]
    pub fn rotate(&self, axis: Axis, amount: Amount) -> Cube {
        let relabeling = match (axis, amount) {
            (Axis::X, Amount::Clockwise) => &X,
            (Axis::X, Amount::Anticlockwise) => &X_PRIME,
            (Axis::Y, Amount::Clockwise) => &Y,
            (Axis::Y, Amount::Anticlockwise) => &Y_PRIME,
            (Axis::Z, Amount::Clockwise) => &Z,
            (Axis::Z, Amount::Anticlockwise) => &Z_PRIME,
            (axis, Amount::Double) => {
                return self
                    .rotate(axis, Amount::Clockwise)
                    .rotate(axis, Amount::Clockwise);
            }
        };
        self.relabel(relabeling)
    }

    fn relabel(&self, relabeling: &Relabeling) -> Cube {
        let mut next = self.clone();
        for (target, &(source, quarter_turns)) in Face::ALL.iter().zip(relabeling) {
            next.set_face(
                *target,
                &rotate_face(self.face(source), self.size(), quarter_turns),
            );
        }
        next
    }

    /// The 24 orientations of the same physical cube: each face brought up
    /// in turn, then every quarter turn about Y.
    fn orientations(&self) -> impl Iterator<Item = Cube> + '_ {
        Face::ALL.into_iter().flat_map(move |up| {
            let corrections: &[(Axis, Amount)] = match up {
                Face::U => &[],
                Face::L => &[(Axis::Z, Amount::Anticlockwise)],
                Face::F => &[(Axis::X, Amount::Anticlockwise)],
                Face::R => &[(Axis::Z, Amount::Clockwise)],
                Face::B => &[(Axis::X, Amount::Clockwise)],
                Face::D => &[(Axis::X, Amount::Double)],
            };
            let upright = corrections
                .iter()
                .fold(self.clone(), |cube, &(axis, amount)| cube.rotate(axis, amount));
            std::iter::successors(Some(upright), |cube| {
                Some(cube.rotate(Axis::Y, Amount::Clockwise))
            })
            .take(Y_TURNS)
        })
    }

    /// The same physical cube, renamed so that the U face shows the U label
    /// and the L face shows the L label at their reference stickers.
    ///
    /// On odd cubes exactly one orientation qualifies. On even cubes the
    /// reference sticker is a corner, and the smallest qualifying
    /// orientation by sticker order is chosen, so the result does not depend
    /// on how the cube is held. If no orientation qualifies, the smallest
    /// one with the U label up is returned, or the cube unchanged if the U
    /// label is nowhere to be found.
    #[must_use]
    pub fn normalize_orientation(&self) -> Cube {
        let smallest = |cubes: Vec<Cube>| {
            cubes
                .into_iter()
                .min_by(|a, b| a.stickers().cmp(b.stickers()))
        };

        let upright = self
            .orientations()
            .filter(|cube| cube.centre(Face::U) == Face::U)
            .collect_vec();
        trace!("{} orientations show the U label up", upright.len());

        let (upright_left, upright): (Vec<_>, Vec<_>) = upright
            .into_iter()
            .partition(|cube| cube.centre(Face::L) == Face::L);

        if let Some(normalized) = smallest(upright_left) {
            return normalized;
        }
        if let Some(normalized) = smallest(upright) {
            debug!("No orientation puts the L label on the left");
            return normalized;
        }
        debug!("No face shows the U label, leaving orientation unchanged");
        self.clone()
    }

    /// Whether the cube is solved, in whatever orientation it is held.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces_uniform() && self.normalize_orientation() == Cube::solved(self.edge())
    }
}
