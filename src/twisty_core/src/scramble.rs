//! Random scrambles with redundant moves filtered out.

use crate::{Cube, Move, edge::EdgeGeometry};
use fastrand::Rng;
use itertools::Itertools;
use log::{debug, trace};
use std::fmt::{self, Display};

/// Face turns drawn per unit of edge length.
const DRAWS_PER_EDGE: usize = 16;

/// A filtered sequence of face turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    moves: Vec<Move>,
}

impl Scramble {
    /// Draw `16 × edge_length` random face turns for `cube`'s size and drop
    /// the redundant ones.
    #[must_use]
    pub fn generate(cube: &Cube, rng: &mut Rng) -> Self {
        let draw_count = DRAWS_PER_EDGE * cube.edge().edge_length();
        let drawn = (0..draw_count)
            .map(|_| Move::FACE_TURNS[rng.usize(..Move::FACE_TURNS.len())])
            .collect_vec();
        debug!("Drew {draw_count} moves: {}", drawn.iter().join(" "));

        let moves = filter_redundant(drawn);
        debug!("Kept {} of {draw_count} moves", moves.len());
        Scramble { moves }
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn apply(&self, cube: &Cube) -> Cube {
        cube.apply_all(&self.moves)
    }
}

impl Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

/// Keep moves left to right, dropping each one that [`is_redundant`] given
/// the moves kept so far.
#[must_use]
pub fn filter_redundant(moves: impl IntoIterator<Item = Move>) -> Vec<Move> {
    let mut kept = vec![];
    for candidate in moves {
        if is_redundant(&kept, candidate) {
            trace!("Dropping redundant {candidate} after {}", kept.iter().join(" "));
        } else {
            kept.push(candidate);
        }
    }
    kept
}

/// A face turn is redundant if the last kept move turns the same face, or
/// if every kept move since the last turn of the same face turns the
/// opposite face. Opposite faces commute, so in both cases the candidate
/// would merge with the earlier turn. Rotations are never redundant.
#[must_use]
pub fn is_redundant(kept: &[Move], candidate: Move) -> bool {
    let Some(face) = candidate.face() else {
        return false;
    };

    if kept.last().and_then(|last| last.face()) == Some(face) {
        return true;
    }

    match kept.iter().rposition(|move_| move_.face() == Some(face)) {
        Some(previous) => kept[previous + 1..]
            .iter()
            .all(|move_| move_.face() == Some(face.opposite())),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Amount, Edge, Face, moves::parse_sequence};

    fn filtered(sequence: &str) -> String {
        filter_redundant(parse_sequence(sequence).unwrap())
            .iter()
            .join(" ")
    }

    #[test]
    fn test_same_face_in_a_row() {
        assert_eq!(filtered("U U"), "U");
        assert_eq!(filtered("U U' U2 R"), "U R");
        assert_eq!(filtered("R L R2"), "R L");
    }

    #[test]
    fn test_opposite_faces_between() {
        assert_eq!(filtered("U D U'"), "U D");
        assert_eq!(filtered("U D D' U"), "U D");
        assert_eq!(filtered("F B2 F R F"), "F B2 R F");
    }

    #[test]
    fn test_non_opposite_face_between() {
        assert_eq!(filtered("U R U"), "U R U");
        assert_eq!(filtered("U D R U D"), "U D R U D");
    }

    #[test]
    fn test_only_nearest_same_face_turn_matters() {
        // The second U is kept because R separates it from the first; the
        // third is dropped because only D separates it from the second.
        assert_eq!(filtered("U R U D U'"), "U R U D");
    }

    #[test]
    fn test_rotations_are_never_redundant() {
        let kept = [Move::Rotate(crate::Axis::X, Amount::Clockwise)];
        assert!(!is_redundant(&kept, kept[0]));
        assert!(!is_redundant(&[], Move::Turn(Face::U, Amount::Clockwise)));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let cube = Cube::solved(Edge::THREE);
        let a = Scramble::generate(&cube, &mut Rng::with_seed(7));
        let b = Scramble::generate(&cube, &mut Rng::with_seed(7));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.apply(&cube), b.apply(&cube));
    }

    #[test]
    fn test_generate_length() {
        let mut rng = Rng::with_seed(1);
        for edge in [Edge::TWO, Edge::THREE] {
            let cube = Cube::solved(edge);
            let scramble = Scramble::generate(&cube, &mut rng);
            assert!(!scramble.moves().is_empty());
            assert!(scramble.moves().len() <= 16 * edge.edge_length());
            assert!(scramble.moves().iter().all(|move_| move_.face().is_some()));
        }
    }
}
