//! Move tokens: `<FACE>[<MODIFIER>]` where FACE is one of `U L F R B D`
//! (face turn) or `X Y Z` (whole-cube rotation) and MODIFIER is empty
//! (clockwise), `'` (anticlockwise) or `2` (double). Tokens are matched
//! case-insensitively.

use crate::{Cube, CubeError, Face};
use log::debug;
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    Clockwise,
    Anticlockwise,
    Double,
}

impl Amount {
    pub const ALL: [Self; 3] = [Amount::Clockwise, Amount::Anticlockwise, Amount::Double];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Amount::Clockwise => Amount::Anticlockwise,
            Amount::Anticlockwise => Amount::Clockwise,
            Amount::Double => Amount::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Amount::Clockwise => "",
            Amount::Anticlockwise => "'",
            Amount::Double => "2",
        }
    }
}

/// Axis of a whole-cube rotation. X runs through R and L, Y through U and D,
/// Z through F and B.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];

    const fn symbol(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Turn(Face, Amount),
    Rotate(Axis, Amount),
}

const fn face_turns() -> [Move; 18] {
    let mut out = [Move::Turn(Face::U, Amount::Clockwise); 18];
    let mut i = 0;
    while i < out.len() {
        out[i] = Move::Turn(Face::ALL[i / 3], Amount::ALL[i % 3]);
        i += 1;
    }
    out
}

const fn rotations() -> [Move; 9] {
    let mut out = [Move::Rotate(Axis::X, Amount::Clockwise); 9];
    let mut i = 0;
    while i < out.len() {
        out[i] = Move::Rotate(Axis::ALL[i / 3], Amount::ALL[i % 3]);
        i += 1;
    }
    out
}

impl Move {
    /// The 18 face turns, the scramble alphabet.
    pub const FACE_TURNS: [Self; 18] = face_turns();

    /// The 9 whole-cube rotations.
    pub const ROTATIONS: [Self; 9] = rotations();

    /// The face this move turns, or `None` for rotations.
    #[must_use]
    pub const fn face(self) -> Option<Face> {
        match self {
            Move::Turn(face, _) => Some(face),
            Move::Rotate(..) => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Move::Turn(face, amount) => Move::Turn(face, amount.inverse()),
            Move::Rotate(axis, amount) => Move::Rotate(axis, amount.inverse()),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Turn(face, amount) => write!(f, "{face}{}", amount.suffix()),
            Move::Rotate(axis, amount) => write!(f, "{}{}", axis.symbol(), amount.suffix()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeError::UnknownMove(token.to_owned());

        let upper = token.to_ascii_uppercase();
        let mut chars = upper.chars();
        let head = chars.next().ok_or_else(unknown)?;
        let amount = match chars.as_str() {
            "" => Amount::Clockwise,
            "'" => Amount::Anticlockwise,
            "2" => Amount::Double,
            _ => return Err(unknown()),
        };

        if let Some(face) = Face::from_symbol(head) {
            return Ok(Move::Turn(face, amount));
        }
        match head {
            'X' => Ok(Move::Rotate(Axis::X, amount)),
            'Y' => Ok(Move::Rotate(Axis::Y, amount)),
            'Z' => Ok(Move::Rotate(Axis::Z, amount)),
            _ => Err(unknown()),
        }
    }
}

/// Parse a whitespace-separated move sequence.
///
/// # Errors
///
/// `UnknownMove` for the first token that is not a move.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Move>, CubeError> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// A move sequence that stopped at an unknown token. Every move before the
/// rejected one has already been applied to `applied`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown move {token:?} at position {index} of the sequence")]
pub struct SequenceError {
    /// Position of the rejected token among the sequence's tokens.
    pub index: usize,
    pub token: String,
    /// The state after every move before `index`.
    pub applied: Cube,
}

impl Cube {
    /// Apply a single move.
    #[must_use]
    pub fn apply(&self, move_: Move) -> Cube {
        match move_ {
            Move::Turn(face, amount) => self.turn(face, amount),
            Move::Rotate(axis, amount) => self.rotate(axis, amount),
        }
    }

    /// Apply each move in order.
    #[must_use]
    pub fn apply_all<'a>(&self, moves: impl IntoIterator<Item = &'a Move>) -> Cube {
        moves
            .into_iter()
            .fold(self.clone(), |cube, &move_| cube.apply(move_))
    }

    /// Parse and apply a whitespace-separated move sequence one token at a
    /// time.
    ///
    /// # Errors
    ///
    /// A `SequenceError` at the first unknown token, carrying the state
    /// reached by the tokens before it.
    pub fn apply_sequence(&self, sequence: &str) -> Result<Cube, SequenceError> {
        let mut cube = self.clone();
        for (index, token) in sequence.split_whitespace().enumerate() {
            match token.parse::<Move>() {
                Ok(move_) => cube = cube.apply(move_),
                Err(_) => {
                    debug!("Rejected move sequence at token {index}: {token:?}");
                    return Err(SequenceError {
                        index,
                        token: token.to_owned(),
                        applied: cube,
                    });
                }
            }
        }
        Ok(cube)
    }
}
