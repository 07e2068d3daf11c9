//! State and move algebra for 2x2x2 and 3x3x3 cubes: face turns, whole-cube
//! rotations, orientation-independent solved detection, serialization to a
//! flat sticker string, and redundancy-filtered random scrambles.
//!
//! Every operation is a pure function from one [`Cube`] to a new one.

pub mod cube;
pub mod edge;
pub mod face;
pub mod geometry;
pub mod moves;
mod rotation;
pub mod scramble;
mod turn;

pub use cube::{Cube, CubeError};
pub use edge::{Edge, EdgeGeometry};
pub use face::Face;
pub use moves::{Amount, Axis, Move, SequenceError};
pub use scramble::Scramble;

/// A solved cube with the given edge length.
///
/// # Errors
///
/// `UnsupportedSize` unless `size` is 2 or 3.
pub fn make_cube(size: usize) -> Result<Cube, CubeError> {
    Ok(Cube::solved(Edge::try_from(size)?))
}

/// Deserialize a cube, detecting its size from the length of `text`.
///
/// # Errors
///
/// `LengthMismatch` unless `text` has 24 or 54 characters, `InvalidSticker`
/// for characters that are not face symbols.
pub fn from_string(text: &str) -> Result<Cube, CubeError> {
    text.parse()
}

/// Parse `token` and apply it to `cube`.
///
/// # Errors
///
/// `UnknownMove` if `token` is not a move; `cube` is left as it was.
pub fn apply_move(token: &str, cube: &Cube) -> Result<Cube, CubeError> {
    Ok(cube.apply(token.parse()?))
}

/// Apply a whitespace-separated move sequence to `cube`.
///
/// # Errors
///
/// See [`Cube::apply_sequence`].
pub fn apply_sequence(sequence: &str, cube: &Cube) -> Result<Cube, SequenceError> {
    cube.apply_sequence(sequence)
}

/// A scramble for `cube`'s size, drawn from a freshly seeded generator.
#[must_use]
pub fn generate_scramble(cube: &Cube) -> Scramble {
    Scramble::generate(cube, &mut fastrand::Rng::new())
}
