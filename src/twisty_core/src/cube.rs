use crate::{
    Face,
    edge::{Edge, EdgeGeometry},
};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    ops::Range,
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Unknown move: {0:?}")]
    UnknownMove(String),
    #[error("Invalid cube string length, expected {expected} stickers but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Unsupported cube size {0}, only 2x2x2 and 3x3x3 cubes are supported")]
    UnsupportedSize(usize),
    #[error("Invalid sticker {found:?} at index {index}, expected one of U, L, F, R, B, D")]
    InvalidSticker { index: usize, found: char },
}

/// The state of a cube: six faces of `edge_length²` stickers each, stored
/// back to back in the order U, L, F, R, B, D.
///
/// A `Cube` is an immutable value. Every move, rotation and normalization
/// returns a new `Cube`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    edge: Edge,
    stickers: Box<[Face]>,
}

impl Cube {
    /// A solved cube: every face painted with its own label.
    #[must_use]
    pub fn solved(edge: Edge) -> Self {
        let face_len = edge.face_len();
        Cube {
            edge,
            stickers: Face::ALL
                .iter()
                .flat_map(|&face| std::iter::repeat_n(face, face_len))
                .collect(),
        }
    }

    /// Deserialize a cube of a known size.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if `text` does not hold exactly `6 × edge_length²`
    /// characters, `InvalidSticker` if any character is not a face symbol.
    pub fn from_cube_string(text: &str, edge: Edge) -> Result<Self, CubeError> {
        let actual = text.chars().count();
        if actual != edge.sticker_count() {
            return Err(CubeError::LengthMismatch {
                expected: edge.sticker_count(),
                actual,
            });
        }
        let stickers = text
            .chars()
            .enumerate()
            .map(|(index, found)| {
                Face::from_symbol(found).ok_or(CubeError::InvalidSticker { index, found })
            })
            .collect::<Result<Box<[Face]>, CubeError>>()?;
        Ok(Cube { edge, stickers })
    }

    /// Serialize to the flat sticker string, face order U, L, F, R, B, D and
    /// row-major within each face.
    #[must_use]
    pub fn to_cube_string(&self) -> String {
        self.stickers.iter().map(|face| face.symbol()).collect()
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.edge.edge_length()
    }

    /// The stickers of `face`, row-major.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Face] {
        &self.stickers[self.face_range(face)]
    }

    /// The reference sticker of `face`, see
    /// [`EdgeGeometry::face_centre_index`].
    #[must_use]
    pub fn centre(&self, face: Face) -> Face {
        self.face(face)[self.edge.face_centre_index()]
    }

    /// Whether every face carries a single label.
    #[must_use]
    pub fn faces_uniform(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face(face).iter().all_equal())
    }

    pub(crate) fn face_range(&self, face: Face) -> Range<usize> {
        let face_len = self.edge.face_len();
        let start = face as usize * face_len;
        start..start + face_len
    }

    pub(crate) fn sticker_index(&self, face: Face, index: usize) -> usize {
        face as usize * self.edge.face_len() + index
    }

    pub(crate) fn stickers(&self) -> &[Face] {
        &self.stickers
    }

    pub(crate) fn stickers_mut(&mut self) -> &mut [Face] {
        &mut self.stickers
    }

    pub(crate) fn set_face(&mut self, face: Face, stickers: &[Face]) {
        let range = self.face_range(face);
        self.stickers[range].copy_from_slice(stickers);
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.stickers {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cube")
            .field(&self.size())
            .field(&self.to_cube_string())
            .finish()
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    /// Deserialize a cube, inferring its size from the string length.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let actual = text.chars().count();
        match Edge::from_sticker_count(actual) {
            Some(edge) => Cube::from_cube_string(text, edge),
            None => {
                // Report whichever supported size the input is closest to.
                let (two, three) = (Edge::TWO.sticker_count(), Edge::THREE.sticker_count());
                let expected = if actual < (two + three) / 2 { two } else { three };
                Err(CubeError::LengthMismatch { expected, actual })
            }
        }
    }
}
