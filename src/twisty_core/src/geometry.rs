//! Quarter turns of a single face's sticker grid. Faces are stored row-major
//! as `edge_length * edge_length` stickers, viewed from outside the cube.

/// Rotate a face 90 degrees clockwise.
///
/// `face.len()` must equal `edge_length * edge_length`.
#[must_use]
pub fn rotate_face_clockwise<T: Copy>(face: &[T], edge_length: usize) -> Vec<T> {
    debug_assert_eq!(face.len(), edge_length * edge_length);
    (0..face.len())
        .map(|i| {
            let (row, col) = (i / edge_length, i % edge_length);
            face[(edge_length - 1 - col) * edge_length + row]
        })
        .collect()
}

/// Rotate a face 90 degrees anticlockwise. Inverse of
/// [`rotate_face_clockwise`].
#[must_use]
pub fn rotate_face_anticlockwise<T: Copy>(face: &[T], edge_length: usize) -> Vec<T> {
    debug_assert_eq!(face.len(), edge_length * edge_length);
    (0..face.len())
        .map(|i| {
            let (row, col) = (i / edge_length, i % edge_length);
            face[col * edge_length + (edge_length - 1 - row)]
        })
        .collect()
}

/// Rotate a face clockwise by `quarter_turns` (taken modulo four).
#[must_use]
pub fn rotate_face<T: Copy>(face: &[T], edge_length: usize, quarter_turns: u8) -> Vec<T> {
    match quarter_turns % 4 {
        0 => face.to_vec(),
        1 => rotate_face_clockwise(face, edge_length),
        2 => rotate_face_clockwise(&rotate_face_clockwise(face, edge_length), edge_length),
        _ => rotate_face_anticlockwise(face, edge_length),
    }
}
