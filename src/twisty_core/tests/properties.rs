use fastrand::Rng;
use log::info;
use twisty_core::{
    Amount, Axis, Cube, CubeError, Edge, Face, Move, apply_move, apply_sequence, from_string,
    make_cube,
};

const EDGES: [Edge; 2] = [Edge::TWO, Edge::THREE];

/// Apply `moves` to `cube` `repeat` times.
///
/// # Panics
///
/// Panics if the move sequence is invalid.
fn apply_moves(cube: &Cube, moves: &str, repeat: u32) -> Cube {
    (0..repeat).fold(cube.clone(), |cube, _| cube.apply_sequence(moves).unwrap())
}

/// States reached by random face turns and rotations from solved.
fn random_states(edge: Edge, count: usize, rng: &mut Rng) -> Vec<Cube> {
    let vocabulary = Move::FACE_TURNS
        .iter()
        .chain(&Move::ROTATIONS)
        .copied()
        .collect::<Vec<_>>();
    (0..count)
        .map(|_| {
            let length = rng.usize(0..40);
            (0..length).fold(Cube::solved(edge), |cube, _| {
                cube.apply(vocabulary[rng.usize(..vocabulary.len())])
            })
        })
        .collect()
}

#[test_log::test]
fn test_clockwise_then_anticlockwise() {
    let mut rng = Rng::with_seed(0x5eed);
    for edge in EDGES {
        for cube in random_states(edge, 50, &mut rng) {
            for face in Face::ALL {
                let there = cube.turn(face, Amount::Clockwise);
                assert_eq!(there.turn(face, Amount::Anticlockwise), cube);
            }
        }
    }
}

#[test_log::test]
fn test_four_quarter_turns() {
    let mut rng = Rng::with_seed(1);
    for edge in EDGES {
        for cube in random_states(edge, 50, &mut rng) {
            for face in Face::ALL {
                let twice = cube
                    .turn(face, Amount::Clockwise)
                    .turn(face, Amount::Clockwise);
                assert_eq!(cube.turn(face, Amount::Double), twice);
                let four = twice
                    .turn(face, Amount::Clockwise)
                    .turn(face, Amount::Clockwise);
                assert_eq!(four, cube);
            }
        }
    }
}

#[test_log::test]
fn test_rotations_invert_and_cycle() {
    let mut rng = Rng::with_seed(2);
    for edge in EDGES {
        for cube in random_states(edge, 50, &mut rng) {
            for axis in Axis::ALL {
                let there = cube.rotate(axis, Amount::Clockwise);
                assert_eq!(there.rotate(axis, Amount::Anticlockwise), cube);
                assert_eq!(
                    cube.rotate(axis, Amount::Double),
                    there.rotate(axis, Amount::Clockwise)
                );
                let four = (0..4).fold(cube.clone(), |cube, _| cube.rotate(axis, Amount::Clockwise));
                assert_eq!(four, cube);
            }
        }
    }
}

#[test_log::test]
fn test_sticker_counts_preserved() {
    let mut rng = Rng::with_seed(3);
    for edge in EDGES {
        for cube in random_states(edge, 50, &mut rng) {
            let text = cube.to_cube_string();
            assert_eq!(text.len(), 6 * cube.size() * cube.size());
            for face in Face::ALL {
                assert_eq!(cube.face(face).len(), cube.size() * cube.size());
                let count = text.chars().filter(|&c| c == face.symbol()).count();
                assert_eq!(count, cube.size() * cube.size());
            }
        }
    }
}

#[test_log::test]
fn test_serialization_round_trip() {
    let mut rng = Rng::with_seed(4);
    for edge in EDGES {
        for cube in random_states(edge, 50, &mut rng) {
            let text = cube.to_string();
            assert_eq!(Cube::from_cube_string(&text, cube.edge()).unwrap(), cube);
            assert_eq!(from_string(&text).unwrap(), cube);
        }
    }
}

#[test_log::test]
fn test_solved_detection() {
    assert!(make_cube(2).unwrap().is_solved());
    assert!(make_cube(3).unwrap().is_solved());
    assert!(
        !make_cube(3)
            .unwrap()
            .turn(Face::U, Amount::Clockwise)
            .is_solved()
    );
    assert_eq!(make_cube(4), Err(CubeError::UnsupportedSize(4)));
    assert_eq!(make_cube(1), Err(CubeError::UnsupportedSize(1)));
}

#[test_log::test]
fn test_solved_in_any_orientation() {
    let mut rng = Rng::with_seed(5);
    for edge in EDGES {
        let solved = Cube::solved(edge);
        for _ in 0..100 {
            let length = rng.usize(0..12);
            let rotated = (0..length).fold(solved.clone(), |cube, _| {
                cube.apply(Move::ROTATIONS[rng.usize(..Move::ROTATIONS.len())])
            });
            assert!(rotated.is_solved(), "{rotated:?}");
        }
    }
}

#[test_log::test]
fn test_normalize_is_orientation_independent() {
    let mut rng = Rng::with_seed(7);
    for edge in EDGES {
        for cube in random_states(edge, 100, &mut rng) {
            let normalized = cube.normalize_orientation();
            assert_eq!(normalized.centre(Face::U), Face::U, "{cube:?}");
            assert_eq!(normalized.centre(Face::L), Face::L, "{cube:?}");
            for rotation in Move::ROTATIONS {
                assert_eq!(
                    cube.apply(rotation).normalize_orientation(),
                    normalized,
                    "{cube:?} after {rotation}"
                );
            }
        }
    }
}

#[test_log::test]
fn test_scrambled_in_any_orientation_is_not_solved() {
    for edge in EDGES {
        let scrambled = Cube::solved(edge).apply_sequence("R U F'").unwrap();
        for rotation in Move::ROTATIONS {
            assert!(!scrambled.apply(rotation).is_solved());
        }
    }
}

#[test_log::test]
fn test_sexy_move_has_order_six() {
    let solved = make_cube(3).unwrap();
    let solved_text = solved.to_cube_string();
    for repeat in 1..6 {
        assert_ne!(
            apply_moves(&solved, "R U R' U'", repeat).to_cube_string(),
            solved_text
        );
    }
    assert_eq!(
        apply_moves(&solved, "R U R' U'", 6).to_cube_string(),
        solved_text
    );
}

#[test_log::test]
fn test_move_orders() {
    let three = make_cube(3).unwrap();
    assert_eq!(apply_moves(&three, "R F", 105), three);
    assert_eq!(apply_moves(&three, "B D", 105), three);
    assert_ne!(apply_moves(&three, "R F", 35), three);

    let two = make_cube(2).unwrap();
    assert_eq!(apply_moves(&two, "R F", 15), two);
    assert_eq!(apply_moves(&two, "U B", 15), two);
    assert_ne!(apply_moves(&two, "R F", 5), two);
}

#[test_log::test]
fn test_opposite_faces_commute() {
    for edge in EDGES {
        let solved = Cube::solved(edge);
        for face in Face::ALL {
            let opposite = face.opposite();
            let a = solved
                .turn(face, Amount::Clockwise)
                .turn(opposite, Amount::Double);
            let b = solved
                .turn(opposite, Amount::Double)
                .turn(face, Amount::Clockwise);
            assert_eq!(a, b);
        }
        let r_then_u = solved.apply_sequence("R U").unwrap();
        let u_then_r = solved.apply_sequence("U R").unwrap();
        assert_ne!(r_then_u, u_then_r);
    }
}

#[test_log::test]
fn test_conjugated_turns_match_their_definition() {
    let mut rng = Rng::with_seed(6);
    for edge in EDGES {
        for cube in random_states(edge, 20, &mut rng) {
            assert_eq!(
                cube.turn(Face::B, Amount::Clockwise),
                cube.rotate(Axis::X, Amount::Clockwise)
                    .turn(Face::U, Amount::Clockwise)
                    .rotate(Axis::X, Amount::Anticlockwise)
            );
            assert_eq!(
                cube.turn(Face::D, Amount::Clockwise),
                cube.rotate(Axis::X, Amount::Anticlockwise)
                    .turn(Face::F, Amount::Clockwise)
                    .rotate(Axis::X, Amount::Clockwise)
            );
        }
    }
}

#[test_log::test]
fn test_known_strings() {
    assert_eq!(
        make_cube(3).unwrap().to_string(),
        "UUUUUUUUULLLLLLLLLFFFFFFFFFRRRRRRRRRBBBBBBBBBDDDDDDDDD"
    );
    let checkerboard = apply_moves(&make_cube(3).unwrap(), "U2 D2 F2 B2 L2 R2", 1);
    info!("Checkerboard: {checkerboard}");
    assert_eq!(
        checkerboard.to_string(),
        "UDUDUDUDULRLRLRLRLFBFBFBFBFRLRLRLRLRBFBFBFBFBDUDUDUDUD"
    );
}

#[test_log::test]
fn test_facade_functions() {
    let solved = make_cube(3).unwrap();
    let turned = apply_move("r'", &solved).unwrap();
    assert_eq!(turned, solved.turn(Face::R, Amount::Anticlockwise));
    assert_eq!(
        apply_move("W", &solved),
        Err(CubeError::UnknownMove("W".to_owned()))
    );

    let err = apply_sequence("R U W F", &solved).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.token, "W");
    assert_eq!(err.applied, apply_sequence("R U", &solved).unwrap());
}
