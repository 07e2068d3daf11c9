//! Face turns.

use crate::{
    Amount, Axis, Cube, Face,
    edge::{EdgeGeometry, TurnCycle},
    geometry::{rotate_face_anticlockwise, rotate_face_clockwise},
};

impl Cube {
    /// Turn `face` by `amount`. Only the turned face and the strips of its
    /// four neighbours change; the opposite face is never touched.
    #[must_use]
    pub fn turn(&self, face: Face, amount: Amount) -> Cube {
        match amount {
            Amount::Clockwise => self.quarter_turn(face, true),
            Amount::Anticlockwise => self.quarter_turn(face, false),
            Amount::Double => self
                .quarter_turn(face, true)
                .quarter_turn(face, true),
        }
    }

    fn quarter_turn(&self, face: Face, clockwise: bool) -> Cube {
        let cycles = self.edge().turn_cycles();
        match face {
            Face::U => self.cycle_turn(face, &cycles.u, clockwise),
            Face::L => self.cycle_turn(face, &cycles.l, clockwise),
            Face::F => self.cycle_turn(face, &cycles.f, clockwise),
            Face::R => self.cycle_turn(face, &cycles.r, clockwise),
            // X brings B up, so B is U seen after X.
            Face::B => self
                .rotate(Axis::X, Amount::Clockwise)
                .quarter_turn(Face::U, clockwise)
                .rotate(Axis::X, Amount::Anticlockwise),
            // X' brings D to the front, so D is F seen after X'.
            Face::D => self
                .rotate(Axis::X, Amount::Anticlockwise)
                .quarter_turn(Face::F, clockwise)
                .rotate(Axis::X, Amount::Clockwise),
        }
    }

    fn cycle_turn(&self, face: Face, cycle: &TurnCycle, clockwise: bool) -> Cube {
        let edge_length = self.size();
        let mut next = self.clone();

        let turned = if clockwise {
            rotate_face_clockwise(self.face(face), edge_length)
        } else {
            rotate_face_anticlockwise(self.face(face), edge_length)
        };
        next.set_face(face, &turned);

        for k in 0..cycle.len() {
            let (to, from) = if clockwise {
                (&cycle[k], &cycle[(k + 1) % cycle.len()])
            } else {
                (&cycle[(k + 1) % cycle.len()], &cycle[k])
            };
            for (&to_index, &from_index) in to.indices.iter().zip(from.indices) {
                let to_index = self.sticker_index(to.face, to_index);
                let from_index = self.sticker_index(from.face, from_index);
                next.stickers_mut()[to_index] = self.stickers()[from_index];
            }
        }

        next
    }
}
