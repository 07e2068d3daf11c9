//! The interactive command loop, kept free of terminal IO so it can be
//! driven from tests.

use std::path::{Path, PathBuf};

use fastrand::Rng;
use log::{debug, info};
use twisty_core::{Cube, Edge, Scramble, SequenceError};

use crate::display::DisplayMode;

pub const HELP: &str = "\
Enter a move sequence such as R U R' U' (case-insensitive):
  U L F R B D    quarter turn clockwise, add ' for anticlockwise or 2 for a half turn
  X Y Z          rotate the whole cube
Commands:
  ? /    show this help
  ` ~    show status
  q      quit
  p      print the cube string
  + =    fancier display
  - _    plainer display
  ] }    bigger cube (resets)
  [ {    smaller cube (resets)
  0      reset to solved
  s      scramble
  <      undo";

/// What the caller should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Help,
    /// Informational text. The cube is unchanged.
    Message(String),
    /// Print the serialized cube, then redraw.
    Print(String),
    /// Only the presentation changed.
    Redraw,
    /// The cube changed and should be saved and redrawn.
    Changed,
    /// The cube was scrambled with the given moves.
    Scrambled(Scramble),
    /// A move sequence was rejected. The cube is unchanged.
    Rejected(SequenceError),
}

impl Outcome {
    /// Whether the cube differs from before the command.
    #[must_use]
    pub fn changed_cube(&self) -> bool {
        matches!(self, Outcome::Changed | Outcome::Scrambled(_))
    }
}

pub struct Session {
    cube: Cube,
    history: Vec<Cube>,
    display_mode: DisplayMode,
    state_file: PathBuf,
    rng: Rng,
}

impl Session {
    #[must_use]
    pub fn new(cube: Cube, display_mode: DisplayMode, state_file: PathBuf, rng: Rng) -> Self {
        Session {
            cube,
            history: vec![],
            display_mode,
            state_file,
            rng,
        }
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    fn replace_cube(&mut self, cube: Cube) -> Outcome {
        if cube == self.cube {
            return Outcome::Redraw;
        }
        self.history.push(std::mem::replace(&mut self.cube, cube));
        Outcome::Changed
    }

    fn resize(&mut self, edge_length: usize) -> Outcome {
        match Edge::try_from(edge_length) {
            Ok(edge) if edge != self.cube.edge() => {
                info!("Switching to a {edge_length}x{edge_length}x{edge_length} cube");
                self.replace_cube(Cube::solved(edge))
            }
            _ => Outcome::Redraw,
        }
    }

    fn status(&self) -> String {
        let size = self.cube.size();
        format!(
            "Cube: {size}x{size}x{size}, solved: {}\nDisplay: {}\nState file: {}\nUndo history: {}",
            self.cube.is_solved(),
            self.display_mode,
            self.state_file.display(),
            self.history.len(),
        )
    }

    /// Run one line of input.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        debug!("Command: {line:?}");

        match line {
            "?" | "/" => Outcome::Help,
            "`" | "~" => Outcome::Message(self.status()),
            "q" | "Q" => Outcome::Quit,
            "p" | "P" => Outcome::Print(self.cube.to_cube_string()),
            "+" | "=" => {
                self.display_mode = self.display_mode.enhance();
                Outcome::Redraw
            }
            "-" | "_" => {
                self.display_mode = self.display_mode.simplify();
                Outcome::Redraw
            }
            "]" | "}" => self.resize(self.cube.size() + 1),
            "[" | "{" => self.resize(self.cube.size().saturating_sub(1)),
            "0" => self.replace_cube(Cube::solved(self.cube.edge())),
            "s" | "S" => {
                let scramble = Scramble::generate(&self.cube, &mut self.rng);
                let scrambled = scramble.apply(&self.cube);
                self.history.push(std::mem::replace(&mut self.cube, scrambled));
                Outcome::Scrambled(scramble)
            }
            "<" => match self.history.pop() {
                Some(previous) => {
                    self.cube = previous;
                    Outcome::Changed
                }
                None => Outcome::Message("Nothing to undo".to_owned()),
            },
            sequence => match self.cube.apply_sequence(sequence) {
                Ok(cube) => self.replace_cube(cube),
                Err(e) => Outcome::Rejected(e),
            },
        }
    }
}
