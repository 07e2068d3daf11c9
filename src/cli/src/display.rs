//! Terminal rendering of a cube net:
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```
//!
//! Rendering only needs the serialized sticker string and the edge length.

use clap::ValueEnum;
use itertools::Itertools;
use owo_colors::{AnsiColors, OwoColorize};
use serde::{Deserialize, Serialize};
use twisty_core::Face;

/// How much colour and space to spend on each sticker, from plainest to
/// fanciest.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Plain colour letters, no ANSI styling.
    #[default]
    Simple,
    /// Coloured letters.
    SmallFg,
    /// Letters on a coloured background.
    SmallBg,
    /// Large cells on a coloured background.
    LargeBg,
}

impl DisplayMode {
    const ALL: [Self; 4] = [
        DisplayMode::Simple,
        DisplayMode::SmallFg,
        DisplayMode::SmallBg,
        DisplayMode::LargeBg,
    ];

    /// The next fancier mode, staying put at the end.
    #[must_use]
    pub fn enhance(self) -> Self {
        Self::ALL[(self as usize + 1).min(Self::ALL.len() - 1)]
    }

    /// The next plainer mode, staying put at the start.
    #[must_use]
    pub fn simplify(self) -> Self {
        Self::ALL[(self as usize).saturating_sub(1)]
    }

    fn cell_size(self) -> (usize, usize) {
        match self {
            DisplayMode::LargeBg => (3, 7),
            _ => (1, 3),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// The colour letter and terminal colour of a sticker symbol.
fn sticker_colour(symbol: char) -> (char, AnsiColors) {
    match Face::from_symbol(symbol) {
        Some(Face::U) => ('w', AnsiColors::White),
        Some(Face::D) => ('y', AnsiColors::BrightYellow),
        Some(Face::F) => ('g', AnsiColors::Green),
        Some(Face::L) => ('o', AnsiColors::Yellow),
        Some(Face::R) => ('r', AnsiColors::Red),
        Some(Face::B) => ('b', AnsiColors::Blue),
        None => ('?', AnsiColors::Default),
    }
}

fn paint_cell(symbol: char, mode: DisplayMode, text_row: bool) -> String {
    let (letter, colour) = sticker_colour(symbol);
    let (_, columns) = mode.cell_size();
    let padding = " ".repeat((columns - 1) / 2);

    match mode {
        DisplayMode::Simple => format!("{padding}{letter}{padding}"),
        DisplayMode::SmallFg => format!("{padding}{letter}{padding}").color(colour).to_string(),
        DisplayMode::SmallBg => format!("{padding}{letter}{padding}")
            .black()
            .on_color(colour)
            .to_string(),
        DisplayMode::LargeBg => {
            let letter = if text_row {
                letter.to_ascii_uppercase()
            } else {
                ' '
            };
            format!("{padding}{letter}{padding}")
                .black()
                .on_color(colour)
                .to_string()
        }
    }
}

/// Render a serialized cube as a net.
///
/// `cube_string` holds six faces of `edge_length²` stickers in the order
/// U, L, F, R, B, D.
#[must_use]
pub fn render(cube_string: &str, edge_length: usize, mode: DisplayMode) -> String {
    let stickers = cube_string.chars().collect_vec();
    let face_len = edge_length * edge_length;
    let faces = stickers.chunks(face_len).collect_vec();
    let face_row = |face: usize, row: usize| {
        faces
            .get(face)
            .and_then(|face| face.get(row * edge_length..(row + 1) * edge_length))
            .unwrap_or_default()
    };

    // Each net row: whether it is indented past the L face, and its stickers.
    let mut net_rows: Vec<(bool, Vec<char>)> = vec![];
    for row in 0..edge_length {
        net_rows.push((true, face_row(Face::U as usize, row).to_vec()));
    }
    for row in 0..edge_length {
        let side = [Face::L, Face::F, Face::R, Face::B]
            .iter()
            .flat_map(|&face| face_row(face as usize, row).iter().copied())
            .collect_vec();
        net_rows.push((false, side));
    }
    for row in 0..edge_length {
        net_rows.push((true, face_row(Face::D as usize, row).to_vec()));
    }

    let (rows_per_cell, columns_per_cell) = mode.cell_size();
    let indent = " ".repeat(columns_per_cell * edge_length);
    let text_row = rows_per_cell / 2;

    net_rows
        .iter()
        .flat_map(|(indented, cells)| {
            let indent = if *indented { indent.as_str() } else { "" };
            (0..rows_per_cell).map(move |line| {
                let painted = cells
                    .iter()
                    .map(|&symbol| paint_cell(symbol, mode, line == text_row))
                    .join("");
                format!("{indent}{painted}")
            })
        })
        .join("\n")
}
