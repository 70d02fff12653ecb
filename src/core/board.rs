use super::card::Color;
use lazy_static::lazy_static;

/// One cell of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Color(Color),
    Nest,
}

/// The race track: a run of colored cells ending in the nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

lazy_static! {
    /// The standard 40-cell track, transcribed from the physical board.
    static ref STANDARD: Board = {
        use Color::*;
        Board::new(&[
            Yellow, Green, Orange, Blue, Purple, Red, Blue, Purple,
            Red, Yellow, Green, Blue, Orange, Red, Purple, Yellow,
            Green, Orange, Blue, Purple, Red, Green, Yellow, Orange,
            Blue, Purple, Red, Yellow, Green, Blue, Orange, Red,
            Purple, Yellow, Green, Blue, Orange, Red, Purple,
        ])
    };
}

impl Board {
    /// Build a track from its colored cells; the nest is appended as the
    /// final cell.
    pub fn new(colors: &[Color]) -> Self {
        // Positions must pack into six bits.
        debug_assert!(colors.len() < 64);
        let mut cells: Vec<Cell> = colors.iter().copied().map(Cell::Color).collect();
        cells.push(Cell::Nest);
        Self { cells }
    }

    pub fn standard() -> &'static Board {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the nest, always the last cell.
    pub fn nest(&self) -> u8 {
        (self.cells.len() - 1) as u8
    }

    pub fn cell(&self, idx: u8) -> Cell {
        self.cells[idx as usize]
    }

    /// Landing cell for an owl at `from` flying on `color`: the first cell
    /// past `from` of that color not held by another owl, or the nest,
    /// whichever comes first. Held cells are skipped, never landed on; the
    /// nest holds any number of owls. `None` only when `from` is already
    /// the nest.
    pub fn destination(&self, from: u8, color: Color, occupied: &[u8]) -> Option<u8> {
        for idx in from + 1..self.len() as u8 {
            match self.cell(idx) {
                Cell::Nest => return Some(idx),
                Cell::Color(c) if c == color && !occupied.contains(&idx) => return Some(idx),
                _ => {}
            }
        }
        None
    }
}
