use super::board::Board;

/// Steps on the sun track; the game is lost when the sun reaches the
/// final step.
pub const SUN_TRACK: usize = 14;
pub const MIN_OWLS: usize = 3;
pub const MAX_OWLS: usize = 6;

/// Static game configuration: the track plus the sun-track length.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub board: Board,
    pub sun_track: usize,
}

impl GameConfig {
    pub fn new(board: Board, sun_track: usize) -> Self {
        debug_assert!(sun_track >= 1);
        Self { board, sun_track }
    }

    /// Final sun step; reaching it ends the game as a loss.
    pub fn sun_max(&self) -> u8 {
        (self.sun_track - 1) as u8
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Board::standard().clone(), SUN_TRACK)
    }
}
