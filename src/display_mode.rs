/// Windowed vs. fullscreen presentation.
///
/// Toggling the mode only changes how much of the terminal the arena covers;
/// the session is told about the new dimensions through `resize_arena`.

use crate::config::{ARENA_HEIGHT, ARENA_WIDTH, CELL_HEIGHT, CELL_WIDTH};
use crate::entities::Arena;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Fixed 1000x700 arena.
    Windowed,
    /// Arena sized to the whole terminal.
    Fullscreen,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Windowed => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Windowed,
        }
    }

    /// Arena dimensions for this mode on a terminal of `cols` x `rows` cells.
    pub fn arena(self, cols: u16, rows: u16) -> Arena {
        match self {
            DisplayMode::Windowed => Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
            DisplayMode::Fullscreen => {
                Arena::new(f32::from(cols) * CELL_WIDTH, f32::from(rows) * CELL_HEIGHT)
            }
        }
    }
}
