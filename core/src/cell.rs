use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Player-visible state of a cell as stored by the reveal engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCell {
    #[default]
    Hidden,
    /// Safe cell shown with its adjacent mine count.
    Revealed(u8),
    /// Mine that was revealed and ended the game.
    Detonated,
}

impl EngineCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        !self.is_hidden()
    }
}

/// Full description of one grid position: its layout facts plus whether it is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub is_mine: bool,
    /// Meaningless for mine cells.
    pub adjacent_count: u8,
    pub revealed: bool,
}
