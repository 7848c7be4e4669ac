use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// How mines get scattered over the flattened grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Partial Fisher-Yates over every cell index, bounded by the cell count.
    #[default]
    Shuffle,
    /// Pick random cells until enough distinct ones are mined, slows down on dense boards.
    Rejection,
}
