use core::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a frontend needs to draw the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub status: GameStatus,
    pub cells: Array2<EngineCell>,
}

impl BoardView {
    pub fn from_engine(engine: &RevealEngine) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            engine.cell_at((row as Coord, col as Coord))
        });

        Self {
            size,
            status: engine.status(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                let symbol = match cell {
                    EngineCell::Hidden => '#',
                    EngineCell::Revealed(0) => '.',
                    EngineCell::Revealed(count) => {
                        char::from_digit(count.into(), 10).unwrap_or('?')
                    }
                    EngineCell::Detonated => '*',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
