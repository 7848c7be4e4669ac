use alloc::vec::Vec;

use super::*;

/// Purely random generation, reproducible from the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            placement: Placement::default(),
        }
    }

    pub fn with_placement(self, placement: Placement) -> Self {
        Self { placement, ..self }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let (rows, cols) = config.size;

        match self.placement {
            Placement::Shuffle => {
                let total = usize::from(config.total_cells());
                let wanted = usize::from(config.mines);
                let mut indices: Vec<usize> = (0..total).collect();
                for i in 0..wanted {
                    let j = rng.random_range(i..total);
                    indices.swap(i, j);
                }
                let cols = usize::from(cols);
                for &index in &indices[..wanted] {
                    mines[[index / cols, index % cols]] = true;
                }
            }
            Placement::Rejection => {
                // terminates since a valid config always leaves a free cell
                let mut mines_placed = 0;
                while mines_placed < config.mines {
                    let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
                    let cell = &mut mines[coords.to_nd_index()];
                    if !*cell {
                        *cell = true;
                        mines_placed += 1;
                    }
                }
            }
        }

        let board = Board::from_mine_mask(mines)?;

        debug_assert_eq!(board.mine_count(), config.mines);
        log::debug!(
            "Generated {}x{} board with {} mines ({:?}, seed {})",
            rows,
            cols,
            board.mine_count(),
            self.placement,
            self.seed
        );

        Ok(board)
    }
}
