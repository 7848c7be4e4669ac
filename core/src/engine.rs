use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Message shown once the game has ended.
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::Lost => Some("You Lost!"),
            Self::Won => Some("Congratulations! You Won!"),
        }
    }
}

/// Cells newly shown by one reveal call, in the order they were opened, plus the resulting status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub revealed: Vec<Coord2>,
    pub status: GameStatus,
}

impl RevealResult {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            revealed: Vec::new(),
            status,
        }
    }

    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty()
    }

    pub fn outcome(&self) -> RevealOutcome {
        match (self.has_update(), self.status) {
            (false, _) => RevealOutcome::NoChange,
            (true, GameStatus::Lost) => RevealOutcome::HitMine,
            (true, GameStatus::Won) => RevealOutcome::Won,
            (true, GameStatus::InProgress) => RevealOutcome::Revealed,
        }
    }
}

/// Owns one game's board and visible state.
///
/// Decoding with serde skips all checks; call [`RevealEngine::validate`] before using a decoded engine, otherwise
/// mismatched grids make the accessors panic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealEngine {
    board: Board,
    cells: Array2<EngineCell>,
    revealed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl RevealEngine {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            cells: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.board.safe_cell_count() - self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(Cell {
            coords,
            is_mine: self.board.contains_mine(coords),
            adjacent_count: self.board.adjacent_mine_count(coords),
            revealed: self.cell_at(coords).is_revealed(),
        })
    }

    /// Reveals `coords`, cascading through zero-count cells.
    ///
    /// Revealing after the game ended or revealing an already shown cell is a no-op with an empty change-set.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.board.validate_coords(coords)?;

        if self.status.is_finished() || self.cell_at(coords).is_revealed() {
            log::trace!("reveal {:?} ignored", coords);
            return Ok(RevealResult::unchanged(self.status));
        }

        if self.board.contains_mine(coords) {
            self.cells[coords.to_nd_index()] = EngineCell::Detonated;
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return Ok(RevealResult {
                revealed: Vec::from([coords]),
                status: self.status,
            });
        }

        let revealed = self.flood_reveal(coords);
        log::trace!("reveal {:?} opened {} cells", coords, revealed.len());

        if self.revealed_count == self.board.safe_cell_count() {
            self.end_game(GameStatus::Won);
        }

        Ok(RevealResult {
            revealed,
            status: self.status,
        })
    }

    /// Opens `start` and, breadth first, every hidden cell reachable through zero-count cells.
    fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if self.cell_at(coords).is_revealed() {
                continue;
            }

            // only neighbors of zero-count cells are queued, so a mine here means a corrupt board
            let has_mine = self.board.contains_mine(coords);
            debug_assert!(!has_mine, "cascade reached mine at {:?}", coords);
            if has_mine {
                continue;
            }

            let adjacent_mines = self.board.adjacent_mine_count(coords);
            self.cells[coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
            self.revealed_count += 1;
            revealed.push(coords);

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| self.cell_at(pos).is_hidden()),
                );
            }
        }

        revealed
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        log::debug!(
            "Game ended {:?} with {}/{} safe cells revealed",
            status,
            self.revealed_count,
            self.board.safe_cell_count()
        );
        self.status = status;
    }

    /// Checks that the visible state agrees with the board, for engines restored from storage.
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;

        let (rows, cols) = self.board.size();
        if self.cells.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut revealed_safe: CellCount = 0;
        for ((row, col), &cell) in self.cells.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            let consistent = match cell {
                EngineCell::Hidden => true,
                EngineCell::Revealed(count) => {
                    revealed_safe += 1;
                    !self.board.contains_mine(coords)
                        && count == self.board.adjacent_mine_count(coords)
                }
                EngineCell::Detonated => {
                    self.board.contains_mine(coords) && self.triggered_mine == Some(coords)
                }
            };
            if !consistent {
                return Err(GameError::InvalidBoardShape);
            }
        }

        let status_consistent = match self.status {
            GameStatus::InProgress => {
                self.triggered_mine.is_none() && revealed_safe < self.board.safe_cell_count()
            }
            GameStatus::Lost => self.triggered_mine.is_some_and(|pos| {
                self.board.validate_coords(pos).is_ok() && self.cell_at(pos) == EngineCell::Detonated
            }),
            GameStatus::Won => {
                self.triggered_mine.is_none() && revealed_safe == self.board.safe_cell_count()
            }
        };
        if revealed_safe != self.revealed_count || !status_consistent {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(())
    }
}
