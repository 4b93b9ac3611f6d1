use std::iter::FusedIterator;

use super::error::MoveError;
use super::types::{BOARD_SIZE, Cell, Mark, Position, Snapshot, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Snapshot,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(cells: Snapshot) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = Snapshot::default();
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Marks an empty cell. Range is checked before occupancy.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if !Position::new(row, col).is_on_board() {
            return Err(MoveError::OutOfRange { row, col });
        }

        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }

        *cell = Cell::Marked(mark);
        Ok(())
    }

    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells::new(&self.cells)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|line| line.mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }
}

/// Row-major walk over the empty cells of a grid. Clone it, or ask the board
/// again, to restart the walk.
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    cells: &'a Snapshot,
    index: usize,
}

impl<'a> EmptyCells<'a> {
    pub(crate) fn new(cells: &'a Snapshot) -> Self {
        Self { cells, index: 0 }
    }
}

impl Iterator for EmptyCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.index < BOARD_SIZE * BOARD_SIZE {
            let position = Position::new(self.index / BOARD_SIZE, self.index % BOARD_SIZE);
            self.index += 1;
            if self.cells[position.row][position.col].is_empty() {
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(BOARD_SIZE * BOARD_SIZE - self.index))
    }
}

impl FusedIterator for EmptyCells<'_> {}
