use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Writes `mark` into an empty on-board cell. Returns false and leaves the
    /// board untouched otherwise, so a set cell is never overwritten.
    pub fn set(&mut self, pos: Position, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = mark;
        true
    }

    /// Copy of the board with `mark` placed at `pos`.
    pub fn with_move(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.set(pos, mark);
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn move_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = row.iter().map(|cell| format!(" {} ", cell.symbol())).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
