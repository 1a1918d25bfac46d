// Wordtrace – A daily word search game
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use serde::{Serialize, Deserialize};
use super::letter_grid::LetterGrid;

#[derive(
    Clone, Copy, Debug,
    PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    // Two cells are adjacent if they touch horizontally, vertically or
    // diagonally. A cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.row.abs_diff(other.row) <= 1
            && self.col.abs_diff(other.col) <= 1
            && *self != other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    // The cell was added to the end of the path
    Extended,
    // The last cell was removed, either by selecting it again or by
    // stepping back onto the cell before it
    Shortened,
    // The selection broke a rule and the path is unchanged
    Rejected,
}

// The sequence of cells that the player has selected so far for the
// word they are building. Consecutive cells are always adjacent and no
// cell appears twice.
#[derive(Clone, Debug, Default)]
pub struct SelectionPath {
    cells: Vec<Cell>,
}

impl SelectionPath {
    pub fn new() -> SelectionPath {
        SelectionPath { cells: Vec::new() }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn select(&mut self, cell: Cell) -> SelectOutcome {
        let Some(&last) = self.cells.last() else {
            // The first cell of a path can be anything
            self.cells.push(cell);
            return SelectOutcome::Extended;
        };

        // Selecting the last cell again undoes it
        if cell == last {
            self.cells.pop();
            return SelectOutcome::Shortened;
        }

        // Stepping back onto the cell before the last one also undoes
        // the last cell
        if self.cells.len() > 1 && cell == self.cells[self.cells.len() - 2] {
            self.cells.pop();
            return SelectOutcome::Shortened;
        }

        if self.cells.contains(&cell) || !cell.is_adjacent(last) {
            SelectOutcome::Rejected
        } else {
            self.cells.push(cell);
            SelectOutcome::Extended
        }
    }

    // The word that the path spells out on the grid
    pub fn word(&self, grid: &LetterGrid) -> String {
        self.cells
            .iter()
            .map(|cell| grid.letter(cell.row, cell.col))
            .collect()
    }
}
