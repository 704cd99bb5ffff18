use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::*;

/// Rectangular grid of cells addressed by `(row, col)`.
///
/// Every query is total: positions outside the grid answer with `None`, `false` or `0` instead of panicking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(layout: MineLayout) -> Self {
        Self {
            cells: layout.mine_mask().map(|&mined| Cell::new(mined)),
        }
    }

    pub fn from_mine_coords(rows: CellCount, cols: CellCount, mine_coords: &[Coord2]) -> Result<Self> {
        MineLayout::from_mine_coords((rows, cols), mine_coords).map(Self::new)
    }

    pub fn rows(&self) -> CellCount {
        self.cells.nrows()
    }

    pub fn cols(&self) -> CellCount {
        self.cells.ncols()
    }

    pub fn size(&self) -> Size2 {
        self.cells.dim()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mined()).count()
    }

    pub fn has_cell_at(&self, row: Coord, col: Coord) -> bool {
        self.index_of(row, col).is_some()
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Option<Cell> {
        self.index_of(row, col).map(|index| self.cells[index])
    }

    pub fn cell_state_at(&self, row: Coord, col: Coord) -> Option<CellState> {
        self.cell_at(row, col).map(Cell::state)
    }

    /// Returns `false` without doing anything when the position is outside the grid.
    pub fn set_cell_state(&mut self, row: Coord, col: Coord, state: CellState) -> bool {
        match self.index_of(row, col) {
            Some(index) => {
                self.cells[index].set_state(state);
                true
            }
            None => false,
        }
    }

    pub fn has_mine_at(&self, row: Coord, col: Coord) -> bool {
        self.cell_at(row, col).is_some_and(Cell::is_mined)
    }

    pub fn mined_neighbour_count(&self, row: Coord, col: Coord) -> u8 {
        self.index_of(row, col)
            .map_or(0, |index| self.count_mined_neighbors(index))
    }

    /// Uncovers the cell at `(row, col)` and spreads out from it.
    ///
    /// Every safe, unflagged neighbour of a visited cell is uncovered, and neighbours without mined neighbours of
    /// their own are visited in turn. Flagged cells are never uncovered, neither as the target nor while spreading.
    ///
    /// Returns `false` only when the target holds a mine, in which case that single cell is uncovered.
    pub fn uncover_from(&mut self, row: Coord, col: Coord) -> bool {
        let Some(start) = self.index_of(row, col) else {
            return true;
        };

        let cell = self.cells[start];
        match (cell.state(), cell.is_mined()) {
            (CellState::Flagged, _) => {
                log::trace!("Flagged cell at {:?} left alone", (row, col));
                true
            }
            (_, true) => {
                self.cells[start].set_state(CellState::Uncovered);
                log::debug!("Uncovered mine at {:?}", (row, col));
                false
            }
            (CellState::Uncovered, false) => true,
            (CellState::Covered, false) => {
                self.flood_fill(start);
                true
            }
        }
    }

    /// How many safe cells are still to be uncovered, a value `<= 0` means all of them are.
    pub fn remaining_safe_cells(&self) -> isize {
        let uncovered = self.count_in_state(CellState::Uncovered);
        self.cells.len() as isize - self.mine_count() as isize - uncovered as isize
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_in_state(CellState::Flagged)
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        self.mine_count() as isize - self.flagged_count() as isize
    }

    fn flood_fill(&mut self, start: [usize; 2]) {
        let mut visited = HashSet::from([start]);
        let mut to_visit = vec![start];

        while let Some(index) = to_visit.pop() {
            self.cells[index].set_state(CellState::Uncovered);
            log::trace!("Flood uncovered cell at {:?}", to_coords(index));

            for pos in self.neighbor_indices(index) {
                let neighbor = self.cells[pos];
                if !neighbor.is_mined() && !neighbor.state().is_flagged() {
                    self.cells[pos].set_state(CellState::Uncovered);
                }
            }

            for pos in self.neighbor_indices(index) {
                let neighbor = self.cells[pos];
                if neighbor.is_mined() || neighbor.state().is_flagged() {
                    continue;
                }

                if self.count_mined_neighbors(pos) == 0 && visited.insert(pos) {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!(
            "Flood fill from {:?} visited {} cells",
            to_coords(start),
            visited.len()
        );
    }

    fn count_in_state(&self, state: CellState) -> CellCount {
        self.cells.iter().filter(|cell| cell.state() == state).count()
    }

    fn count_mined_neighbors(&self, index: [usize; 2]) -> u8 {
        self.neighbor_indices(index)
            .filter(|&pos| self.cells[pos].is_mined())
            .count() as u8
    }

    fn neighbor_indices(&self, index: [usize; 2]) -> impl Iterator<Item = [usize; 2]> + use<> {
        let size = self.size();
        self.cells
            .iter_neighbors(to_coords(index))
            .filter_map(move |pos| pos.to_nd_index(size))
    }

    fn index_of(&self, row: Coord, col: Coord) -> Option<[usize; 2]> {
        (row, col).to_nd_index(self.size())
    }
}
