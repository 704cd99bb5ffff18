use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Uncovered,
    Flagged,
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// A single grid cell. Whether it is mined is fixed when the grid is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mined: bool,
    state: CellState,
}

impl Cell {
    pub const fn new(mined: bool) -> Self {
        Self {
            mined,
            state: CellState::Covered,
        }
    }

    pub const fn is_mined(self) -> bool {
        self.mined
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}
