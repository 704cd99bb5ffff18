use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod render;
mod types;
mod view;

/// Grid dimensions and mine count, only built through [`GameConfig::new`] or the presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigParts")]
pub struct GameConfig {
    rows: CellCount,
    cols: CellCount,
    mines: CellCount,
}

#[derive(Deserialize)]
struct ConfigParts {
    rows: CellCount,
    cols: CellCount,
    mines: CellCount,
}

impl TryFrom<ConfigParts> for GameConfig {
    type Error = GameError;

    fn try_from(parts: ConfigParts) -> Result<Self> {
        Self::new(parts.rows, parts.cols, parts.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: CellCount, cols: CellCount, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: CellCount, cols: CellCount, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            log::warn!("Rejected {}x{} grid", rows, cols);
            return Err(GameError::InvalidSize);
        }

        let config = Self::new_unchecked(rows, cols, mines);
        if mines > config.total_cells() {
            log::warn!(
                "Rejected {} mines, a {}x{} grid only fits {}",
                mines,
                rows,
                cols,
                config.total_cells()
            );
            return Err(GameError::TooManyMines);
        }

        Ok(config)
    }

    /// 10x10 with 10 mines.
    pub const fn beginner() -> Self {
        Self::new_unchecked(10, 10, 10)
    }

    /// 16x16 with 40 mines.
    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn rows(&self) -> CellCount {
        self.rows
    }

    pub const fn cols(&self) -> CellCount {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Size2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.rows.saturating_mul(self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Where the mines are, fixed for the lifetime of a game.
///
/// Serialized as the bare mine mask, the count is always recomputed from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Array2<bool>", into = "Array2<bool>")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly the given positions, duplicates collapse.
    pub fn from_mine_coords(size: Size2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size);
        for &coords in mine_coords {
            let index = coords
                .to_nd_index(size)
                .ok_or(GameError::InvalidCoords)?;
            mine_mask[index] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Size2 {
        self.mine_mask.dim()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// `false` for positions outside the layout.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        coords
            .to_nd_index(self.size())
            .is_some_and(|index| self.mine_mask[index])
    }

    pub(crate) fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl From<Array2<bool>> for MineLayout {
    fn from(mine_mask: Array2<bool>) -> Self {
        Self::from_mine_mask(mine_mask)
    }
}

impl From<MineLayout> for Array2<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.mine_mask
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether the move was accepted and changed the grid
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UncoverOutcome {
    NoChange,
    Uncovered,
    HitMine,
    Won,
}

impl UncoverOutcome {
    /// Whether the move was accepted and changed the grid
    pub const fn has_update(self) -> bool {
        use UncoverOutcome::*;
        match self {
            NoChange => false,
            Uncovered => true,
            HitMine => true,
            Won => true,
        }
    }
}
