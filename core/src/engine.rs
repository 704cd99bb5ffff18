use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Represents one game from start to finish, reporting to `V` as it goes.
#[derive(Clone, Debug)]
pub struct GameEngine<V> {
    grid: Grid,
    status: GameStatus,
    started_at: DateTime<Utc>,
    view: V,
}

impl<V: GameView> GameEngine<V> {
    /// Starts a game with freshly randomized mines.
    pub fn new(config: GameConfig, view: V) -> Self {
        Self::with_generator(config, RandomMineGenerator::from_entropy(), view)
    }

    pub fn with_seed(config: GameConfig, seed: u64, view: V) -> Self {
        Self::with_generator(config, RandomMineGenerator::new(seed), view)
    }

    pub fn with_generator<G: MineGenerator>(config: GameConfig, generator: G, view: V) -> Self {
        Self::with_layout(generator.generate(config), view)
    }

    pub fn with_layout(layout: MineLayout, mut view: V) -> Self {
        let grid = Grid::new(layout);
        let started_at = Utc::now();
        log::debug!(
            "Game started at {} on a {}x{} grid with {} mines",
            started_at,
            grid.rows(),
            grid.cols(),
            grid.mine_count()
        );
        view.on_game_started(&grid);

        Self {
            grid,
            status: GameStatus::default(),
            started_at,
            view,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn cell_state_at(&self, row: Coord, col: Coord) -> Option<CellState> {
        self.grid.cell_state_at(row, col)
    }

    pub fn has_mine_at(&self, row: Coord, col: Coord) -> bool {
        self.grid.has_mine_at(row, col)
    }

    pub fn mined_neighbour_count(&self, row: Coord, col: Coord) -> u8 {
        self.grid.mined_neighbour_count(row, col)
    }

    pub fn remaining_safe_cells(&self) -> isize {
        self.grid.remaining_safe_cells()
    }

    /// Lets the view know a new turn begins.
    pub fn begin_turn(&mut self) {
        self.view.on_turn_started(&self.grid);
    }

    /// Uncover a covered cell, returns whether the move was accepted.
    pub fn uncover_cell(&mut self, row: Coord, col: Coord) -> bool {
        self.uncover(row, col).has_update()
    }

    /// Flag a covered cell or unflag a flagged one, returns whether the move was accepted.
    pub fn flag_cell(&mut self, row: Coord, col: Coord) -> bool {
        self.flag(row, col).has_update()
    }

    pub fn uncover(&mut self, row: Coord, col: Coord) -> UncoverOutcome {
        use UncoverOutcome::*;

        let covered = self.grid.cell_state_at(row, col).is_some_and(CellState::is_covered);
        if !self.status.is_in_progress() || !covered {
            self.reject("uncover", (row, col));
            return NoChange;
        }

        let outcome = if !self.grid.uncover_from(row, col) {
            self.end_game(GameStatus::Lost);
            HitMine
        } else if self.grid.remaining_safe_cells() <= 0 {
            self.end_game(GameStatus::Won);
            Won
        } else {
            log::debug!(
                "Uncovered from {:?}, {} safe cells left",
                (row, col),
                self.grid.remaining_safe_cells()
            );
            Uncovered
        };

        self.view.on_cells_updated(&self.grid);
        match outcome {
            HitMine => self.view.on_mine_hit(&self.grid),
            Won => self.view.on_game_won(&self.grid),
            _ => {}
        }

        outcome
    }

    pub fn flag(&mut self, row: Coord, col: Coord) -> FlagOutcome {
        use GameStatus::InProgress;

        let (next_state, outcome) = match (self.status, self.grid.cell_state_at(row, col)) {
            (InProgress, Some(CellState::Covered)) => (CellState::Flagged, FlagOutcome::Flagged),
            (InProgress, Some(CellState::Flagged)) => (CellState::Covered, FlagOutcome::Unflagged),
            _ => {
                self.reject("flag", (row, col));
                return FlagOutcome::NoChange;
            }
        };

        self.grid.set_cell_state(row, col, next_state);
        log::debug!("{:?} cell at {:?}", outcome, (row, col));
        self.view.on_cells_updated(&self.grid);

        outcome
    }

    fn reject(&mut self, action: &str, coords: Coord2) {
        log::debug!(
            "Rejected {} at {:?}, status {:?}, cell {:?}",
            action,
            coords,
            self.status,
            self.grid.cell_state_at(coords.0, coords.1)
        );
        self.view.on_invalid_move();
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        log::debug!(
            "Game ended {:?} after {}s",
            status,
            (Utc::now() - self.started_at).num_seconds()
        );
    }
}
