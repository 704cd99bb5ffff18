use crate::*;

/// Receives notifications from a [`GameEngine`] as the game moves along.
///
/// All methods default to doing nothing, so a view only implements what it renders.
pub trait GameView {
    fn on_game_started(&mut self, _grid: &Grid) {}

    /// Called by the front end before it waits for the next move.
    fn on_turn_started(&mut self, _grid: &Grid) {}

    fn on_cells_updated(&mut self, _grid: &Grid) {}

    fn on_mine_hit(&mut self, _grid: &Grid) {}

    fn on_game_won(&mut self, _grid: &Grid) {}

    /// A move was rejected and nothing changed.
    fn on_invalid_move(&mut self) {}
}

/// View that ignores every notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullView;

impl GameView for NullView {}

impl<V: GameView + ?Sized> GameView for &mut V {
    fn on_game_started(&mut self, grid: &Grid) {
        (**self).on_game_started(grid)
    }

    fn on_turn_started(&mut self, grid: &Grid) {
        (**self).on_turn_started(grid)
    }

    fn on_cells_updated(&mut self, grid: &Grid) {
        (**self).on_cells_updated(grid)
    }

    fn on_mine_hit(&mut self, grid: &Grid) {
        (**self).on_mine_hit(grid)
    }

    fn on_game_won(&mut self, grid: &Grid) {
        (**self).on_game_won(grid)
    }

    fn on_invalid_move(&mut self) {
        (**self).on_invalid_move()
    }
}
