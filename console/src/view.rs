use minesweeper_core::{GameView, Grid};
use std::fmt;
use std::io::Write;

use crate::CommandError;

const HELP: &str = "\
Help:

There are four commands you can enter at each move:
'flag', 'uncover', 'help' and 'quit'.

flag: 'flag <column> <row>'
Mark a cell as containing a mine, or remove the mark again.

uncover: 'uncover <column> <row>'
Uncover a cell. Once uncovered, the cell shows how many neighbouring cells contain a mine.

help: 'help'
Displays this message.

quit: 'quit'
Exits the game.

";

const UNRECOGNISED: &str = "\
Sorry, I don't recognise that command.
The moves you can make are:
 - flag <column> <row>
 - uncover <column> <row>
 - help
 - quit

For more information, type 'help'

";

/// Text view writing to any [`Write`] sink, normally stdout.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn help(&mut self) {
        self.emit(format_args!("{HELP}"));
    }

    /// Explains why a typed line was not understood.
    pub fn report(&mut self, err: &CommandError) {
        match err {
            CommandError::Unrecognised => self.emit(format_args!("{UNRECOGNISED}")),
            CommandError::MalformedFlag => self.malformed("flag"),
            CommandError::MalformedUncover => self.malformed("uncover"),
        }
    }

    fn malformed(&mut self, command: &str) {
        self.emit(format_args!(
            "Sorry, the command you entered appears to be incorrectly formatted.\n\
             The expected format for {command} commands is:\n\
             {command} <column> <row>, e.g. '{command} 4 8'\n\n"
        ));
    }

    fn emit(&mut self, text: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(text).and_then(|()| self.out.flush()) {
            log::error!("Could not write to console: {:?}", err);
        }
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn on_game_started(&mut self, _grid: &Grid) {
        self.emit(format_args!("Welcome to Minesweeper!\n\n"));
    }

    fn on_turn_started(&mut self, grid: &Grid) {
        self.emit(format_args!(
            "{grid}Mines left: {}\nPlease enter your move:\n> ",
            grid.mines_left()
        ));
    }

    fn on_mine_hit(&mut self, grid: &Grid) {
        self.emit(format_args!("\n{grid}A mine was hit!\nGame over.\n\n"));
    }

    fn on_game_won(&mut self, grid: &Grid) {
        self.emit(format_args!("\n{grid}You win!\n\n"));
    }

    fn on_invalid_move(&mut self) {
        self.emit(format_args!(
            "That move is not allowed, only covered cells can be uncovered and uncovered cells cannot be flagged.\n\n"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn turn_shows_board_and_prompt() {
        let grid = Grid::from_mine_coords(1, 2, &[(0, 0)]).unwrap();
        let mut view = ConsoleView::new(Vec::new());

        view.on_turn_started(&grid);

        assert_eq!(
            output(view),
            "  0 1\n +---\n0|   \nMines left: 1\nPlease enter your move:\n> "
        );
    }

    #[test]
    fn mine_hit_and_win_messages() {
        let grid = Grid::from_mine_coords(1, 1, &[]).unwrap();
        let mut view = ConsoleView::new(Vec::new());

        view.on_mine_hit(&grid);
        view.on_game_won(&grid);

        let text = output(view);
        assert!(text.contains("A mine was hit!\nGame over.\n"));
        assert!(text.ends_with("You win!\n\n"));
    }

    #[test]
    fn malformed_commands_show_expected_format() {
        let mut view = ConsoleView::new(Vec::new());

        view.report(&CommandError::MalformedUncover);

        assert!(output(view).contains("uncover <column> <row>, e.g. 'uncover 4 8'"));
    }

    #[test]
    fn unrecognised_commands_list_moves() {
        let mut view = ConsoleView::new(Vec::new());

        view.report(&CommandError::Unrecognised);

        let text = output(view);
        assert!(text.starts_with("Sorry, I don't recognise that command."));
        assert!(text.contains(" - flag <column> <row>\n"));
    }

    #[test]
    fn cell_updates_print_nothing() {
        let grid = Grid::from_mine_coords(2, 2, &[]).unwrap();
        let mut view = ConsoleView::new(Vec::new());

        view.on_cells_updated(&grid);

        assert!(output(view).is_empty());
    }
}
