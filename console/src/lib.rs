use minesweeper_core::{GameEngine, GameStatus};
use std::io::{self, BufRead, Write};

pub use command::*;
pub use view::*;

mod command;
mod view;

/// Why a console session stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
    EndOfInput,
}

/// Reads moves line by line from `input` until the game ends, the player quits or input runs out.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine<ConsoleView<W>>,
    input: R,
) -> io::Result<SessionEnd> {
    let mut lines = input.lines();

    while !engine.is_finished() {
        engine.begin_turn();

        let Some(line) = lines.next() else {
            return Ok(SessionEnd::EndOfInput);
        };
        let line = line?;
        log::debug!("Read move {:?}", line);

        match line.parse::<Command>() {
            Ok(Command::Flag { row, col }) => {
                engine.flag_cell(row, col);
            }
            Ok(Command::Uncover { row, col }) => {
                engine.uncover_cell(row, col);
            }
            Ok(Command::Help) => engine.view_mut().help(),
            Ok(Command::Quit) => return Ok(SessionEnd::Quit),
            Err(err) => {
                log::debug!("Could not parse move: {}", err);
                engine.view_mut().report(&err);
            }
        }
    }

    Ok(match engine.status() {
        GameStatus::Won => SessionEnd::Won,
        _ => SessionEnd::Lost,
    })
}
