use core::str::FromStr;
use minesweeper_core::{Coord, Coord2};
use thiserror::Error;

/// A move typed at the prompt. Positions are typed column first, `flag <column> <row>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Flag { row: Coord, col: Coord },
    Uncover { row: Coord, col: Coord },
    Help,
    Quit,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unrecognised command")]
    Unrecognised,
    #[error("Expected 'flag <column> <row>'")]
    MalformedFlag,
    #[error("Expected 'uncover <column> <row>'")]
    MalformedUncover,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((word, args)) = tokens.split_first() else {
            return Err(CommandError::Unrecognised);
        };

        match word.to_lowercase().as_str() {
            "flag" => parse_position(args)
                .map(|(row, col)| Command::Flag { row, col })
                .ok_or(CommandError::MalformedFlag),
            "uncover" => parse_position(args)
                .map(|(row, col)| Command::Uncover { row, col })
                .ok_or(CommandError::MalformedUncover),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err(CommandError::Unrecognised),
        }
    }
}

fn parse_position(args: &[&str]) -> Option<Coord2> {
    let [col, row] = args else {
        return None;
    };
    Some((row.parse().ok()?, col.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_column_then_row() {
        assert_eq!("flag 4 8".parse::<Command>(), Ok(Command::Flag { row: 8, col: 4 }));
        assert_eq!("uncover 0 3".parse::<Command>(), Ok(Command::Uncover { row: 3, col: 0 }));
    }

    #[test]
    fn command_words_ignore_case_and_spacing() {
        assert_eq!("  UNCOVER   1\t2 ".parse::<Command>(), Ok(Command::Uncover { row: 2, col: 1 }));
        assert_eq!("Help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn negative_positions_parse_and_are_left_to_the_engine() {
        assert_eq!("flag -1 0".parse::<Command>(), Ok(Command::Flag { row: 0, col: -1 }));
    }

    #[test]
    fn wrong_argument_counts_are_malformed() {
        assert_eq!("flag 1".parse::<Command>(), Err(CommandError::MalformedFlag));
        assert_eq!("flag 1 2 3".parse::<Command>(), Err(CommandError::MalformedFlag));
        assert_eq!("uncover".parse::<Command>(), Err(CommandError::MalformedUncover));
    }

    #[test]
    fn non_integer_positions_are_malformed() {
        assert_eq!("flag a 2".parse::<Command>(), Err(CommandError::MalformedFlag));
        assert_eq!("uncover 1 2.5".parse::<Command>(), Err(CommandError::MalformedUncover));
    }

    #[test]
    fn empty_or_unknown_input_is_unrecognised() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Unrecognised));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Unrecognised));
        assert_eq!("dig 1 2".parse::<Command>(), Err(CommandError::Unrecognised));
    }
}
