//! Parsing of typed shell commands.
use std::str::FromStr;

use cat_core::{Point, Position};

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// `<col> <row>`: block a cell by board coordinates.
    Block(Position),
    /// `px <x> <y>`: block whatever cell sits under a canvas point.
    Pixel(Point),
    /// `hint`: show the route the cat would take now.
    Hint,
    /// `reset [seed]`: new board of the current size.
    Reset(Option<u64>),
    /// `size <n> [seed]`: new board with a different size.
    Size { size: u32, seed: Option<u64> },
    /// `board`: redraw the board.
    Board,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{value}` is not a valid {what}")]
    InvalidNumber { value: String, what: &'static str },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => no_args(args, "quit", Command::Quit),
            "h" | "help" | "?" => no_args(args, "help", Command::Help),
            "hint" => no_args(args, "hint", Command::Hint),
            "b" | "board" => no_args(args, "board", Command::Board),
            "r" | "reset" => match args {
                [] => Ok(Command::Reset(None)),
                [seed] => Ok(Command::Reset(Some(number(seed, "seed")?))),
                _ => Err(usage("reset", "an optional seed")),
            },
            "size" => match args {
                [size] => Ok(Command::Size {
                    size: number(size, "board size")?,
                    seed: None,
                }),
                [size, seed] => Ok(Command::Size {
                    size: number(size, "board size")?,
                    seed: Some(number(seed, "seed")?),
                }),
                _ => Err(usage("size", "a board size and an optional seed")),
            },
            "px" => match args {
                [x, y] => Ok(Command::Pixel(Point::new(
                    number(x, "pixel coordinate")?,
                    number(y, "pixel coordinate")?,
                ))),
                _ => Err(usage("px", "two pixel coordinates")),
            },
            _ => match words.as_slice() {
                [col, row] if looks_numeric(col) => Ok(Command::Block(Position::new(
                    number(col, "column")?,
                    number(row, "row")?,
                ))),
                _ => Err(CommandError::Unknown(head.to_string())),
            },
        }
    }
}

fn no_args(args: &[&str], command: &'static str, parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(usage(command, "no arguments"))
    }
}

fn usage(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::Usage { command, expected }
}

fn number<T: FromStr>(value: &str, what: &'static str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
        what,
    })
}

fn looks_numeric(word: &str) -> bool {
    word.trim_start_matches('-')
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_coordinates() {
        assert_eq!(
            "3 7".parse::<Command>(),
            Ok(Command::Block(Position::new(3, 7)))
        );
        assert_eq!(
            "  -1   0 ".parse::<Command>(),
            Ok(Command::Block(Position::new(-1, 0)))
        );
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("hint".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("QUIT".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset(None)));
        assert_eq!("reset 42".parse::<Command>(), Ok(Command::Reset(Some(42))));
        assert_eq!(
            "size 7 9".parse::<Command>(),
            Ok(Command::Size {
                size: 7,
                seed: Some(9)
            })
        );
        assert_eq!(
            "px 120.5 64".parse::<Command>(),
            Ok(Command::Pixel(Point::new(120.5, 64.0)))
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "3 x".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                value: "x".to_string(),
                what: "row"
            })
        );
        assert!(matches!(
            "px 1".parse::<Command>(),
            Err(CommandError::Usage { command: "px", .. })
        ));
        assert!(matches!(
            "hint now".parse::<Command>(),
            Err(CommandError::Usage { command: "hint", .. })
        ));
    }
}
