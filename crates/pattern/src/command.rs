//! Parsing of the line-based input protocol.

use std::str::FromStr;

use chess_core::{PieceKind, Square, SquareParseError};
use chess_session::Event;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected} argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },
    #[error(transparent)]
    Square(#[from] SquareParseError),
    #[error("'{0}' is not a promotion piece (use q, r, b or n)")]
    Piece(String),
    #[error("malformed event: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the session
    Input(Event),
    Show,
    Fen,
    Submit,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  click <sq>        click a square (select, move or deselect)
  drag <sq>         pick up the piece on a square
  drop <from> <to>  drop a dragged piece
  promote <q|r|b|n> choose the promotion piece
  reset             start a new pattern
  show              redraw the board
  fen               print the position as FEN
  submit            check the pattern against the length policy
  help              show this text
  quit              exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "click" | "c" => {
                let [sq] = arity::<1>("click", args)?;
                Command::Input(Event::SquareClicked { square: sq.parse()? })
            }
            "drag" => {
                let [sq] = arity::<1>("drag", args)?;
                Command::Input(Event::DragStarted { square: sq.parse()? })
            }
            "drop" => {
                let [from, to] = arity::<2>("drop", args)?;
                Command::Input(Event::Dropped {
                    from: from.parse()?,
                    to: to.parse()?,
                })
            }
            "promote" | "p" => {
                let [piece] = arity::<1>("promote", args)?;
                Command::Input(Event::PromotionChosen {
                    piece: parse_piece(piece)?,
                })
            }
            "reset" => bare("reset", args, Command::Input(Event::Reset))?,
            "show" => bare("show", args, Command::Show)?,
            "fen" => bare("fen", args, Command::Fen)?,
            "submit" => bare("submit", args, Command::Submit)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                // A bare square is shorthand for clicking it
                match (name.parse::<Square>(), args.is_empty()) {
                    (Ok(square), true) => Command::Input(Event::SquareClicked { square }),
                    _ => return Err(CommandError::Unknown(name.to_string())),
                }
            }
        };
        Ok(command)
    }
}

/// One JSON-encoded `Event` per line.
pub fn parse_event_json(line: &str) -> Result<Event, CommandError> {
    Ok(serde_json::from_str(line)?)
}

fn arity<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::Arity {
        command,
        expected: N,
    })
}

fn bare(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    arity::<0>(command, args).map(|[]| parsed)
}

fn parse_piece(text: &str) -> Result<PieceKind, CommandError> {
    let mut chars = text.chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_char(c),
        _ => match text.to_ascii_lowercase().as_str() {
            "queen" => Some(PieceKind::Queen),
            "rook" => Some(PieceKind::Rook),
            "bishop" => Some(PieceKind::Bishop),
            "knight" => Some(PieceKind::Knight),
            _ => None,
        },
    };
    kind.filter(|k| k.is_promotion_target())
        .ok_or_else(|| CommandError::Piece(text.to_string()))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
