//! Interactive line-oriented game session.
//!
//! Reads one command per line and forwards it to a [`GameController`],
//! printing the rendered game after every state change.

use crate::view;
use anyhow::Result;
use derive_more::{Display, Error};
use nxn_tictactoe_core::{GameController, GameState};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <cell> | play <cell>   place the next mark at a cell index
  jump <step>            show the board as it was after <step> moves
  sort                   flip the move list order
  restart                start a new game of the same size
  board                  show the game again
  help                   show this message
  quit                   leave the game";

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place a mark at a cell index.
    Play(usize),
    /// Jump to a history step.
    Jump(usize),
    /// Flip the move list order.
    Sort,
    /// Start over.
    Restart,
    /// Print the game again.
    Board,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Error parsing a session command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank input.
    #[display("Enter a command, or 'help' for a list")]
    Empty,
    /// Unrecognized command word.
    #[display("Unknown command: {}", input)]
    Unknown {
        /// The offending input.
        input: String,
    },
    /// A command that needs a number got none.
    #[display("Expected a number after '{}'", command)]
    MissingArgument {
        /// The command word.
        command: String,
    },
    /// An argument that should be a number is not.
    #[display("'{}' is not a valid number", value)]
    InvalidNumber {
        /// The offending argument.
        value: String,
    },
}

fn parse_number(command: &str, value: Option<&str>) -> Result<usize, CommandError> {
    let value = value.ok_or_else(|| CommandError::MissingArgument {
        command: command.to_string(),
    })?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };
        let word = first.to_lowercase();

        let command = match word.as_str() {
            "play" | "p" => Self::Play(parse_number(&word, words.next())?),
            "jump" | "j" => Self::Jump(parse_number(&word, words.next())?),
            "sort" | "s" => Self::Sort,
            "restart" | "r" => Self::Restart,
            "board" | "b" => Self::Board,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => match first.parse() {
                Ok(cell) => Self::Play(cell),
                Err(_) => {
                    return Err(CommandError::Unknown {
                        input: s.trim().to_string(),
                    });
                }
            },
        };

        match words.next() {
            Some(extra) => Err(CommandError::Unknown {
                input: extra.to_string(),
            }),
            None => Ok(command),
        }
    }
}

/// Applies `cells` in order, as if each had been clicked.
#[instrument(skip(controller))]
pub fn replay<'a>(controller: &'a mut GameController, cells: &[usize]) -> &'a GameState {
    for &cell in cells {
        controller.apply_move(cell);
    }
    controller.state()
}

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_session<R, W>(
    controller: &mut GameController,
    mut input: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    writeln!(output, "{}", view::render(controller.state()))?;
    writeln!(output, "Type 'help' for commands.")?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        let state = match command {
            SessionCommand::Play(cell) => controller.apply_move(cell),
            SessionCommand::Jump(step) => match controller.jump_to(step) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "Jump rejected");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            },
            SessionCommand::Sort => controller.toggle_move_order(),
            SessionCommand::Restart => controller.restart(),
            SessionCommand::Board => controller.state(),
            SessionCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            SessionCommand::Quit => break,
        };
        writeln!(output, "{}", view::render(state))?;
    }

    info!("Session ended");
    Ok(())
}
