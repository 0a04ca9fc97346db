//! Text rendering of a game for terminal front ends.

use nxn_tictactoe_core::{GameState, GameStatus, MoveOrder, Square};
use std::fmt::Write;
use tracing::instrument;

/// Returns the status line: `Winner: X`, `Draw` or `Next player: O`.
#[instrument(skip(game))]
pub fn status_line(game: &GameState) -> String {
    match game.status() {
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.next_mover()),
    }
}

/// Label of the button that flips the move-list order.
pub fn sort_label(order: MoveOrder) -> &'static str {
    match order {
        MoveOrder::Ascending => "Sort Descending",
        MoveOrder::Descending => "Sort Ascending",
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLabel {
    /// History step the entry jumps to.
    pub step: usize,
    /// Text shown for the entry.
    pub text: String,
    /// Whether the entry is the step currently shown.
    pub current: bool,
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.current { '>' } else { ' ' };
        write!(f, "{} {:>2}. {}", marker, self.step, self.text)
    }
}

/// Builds the move list in the game's current order.
#[instrument(skip(game))]
pub fn move_list(game: &GameState) -> Vec<MoveLabel> {
    game.snapshot()
        .moves
        .into_iter()
        .map(|summary| {
            let text = match summary.location {
                Some(location) => {
                    format!("Go to move #{}. Location: {}", summary.step, location)
                }
                None => "Go to game start".to_string(),
            };
            MoveLabel {
                step: summary.step,
                text,
                current: summary.current,
            }
        })
        .collect()
}

/// Renders the board at the current step.
///
/// Empty cells show their index so they can be typed in; cells of the
/// winning line are bracketed.
#[instrument(skip(game))]
pub fn render_board(game: &GameState) -> String {
    let board = game.board();
    let outcome = game.outcome();
    let width = (board.squares().len() - 1).to_string().len();

    board
        .rows()
        .enumerate()
        .map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .map(|(col, square)| {
                    let index = row * board.size() + col;
                    let text = match square {
                        Square::Empty => index.to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if outcome.contains(index) {
                        format!("[{:>width$}]", text, width = width)
                    } else {
                        format!(" {:>width$} ", text, width = width)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders board, status, sort button and move list.
#[instrument(skip(game))]
pub fn render(game: &GameState) -> String {
    let mut out = render_board(game);
    let _ = write!(out, "\n\n{}\n[{}]\n", status_line(game), sort_label(game.move_order()));
    for label in move_list(game) {
        let _ = writeln!(out, "{}", label);
    }
    out
}
