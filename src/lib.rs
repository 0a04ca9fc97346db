//! N×N tic-tac-toe with move history and time travel.
//!
//! The game logic lives in [`nxn_tictactoe_core`]; this crate adds what a
//! terminal front end needs on top of it.
//!
//! # Architecture
//!
//! - **Config**: board size and move-list order from flags, environment or TOML
//! - **View**: status line, move list and board rendered as text
//! - **Session**: line-oriented command loop driving a [`GameController`]
//!
//! # Example
//!
//! ```
//! use nxn_tictactoe::{GameConfig, replay, status_line};
//!
//! # fn example() -> Result<(), nxn_tictactoe::ConfigError> {
//! let mut controller = GameConfig::new(3).controller()?;
//! let state = replay(&mut controller, &[0, 4, 1, 5, 2]);
//! assert_eq!(status_line(state), "Winner: X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod session;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, DIMENSION_ENV, GameConfig};

// Crate-level exports - Session
pub use session::{CommandError, SessionCommand, replay, run_session};

// Crate-level exports - Text view
pub use view::{MoveLabel, move_list, render, render_board, sort_label, status_line};

// Crate-level exports - Game types
pub use nxn_tictactoe_core::{
    Board, Dimension, GameController, GameState, GameStatus, History, HistoryEntry, InvalidStep,
    Line, Location, MoveOrder, MoveRejection, Player, Snapshot, Square, WinOutcome, detect,
};
