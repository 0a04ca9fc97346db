//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from board storage
//! and history so the controller and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WinOutcome, detect};
