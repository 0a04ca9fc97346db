//! Tests for the interactive session and text view.

use nxn_tictactoe::{Dimension, GameController, MoveOrder, run_session};
use std::io::Cursor;

fn run(dimension: usize, script: &str) -> (GameController, String) {
    let mut controller = GameController::new(Dimension::new(dimension).unwrap());
    let mut output = Vec::new();
    run_session(&mut controller, Cursor::new(script), &mut output).expect("Session runs");
    (controller, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_session_plays_to_a_win() {
    let (controller, output) = run(3, "0\n4\nplay 1\n5\n2\nquit\n");

    assert_eq!(controller.state().history().len(), 6);
    assert!(output.contains("Next player: X"));
    assert!(output.contains("Winner: X"));
    assert!(output.contains("[X]|[X]|[X]"));
    assert!(output.contains("Go to move #5. Location: (2, 0)"));
}

#[test]
fn test_session_jump_and_overwrite() {
    let (controller, output) = run(3, "4\n0\n8\njump 1\n2\n");

    let state = controller.state();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_step(), 2);
    assert!(output.contains(">  1. Go to move #1. Location: (1, 1)"));
    assert!(output.contains("Next player: O"));
}

#[test]
fn test_session_reports_bad_jump_and_continues() {
    let (controller, output) = run(3, "4\njump 9\n0\n");

    assert!(output.contains("Step 9 is out of range for a history of 2 entries"));
    assert_eq!(controller.state().history().len(), 3);
}

#[test]
fn test_session_reports_unknown_command() {
    let (_, output) = run(3, "dance\n\nhelp\n");

    assert!(output.contains("Unknown command: dance"));
    assert!(output.contains("Commands:"));
}

#[test]
fn test_session_ignores_occupied_cell() {
    let (controller, _) = run(3, "4\n4\n");
    assert_eq!(controller.state().history().len(), 2);
}

#[test]
fn test_session_sort_and_restart() {
    let (controller, output) = run(4, "5\nsort\nrestart\n");

    let state = controller.state();
    assert_eq!(state.move_order(), MoveOrder::Descending);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.dimension().get(), 4);
    assert!(output.contains("[Sort Ascending]"));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let (controller, output) = run(3, "");
    assert_eq!(controller.state().current_step(), 0);
    assert!(output.contains("Type 'help' for commands."));
}
