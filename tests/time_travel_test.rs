//! Tests for move application, history and jump-to-step.

use nxn_tictactoe::{
    Dimension, GameController, GameState, GameStatus, InvalidStep, MoveOrder, MoveRejection,
    Player, Square,
};

fn play(dimension: usize, cells: &[usize]) -> GameState {
    cells
        .iter()
        .fold(GameState::new(Dimension::new(dimension).unwrap()), |game, &cell| {
            game.apply_move(cell)
        })
}

fn changed_cells(before: &GameState, after: &GameState) -> Vec<usize> {
    before
        .board()
        .squares()
        .iter()
        .zip(after.board().squares())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn test_every_empty_cell_flips_exactly_one_square() {
    for n in 2..=5 {
        let game = play(n, &[0]);
        for cell in 1..n * n {
            let next = game.apply_move(cell);
            assert_eq!(changed_cells(&game, &next), vec![cell]);
            assert_eq!(next.current_step(), game.current_step() + 1);
            assert_eq!(next.board().get(cell), Some(Square::Occupied(Player::O)));
        }
    }
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let game = play(3, &[4, 0]);
    assert_eq!(game.apply_move(4), game);
    assert_eq!(game.apply_move(0), game);
}

#[test]
fn test_move_after_win_leaves_state_unchanged() {
    let game = play(3, &[0, 4, 1, 5, 2]);
    assert_eq!(game.apply_move(8), game);
    assert_eq!(
        game.try_apply_move(8),
        Err(MoveRejection::GameDecided { winner: Player::X })
    );
}

#[test]
fn test_move_after_draw_leaves_state_unchanged() {
    let draw = play(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(draw.status(), GameStatus::Draw);
    for cell in 0..9 {
        assert_eq!(draw.apply_move(cell), draw);
    }
}

#[test]
fn test_jump_is_idempotent() {
    let game = play(3, &[4, 0, 8, 2]);
    for step in 0..game.history().len() {
        let once = game.jump_to(step).unwrap();
        let twice = once.jump_to(step).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_next_mover_follows_step_parity() {
    let game = play(3, &[4, 0, 8, 2, 6]);
    for step in 0..game.history().len() {
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.jump_to(step).unwrap().next_mover(), expected);
    }

    // Back and forth lands on the same mover every time.
    let there_and_back = game.jump_to(1).unwrap().jump_to(4).unwrap().jump_to(1).unwrap();
    assert_eq!(there_and_back.next_mover(), Player::O);
    assert_eq!(there_and_back, game.jump_to(1).unwrap());
}

#[test]
fn test_jump_does_not_touch_history() {
    let game = play(3, &[4, 0, 8]);
    let rewound = game.jump_to(0).unwrap();
    assert_eq!(rewound.history(), game.history());
    assert_eq!(rewound.board().squares().iter().filter(|s| !s.is_empty()).count(), 0);
}

#[test]
fn test_jump_out_of_range() {
    let game = play(3, &[4, 0]);
    assert_eq!(game.jump_to(3), Err(InvalidStep { step: 3, len: 3 }));
}

#[test]
fn test_new_move_after_jump_discards_future() {
    for k in 0..5 {
        let game = play(3, &[4, 0, 8, 2, 6]);
        let rewound = game.jump_to(k).unwrap();

        // Pick a cell that is free at step k and differs from the original move.
        let original = game.history().get(k + 1).and_then(|e| e.location());
        let cell = (0..9)
            .find(|&c| {
                rewound.board().is_empty(c)
                    && original.is_none_or(|loc| rewound.board().index_of(loc) != Some(c))
            })
            .unwrap();

        let branched = rewound.apply_move(cell);
        assert_eq!(branched.history().len(), k + 2, "k = {}", k);
        assert_eq!(branched.current_step(), k + 1);
        for step in 0..=k {
            assert_eq!(branched.history().get(step), game.history().get(step));
        }
    }
}

#[test]
fn test_time_travel_out_of_won_game() {
    let won = play(3, &[0, 4, 1, 5, 2]);
    let rewound = won.jump_to(3).unwrap();
    assert_eq!(rewound.status(), GameStatus::InProgress);
    assert_eq!(rewound.next_mover(), Player::O);

    // O blocks the top row instead.
    let blocked = rewound.apply_move(2);
    assert_eq!(blocked.history().len(), 5);
    assert_eq!(blocked.status(), GameStatus::InProgress);
}

#[test]
fn test_controller_drives_whole_game() {
    let mut controller = GameController::new(Dimension::CLASSIC);
    for cell in [0, 4, 1, 5] {
        controller.apply_move(cell);
    }
    controller.toggle_move_order();
    let state = controller.apply_move(2);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.move_order(), MoveOrder::Descending);

    controller.jump_to(2).unwrap();
    let state = controller.apply_move(8);
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.next_mover(), Player::O);
}
