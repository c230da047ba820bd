//! Tests for the game-state engine.

use noughts::{Game, GameState, GameStatus, MoveError, Player, Square};

fn play_all(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.make_move(row, col).unwrap();
    }
}

#[test]
fn test_new_game_starts_with_x_in_progress() {
    let game = Game::new();
    assert_eq!(game.state().current_player(), Player::X);
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert!(game.state().board().squares().iter().all(|s| *s == Square::Empty));
    assert!(game.state().history().is_empty());
}

#[test]
fn test_alternating_players() {
    let mut game = Game::new();
    assert_eq!(game.state().current_player(), Player::X);

    game.make_move(1, 1).unwrap();
    assert_eq!(game.state().current_player(), Player::O);

    game.make_move(0, 0).unwrap();
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_row_win_on_fifth_move() {
    let mut game = Game::new();
    // X: (0,0) (0,1) (0,2); O: (1,1) (2,2)
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    assert_eq!(game.state().status(), GameStatus::InProgress);

    game.make_move(0, 2).unwrap();
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_every_line_wins_for_the_completing_player() {
    let lines: [[(usize, usize); 3]; 8] = [
        // Rows
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        // Columns
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        // Diagonals
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        // O fills two squares off the line; two marks can never win.
        let mut fillers = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|cell| !line.contains(cell));

        let o_first = fillers.next().unwrap();
        let o_second = fillers.next().unwrap();

        let mut game = Game::new();
        play_all(
            &mut game,
            &[line[0], o_first, line[1], o_second, line[2]],
        );

        assert_eq!(
            game.state().status(),
            GameStatus::Won(Player::X),
            "line {line:?} should win for X"
        );
    }
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X - no uniform line at any step
    play_all(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(game.state().status(), GameStatus::Draw);
}

#[test]
fn test_full_board_winning_move_is_a_win() {
    let mut game = Game::new();
    // The ninth move both fills the board and completes the top row.
    play_all(
        &mut game,
        &[
            (0, 0),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 1),
            (2, 2),
            (0, 2),
        ],
    );
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_current_player_frozen_after_terminal_move() {
    let mut game = Game::new();
    // X wins the top row on the fifth move.
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    // The mover stays current; no alternation after a terminal move.
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut game = Game::new();
    game.make_move(0, 0).unwrap();
    let snapshot: GameState = game.state().clone();

    assert_eq!(game.make_move(0, 0), Err(MoveError::IllegalMove));
    assert_eq!(game.state(), &snapshot);

    // Idempotent: rejecting again changes nothing either.
    assert_eq!(game.make_move(0, 0), Err(MoveError::IllegalMove));
    assert_eq!(game.state(), &snapshot);

    // Exactly one mark on the board.
    let marks = game
        .state()
        .board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count();
    assert_eq!(marks, 1);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut game = Game::new();
    let snapshot = game.state().clone();

    assert_eq!(
        game.make_move(3, 0),
        Err(MoveError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        game.make_move(0, 7),
        Err(MoveError::OutOfBounds { row: 0, col: 7 })
    );
    assert_eq!(game.state(), &snapshot);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new();
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));

    let snapshot = game.state().clone();
    assert_eq!(game.make_move(2, 0), Err(MoveError::IllegalMove));
    assert_eq!(game.state(), &snapshot);
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut game = Game::new();
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert!(game.state().status().is_terminal());

    game.reset();

    assert_eq!(game.state().current_player(), Player::X);
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert!(game.state().board().squares().iter().all(|s| *s == Square::Empty));
    assert!(game.state().history().is_empty());

    // The fresh game accepts moves again.
    game.make_move(0, 0).unwrap();
    assert_eq!(game.state().current_player(), Player::O);
}

#[test]
fn test_history_records_moves_in_order() {
    let mut game = Game::new();
    play_all(&mut game, &[(1, 1), (0, 0), (2, 2)]);

    let history: Vec<_> = game
        .state()
        .history()
        .iter()
        .map(|c| (c.row(), c.col()))
        .collect();
    assert_eq!(history, vec![(1, 1), (0, 0), (2, 2)]);
}

#[test]
fn test_rejected_moves_leave_no_history() {
    let mut game = Game::new();
    game.make_move(0, 0).unwrap();
    let _ = game.make_move(0, 0);
    let _ = game.make_move(5, 5);
    assert_eq!(game.state().history().len(), 1);
}
