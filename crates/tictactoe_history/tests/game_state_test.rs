//! Tests for game state transitions and time travel.

use tictactoe_history::{
    GameState, GameStatus, IgnoredReason, MoveOutcome, Player, Position, check_winner,
};

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

fn play(game: &mut GameState, moves: &[usize]) {
    for &index in moves {
        assert!(game.apply_move(pos(index)).is_placed(), "move {index} should apply");
    }
}

fn assert_turn_matches_cursor(game: &GameState) {
    assert_eq!(game.x_is_next(), game.step() % 2 == 0);
}

#[test]
fn test_n_moves_grow_history() {
    let mut game = GameState::new();
    let moves = [4, 0, 8, 2, 1, 7];
    for (n, &index) in moves.iter().enumerate() {
        game.apply_move(pos(index));
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.step(), n + 1);
        assert_turn_matches_cursor(&game);
    }
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4]);
    let board = *game.current_snapshot();

    for index in [0, 4] {
        let outcome = game.apply_move(pos(index));
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoredReason::SquareOccupied));
        assert_eq!(game.current_snapshot(), &board);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        assert!(game.x_is_next());
    }
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = GameState::new();
    // X: 0, 4, 8 (main diagonal); O: 1, 2
    play(&mut game, &[0, 1, 4, 2, 8]);

    assert_eq!(check_winner(game.current_snapshot()), Some(Player::X));
    assert!(game.is_game_over());
    assert_eq!(game.status().to_string(), "Winner: X");

    let won = game.clone();
    for index in [3, 5, 6, 7] {
        assert!(game.current_snapshot().is_empty(pos(index)));
        assert_eq!(
            game.apply_move(pos(index)),
            MoveOutcome::Ignored(IgnoredReason::GameOver)
        );
        assert_eq!(game, won);
    }
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.step(), 5);
}

#[test]
fn test_full_board_without_winner_never_ends() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.winner(), None);
    assert!(!game.is_game_over());
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
    assert_eq!(game.status().to_string(), "Next Player: O");

    // Every square is filled, so every further click is ignored.
    for index in 0..9 {
        assert_eq!(
            game.apply_move(pos(index)),
            MoveOutcome::Ignored(IgnoredReason::SquareOccupied)
        );
    }
    assert_eq!(game.status().to_string(), "Next Player: O");
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2]);

    game.jump_to(1).unwrap();
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.to_move(), Player::O);

    let outcome = game.apply_move(pos(5));
    assert_eq!(
        outcome,
        MoveOutcome::Placed {
            player: Player::O,
            position: Position::MiddleRight,
            step: 2,
        }
    );
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.step(), 2);
    assert!(game.current_snapshot().is_empty(Position::TopCenter));
}

#[test]
fn test_jump_then_move_leaves_k_plus_two_entries() {
    for k in 0..=4 {
        let mut game = GameState::new();
        play(&mut game, &[0, 1, 2, 3, 4]);
        game.jump_to(k).unwrap();
        play(&mut game, &[8]);
        assert_eq!(game.history().len(), k + 2, "jump to {k}");
        assert_eq!(game.step(), k + 1);
    }
}

#[test]
fn test_jump_does_not_alter_history() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    let history = game.history().clone();

    for step in [0, 3, 1, 2] {
        game.jump_to(step).unwrap();
        assert_eq!(game.history(), &history);
        assert_eq!(game.current_snapshot(), history.get(step).unwrap());
        assert_turn_matches_cursor(&game);
    }
}

#[test]
fn test_occupied_check_uses_displayed_snapshot() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0]);
    game.jump_to(1).unwrap();

    // TopLeft is filled in the abandoned future but free at step 1.
    assert!(game.apply_move(Position::TopLeft).is_placed());
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_jump_before_win_allows_play_again() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 4, 2, 8]);
    assert!(game.is_game_over());

    game.jump_to(3).unwrap();
    assert!(!game.is_game_over());
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));

    assert!(game.apply_move(Position::BottomRight).is_placed());
    assert!(!game.is_game_over());
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.step(), 4);
}

#[test]
fn test_game_over_follows_displayed_snapshot() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    for step in 0..5 {
        game.jump_to(step).unwrap();
        assert!(!game.is_game_over(), "step {step}");
        assert_eq!(game.winner(), None);
    }
    game.jump_to(5).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_turn_parity_holds_over_mixed_operations() {
    let mut game = GameState::new();
    let script: [(bool, usize); 10] = [
        (true, 4),
        (true, 4),
        (true, 0),
        (false, 1),
        (true, 8),
        (false, 0),
        (true, 2),
        (true, 6),
        (false, 2),
        (true, 3),
    ];
    for (is_move, arg) in script {
        if is_move {
            let _ = game.apply_move(pos(arg));
        } else {
            game.jump_to(arg).unwrap();
        }
        assert_turn_matches_cursor(&game);
        assert!(game.step() < game.history().len());
    }
}
