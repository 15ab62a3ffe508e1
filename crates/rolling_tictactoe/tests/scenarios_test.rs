//! End-to-end scenarios for each rule variant.

use rolling_tictactoe::{
    AnyBoard, BoardState, Game, MoveError, Outcome, Phase, Player, Position, Variant, WinningLine,
};
use strum::IntoEnumIterator;

fn pos(row: usize, col: usize) -> Position {
    Position::at(row, col).expect("on board")
}

#[test]
fn test_classic_top_row_win() {
    let mut game = Game::new(Variant::Classic);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        game.place_at(row, col).expect("legal move");
        assert!(!game.is_over());
    }
    let transition = game.place_at(0, 2).expect("legal move");

    assert_eq!(game.board().check_win(Player::X), Some(WinningLine::Row(0)));
    assert_eq!(
        transition.phase,
        Phase::GameOver(Outcome::Winner { player: Player::X, line: WinningLine::Row(0) })
    );
    assert_eq!(WinningLine::Row(0).positions(), [pos(0, 0), pos(0, 1), pos(0, 2)]);
}

#[test]
fn test_classic_full_board_is_draw() {
    // X O X / O X X / O X O
    let moves = [0, 1, 2, 3, 4, 6, 5, 8, 7].map(|i| Position::from_index(i).expect("index"));
    let game = Game::replay(Variant::Classic, &moves).expect("legal moves");

    assert!(game.board().is_full());
    assert_eq!(game.board().check_win(Player::X), None);
    assert_eq!(game.board().check_win(Player::O), None);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_rolling_fourth_mark_evicts_oldest() {
    for variant in [Variant::Rolling, Variant::RollingHistory] {
        let mut board = AnyBoard::new(variant);
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            assert_eq!(board.place(pos(row, col), Player::X), Ok(None));
        }
        assert_eq!(board.place(pos(0, 1), Player::X), Ok(Some(pos(0, 0))));

        assert!(!board.is_occupied(pos(0, 0)), "{variant}");
        let history = board.history().expect("rolling variants keep history");
        assert!(!history.contains(pos(0, 0), Player::X));
        assert!(history.contains(pos(0, 1), Player::X));
        assert_eq!(history.len(Player::X), 3);
    }
}

#[test]
fn test_rolling_game_evicts_through_play() {
    for variant in [Variant::Rolling, Variant::RollingHistory] {
        let mut game = Game::replay(
            variant,
            &[pos(0, 0), pos(2, 0), pos(1, 1), pos(2, 1), pos(1, 2), pos(0, 1)],
        )
        .expect("legal moves");
        let transition = game.place_at(0, 2).expect("legal move");

        assert_eq!(transition.evicted, Some(pos(0, 0)));
        assert!(!game.is_occupied_at(0, 0));
        // The freed square is playable again.
        assert!(game.place_at(0, 0).is_ok());
    }
}

#[test]
fn test_occupied_square_rejected_and_turn_kept() {
    for variant in Variant::iter() {
        let mut game = Game::new(variant);
        game.place_at(1, 1).expect("legal move");
        let before = game.clone();

        assert_eq!(game.place_at(1, 1), Err(MoveError::Occupied(Position::Center)));
        assert_eq!(game.to_move(), Some(Player::O));
        assert_eq!(game, before);
    }
}

#[test]
fn test_restart_returns_to_empty_board() {
    for variant in Variant::iter() {
        let mut game = Game::replay(
            variant,
            &[pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)],
        )
        .expect("legal moves");
        assert!(game.is_over());

        game.restart();

        assert_eq!(game.phase(), Phase::AwaitingMove(Player::X));
        assert!(Position::ALL.iter().all(|p| !game.is_occupied(*p)));
        assert_eq!(game, Game::new(variant));
    }
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = Game::replay(
        Variant::Rolling,
        &[pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)],
    )
    .expect("legal moves");
    let before = game.clone();

    assert_eq!(game.place_at(2, 2), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_faded_cell_still_occupied() {
    let mut game = Game::replay(
        Variant::RollingHistory,
        &[pos(0, 0), pos(2, 0), pos(1, 1), pos(2, 1), pos(1, 2)],
    )
    .expect("legal moves");

    assert!(game.scene().cell(pos(0, 0)).faded);
    assert_eq!(game.place_at(0, 0), Err(MoveError::Occupied(pos(0, 0))));
}

#[test]
fn test_rolling_never_draws() {
    // Six marks on the board with no line: full, but play continues.
    let game = Game::replay(
        Variant::Rolling,
        &[pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 1), pos(1, 0), pos(2, 0)],
    )
    .expect("legal moves");

    assert!(game.board().is_full());
    assert_eq!(game.phase(), Phase::AwaitingMove(Player::X));
}

#[test]
fn test_win_after_eviction_counts_only_window() {
    // X's fourth mark pushes (1,1) out; the remaining three are the top row.
    let game = Game::replay(
        Variant::Rolling,
        &[
            pos(1, 1), // X
            pos(2, 0), // O
            pos(0, 1), // X
            pos(2, 2), // O
            pos(0, 2), // X
            pos(1, 0), // O
            pos(0, 0), // X evicts (1,1), completes the top row
        ],
    )
    .expect("legal moves");

    assert_eq!(
        game.outcome(),
        Some(Outcome::Winner { player: Player::X, line: WinningLine::Row(0) })
    );
    assert!(!game.is_occupied_at(1, 1));
}
