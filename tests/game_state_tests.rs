//! Turn controller tests - full games, draws, resets

use tui_tictactoe::core::{evaluate, Board, GameState};
use tui_tictactoe::types::{Cell, Outcome, Player, Turn, CELL_COUNT};

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, text) in rows.iter().enumerate() {
        for (col, ch) in text.chars().enumerate() {
            let idx = row * 3 + col;
            match ch {
                'X' => board.apply_move(idx, Player::Human).unwrap(),
                'O' => board.apply_move(idx, Player::Computer).unwrap(),
                _ => {}
            }
        }
    }
    board
}

fn count(board: &Board, player: Player) -> usize {
    board
        .cells()
        .iter()
        .filter(|c| **c == Cell::Occupied(player))
        .count()
}

#[test]
fn test_computer_opens_the_first_game() {
    let mut game = GameState::new(2024);
    assert_eq!(game.turn(), Turn::Computer);

    assert!(game.confirm(0));
    assert_eq!(count(game.board(), Player::Computer), 1);
    assert_eq!(count(game.board(), Player::Human), 0);
    assert_eq!(game.turn(), Turn::Human);
}

#[test]
fn test_winning_human_move_ends_game_without_reply() {
    let board = board_from(["XX.", "OO.", "..."]);
    let mut game = GameState::from_parts(board, Turn::Human, 1);

    assert!(game.confirm(2));
    assert_eq!(game.winner(), Some(Player::Human));
    assert_eq!(game.turn(), Turn::GameOver);
    assert_eq!(game.outcome(), Some(Outcome::Won(Player::Human)));
    // No computer reply after a win.
    assert_eq!(game.board().empty_count(), 4);
}

#[test]
fn test_computer_fills_last_empty_cell_deterministically() {
    for seed in [1, 2, 3, 42, 0xdead_beef] {
        let board = board_from(["XOX", "XOO", "OX."]);
        let mut game = GameState::from_parts(board, Turn::Computer, seed);

        assert!(game.confirm(0));
        assert_eq!(game.board().get(8), Some(Cell::Occupied(Player::Computer)));
        assert!(game.board().is_full());
        assert_eq!(game.turn(), Turn::GameOver);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }
}

#[test]
fn test_computer_completing_a_line_wins() {
    let board = board_from(["OO.", "XXO", "XOX"]);
    let mut game = GameState::from_parts(board, Turn::Computer, 9);

    assert!(game.confirm(0));
    assert_eq!(game.winner(), Some(Player::Computer));
    assert_eq!(game.outcome(), Some(Outcome::Won(Player::Computer)));
}

#[test]
fn test_human_filling_the_board_is_a_draw() {
    let board = board_from(["XOX", "XOO", "OX."]);
    let mut game = GameState::from_parts(board, Turn::Human, 1);

    assert!(game.confirm(8));
    assert!(game.board().is_full());
    assert_eq!(game.winner(), None);
    assert_eq!(game.turn(), Turn::GameOver);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_illegal_move_is_silently_ignored() {
    let mut game = GameState::new(7);
    game.confirm(0);
    let taken = (0..CELL_COUNT)
        .find(|&i| !game.board().is_empty_at(i))
        .unwrap();
    let before = game.board().clone();

    assert!(!game.confirm(taken));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Turn::Human);
}

#[test]
fn test_reset_is_rejected_while_game_in_progress() {
    // Before the first game (computer to move).
    let mut game = GameState::new(1);
    assert!(!game.reset());
    assert_eq!(game.turn(), Turn::Computer);

    // Human to move, with marks on the board.
    game.confirm(0);
    let before = game.board().clone();
    assert!(!game.reset());
    assert_eq!(game.turn(), Turn::Human);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_reset_after_win_starts_fresh_with_human() {
    let board = board_from(["XX.", "OO.", "..."]);
    let mut game = GameState::from_parts(board, Turn::Human, 1);
    game.confirm(2);
    assert!(game.turn().is_over());

    assert!(game.reset());
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.winner(), None);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.turn(), Turn::Human);
}

#[test]
fn test_reset_after_draw() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    let mut game = GameState::from_parts(board, Turn::Human, 1);
    assert_eq!(game.outcome(), Some(Outcome::Draw));

    assert!(game.reset());
    assert_eq!(game.board().empty_count(), CELL_COUNT);
    assert_eq!(game.turn(), Turn::Human);
}

#[test]
fn test_random_games_always_terminate_consistently() {
    for seed in 1..200u32 {
        let mut game = GameState::new(seed);
        game.confirm(0);

        let mut prev = game.board().clone();
        let mut steps = 0;
        while !game.turn().is_over() {
            assert_eq!(game.turn(), Turn::Human);
            let idx = (0..CELL_COUNT)
                .rev()
                .find(|&i| game.board().is_empty_at(i))
                .expect("human turn implies an empty cell");
            assert!(game.confirm(idx));

            // Marks only ever get added, never overwritten.
            for i in 0..CELL_COUNT {
                if let Some(Cell::Occupied(p)) = prev.get(i) {
                    assert_eq!(game.board().get(i), Some(Cell::Occupied(p)));
                }
            }
            prev = game.board().clone();
            steps += 1;
            assert!(steps <= 5, "seed {} did not terminate", seed);
        }

        match game.outcome() {
            Some(Outcome::Won(player)) => assert_eq!(evaluate(game.board()), Some(player)),
            Some(Outcome::Draw) => {
                assert!(game.board().is_full());
                assert_eq!(evaluate(game.board()), None);
            }
            None => panic!("seed {}: game over without outcome", seed),
        }

        // Computer opened, so it has as many marks as the human or one more.
        let o = count(game.board(), Player::Computer);
        let x = count(game.board(), Player::Human);
        assert!(o == x || o == x + 1, "seed {}: O={} X={}", seed, o, x);
    }
}
