use tui_tictactoe::core::{Board, CursorPosition, GameState};
use tui_tictactoe::term::{FrameBuffer, GameView, Viewport};
use tui_tictactoe::types::{
    Player, Turn, CELL_ANCHORS, COMPUTER_WINS_TEXT, DRAW_TEXT, HELP_TEXT, HUMAN_WINS_TEXT,
    PROMPT_ROW, PROMPT_TEXT, STATUS_ROW, TITLE_ROW, TITLE_TEXT, WINDOW_HEIGHT, WINDOW_MIN_TOP,
};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn screen(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn board_with(moves: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(idx, player) in moves {
        board.apply_move(idx, player).unwrap();
    }
    board
}

#[test]
fn term_view_renders_title_and_prompt_before_start() {
    let game = GameState::new(1);
    let fb = GameView.render(&game, CursorPosition::default(), VP);

    assert!(fb.row_text(TITLE_ROW).contains(TITLE_TEXT));
    assert!(fb.row_text(PROMPT_ROW).contains(PROMPT_TEXT));
    assert_eq!(fb.row_text(STATUS_ROW).trim(), "");
}

#[test]
fn term_view_clears_prompt_after_first_enter() {
    let mut game = GameState::new(1);
    game.confirm(0);
    let fb = GameView.render(&game, CursorPosition::default(), VP);

    assert!(!screen(&fb).contains(PROMPT_TEXT));
}

#[test]
fn term_view_renders_border_corners_centered() {
    let game = GameState::new(1);
    let fb = GameView.render(&game, CursorPosition::default(), VP);

    // Window 19x7 centred in 80x24 => origin (30, 8).
    assert_eq!(fb.get(30, 8).unwrap().ch, '┌');
    assert_eq!(fb.get(48, 8).unwrap().ch, '┐');
    assert_eq!(fb.get(30, 14).unwrap().ch, '└');
    assert_eq!(fb.get(48, 14).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_glyphs_at_cell_anchors() {
    let board = board_with(&[(0, Player::Human), (4, Player::Computer)]);
    let game = GameState::from_parts(board, Turn::Human, 1);
    let fb = GameView.render(&game, CursorPosition::default(), VP);

    let (ox, oy) = GameView.window_origin(VP);
    let glyph = |idx: usize| {
        let (ax, ay) = CELL_ANCHORS[idx];
        fb.get(ox + ax, oy + ay).unwrap().ch
    };
    assert_eq!(glyph(0), 'X');
    assert_eq!(glyph(4), 'O');
    assert_eq!(glyph(8), ' ');
}

#[test]
fn term_view_announces_each_outcome() {
    let human = GameState::from_parts(
        board_with(&[(0, Player::Human), (1, Player::Human), (2, Player::Human)]),
        Turn::Human,
        1,
    );
    let computer = GameState::from_parts(
        board_with(&[
            (2, Player::Computer),
            (4, Player::Computer),
            (6, Player::Computer),
        ]),
        Turn::Human,
        1,
    );
    let mut draw_board = Board::new();
    for (idx, ch) in "XOXXOOOXX".chars().enumerate() {
        let player = if ch == 'X' { Player::Human } else { Player::Computer };
        draw_board.apply_move(idx, player).unwrap();
    }
    let draw = GameState::from_parts(draw_board, Turn::Human, 1);

    for (game, text) in [
        (human, HUMAN_WINS_TEXT),
        (computer, COMPUTER_WINS_TEXT),
        (draw, DRAW_TEXT),
    ] {
        let fb = GameView.render(&game, CursorPosition::default(), VP);
        assert_eq!(fb.row_text(STATUS_ROW).trim(), text);
    }
}

#[test]
fn term_view_clears_status_after_reset() {
    let mut game = GameState::from_parts(
        board_with(&[(0, Player::Human), (1, Player::Human), (2, Player::Human)]),
        Turn::Human,
        1,
    );
    let fb = GameView.render(&game, CursorPosition::default(), VP);
    assert_eq!(fb.row_text(STATUS_ROW).trim(), HUMAN_WINS_TEXT);

    assert!(game.reset());
    let fb = GameView.render(&game, CursorPosition::default(), VP);
    assert_eq!(fb.row_text(STATUS_ROW).trim(), "");
}

#[test]
fn term_view_shows_key_help_below_board() {
    let game = GameState::new(1);
    let fb = GameView.render(&game, CursorPosition::default(), VP);

    // Window bottom border is row 14; help sits one row below it.
    assert!(fb.row_text(16).contains(HELP_TEXT));
}

#[test]
fn cursor_position_tracks_selected_anchor() {
    let (ox, oy) = GameView.window_origin(VP);
    assert_eq!(
        GameView.cursor_position(CursorPosition::default(), VP),
        (ox + 3, oy + 1)
    );
    assert_eq!(
        GameView.cursor_position(CursorPosition::new(2, 1), VP),
        (ox + 9, oy + 5)
    );
}

#[test]
fn render_into_reuses_framebuffer_across_sizes() {
    let game = GameState::new(1);
    let mut fb = FrameBuffer::new(0, 0);
    GameView.render_into(&game, CursorPosition::default(), Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));

    GameView.render_into(&game, CursorPosition::default(), VP, &mut fb);
    assert_eq!(fb, GameView.render(&game, CursorPosition::default(), VP));
}

#[test]
fn short_terminal_keeps_messages_readable() {
    let won = GameState::from_parts(
        board_with(&[(0, Player::Human), (4, Player::Human), (8, Player::Human)]),
        Turn::Human,
        1,
    );
    let fresh = GameState::new(1);

    for height in [12, 14, 15, 16, 20] {
        let vp = Viewport::new(80, height);

        let fb = GameView.render(&won, CursorPosition::default(), vp);
        assert_eq!(fb.row_text(STATUS_ROW).trim(), HUMAN_WINS_TEXT, "height {}", height);
        assert_eq!(fb.row_text(TITLE_ROW).trim(), TITLE_TEXT, "height {}", height);

        let fb = GameView.render(&fresh, CursorPosition::default(), vp);
        assert_eq!(fb.row_text(PROMPT_ROW).trim(), PROMPT_TEXT, "height {}", height);
    }
}

#[test]
fn short_terminal_clips_board_bottom() {
    let vp = Viewport::new(80, 12);
    let game = GameState::new(1);
    let fb = GameView.render(&game, CursorPosition::default(), vp);

    let (ox, oy) = GameView.window_origin(vp);
    assert_eq!(oy, WINDOW_MIN_TOP);
    assert!(oy + WINDOW_HEIGHT > vp.height);
    assert_eq!(fb.get(ox, oy).unwrap().ch, '┌');
    assert!(!screen(&fb).contains(HELP_TEXT));
}
