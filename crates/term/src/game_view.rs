//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout (message rows are absolute; the board window is centred but
//! never starts above `WINDOW_MIN_TOP`, so it cannot cover the messages):
//!
//! ```text
//! row 2      Tic Tac Toe
//! row 4      <status: You win / Computer win / It's a draw>
//! row 7      Press ENTER to start the game      (until the first Enter)
//!            ┌─────────────────┐
//!            │  X  │     │  O  │
//!            │─────┼─────┼─────│
//!            │     │  X  │     │
//!            │─────┼─────┼─────│
//!            │  O  │     │     │
//!            └─────────────────┘
//!            <key help>
//! ```

use crate::core::{winning_line, CursorPosition, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Cell, Player, CELL_ANCHORS, GRID_COLUMNS_X, GRID_ROWS_Y, HELP_TEXT, PROMPT_ROW, PROMPT_TEXT,
    STATUS_ROW, TITLE_ROW, TITLE_TEXT, WINDOW_HEIGHT, WINDOW_MIN_TOP, WINDOW_WIDTH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HUMAN_FG: Rgb = Rgb::new(80, 220, 220);
const COMPUTER_FG: Rgb = Rgb::new(255, 165, 0);
const WIN_FG: Rgb = Rgb::new(255, 255, 255);
const SELECTED_BG: Rgb = Rgb::new(60, 60, 80);

/// A lightweight terminal renderer for the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        game: &GameState,
        cursor: CursorPosition,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let text = CellStyle::default();

        fb.put_str_centered(TITLE_ROW, TITLE_TEXT, text.bold());

        if let Some(outcome) = game.outcome() {
            fb.put_str_centered(STATUS_ROW, outcome.message(), text.bold());
        }

        if !game.started() {
            fb.put_str_centered(PROMPT_ROW, PROMPT_TEXT, text);
        }

        let (start_x, start_y) = self.window_origin(viewport);
        self.draw_border(fb, start_x, start_y, text);
        self.draw_grid(fb, start_x, start_y, text);

        let winning = winning_line(game.board()).map(|(_, line)| line);
        for (idx, cell) in game.board().cells().iter().enumerate() {
            let highlighted = winning.is_some_and(|line| line.contains(&idx));
            let mut style = glyph_style(*cell, highlighted);
            if idx == cursor.index() {
                style.bg = SELECTED_BG;
            }
            let (ax, ay) = CELL_ANCHORS[idx];
            fb.put_char(start_x + ax, start_y + ay, cell.glyph(), style);
        }

        let help_y = start_y.saturating_add(WINDOW_HEIGHT).saturating_add(1);
        if help_y < viewport.height {
            fb.put_str_centered(help_y, HELP_TEXT, text.dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        game: &GameState,
        cursor: CursorPosition,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, cursor, viewport, &mut fb);
        fb
    }

    /// Screen coordinate of the selected cell's glyph.
    ///
    /// This is where the terminal cursor is parked after each frame.
    pub fn cursor_position(&self, cursor: CursorPosition, viewport: Viewport) -> (u16, u16) {
        let (start_x, start_y) = self.window_origin(viewport);
        let (ax, ay) = cursor.anchor();
        (start_x + ax, start_y + ay)
    }

    /// Top-left corner of the board window, centred in the viewport.
    ///
    /// On short terminals the window is pushed below the message rows and
    /// its bottom is clipped instead.
    pub fn window_origin(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(WINDOW_WIDTH) / 2,
            (viewport.height.saturating_sub(WINDOW_HEIGHT) / 2).max(WINDOW_MIN_TOP),
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let w = WINDOW_WIDTH;
        let h = WINDOW_HEIGHT;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        for &gy in GRID_ROWS_Y.iter() {
            for dx in 1..WINDOW_WIDTH - 1 {
                fb.put_char(x + dx, y + gy, '─', style);
            }
        }
        for &gx in GRID_COLUMNS_X.iter() {
            for dy in 1..WINDOW_HEIGHT - 1 {
                let ch = if GRID_ROWS_Y.contains(&dy) { '┼' } else { '│' };
                fb.put_char(x + gx, y + dy, ch, style);
            }
        }
    }
}

fn glyph_style(cell: Cell, highlighted: bool) -> CellStyle {
    let base = CellStyle::default();
    let style = match cell.player() {
        Some(Player::Human) => base.with_fg(HUMAN_FG).bold(),
        Some(Player::Computer) => base.with_fg(COMPUTER_FG).bold(),
        None => base,
    };
    if highlighted {
        style.with_fg(WIN_FG)
    } else {
        style
    }
}
