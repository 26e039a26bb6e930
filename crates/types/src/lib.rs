//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The board is a 3x3 grid addressed by a flat index in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! `index = row * GRID_SIZE + col`.
//!
//! # Window layout
//!
//! The board is drawn inside a boxed window of `WINDOW_WIDTH` x `WINDOW_HEIGHT`
//! terminal cells. Coordinates below are relative to the window's top-left
//! corner (which holds the border):
//!
//! | Item | Position |
//! |------|----------|
//! | Cell glyph anchors | x = 3, 9, 15; y = 1, 3, 5 |
//! | Vertical grid lines | x = 6, 12 |
//! | Horizontal grid lines | y = 2, 4 |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Cell, Player, Turn, CELL_COUNT, LINES};
//!
//! assert_eq!(CELL_COUNT, 9);
//! assert_eq!(LINES.len(), 8);
//!
//! let cell = Cell::Occupied(Player::Human);
//! assert_eq!(cell.glyph(), 'X');
//! assert_eq!(cell.player(), Some(Player::Human));
//!
//! assert_eq!(Player::Human.opponent(), Player::Computer);
//! assert!(Turn::GameOver.is_over());
//! ```

/// Number of rows (and columns) on the board
pub const GRID_SIZE: usize = 3;

/// Number of addressable cells (3x3)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Scan order is fixed; win detection reports the first completed line.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Board window width in terminal columns (border included)
pub const WINDOW_WIDTH: u16 = 19;

/// Board window height in terminal rows (border included)
pub const WINDOW_HEIGHT: u16 = 7;

/// Window-relative (x, y) anchor of each cell glyph, indexed by cell index.
pub const CELL_ANCHORS: [(u16, u16); CELL_COUNT] = [
    (3, 1),
    (9, 1),
    (15, 1),
    (3, 3),
    (9, 3),
    (15, 3),
    (3, 5),
    (9, 5),
    (15, 5),
];

/// Window-relative x of the two vertical grid lines
pub const GRID_COLUMNS_X: [u16; 2] = [6, 12];

/// Window-relative y of the two horizontal grid lines
pub const GRID_ROWS_Y: [u16; 2] = [2, 4];

/// Screen row of the game title
pub const TITLE_ROW: u16 = 2;

/// Screen row of the winner / draw announcement
pub const STATUS_ROW: u16 = 4;

/// Screen row of the start prompt
pub const PROMPT_ROW: u16 = 7;

/// Lowest screen row the board window may start on; keeps the messages above it visible
pub const WINDOW_MIN_TOP: u16 = PROMPT_ROW + 1;

pub const TITLE_TEXT: &str = "Tic Tac Toe";
pub const PROMPT_TEXT: &str = "Press ENTER to start the game";
pub const HUMAN_WINS_TEXT: &str = "You win";
pub const COMPUTER_WINS_TEXT: &str = "Computer win";
pub const DRAW_TEXT: &str = "It's a draw";
pub const HELP_TEXT: &str = "arrows/wasd move  Enter place  S restart  Q quit";

/// One of the two sides of the game.
///
/// - **Human**: plays `X`, selects cells with the keyboard cursor
/// - **Computer**: plays `O`, picks a uniformly random empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Glyph drawn for this player's marks
    pub fn glyph(&self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Computer => "computer",
        }
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(*player),
        }
    }

    /// Glyph drawn for this cell (blank when empty)
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.glyph(),
        }
    }
}

/// Whose move is expected next.
///
/// `GameOver` is the terminal state: the game has concluded (win or draw)
/// and only a reset starts a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Human,
    Computer,
    GameOver,
}

impl Turn {
    pub fn is_over(&self) -> bool {
        matches!(self, Turn::GameOver)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won(Player),
    Draw,
}

impl Outcome {
    /// Status line announcement for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won(Player::Human) => HUMAN_WINS_TEXT,
            Outcome::Won(Player::Computer) => COMPUTER_WINS_TEXT,
            Outcome::Draw => DRAW_TEXT,
        }
    }
}

/// Cursor navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Actions produced by the keyboard and applied to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one cell
    Move(Direction),
    /// Place a mark on the selected cell (also starts the first game)
    Confirm,
    /// Start a new game (only honoured once the current one is over)
    Reset,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Confirm => "confirm",
            GameAction::Reset => "reset",
        }
    }
}
