//! Terminal tic-tac-toe runner (default binary).
//!
//! One blocking key read per iteration: the key is mapped to an action, the
//! session applies it (the computer replies inline), and the whole frame is
//! re-rendered and flushed as a diff.
//!
//! Logging goes to a file, never to the terminal being drawn on. Set
//! `TUI_TICTACTOE_LOG=<path>` to enable it; `RUST_LOG` filters (default `info`).

use std::fs::File;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::engine::Session;
use tui_tictactoe::input::{handle_key_event, should_quit};
use tui_tictactoe::term::{restore_terminal, FrameBuffer, GameView, TerminalRenderer, Viewport};

const LOG_PATH_ENV: &str = "TUI_TICTACTOE_LOG";

fn main() -> Result<()> {
    init_logging()?;
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to initialise terminal")?;
    info!("terminal ready");

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(clock_seed());
    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(session.game(), session.cursor(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;
        let (cx, cy) = view.cursor_position(session.cursor(), viewport);
        term.show_cursor_at(cx, cy)?;

        // Block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = session.dispatch(action);
                    debug!(action = action.as_str(), changed, "key handled");
                }
            }
            Event::Resize(w, h) => {
                debug!(w, h, "terminal resized");
                term.invalidate();
            }
            _ => {}
        }
    }
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Leave raw mode before the default hook prints, so the panic message is readable.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
