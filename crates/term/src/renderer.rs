//! TerminalRenderer: the terminal control channel.
//!
//! Switches the terminal into the alternate screen for the lifetime of the
//! animation and writes finished frames over it in place. Raw mode is left
//! off so Ctrl-C still reaches the process as an interrupt.

use std::io::{self, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::{cursor, terminal, QueueableCommand};
use log::info;

use crate::types::Viewport;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into `out` instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        encode_setup_into(&mut self.buf)?;
        self.flush_buf().context("failed to set up terminal")?;
        info!("entered alternate screen");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_cleanup_into(&mut self.buf)?;
        self.flush_buf().context("failed to restore terminal")?;
        info!("left alternate screen");
        Ok(())
    }

    /// Write one flattened frame starting at the top-left corner.
    pub fn draw(&mut self, frame: &[u8]) -> Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.write_all(frame)?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Current terminal size, or 80x24 when it cannot be determined.
pub fn viewport() -> Viewport {
    match terminal::size() {
        Ok((w, h)) => Viewport::clamped(w, h),
        Err(_) => Viewport::default(),
    }
}

/// Restore the main screen and cursor, ignoring errors.
///
/// For fatal paths where a `TerminalRenderer` may be unavailable.
pub fn restore_terminal_best_effort() {
    let mut buf = Vec::with_capacity(32);
    if encode_cleanup_into(&mut buf).is_ok() {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(&buf);
        let _ = stdout.flush();
    }
}

/// Restore the terminal before any panic message is printed.
///
/// Release builds abort on panic, so this hook is the only cleanup that runs.
pub fn install_panic_hook() {
    install_panic_hook_with(restore_terminal_best_effort);
}

/// Run `restore` and then print the panic, on every panic.
pub fn install_panic_hook_with<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    panic::set_hook(Box::new(move |info| {
        restore();
        eprintln!("{}", info);
    }));
}

/// Alternate screen, cleared, cursor home and hidden.
pub fn encode_setup_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(cursor::Hide)?;
    Ok(())
}

/// Cleared, cursor home and shown, back on the main screen.
pub fn encode_cleanup_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}
