//! Terminal session: raw mode, alternate screen, and mouse tracking.
//!
//! Exactly one session is expected to be live at a time. Opening switches
//! stdin to raw mode, the display to the alternate screen, and enables
//! X10 mouse reports; closing reverses all three and puts the cursor back
//! where it was found. `Drop` performs a best-effort close so a panic
//! inside the frame loop does not leave the terminal unusable.

use super::output::OutputBuffer;
use super::Terminal;
use crate::error::Result;
use crate::input::{poll_input, read_event, Event};
use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io::{self, Read, Write};

/// Longest cursor-position report we accept: `ESC [ rrrrr ; ccccc R`.
const CURSOR_REPORT_MAX: usize = 16;

/// A live raw-terminal session.
pub struct Session {
    stdout: io::Stdout,
    out: OutputBuffer,
    /// Current window size in columns and rows.
    width: u16,
    height: u16,
    /// Cursor position captured at open, restored at close.
    init_cursor: (u16, u16),
    closed: bool,
}

impl Session {
    /// Open a session: capture the cursor, enter raw mode, switch to the
    /// alternate screen, and enable mouse tracking.
    pub fn open() -> Result<Self> {
        let stdout = io::stdout();
        terminal::enable_raw_mode()?;

        let mut session = Self {
            stdout,
            out: OutputBuffer::new(),
            width: 0,
            height: 0,
            init_cursor: (0, 0),
            closed: false,
        };

        // Raw mode must be live before the query so the reply arrives
        // byte-by-byte instead of waiting for a newline.
        session.init_cursor = session.cursor_position()?;

        session.out.alternate_screen_enter();
        session.out.mouse_tracking_enable();
        session.flush_control()?;

        let (width, height) = terminal::size()?;
        session.width = width;
        session.height = height;

        tracing::debug!(width, height, "terminal session opened");
        Ok(session)
    }

    /// Close the session, restoring the terminal to its original state.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.out.mouse_tracking_disable();
        self.out.alternate_screen_leave();
        self.flush_control()?;
        terminal::disable_raw_mode()?;

        let (x, y) = self.init_cursor;
        self.out.cursor_move(x, y);
        self.flush_control()?;

        tracing::debug!("terminal session closed");
        Ok(())
    }

    /// Current width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Current height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Re-query the window size. Returns whether it changed since the
    /// last call (or since open).
    pub fn refresh(&mut self) -> Result<bool> {
        let (width, height) = terminal::size()?;
        let resized = width != self.width || height != self.height;
        if resized {
            tracing::debug!(
                from_width = self.width,
                from_height = self.height,
                width,
                height,
                "terminal resized"
            );
            self.width = width;
            self.height = height;
        }
        Ok(resized)
    }

    /// Query the live on-screen cursor position, zero-based.
    ///
    /// When stdin is not a terminal there is nobody to answer the query;
    /// the position degrades to (0, 0) and the engine carries on.
    pub fn cursor_position(&mut self) -> Result<(u16, u16)> {
        if !io::stdin().is_tty() {
            return Ok((0, 0));
        }

        self.out.cursor_position_query();
        self.flush_control()?;

        let mut reply = [0u8; CURSOR_REPORT_MAX];
        let mut len = 0;
        let mut stdin = io::stdin().lock();
        while len < reply.len() {
            let mut byte = [0u8; 1];
            if stdin.read(&mut byte)? == 0 {
                break;
            }
            reply[len] = byte[0];
            len += 1;
            if byte[0] == b'R' {
                break;
            }
        }

        Ok(parse_cursor_report(&reply[..len]).unwrap_or((0, 0)))
    }

    /// Write one frame's bytes to the terminal in a single operation.
    pub fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        self.stdout.write_all(bytes)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Assemble and immediately flush a short control sequence.
    pub(crate) fn emit_control<F: FnOnce(&mut OutputBuffer)>(&mut self, build: F) -> Result<()> {
        build(&mut self.out);
        self.flush_control()
    }

    fn flush_control(&mut self) -> Result<()> {
        self.out.flush_to(&mut self.stdout)?;
        Ok(())
    }
}

impl Terminal for Session {
    fn width(&self) -> u16 {
        self.width()
    }

    fn height(&self) -> u16 {
        self.height()
    }

    fn refresh(&mut self) -> Result<bool> {
        self.refresh()
    }

    fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_frame(bytes)
    }

    fn poll_event(&mut self) -> bool {
        poll_input()
    }

    fn next_event(&mut self) -> Result<Event> {
        read_event(self)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Parse a `\e[{row};{col}R` cursor report into zero-based (x, y).
fn parse_cursor_report(reply: &[u8]) -> Option<(u16, u16)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R")?;
    let text = std::str::from_utf8(body).ok()?;
    let (row, col) = text.split_once(';')?;
    let row: u16 = row.parse().ok()?;
    let col: u16 = col.parse().ok()?;
    // Reports are 1-based.
    Some((col.saturating_sub(1), row.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_report() {
        assert_eq!(parse_cursor_report(b"\x1b[5;12R"), Some((11, 4)));
        assert_eq!(parse_cursor_report(b"\x1b[1;1R"), Some((0, 0)));
        assert_eq!(parse_cursor_report(b"\x1b[24;80R"), Some((79, 23)));
    }

    #[test]
    fn test_parse_cursor_report_rejects_garbage() {
        assert_eq!(parse_cursor_report(b""), None);
        assert_eq!(parse_cursor_report(b"\x1b[5R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[a;bR"), None);
        assert_eq!(parse_cursor_report(b"5;12R"), None);
        assert_eq!(parse_cursor_report(b"\x1b[5;12"), None);
    }
}
