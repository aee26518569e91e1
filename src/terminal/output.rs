//! `OutputBuffer`: single-syscall output buffer for ANSI sequences.
//!
//! Control sequences and frame bytes are accumulated here and flushed with
//! one `write()` so the terminal never shows a partially written frame.
//!
//! The sequences are the legacy set this engine speaks: `?47` alternate
//! screen, `?9` (X10) mouse tracking, CSI cursor motion.

use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// A mutable view of the underlying byte vector, for serializers that
    /// append directly.
    #[inline]
    pub fn as_mut_vec(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Move the cursor to a zero-based (x, y) position.
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H, 1-indexed on the wire
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Move the cursor up `n` rows.
    #[inline]
    pub fn cursor_up(&mut self, n: u16) {
        let _ = write!(self.data, "\x1b[{n}A");
    }

    /// Move the cursor down `n` rows.
    #[inline]
    pub fn cursor_down(&mut self, n: u16) {
        let _ = write!(self.data, "\x1b[{n}B");
    }

    /// Move the cursor right `n` columns.
    #[inline]
    pub fn cursor_right(&mut self, n: u16) {
        let _ = write!(self.data, "\x1b[{n}C");
    }

    /// Move the cursor left `n` columns.
    #[inline]
    pub fn cursor_left(&mut self, n: u16) {
        let _ = write!(self.data, "\x1b[{n}D");
    }

    /// Switch to the alternate screen buffer.
    #[inline]
    pub fn alternate_screen_enter(&mut self) {
        self.data.extend_from_slice(b"\x1b[?47h");
    }

    /// Return to the normal screen buffer.
    #[inline]
    pub fn alternate_screen_leave(&mut self) {
        self.data.extend_from_slice(b"\x1b[?47l");
    }

    /// Enable X10 mouse-tracking reports.
    #[inline]
    pub fn mouse_tracking_enable(&mut self) {
        self.data.extend_from_slice(b"\x1b[?9h");
    }

    /// Disable mouse-tracking reports.
    #[inline]
    pub fn mouse_tracking_disable(&mut self) {
        self.data.extend_from_slice(b"\x1b[?9l");
    }

    /// Ask the terminal to report its cursor position (`\e[{row};{col}R`).
    #[inline]
    pub fn cursor_position_query(&mut self) {
        self.data.extend_from_slice(b"\x1b[6n");
    }

    /// Erase the cell before the cursor and back up onto it.
    #[inline]
    pub fn rubout(&mut self) {
        self.data.extend_from_slice(b"\x08 \x08");
    }

    /// Flush to a writer in a single syscall and clear for reuse.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");

        out.clear();
        out.cursor_move(10, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6;11H");
    }

    #[test]
    fn test_session_toggles() {
        let mut out = OutputBuffer::new();
        out.alternate_screen_enter();
        out.mouse_tracking_enable();
        assert_eq!(out.as_bytes(), b"\x1b[?47h\x1b[?9h");

        out.clear();
        out.mouse_tracking_disable();
        out.alternate_screen_leave();
        assert_eq!(out.as_bytes(), b"\x1b[?9l\x1b[?47l");
    }

    #[test]
    fn test_flush_to_clears() {
        let mut out = OutputBuffer::new();
        out.write_raw(b"abc");

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");
        assert!(out.is_empty());
    }

    #[test]
    fn test_cursor_motion_sequences() {
        let mut out = OutputBuffer::new();
        out.cursor_up(1);
        out.cursor_down(1);
        out.cursor_right(2);
        out.cursor_left(3);
        assert_eq!(out.as_bytes(), b"\x1b[1A\x1b[1B\x1b[2C\x1b[3D");
    }
}
