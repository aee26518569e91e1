//! Terminal module: session lifecycle and ANSI output assembly.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::Session;

use crate::error::Result;
use crate::input::Event;

/// The terminal surface the frame scheduler drives.
///
/// [`Session`] is the production implementation; the seam exists so the
/// scheduler's loop semantics can be exercised against a scripted
/// terminal without a live tty.
pub trait Terminal {
    /// Current width in columns.
    fn width(&self) -> u16;

    /// Current height in rows.
    fn height(&self) -> u16;

    /// Re-query the window size; report whether it changed.
    fn refresh(&mut self) -> Result<bool>;

    /// Write one frame's bytes in a single operation.
    fn write_frame(&mut self, bytes: &[u8]) -> Result<()>;

    /// Non-blocking check for pending input.
    fn poll_event(&mut self) -> bool;

    /// Read and classify one pending input event.
    ///
    /// Only called after [`poll_event`](Terminal::poll_event) reported
    /// readiness, so a blocking read here is bounded.
    fn next_event(&mut self) -> Result<Event>;
}
