//! Input module: stdin readiness polling and the keystroke/mouse decoder.

mod decoder;
mod events;

pub use decoder::{poll_input, read_event};
pub use events::{Event, MouseAction, MouseButton};
