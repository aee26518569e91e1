//! Buffer module: the cell grid and its frame serializer.
//!
//! This module contains:
//! - [`Color`]: the eight ANSI colors plus the transparent/reset sentinels
//! - [`Cell`]: one character position with colors and an optional handler
//! - [`CellGrid`]: the terminal-sized row-major grid
//! - [`render`]: run-length color coalescing into an ANSI byte stream

mod cell;
mod grid;
mod render;

pub use cell::{Cell, ClickHandler, Color};
pub use grid::CellGrid;
pub use render::render;
