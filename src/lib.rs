//! # Weft
//!
//! An immediate-mode terminal UI engine with per-cell click routing.
//!
//! The caller supplies a builder function that constructs a widget tree
//! from current application state. Every frame, Weft lays that tree out
//! against the live terminal dimensions, rasterizes it into a cell grid,
//! serializes the grid into a minimal escape-sequence stream, writes it in
//! a single syscall, and routes mouse clicks back to the widget that owns
//! the clicked cell.
//!
//! ## Core Concepts
//!
//! - **Immediate mode**: the tree is rebuilt from scratch every frame and
//!   dropped after rasterization; UI state lives in the application.
//! - **Run-length SGR coalescing**: color escapes are emitted only at
//!   style-run boundaries, never per cell.
//! - **Per-cell capability dispatch**: buttons stamp a click handler onto
//!   the cells they occupy; input dispatch is a grid lookup, not a tree
//!   walk.
//!
//! ## Example
//!
//! ```rust,ignore
//! use weft::{start, Color, Session, Widget};
//!
//! let mut session = Session::open()?;
//! start(
//!     &mut session,
//!     |_| Widget::button(Widget::text("Hello, World!", Color::Blue), |_| {}),
//!     Some(60),
//! )?;
//! session.close()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
mod engine;
mod error;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use buffer::{render, Cell, CellGrid, ClickHandler, Color};
pub use engine::{start, Engine, EngineConfig};
pub use error::{Error, Result};
pub use input::{Event, MouseAction, MouseButton};
pub use layout::{rasterize, Region};
pub use terminal::{OutputBuffer, Session, Terminal};
pub use widget::{Extent, Widget};
