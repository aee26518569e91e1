//! Cell: the atomic unit of terminal display.
//!
//! A cell is one character position with a foreground color, a background
//! color, and an optional click handler. The handler is a capability value
//! shared by reference counting: once rasterized into a cell it stays valid
//! after the widget tree that produced it has been dropped, which is what
//! lets the scheduler dispatch a click against the previous frame's grid.

use crate::input::MouseAction;
use std::rc::Rc;

/// One of the eight ANSI colors, plus the two sentinel values the engine
/// needs: `Reset` (emit the SGR reset code) and `NoColor` (transparent:
/// inherit whatever is already in the cell, never emitted on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Transparent: do not overwrite an existing color.
    #[default]
    NoColor,
    /// Explicit reset to the terminal default.
    Reset,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
}

impl Color {
    /// SGR base code for this color (Red = 1 .. White = 7).
    ///
    /// Foreground escapes add 30, background escapes add 40. Returns `None`
    /// for `NoColor` and `Reset`, which both serialize as the plain reset.
    #[inline]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::NoColor | Self::Reset => None,
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
        }
    }
}

/// A click handler attached to cells by a `Button` widget.
///
/// Handlers must own their captures: the widget tree is dropped at the end
/// of the frame that built it, while the handler can fire from the grid
/// during any later input-dispatch step.
pub type ClickHandler = Rc<dyn Fn(MouseAction)>;

/// A single terminal cell.
#[derive(Clone)]
pub struct Cell {
    /// The character to display.
    pub ch: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Handler invoked when this cell is clicked.
    pub on_click: Option<ClickHandler>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// The blank cell: a space with transparent colors and no handler.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Color::NoColor,
        bg: Color::NoColor,
        on_click: None,
    };

    /// Reset this cell to [`Cell::EMPTY`].
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Whether this cell carries a click handler.
    #[inline]
    pub const fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }
}

impl PartialEq for Cell {
    /// Handlers compare by identity, everything else by value.
    fn eq(&self, other: &Self) -> bool {
        self.ch == other.ch
            && self.fg == other.fg
            && self.bg == other.bg
            && match (&self.on_click, &other.on_click) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("clickable", &self.is_clickable())
            .finish()
    }
}
