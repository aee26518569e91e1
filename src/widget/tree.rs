//! The declarative widget tree.
//!
//! A tree is pure data: the builder callback constructs a fresh one every
//! frame, the rasterizer consumes it once, and it is dropped before input
//! is dispatched. Children are owned by value, so destruction is the
//! ordinary recursive drop and there is no sharing between frames. The
//! only reference-counted piece is the click handler, which has to outlive
//! the tree that carried it (see [`ClickHandler`]).

use crate::buffer::{ClickHandler, Color};
use crate::input::MouseAction;
use std::rc::Rc;

/// A widget's declared size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// An explicit cell count.
    Cells(u16),
    /// Consume all remaining space on this axis.
    Fill,
    /// Legacy "minimum" sentinel. Resolves to an empty region, not to a
    /// content-sized one; kept for wire-for-wire layout compatibility.
    Min,
}

/// A node in the per-frame UI tree.
///
/// Trees never validate themselves: the builder contract is that it
/// produces a well-formed tree, and the closed enum makes an unknown
/// variant unrepresentable.
pub enum Widget {
    /// A run of text in a single color.
    Text {
        /// The characters to place.
        content: String,
        /// Foreground color (`NoColor` inherits).
        color: Color,
    },
    /// Wraps one optional child and makes its occupied cells clickable.
    Button {
        /// The wrapped child, if any.
        child: Option<Box<Widget>>,
        /// Handler stamped onto every cell the child occupies.
        on_click: ClickHandler,
    },
    /// Stacks children top to bottom.
    Column {
        /// Children in render order.
        children: Vec<Widget>,
    },
    /// Stacks children left to right.
    Row {
        /// Children in render order.
        children: Vec<Widget>,
    },
    /// Constrains a region and paints its background.
    Box {
        /// Horizontal extent.
        width: Extent,
        /// Vertical extent.
        height: Extent,
        /// The wrapped child, if any.
        child: Option<Box<Widget>>,
        /// Background color (`NoColor` paints nothing).
        color: Color,
    },
}

impl Widget {
    /// A text leaf.
    pub fn text(content: impl Into<String>, color: Color) -> Self {
        Self::Text {
            content: content.into(),
            color,
        }
    }

    /// A button around an optional child.
    pub fn button(child: impl Into<Option<Self>>, on_click: impl Fn(MouseAction) + 'static) -> Self {
        Self::Button {
            child: child.into().map(Box::new),
            on_click: Rc::new(on_click),
        }
    }

    /// A vertical stack.
    pub fn column(children: Vec<Self>) -> Self {
        Self::Column { children }
    }

    /// A horizontal stack.
    pub fn row(children: Vec<Self>) -> Self {
        Self::Row { children }
    }

    /// A sized box with a background color around an optional child.
    pub fn boxed(
        width: Extent,
        height: Extent,
        child: impl Into<Option<Self>>,
        color: Color,
    ) -> Self {
        Self::Box {
            width,
            height,
            child: child.into().map(Box::new),
            color,
        }
    }
}

fn option_eq(left: &Option<Box<Widget>>, right: &Option<Box<Widget>>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l == r,
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for Widget {
    /// Structural equality; handlers compare by identity.
    ///
    /// Used for asserting on builder output, never for rendering decisions.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Text { content: lc, color: lcol },
                Self::Text { content: rc, color: rcol },
            ) => lc == rc && lcol == rcol,
            (
                Self::Button { child: lch, on_click: lcb },
                Self::Button { child: rch, on_click: rcb },
            ) => Rc::ptr_eq(lcb, rcb) && option_eq(lch, rch),
            (Self::Column { children: l }, Self::Column { children: r })
            | (Self::Row { children: l }, Self::Row { children: r }) => l == r,
            (
                Self::Box {
                    width: lw,
                    height: lh,
                    child: lch,
                    color: lcol,
                },
                Self::Box {
                    width: rw,
                    height: rh,
                    child: rch,
                    color: rcol,
                },
            ) => lw == rw && lh == rh && lcol == rcol && option_eq(lch, rch),
            _ => false,
        }
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text { content, color } => f
                .debug_struct("Text")
                .field("content", content)
                .field("color", color)
                .finish(),
            Self::Button { child, .. } => {
                f.debug_struct("Button").field("child", child).finish_non_exhaustive()
            }
            Self::Column { children } => {
                f.debug_struct("Column").field("children", children).finish()
            }
            Self::Row { children } => f.debug_struct("Row").field("children", children).finish(),
            Self::Box {
                width,
                height,
                child,
                color,
            } => f
                .debug_struct("Box")
                .field("width", width)
                .field("height", height)
                .field("color", color)
                .field("child", child)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let left = Widget::column(vec![
            Widget::text("hello", Color::Blue),
            Widget::boxed(Extent::Cells(4), Extent::Fill, None, Color::Red),
        ]);
        let right = Widget::column(vec![
            Widget::text("hello", Color::Blue),
            Widget::boxed(Extent::Cells(4), Extent::Fill, None, Color::Red),
        ]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_inequality_on_content_and_variant() {
        assert_ne!(
            Widget::text("a", Color::Blue),
            Widget::text("b", Color::Blue)
        );
        assert_ne!(
            Widget::text("a", Color::Blue),
            Widget::text("a", Color::Red)
        );
        assert_ne!(Widget::column(vec![]), Widget::row(vec![]));
    }

    #[test]
    fn test_button_equality_is_handler_identity() {
        let handler: ClickHandler = Rc::new(|_| {});
        let left = Widget::Button {
            child: None,
            on_click: handler.clone(),
        };
        let right = Widget::Button {
            child: None,
            on_click: handler,
        };
        let other = Widget::button(None, |_| {});

        assert_eq!(left, right);
        assert_ne!(left, other);
    }

    #[test]
    fn test_nested_child_equality() {
        let make = || {
            Widget::boxed(
                Extent::Cells(8),
                Extent::Cells(2),
                Widget::text("Hi", Color::NoColor),
                Color::Yellow,
            )
        };
        assert_eq!(make(), make());
        assert_ne!(
            make(),
            Widget::boxed(Extent::Cells(8), Extent::Cells(2), None, Color::Yellow)
        );
    }
}
