//! Event types produced by the input decoder.

/// Mouse button, bound to the literal byte the X10 mouse protocol reports.
///
/// Decoding is a direct byte-to-variant mapping, not arithmetic on bit
/// fields, so each variant carries its wire value as the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Left mouse button (byte 32).
    LeftClick = 32,
    /// Middle mouse button (byte 33).
    MiddleClick = 33,
    /// Right mouse button (byte 34).
    RightClick = 34,
    /// Scroll wheel up (byte 96).
    ScrollUp = 96,
    /// Scroll wheel down (byte 97).
    ScrollDown = 97,
}

impl MouseButton {
    /// Map a protocol byte to its button, if recognized.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            32 => Some(Self::LeftClick),
            33 => Some(Self::MiddleClick),
            34 => Some(Self::RightClick),
            96 => Some(Self::ScrollUp),
            97 => Some(Self::ScrollDown),
            _ => None,
        }
    }
}

/// A decoded mouse click at a zero-based terminal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseAction {
    /// Which button was involved.
    pub button: MouseButton,
    /// Column, zero-based.
    pub x: u16,
    /// Row, zero-based.
    pub y: u16,
}

/// An input event as seen by the frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked to quit (Ctrl-C or `q`).
    Quit,
    /// A mouse click to dispatch against the cell grid.
    MouseClick(MouseAction),
    /// Input that carries no widget interaction.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_protocol_byte() {
        assert_eq!(MouseButton::from_byte(32), Some(MouseButton::LeftClick));
        assert_eq!(MouseButton::from_byte(33), Some(MouseButton::MiddleClick));
        assert_eq!(MouseButton::from_byte(34), Some(MouseButton::RightClick));
        assert_eq!(MouseButton::from_byte(96), Some(MouseButton::ScrollUp));
        assert_eq!(MouseButton::from_byte(97), Some(MouseButton::ScrollDown));
        assert_eq!(MouseButton::from_byte(0), None);
        assert_eq!(MouseButton::from_byte(35), None);
    }
}
