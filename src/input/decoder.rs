//! Byte-level decoder for plain keys and X10 mouse reports.
//!
//! Input is read only after a non-blocking readiness check, so the
//! blocking reads inside the decoder are bounded: at most the six bytes
//! of a mouse report. Coordinates in a report are 1-based and offset by
//! 32 to stay in the printable ASCII range, hence the `-32-1` decode.

use super::events::{Event, MouseAction, MouseButton};
use crate::error::Result;
use crate::terminal::Session;
use std::io::{self, Read};

/// Non-blocking check for pending bytes on stdin.
#[allow(unsafe_code)]
pub fn poll_input() -> bool {
    let mut fds = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    // SAFETY: poll reads one valid pollfd and writes only its revents.
    unsafe { libc::poll(&mut fds, 1, 0) > 0 }
}

/// What one decoded keystroke or report means, before any side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keypress {
    /// Ctrl-C or `q`.
    Quit,
    /// A complete mouse report.
    Mouse(MouseAction),
    /// Carriage return: click whatever is under the cursor.
    Enter,
    /// `h`
    CursorLeft,
    /// `j`
    CursorDown,
    /// `k`
    CursorUp,
    /// `l`
    CursorRight,
    /// Backspace or delete.
    Rubout,
    /// Anything else.
    Other,
}

fn read_byte<R: Read>(input: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    input.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Decode a 1-based, 32-offset report coordinate to zero-based.
#[inline]
fn coordinate(raw: u8) -> u16 {
    u16::from(raw).saturating_sub(32 + 1)
}

/// Decode one keystroke or mouse report from `input`.
pub(crate) fn decode<R: Read>(input: &mut R) -> io::Result<Keypress> {
    Ok(match read_byte(input)? {
        0x03 | b'q' => Keypress::Quit,
        0x1b => {
            // Mouse reports arrive as ESC [ M b x y; accept the report
            // with or without the CSI bracket.
            let mut next = read_byte(input)?;
            if next == b'[' {
                next = read_byte(input)?;
            }
            if next != b'M' {
                return Ok(Keypress::Other);
            }
            let button = read_byte(input)?;
            let x = read_byte(input)?;
            let y = read_byte(input)?;
            MouseButton::from_byte(button).map_or(Keypress::Other, |button| {
                Keypress::Mouse(MouseAction {
                    button,
                    x: coordinate(x),
                    y: coordinate(y),
                })
            })
        }
        b'\r' => Keypress::Enter,
        b'h' => Keypress::CursorLeft,
        b'j' => Keypress::CursorDown,
        b'k' => Keypress::CursorUp,
        b'l' => Keypress::CursorRight,
        0x08 | 0x7f => Keypress::Rubout,
        _ => Keypress::Other,
    })
}

/// Read and classify one pending input event.
///
/// Cursor-movement keys are pure terminal side effects and surface as
/// [`Event::Ignored`]; Enter re-queries the live cursor position and
/// synthesizes a left click there.
pub fn read_event(session: &mut Session) -> Result<Event> {
    let keypress = decode(&mut io::stdin().lock())?;
    match keypress {
        Keypress::Quit => {
            tracing::debug!("quit requested");
            Ok(Event::Quit)
        }
        Keypress::Mouse(action) => Ok(Event::MouseClick(action)),
        Keypress::Enter => {
            let (x, y) = session.cursor_position()?;
            Ok(Event::MouseClick(MouseAction {
                button: MouseButton::LeftClick,
                x,
                y,
            }))
        }
        Keypress::CursorLeft => {
            session.emit_control(|out| out.cursor_left(1))?;
            Ok(Event::Ignored)
        }
        Keypress::CursorDown => {
            session.emit_control(|out| out.cursor_down(1))?;
            Ok(Event::Ignored)
        }
        Keypress::CursorUp => {
            session.emit_control(|out| out.cursor_up(1))?;
            Ok(Event::Ignored)
        }
        Keypress::CursorRight => {
            session.emit_control(|out| out.cursor_right(1))?;
            Ok(Event::Ignored)
        }
        Keypress::Rubout => {
            session.emit_control(|out| out.rubout())?;
            Ok(Event::Ignored)
        }
        Keypress::Other => Ok(Event::Ignored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode_bytes(bytes: &[u8]) -> Keypress {
        decode(&mut Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_quit_bytes() {
        assert_eq!(decode_bytes(&[0x03]), Keypress::Quit);
        assert_eq!(decode_bytes(b"q"), Keypress::Quit);
    }

    #[test]
    fn test_x10_mouse_report() {
        // 42 - 32 - 1 = 9, 37 - 32 - 1 = 4
        assert_eq!(
            decode_bytes(&[0x1b, b'M', 32, 42, 37]),
            Keypress::Mouse(MouseAction {
                button: MouseButton::LeftClick,
                x: 9,
                y: 4,
            })
        );
    }

    #[test]
    fn test_x10_mouse_report_with_csi_bracket() {
        assert_eq!(
            decode_bytes(&[0x1b, b'[', b'M', 34, 33, 33]),
            Keypress::Mouse(MouseAction {
                button: MouseButton::RightClick,
                x: 0,
                y: 0,
            })
        );
    }

    #[test]
    fn test_scroll_buttons() {
        assert_eq!(
            decode_bytes(&[0x1b, b'M', 96, 40, 40]),
            Keypress::Mouse(MouseAction {
                button: MouseButton::ScrollUp,
                x: 7,
                y: 7,
            })
        );
    }

    #[test]
    fn test_unknown_button_byte_is_ignored() {
        assert_eq!(decode_bytes(&[0x1b, b'M', 50, 40, 40]), Keypress::Other);
    }

    #[test]
    fn test_non_mouse_escape_is_ignored() {
        assert_eq!(decode_bytes(&[0x1b, b'[', b'A', 0, 0, 0]), Keypress::Other);
    }

    #[test]
    fn test_navigation_and_editing_keys() {
        assert_eq!(decode_bytes(b"h"), Keypress::CursorLeft);
        assert_eq!(decode_bytes(b"j"), Keypress::CursorDown);
        assert_eq!(decode_bytes(b"k"), Keypress::CursorUp);
        assert_eq!(decode_bytes(b"l"), Keypress::CursorRight);
        assert_eq!(decode_bytes(&[0x08]), Keypress::Rubout);
        assert_eq!(decode_bytes(&[0x7f]), Keypress::Rubout);
    }

    #[test]
    fn test_enter_and_other_bytes() {
        assert_eq!(decode_bytes(b"\r"), Keypress::Enter);
        assert_eq!(decode_bytes(b"x"), Keypress::Other);
        assert_eq!(decode_bytes(&[0x00]), Keypress::Other);
    }
}
