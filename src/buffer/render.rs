//! Frame serializer: turn a cell grid into a minimal ANSI byte stream.
//!
//! The grid is walked in row-major order while tracking the last emitted
//! (foreground, background) pair. A color sequence is only emitted when
//! that pair changes, so a run of same-styled cells costs one SGR burst
//! no matter how long it is. The stream is bracketed by save/restore
//! cursor so the visible cursor does not jump during the write, and it is
//! positioned at the terminal home so the caller can flush it with a
//! single `write`.

use super::{CellGrid, Color};
use std::io::Write;

/// Bytes a cell costs in the worst case (three SGR sequences + character).
/// Used to size the output buffer so a frame rarely reallocates.
const WORST_CASE_CELL_BYTES: usize = 16;

/// Serialize the grid into `output`.
///
/// The previous contents of `output` are kept; the frame bytes are
/// appended. Callers reuse one buffer across frames and `clear()` it
/// between them.
pub fn render(grid: &CellGrid, output: &mut Vec<u8>) {
    output.reserve(grid.len() * WORST_CASE_CELL_BYTES + 8);

    // Save cursor, then write the whole frame from the home position.
    output.extend_from_slice(b"\x1b7");
    output.extend_from_slice(b"\x1b[1;1H");

    let mut last_fg = Color::NoColor;
    let mut last_bg = Color::NoColor;

    for cell in grid.cells() {
        if cell.fg != last_fg || cell.bg != last_bg {
            output.extend_from_slice(b"\x1b[0m");
            emit_fg(output, cell.fg);
            emit_bg(output, cell.bg);
            last_fg = cell.fg;
            last_bg = cell.bg;
        }
        emit_char(output, cell.ch);
    }

    output.extend_from_slice(b"\x1b8");
}

/// Emit a foreground color sequence.
///
/// `NoColor` and `Reset` both collapse to the plain reset code; a
/// transparent color is never written as an escape of its own.
#[inline]
fn emit_fg(output: &mut Vec<u8>, color: Color) {
    match color.code() {
        Some(n) => {
            let _ = write!(output, "\x1b[{}m", 30 + n);
        }
        None => output.extend_from_slice(b"\x1b[0m"),
    }
}

/// Emit a background color sequence, with the same reset collapsing.
#[inline]
fn emit_bg(output: &mut Vec<u8>, color: Color) {
    match color.code() {
        Some(n) => {
            let _ = write!(output, "\x1b[{}m", 40 + n);
        }
        None => output.extend_from_slice(b"\x1b[0m"),
    }
}

/// Emit a cell's character.
#[inline]
fn emit_char(output: &mut Vec<u8>, ch: char) {
    let mut utf8 = [0u8; 4];
    output.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    #[test]
    fn test_render_brackets_and_home() {
        let grid = CellGrid::new(4, 2);
        let mut output = Vec::new();
        render(&grid, &mut output);

        assert!(output.starts_with(b"\x1b7\x1b[1;1H"));
        assert!(output.ends_with(b"\x1b8"));
    }

    #[test]
    fn test_blank_grid_emits_no_sgr() {
        // Default cells share the initial (NoColor, NoColor) tracking state,
        // so a blank grid is pure spaces with no color escapes at all.
        let grid = CellGrid::new(10, 3);
        let mut output = Vec::new();
        render(&grid, &mut output);

        assert_eq!(count_occurrences(&output, b"\x1b[0m"), 0);
        assert_eq!(output.iter().filter(|b| **b == b' ').count(), 30);
    }

    #[test]
    fn test_uniform_color_emits_single_sequence() {
        let mut grid = CellGrid::new(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                grid.set_fg(x, y, Color::Blue);
            }
        }

        let mut output = Vec::new();
        render(&grid, &mut output);

        // One SGR burst for 100 uniform cells, not 100.
        assert_eq!(count_occurrences(&output, b"\x1b[34m"), 1);
    }

    #[test]
    fn test_color_run_boundaries() {
        let mut grid = CellGrid::new(6, 1);
        grid.set_fg(0, 0, Color::Red);
        grid.set_fg(1, 0, Color::Red);
        grid.set_fg(2, 0, Color::Green);
        grid.set_fg(3, 0, Color::Green);
        // Cells 4 and 5 are back to the default pair.

        let mut output = Vec::new();
        render(&grid, &mut output);

        assert_eq!(count_occurrences(&output, b"\x1b[31m"), 1);
        assert_eq!(count_occurrences(&output, b"\x1b[32m"), 1);
        // Three run changes, each opening with a reset, plus a collapsed
        // reset for every NoColor half of an emitted pair: the red and
        // green runs have transparent backgrounds (1 extra each) and the
        // final default run collapses both halves (2 extra).
        assert_eq!(count_occurrences(&output, b"\x1b[0m"), 3 + 1 + 1 + 2);
    }

    #[test]
    fn test_background_uses_40_range() {
        let mut grid = CellGrid::new(2, 1);
        grid.set_bg(0, 0, Color::Yellow);
        grid.set_bg(1, 0, Color::Yellow);

        let mut output = Vec::new();
        render(&grid, &mut output);

        assert_eq!(count_occurrences(&output, b"\x1b[43m"), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut grid = CellGrid::new(8, 4);
        grid.set_char(1, 1, 'A');
        grid.set_fg(1, 1, Color::Cyan);

        let mut first = Vec::new();
        let mut second = Vec::new();
        render(&grid, &mut first);
        render(&grid, &mut second);
        assert_eq!(first, second);
    }
}
