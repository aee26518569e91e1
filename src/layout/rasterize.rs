//! Recursive layout/rasterization of a widget tree into the cell grid.
//!
//! Each node is given a bounding [`Region`] and reports back the region it
//! actually occupied, which the parent uses to place the next sibling.
//! The occupied arithmetic deliberately keeps two quirks of the protocol
//! this engine reproduces: text reports one extra column and one extra row
//! past what it consumed, and the `Min` extent sentinel resolves to an
//! empty region instead of sizing to content. Both are load-bearing for
//! compatibility and pinned by tests; do not "fix" them here.

use super::Region;
use crate::buffer::{CellGrid, Color};
use crate::widget::{Extent, Widget};

/// Rasterize `widget` into `grid` within `region`, returning the region
/// the widget occupied.
pub fn rasterize(grid: &mut CellGrid, widget: &Widget, region: Region) -> Region {
    match widget {
        Widget::Text { content, color } => rasterize_text(grid, content, *color, region),

        Widget::Button { child, on_click } => child.as_ref().map_or_else(
            // A childless button occupies nothing and sets no handler.
            || Region::new(region.x_begin, region.x_begin, region.y_begin, region.y_begin),
            |child| {
                let occupied = rasterize(grid, child, region);
                for x in region.x_begin..occupied.x_end {
                    for y in region.y_begin..occupied.y_end {
                        grid.set_on_click(x, y, on_click.clone());
                    }
                }
                occupied
            },
        ),

        Widget::Column { children } => {
            let mut x_max = region.x_begin;
            let mut y_cursor = region.y_begin;
            for child in children {
                let window = Region::new(region.x_begin, region.x_end, y_cursor, region.y_end);
                let occupied = rasterize(grid, child, window);
                y_cursor = occupied.y_end;
                x_max = x_max.max(occupied.x_end);
            }
            Region::new(region.x_begin, x_max, region.y_begin, y_cursor)
        }

        Widget::Row { children } => {
            let mut x_cursor = region.x_begin;
            let mut y_max = region.y_begin;
            for child in children {
                let window = Region::new(x_cursor, region.x_end, region.y_begin, region.y_end);
                let occupied = rasterize(grid, child, window);
                x_cursor = occupied.x_end;
                y_max = y_max.max(occupied.y_end);
            }
            Region::new(region.x_begin, x_cursor, region.y_begin, y_max)
        }

        Widget::Box {
            width,
            height,
            child,
            color,
        } => {
            let bounded = Region::new(
                region.x_begin,
                clamp_end(*width, region.x_begin, region.x_end),
                region.y_begin,
                clamp_end(*height, region.y_begin, region.y_end),
            );

            for y in bounded.y_begin..bounded.y_end {
                for x in bounded.x_begin..bounded.x_end {
                    grid.set_bg(x, y, *color);
                }
            }

            if let Some(child) = child {
                // The child's occupied region is ignored: a box always
                // reserves its full bounded region.
                let _ = rasterize(grid, child, bounded);
            }
            bounded
        }
    }
}

/// Resolve one axis of a box extent against `[begin, end)`, never widening.
const fn clamp_end(extent: Extent, begin: u16, end: u16) -> u16 {
    let candidate = match extent {
        Extent::Fill => return end,
        Extent::Cells(n) => begin.saturating_add(n),
        // The legacy -2 sentinel: the end lands before the begin, so the
        // box resolves to an empty region rather than sizing to content.
        Extent::Min => begin.saturating_sub(2),
    };
    if candidate >= end {
        end
    } else {
        candidate
    }
}

/// Text fills the region left to right, row by row.
///
/// The foreground color is painted on every cell the scan visits, not just
/// the ones that receive a character; the scan stops only when the last
/// character is placed mid-row, so a trailing newline colors the rest of
/// the region. Occupied width and height both carry a +1 pad.
fn rasterize_text(grid: &mut CellGrid, content: &str, color: Color, region: Region) -> Region {
    let width = region.width();
    let chars: Vec<char> = content.chars().collect();

    let mut placed = 0usize;
    let mut row = region.y_begin;
    let mut finished = false;

    while row < region.y_end && !finished {
        for j in 0..width {
            let x = region.x_begin + j;
            grid.set_fg(x, row, color);
            if placed < chars.len() {
                let ch = chars[placed];
                placed += 1;
                if ch == '\n' {
                    break;
                }
                grid.set_char(x, row, ch);
                if placed == chars.len() {
                    finished = true;
                    break;
                }
            }
        }
        if !finished {
            row += 1;
        }
    }

    let x_consumed = if chars.len() > width as usize {
        region.x_end
    } else {
        region.x_begin.saturating_add(chars.len() as u16)
    };
    Region::new(
        region.x_begin,
        x_consumed.saturating_add(1),
        region.y_begin,
        row.saturating_add(1),
    )
}
