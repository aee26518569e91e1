//! `CellGrid`: a terminal-sized grid of cells.
//!
//! Cells are stored in one contiguous `Vec` in row-major order,
//! `index = x + width * y`. The grid always matches the live terminal
//! dimensions; a resize reallocates and clears it completely, so no stale
//! content from the old dimensions can leak into the next frame.

use super::cell::{Cell, ClickHandler, Color};

/// A grid of cells covering the terminal screen.
pub struct CellGrid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Terminal width in columns.
    width: u16,
    /// Terminal height in rows.
    height: u16,
}

impl CellGrid {
    /// Create a grid of blank cells with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (zero-sized terminal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying cell slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) to a linear index, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((x as usize) + (self.width as usize) * (y as usize))
        } else {
            None
        }
    }

    /// The cell at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Write a character at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i].ch = ch;
        }
    }

    /// Write a foreground color at (x, y).
    ///
    /// `NoColor` is transparent: it never overwrites the color already in
    /// the cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_fg(&mut self, x: u16, y: u16, color: Color) {
        if color == Color::NoColor {
            return;
        }
        if let Some(i) = self.index_of(x, y) {
            self.cells[i].fg = color;
        }
    }

    /// Write a background color at (x, y), with the same transparency rule
    /// as [`set_fg`](Self::set_fg).
    #[inline]
    pub fn set_bg(&mut self, x: u16, y: u16, color: Color) {
        if color == Color::NoColor {
            return;
        }
        if let Some(i) = self.index_of(x, y) {
            self.cells[i].bg = color;
        }
    }

    /// Attach a click handler to the cell at (x, y).
    #[inline]
    pub fn set_on_click(&mut self, x: u16, y: u16, handler: ClickHandler) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i].on_click = Some(handler);
        }
    }

    /// The click handler at (x, y), if the cell has one.
    ///
    /// Returns a clone of the handler so the caller can invoke it without
    /// holding a borrow of the grid.
    pub fn click_handler_at(&self, x: u16, y: u16) -> Option<ClickHandler> {
        self.get(x, y).and_then(|cell| cell.on_click.clone())
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize to new terminal dimensions.
    ///
    /// The grid is fully reallocated and cleared; content is never carried
    /// across a resize because the next frame re-rasterizes from scratch.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = (width as usize) * (height as usize);
        self.cells = vec![Cell::EMPTY; size];
    }
}

impl std::fmt::Debug for CellGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_grid_new() {
        let grid = CellGrid::new(80, 24);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.len(), 80 * 24);
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_grid_index_row_major() {
        let grid = CellGrid::new(80, 24);
        assert_eq!(grid.index_of(5, 10), Some(5 + 80 * 10));
        assert_eq!(grid.index_of(79, 23), Some(79 + 80 * 23));
    }

    #[test]
    fn test_grid_bounds() {
        let grid = CellGrid::new(80, 24);
        assert!(grid.get(79, 23).is_some());
        assert!(grid.get(80, 23).is_none());
        assert!(grid.get(79, 24).is_none());
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut grid = CellGrid::new(10, 5);
        grid.set_char(10, 0, 'X');
        grid.set_char(0, 5, 'X');
        grid.set_fg(10, 0, Color::Red);
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_no_color_is_transparent() {
        let mut grid = CellGrid::new(10, 5);
        grid.set_bg(3, 1, Color::Magenta);
        grid.set_bg(3, 1, Color::NoColor);
        grid.set_fg(3, 1, Color::Blue);
        grid.set_fg(3, 1, Color::NoColor);

        let cell = grid.get(3, 1).unwrap();
        assert_eq!(cell.bg, Color::Magenta);
        assert_eq!(cell.fg, Color::Blue);
    }

    #[test]
    fn test_click_handler_round_trip() {
        let mut grid = CellGrid::new(10, 5);
        let handler: ClickHandler = Rc::new(|_| {});
        grid.set_on_click(2, 2, handler.clone());

        let looked_up = grid.click_handler_at(2, 2).unwrap();
        assert!(Rc::ptr_eq(&looked_up, &handler));
        assert!(grid.click_handler_at(3, 2).is_none());
        assert!(grid.click_handler_at(99, 99).is_none());
    }

    #[test]
    fn test_clear() {
        let mut grid = CellGrid::new(10, 5);
        grid.set_char(1, 1, 'X');
        grid.set_fg(1, 1, Color::Red);
        grid.clear();
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_resize_reallocates_and_clears() {
        let mut grid = CellGrid::new(80, 24);
        grid.set_char(5, 5, 'X');

        grid.resize(100, 24);
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.len(), 100 * 24);
        // No stale content survives the resize.
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }
}
