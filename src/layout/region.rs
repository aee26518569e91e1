//! Region: the half-open bounding rectangle the rasterizer works in.

/// A rectangle expressed as half-open column and row intervals,
/// `[x_begin, x_end) x [y_begin, y_end)`.
///
/// The rasterizer passes regions down the widget tree and returns the
/// occupied region back up, so both the begins and the ends are explicit
/// rather than a position plus size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First column (inclusive).
    pub x_begin: u16,
    /// One past the last column.
    pub x_end: u16,
    /// First row (inclusive).
    pub y_begin: u16,
    /// One past the last row.
    pub y_end: u16,
}

impl Region {
    /// Create a region from explicit bounds.
    #[inline]
    pub const fn new(x_begin: u16, x_end: u16, y_begin: u16, y_end: u16) -> Self {
        Self {
            x_begin,
            x_end,
            y_begin,
            y_end,
        }
    }

    /// The full-screen region for a terminal of the given size.
    #[inline]
    pub const fn of_size(width: u16, height: u16) -> Self {
        Self::new(0, width, 0, height)
    }

    /// Width in columns (zero when the interval is inverted).
    #[inline]
    pub const fn width(&self) -> u16 {
        self.x_end.saturating_sub(self.x_begin)
    }

    /// Height in rows (zero when the interval is inverted).
    #[inline]
    pub const fn height(&self) -> u16 {
        self.y_end.saturating_sub(self.y_begin)
    }

    /// Whether the region covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x_end <= self.x_begin || self.y_end <= self.y_begin
    }

    /// Whether a point lies inside the region.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x_begin && x < self.x_end && y >= self.y_begin && y < self.y_end
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Region([{}, {}) x [{}, {}))",
            self.x_begin, self.x_end, self.y_begin, self.y_end
        )
    }
}
