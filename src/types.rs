//! Core types for termfolio.
//!
//! Everything the layout and render pipeline exchanges is built from
//! these: colors, text attributes, terminal cells, and rectangles.

// =============================================================================
// Color
// =============================================================================

/// A terminal color.
///
/// `Default` defers to the terminal's own palette; `Rgb` is a truecolor
/// value. Integer channels give exact equality, which the diff renderer
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Let the terminal pick (no escape emitted beyond reset).
    #[default]
    Default,
    /// Truecolor value.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to the crossterm color type for output.
    pub fn to_crossterm(self) -> crossterm::style::Color {
        match self {
            Color::Default => crossterm::style::Color::Reset,
            Color::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
        }
    }
}

// =============================================================================
// Cell attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Cell - the atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// The whole pipeline computes these; the renderer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> u16 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// Check if any row of this rect falls inside the vertical band
    /// `[top, bottom)`. The reveal latch uses this as its visibility
    /// threshold.
    #[inline]
    pub fn intersects_rows(&self, top: u16, bottom: u16) -> bool {
        self.height > 0 && self.y < bottom && self.bottom() > top
    }

    /// Compute the intersection of two rects, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A size specification for layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Auto-size based on content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 { Self::Auto } else { Self::Cells(value) }
    }
}

// =============================================================================
// Cleanup function
// =============================================================================

/// Cleanup function returned by anything that acquires a resource
/// (timers, reveal registrations, the mounted app). Call it on
/// teardown.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_rect_row_intersection() {
        let rect = Rect::new(0, 10, 80, 5); // rows 10..15

        assert!(rect.intersects_rows(0, 11)); // band touches first row
        assert!(rect.intersects_rows(14, 30)); // band touches last row
        assert!(!rect.intersects_rows(0, 10)); // band ends just above
        assert!(!rect.intersects_rows(15, 20)); // band starts just below
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));

        let c = Rect::new(20, 20, 5, 5);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_zero_height_rect_never_intersects() {
        let rect = Rect::new(0, 5, 80, 0);
        assert!(!rect.intersects_rows(0, 100));
    }
}
