//! Frame buffer - a 2D grid of terminal cells.

use crate::types::{Cell, Color, Rect};

/// A width × height grid of [`Cell`]s. The painter fills one per
/// frame; the diff renderer compares consecutive frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer of blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Mutate a cell in place; out-of-bounds writes are dropped.
    pub fn update(&mut self, x: u16, y: u16, f: impl FnOnce(&mut Cell)) {
        if let Some(i) = self.index(x, y) {
            f(&mut self.cells[i]);
        }
    }

    /// Fill a rect with blank cells of the given background.
    pub fn fill_rect(&mut self, rect: Rect, bg: Color) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set(x, y, Cell { bg, ..Cell::default() });
            }
        }
    }

    /// Copy `rows` rows from `src` starting at `src_top` into this
    /// buffer starting at `dst_top`. Widths are matched column by
    /// column; anything out of range on either side is skipped.
    pub fn blit_rows(&mut self, src: &FrameBuffer, src_top: u16, dst_top: u16, rows: u16) {
        for row in 0..rows {
            let sy = src_top + row;
            let dy = dst_top + row;
            if sy >= src.height || dy >= self.height {
                break;
            }
            for x in 0..self.width.min(src.width) {
                if let Some(cell) = src.get(x, sy) {
                    self.set(x, dy, *cell);
                }
            }
        }
    }

    /// The buffer's text content as one string per row (for tests).
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let buffer = FrameBuffer::new(4, 2);
        assert_eq!(buffer.row_text(0), "    ");
        assert_eq!(buffer.get(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut buffer = FrameBuffer::new(2, 2);
        buffer.set(5, 5, Cell { ch: 'x', ..Cell::default() });
        assert!(buffer.get(5, 5).is_none());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = FrameBuffer::new(4, 4);
        buffer.fill_rect(Rect::new(2, 2, 10, 10), Color::BLACK);
        assert_eq!(buffer.get(3, 3).unwrap().bg, Color::BLACK);
        assert_eq!(buffer.get(1, 1).unwrap().bg, Color::Default);
    }

    #[test]
    fn test_blit_rows() {
        let mut src = FrameBuffer::new(3, 3);
        src.set(0, 1, Cell { ch: 'a', ..Cell::default() });
        src.set(1, 2, Cell { ch: 'b', ..Cell::default() });

        let mut dst = FrameBuffer::new(3, 2);
        dst.blit_rows(&src, 1, 0, 2);
        assert_eq!(dst.get(0, 0).unwrap().ch, 'a');
        assert_eq!(dst.get(1, 1).unwrap().ch, 'b');
    }
}
