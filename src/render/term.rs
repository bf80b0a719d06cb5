//! Differential terminal renderer.
//!
//! Compares the current frame to the previous one and only emits cells
//! that changed, inside a synchronized update so the terminal presents
//! each frame atomically. Cursor moves and style changes are elided
//! when the previous cell already left the terminal in the right state.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::types::{Attr, Cell, Color};

use super::buffer::FrameBuffer;

/// Differential renderer over any writer (stdout in production,
/// a byte buffer in tests).
pub struct DiffRenderer<W: Write> {
    out: W,
    previous: Option<FrameBuffer>,
    // Terminal state left behind by the last emitted cell
    cursor: Option<(u16, u16)>,
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Option<Attr>,
}

impl DiffRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
            cursor: None,
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Enter raw mode and the alternate screen, hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        queue!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal. Safe to call on the error path.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        self.out.flush()?;
        disable_raw_mode()
    }

    /// Render a frame, emitting only changed cells. Returns true if
    /// anything was written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == buffer.width() && p.height() == buffer.height());

        queue!(self.out, BeginSynchronizedUpdate)?;
        self.reset_state();

        let mut changed = false;
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else { continue };
                let unchanged = same_size
                    && self
                        .previous
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .is_some_and(|prev| prev == cell);
                if unchanged {
                    continue;
                }
                changed = true;
                let cell = *cell;
                self.emit_cell(x, y, &cell)?;
            }
        }

        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Full redraw, ignoring the previous frame.
    pub fn render_full(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.invalidate();
        self.render(buffer)?;
        Ok(())
    }

    /// Forget the previous frame; the next render redraws everything.
    /// Call after a terminal resize.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    fn reset_state(&mut self) {
        self.cursor = None;
        self.fg = None;
        self.bg = None;
        self.attrs = None;
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            queue!(self.out, MoveTo(x, y))?;
        }

        if self.attrs != Some(cell.attrs) {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            // Attribute reset also clears colors
            self.fg = None;
            self.bg = None;
            if cell.attrs.contains(Attr::BOLD) {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if cell.attrs.contains(Attr::DIM) {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            if cell.attrs.contains(Attr::ITALIC) {
                queue!(self.out, SetAttribute(Attribute::Italic))?;
            }
            if cell.attrs.contains(Attr::UNDERLINE) {
                queue!(self.out, SetAttribute(Attribute::Underlined))?;
            }
            self.attrs = Some(cell.attrs);
        }

        if self.fg != Some(cell.fg) {
            queue!(self.out, SetForegroundColor(cell.fg.to_crossterm()))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(self.out, SetBackgroundColor(cell.bg.to_crossterm()))?;
            self.bg = Some(cell.bg);
        }

        queue!(self.out, Print(cell.ch))?;
        self.cursor = Some((x + 1, y));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_emits_everything() {
        let mut renderer = DiffRenderer::new(Vec::new());
        let mut buffer = FrameBuffer::new(3, 1);
        buffer.set(0, 0, Cell { ch: 'a', ..Cell::default() });

        assert!(renderer.render(&buffer).unwrap());
        assert!(renderer.has_previous());
    }

    #[test]
    fn test_identical_frame_emits_nothing() {
        let mut renderer = DiffRenderer::new(Vec::new());
        let buffer = FrameBuffer::new(4, 2);

        renderer.render(&buffer).unwrap();
        assert!(!renderer.render(&buffer).unwrap());
    }

    #[test]
    fn test_changed_cell_detected() {
        let mut renderer = DiffRenderer::new(Vec::new());
        let mut buffer = FrameBuffer::new(4, 2);
        renderer.render(&buffer).unwrap();

        buffer.set(2, 1, Cell { ch: 'z', ..Cell::default() });
        assert!(renderer.render(&buffer).unwrap());
    }

    #[test]
    fn test_invalidate_forces_redraw() {
        let mut renderer = DiffRenderer::new(Vec::new());
        let buffer = FrameBuffer::new(2, 2);
        renderer.render(&buffer).unwrap();

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_resize_redraws() {
        let mut renderer = DiffRenderer::new(Vec::new());
        renderer.render(&FrameBuffer::new(2, 2)).unwrap();
        // New size means every cell counts as changed
        assert!(renderer.render(&FrameBuffer::new(3, 2)).unwrap());
    }
}
