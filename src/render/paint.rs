//! Painter - node tree + computed layout into cells.
//!
//! Walks the tree in the same pre-order as the layout pass, filling
//! backgrounds, drawing borders, and writing wrapped text. Text cells
//! keep whatever background was painted underneath them unless the
//! text sets its own.

use crate::layout::{ComputedLayout, truncate_text, wrap_text};
use crate::types::{Color, Rect};
use crate::ui::{Node, TextAlign, TextNode};

use super::buffer::FrameBuffer;
use crate::layout::string_width;

/// Paint the whole tree into `buffer`.
pub fn paint(root: &Node, layout: &ComputedLayout, buffer: &mut FrameBuffer) {
    let mut index = 0usize;
    paint_node(root, layout, buffer, &mut index);
}

fn paint_node(node: &Node, layout: &ComputedLayout, buffer: &mut FrameBuffer, index: &mut usize) {
    let Some(rect) = layout.rects.get(*index).copied() else {
        return;
    };
    *index += 1;

    match node {
        Node::Container(boxed) => {
            if let Some(bg) = boxed.props.bg {
                buffer.fill_rect(rect, bg);
            }
            if let Some(border) = boxed.props.border {
                draw_border(buffer, rect, border);
            }
            for child in &boxed.children {
                paint_node(child, layout, buffer, index);
            }
        }
        Node::Text(text) => paint_text(text, rect, buffer),
    }
}

// =============================================================================
// TEXT
// =============================================================================

fn paint_text(text: &TextNode, rect: Rect, buffer: &mut FrameBuffer) {
    if rect.width == 0 || rect.height == 0 || text.content.is_empty() {
        return;
    }

    let lines: Vec<String> = if text.props.wrap {
        wrap_text(&text.content, rect.width)
    } else {
        text.content
            .lines()
            .map(|line| truncate_text(line, rect.width))
            .collect()
    };

    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= rect.height {
            break;
        }
        let y = rect.y + row as u16;

        let line_width = string_width(line);
        let x_start = match text.props.align {
            TextAlign::Left => rect.x,
            TextAlign::Center => rect.x + rect.width.saturating_sub(line_width) / 2,
            TextAlign::Right => rect.x + rect.width.saturating_sub(line_width),
        };

        let mut x = x_start;
        for ch in line.chars() {
            if x >= rect.right() {
                break;
            }
            buffer.update(x, y, |cell| {
                cell.ch = ch;
                cell.fg = text.props.fg;
                cell.attrs = text.props.attrs;
                if let Some(bg) = text.props.bg {
                    cell.bg = bg;
                }
            });
            x += string_width(&ch.to_string()).max(1);
        }
    }
}

// =============================================================================
// BORDER
// =============================================================================

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

fn draw_border(buffer: &mut FrameBuffer, rect: Rect, color: Color) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let (left, right) = (rect.x, rect.right() - 1);
    let (top, bottom) = (rect.y, rect.bottom() - 1);

    let mut put = |x: u16, y: u16, ch: char| {
        buffer.update(x, y, |cell| {
            cell.ch = ch;
            cell.fg = color;
            cell.attrs = crate::types::Attr::NONE;
        });
    };

    for x in left + 1..right {
        put(x, top, HORIZONTAL);
        put(x, bottom, HORIZONTAL);
    }
    for y in top + 1..bottom {
        put(left, y, VERTICAL);
        put(right, y, VERTICAL);
    }
    put(left, top, TOP_LEFT);
    put(right, top, TOP_RIGHT);
    put(left, bottom, BOTTOM_LEFT);
    put(right, bottom, BOTTOM_RIGHT);
}

// =============================================================================
// TESTS
// =============================================================================
