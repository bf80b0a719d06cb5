//! Node tree - what the views produce.
//!
//! A retained tree of flex containers and text leaves. The views
//! rebuild it inside the frame derived whenever a signal they read
//! changes; the layout module then turns it into per-node rects and
//! the painter into cells.
//!
//! Props structs with `..Default::default()` keep view code close to
//! markup.

use crate::types::{Attr, Color, Dimension};

// =============================================================================
// Layout enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Props
// =============================================================================

/// Container properties.
#[derive(Default)]
pub struct BoxProps {
    pub direction: FlexDirection,
    pub width: Dimension,
    pub height: Dimension,
    pub min_height: Dimension,
    /// Uniform padding on all sides.
    pub padding: u16,
    /// Extra horizontal padding (added to `padding` left/right).
    pub padding_x: u16,
    pub gap: u16,
    pub grow: f32,
    pub justify: Justify,
    pub align: AlignItems,
    pub bg: Option<Color>,
    /// Single-line border in this color.
    pub border: Option<Color>,
    /// Reveal-region key; the app collects this node's computed rect
    /// under this key after layout.
    pub key: Option<&'static str>,
}

/// Text leaf properties.
pub struct TextProps {
    pub fg: Color,
    pub bg: Option<Color>,
    pub attrs: Attr,
    pub align: TextAlign,
    /// Word-wrap to the laid-out width. When false the line is
    /// truncated.
    pub wrap: bool,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            fg: Color::Default,
            bg: None,
            attrs: Attr::NONE,
            align: TextAlign::Left,
            wrap: true,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

pub struct BoxNode {
    pub props: BoxProps,
    pub children: Vec<Node>,
}

pub struct TextNode {
    pub content: String,
    pub props: TextProps,
}

/// One node of the renderable tree.
pub enum Node {
    Container(BoxNode),
    Text(TextNode),
}

impl Node {
    /// A column container.
    pub fn column(props: BoxProps, children: Vec<Node>) -> Node {
        debug_assert_eq!(props.direction, FlexDirection::Column);
        Node::Container(BoxNode { props, children })
    }

    /// A row container.
    pub fn row(mut props: BoxProps, children: Vec<Node>) -> Node {
        props.direction = FlexDirection::Row;
        Node::Container(BoxNode { props, children })
    }

    /// A text leaf.
    pub fn text(content: impl Into<String>, props: TextProps) -> Node {
        Node::Text(TextNode { content: content.into(), props })
    }

    /// An empty box of fixed height, for vertical breathing room.
    pub fn spacer(rows: u16) -> Node {
        Node::Container(BoxNode {
            props: BoxProps { height: Dimension::Cells(rows), ..Default::default() },
            children: Vec::new(),
        })
    }

    /// Count of nodes in this subtree (for pre-sizing layout arrays).
    pub fn node_count(&self) -> usize {
        match self {
            Node::Text(_) => 1,
            Node::Container(boxed) => {
                1 + boxed.children.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let tree = Node::column(
            BoxProps::default(),
            vec![
                Node::text("a", TextProps::default()),
                Node::row(
                    BoxProps::default(),
                    vec![Node::text("b", TextProps::default()), Node::spacer(1)],
                ),
            ],
        );
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_row_sets_direction() {
        let node = Node::row(BoxProps::default(), vec![]);
        match node {
            Node::Container(boxed) => assert_eq!(boxed.props.direction, FlexDirection::Row),
            _ => panic!("expected container"),
        }
    }
}
