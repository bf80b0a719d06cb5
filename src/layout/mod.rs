//! Layout - node tree to rects via Taffy.
//!
//! The tree is laid out against a fixed width with unconstrained
//! height (the page scrolls), using Taffy's flexbox with a measure
//! function for text leaves. Results come back as one [`Rect`] per
//! node in pre-order, the same order the painter walks the tree.

pub mod text_measure;

use std::collections::HashMap;

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    JustifyContent as TaffyJustifyContent, AlignItems as TaffyAlignItems, LengthPercentage,
    NodeId, Size, Style, TaffyTree,
};

use crate::types::{Dimension, Rect};
use crate::ui::{AlignItems, BoxProps, FlexDirection, Justify, Node};
use text_measure::{max_line_width, measure_text_height};

pub use text_measure::{string_width, truncate_text, wrap_text};

// =============================================================================
// COMPUTED LAYOUT
// =============================================================================

/// Per-node rects in pre-order, plus overall content extent.
pub struct ComputedLayout {
    pub rects: Vec<Rect>,
    pub content_width: u16,
    pub content_height: u16,
}

impl ComputedLayout {
    /// Rects of reveal-keyed containers, by key.
    pub fn region_rects(&self, root: &Node) -> HashMap<String, Rect> {
        let mut regions = HashMap::new();
        let mut index = 0usize;
        collect_regions(root, &self.rects, &mut index, &mut regions);
        regions
    }
}

fn collect_regions(
    node: &Node,
    rects: &[Rect],
    index: &mut usize,
    regions: &mut HashMap<String, Rect>,
) {
    let own = *index;
    *index += 1;
    match node {
        Node::Text(_) => {}
        Node::Container(boxed) => {
            if let Some(key) = boxed.props.key {
                if let Some(rect) = rects.get(own) {
                    regions.insert(key.to_string(), *rect);
                }
            }
            for child in &boxed.children {
                collect_regions(child, rects, index, regions);
            }
        }
    }
}

// =============================================================================
// STYLE CONVERSION
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_justify(justify: Justify) -> Option<TaffyJustifyContent> {
    Some(match justify {
        Justify::Start => TaffyJustifyContent::FlexStart,
        Justify::Center => TaffyJustifyContent::Center,
        Justify::End => TaffyJustifyContent::FlexEnd,
        Justify::SpaceBetween => TaffyJustifyContent::SpaceBetween,
    })
}

fn to_taffy_align(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::Start => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::End => TaffyAlignItems::FlexEnd,
    })
}

fn build_style(props: &BoxProps) -> Style {
    let border = if props.border.is_some() { 1.0 } else { 0.0 };
    let pad_x = (props.padding + props.padding_x) as f32;
    let pad_y = props.padding as f32;

    Style {
        display: Display::Flex,
        flex_direction: match props.direction {
            FlexDirection::Column => TaffyFlexDirection::Column,
            FlexDirection::Row => TaffyFlexDirection::Row,
        },
        justify_content: to_taffy_justify(props.justify),
        align_items: to_taffy_align(props.align),
        flex_grow: props.grow,
        size: Size {
            width: to_taffy_dimension(props.width),
            height: to_taffy_dimension(props.height),
        },
        min_size: Size {
            width: TaffyDimension::Auto,
            height: to_taffy_dimension(props.min_height),
        },
        padding: taffy::Rect {
            top: LengthPercentage::Length(pad_y),
            bottom: LengthPercentage::Length(pad_y),
            left: LengthPercentage::Length(pad_x),
            right: LengthPercentage::Length(pad_x),
        },
        border: taffy::Rect {
            top: LengthPercentage::Length(border),
            bottom: LengthPercentage::Length(border),
            left: LengthPercentage::Length(border),
            right: LengthPercentage::Length(border),
        },
        gap: Size {
            width: LengthPercentage::Length(props.gap as f32),
            height: LengthPercentage::Length(props.gap as f32),
        },
        ..Default::default()
    }
}

// =============================================================================
// TREE CONSTRUCTION
// =============================================================================

/// Measure context for text leaves.
struct TextCtx {
    content: String,
    wrap: bool,
}

fn build_tree(tree: &mut TaffyTree<TextCtx>, node: &Node) -> NodeId {
    match node {
        Node::Text(text) => {
            let ctx = TextCtx { content: text.content.clone(), wrap: text.props.wrap };
            tree.new_leaf_with_context(Style::default(), ctx)
                .expect("taffy leaf")
        }
        Node::Container(boxed) => {
            let children: Vec<NodeId> = boxed
                .children
                .iter()
                .map(|child| build_tree(tree, child))
                .collect();
            tree.new_with_children(build_style(&boxed.props), &children)
                .expect("taffy node")
        }
    }
}

fn measure_text(
    ctx: &TextCtx,
    known: Size<Option<f32>>,
    available: Size<AvailableSpace>,
) -> Size<f32> {
    if ctx.content.is_empty() {
        return Size::ZERO;
    }

    let natural_width = max_line_width(&ctx.content);
    let avail_width = match available.width {
        AvailableSpace::Definite(w) => w as u16,
        AvailableSpace::MinContent => natural_width,
        AvailableSpace::MaxContent => u16::MAX,
    };

    let width = known
        .width
        .map(|w| w as u16)
        .unwrap_or_else(|| natural_width.min(avail_width));

    let height = if ctx.wrap {
        measure_text_height(&ctx.content, width.max(1))
    } else {
        ctx.content.lines().count().max(1) as u16
    };

    Size {
        width: width as f32,
        height: known.height.unwrap_or(height as f32),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Lay out the tree at `available_width` with unconstrained height.
pub fn compute_layout(root: &Node, available_width: u16) -> ComputedLayout {
    let mut tree: TaffyTree<TextCtx> = TaffyTree::new();
    let root_id = build_tree(&mut tree, root);

    // The root spans the full available width unless given one.
    if let Node::Container(boxed) = root {
        if boxed.props.width == Dimension::Auto {
            let mut style = build_style(&boxed.props);
            style.size.width = TaffyDimension::Length(available_width as f32);
            let _ = tree.set_style(root_id, style);
        }
    }

    let available = Size {
        width: AvailableSpace::Definite(available_width as f32),
        height: AvailableSpace::MaxContent,
    };

    let _ = tree.compute_layout_with_measure(
        root_id,
        available,
        |known, available_space, _node, ctx: Option<&mut TextCtx>, _style| match ctx {
            Some(ctx) => measure_text(ctx, known, available_space),
            None => Size::ZERO,
        },
    );

    // Extract absolute rects in pre-order, mirroring build order.
    let mut rects = Vec::with_capacity(root.node_count());
    extract_rects(&tree, root, root_id, 0.0, 0.0, &mut rects);

    let root_rect = rects.first().copied().unwrap_or_default();
    ComputedLayout {
        rects,
        content_width: root_rect.width,
        content_height: root_rect.height,
    }
}

fn extract_rects(
    tree: &TaffyTree<TextCtx>,
    node: &Node,
    node_id: NodeId,
    parent_x: f32,
    parent_y: f32,
    rects: &mut Vec<Rect>,
) {
    let layout = tree.layout(node_id).expect("layout for built node");
    let x = parent_x + layout.location.x;
    let y = parent_y + layout.location.y;
    rects.push(Rect::new(
        x.round().max(0.0) as u16,
        y.round().max(0.0) as u16,
        layout.size.width.round().max(0.0) as u16,
        layout.size.height.round().max(0.0) as u16,
    ));

    if let Node::Container(boxed) = node {
        let child_ids = tree.children(node_id).expect("children of built node");
        for (child, child_id) in boxed.children.iter().zip(child_ids) {
            extract_rects(tree, child, child_id, x, y, rects);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
