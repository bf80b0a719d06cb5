//! Renderable node tree.

mod node;

pub use node::{
    AlignItems, BoxNode, BoxProps, FlexDirection, Justify, Node, TextAlign, TextNode, TextProps,
};
