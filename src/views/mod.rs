//! Page views.
//!
//! Each view is a pure function from state to a [`Node`] tree; the app
//! rebuilds the tree inside the frame derived whenever a signal read
//! here changes. Sections carry a reveal key and render dimmed until
//! their latch fires, the scroll-in analog of a fade-in.

pub mod about;
pub mod contact;
pub mod home;
pub mod nav;
pub mod projects;

use crate::state::reveal;
use crate::theme::Theme;
use crate::types::{Attr, Color};
use crate::ui::{BoxProps, Node};

/// Rows the top bar occupies; the page scrolls underneath.
pub const NAV_ROWS: u16 = 2;

/// Colors a section paints with, dimmed until its reveal latch fires.
pub(crate) struct SectionColors {
    pub fg: Color,
    pub bright: Color,
    pub accent: Color,
    pub muted: Color,
    /// Extra attribute mixed into every text of the section.
    pub extra: Attr,
}

/// Observe `key` and derive the section's palette from its latch.
pub(crate) fn section_colors(theme: &Theme, key: &str) -> SectionColors {
    if reveal::observe(key).get() {
        SectionColors {
            fg: theme.text,
            bright: theme.text_bright,
            accent: theme.primary,
            muted: theme.text_muted,
            extra: Attr::NONE,
        }
    } else {
        SectionColors {
            fg: theme.text_muted,
            bright: theme.text_muted,
            accent: theme.primary_dim,
            muted: theme.text_muted,
            extra: Attr::DIM,
        }
    }
}

/// The shared page frame: padded column the sections stack into.
pub(crate) fn page(children: Vec<Node>) -> Node {
    Node::column(
        BoxProps { padding: 1, padding_x: 2, gap: 1, ..Default::default() },
        children,
    )
}
