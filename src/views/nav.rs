//! Top bar and footer chrome.

use crate::content::SiteContent;
use crate::state::router::Route;
use crate::theme::Theme;
use crate::types::{Attr, Dimension};
use crate::ui::{AlignItems, BoxProps, Justify, Node, TextAlign, TextProps};

/// Two rows: brand plus route tabs, then a context-sensitive key hint.
pub fn navbar(theme: &Theme, current: Route) -> Node {
    let mut tabs = Vec::with_capacity(Route::ALL.len());
    for (index, route) in Route::ALL.iter().enumerate() {
        let active = *route == current;
        tabs.push(Node::text(
            format!("{} {}", index + 1, route.title()),
            TextProps {
                fg: if active { theme.primary } else { theme.text_muted },
                attrs: if active { Attr::BOLD | Attr::UNDERLINE } else { Attr::NONE },
                wrap: false,
                ..Default::default()
            },
        ));
    }

    let top = Node::row(
        BoxProps {
            height: Dimension::Cells(1),
            padding_x: 1,
            justify: Justify::SpaceBetween,
            align: AlignItems::Center,
            bg: Some(theme.surface),
            ..Default::default()
        },
        vec![
            Node::text(
                "sham.dev",
                TextProps { fg: theme.primary, attrs: Attr::BOLD, wrap: false, ..Default::default() },
            ),
            Node::row(BoxProps { gap: 3, ..Default::default() }, tabs),
        ],
    );

    let hints = Node::row(
        BoxProps {
            height: Dimension::Cells(1),
            padding_x: 1,
            bg: Some(theme.surface),
            ..Default::default()
        },
        vec![Node::text(
            hint(current),
            TextProps { fg: theme.text_muted, attrs: Attr::DIM, wrap: false, ..Default::default() },
        )],
    );

    Node::column(
        BoxProps { height: Dimension::Cells(super::NAV_ROWS), ..Default::default() },
        vec![top, hints],
    )
}

fn hint(route: Route) -> &'static str {
    match route {
        Route::Projects => "1-4 pages  tab cycle  up/down scroll  left/right filter  m more  q quit",
        Route::Contact => "tab next field  shift+tab previous  enter send  up/down scroll  esc quit",
        _ => "1-4 pages  tab cycle  up/down scroll  q quit",
    }
}

/// Footer at the bottom of every page: social links and the colophon.
pub fn footer(theme: &Theme, content: &SiteContent) -> Node {
    let mut links = Vec::with_capacity(content.social_links.len());
    for link in &content.social_links {
        links.push(Node::text(
            format!("{} {}", link.icon.glyph(), link.name),
            TextProps { fg: theme.primary_dim, wrap: false, ..Default::default() },
        ));
    }

    Node::column(
        BoxProps { padding: 1, gap: 0, align: AlignItems::Center, ..Default::default() },
        vec![
            Node::row(BoxProps { gap: 3, ..Default::default() }, links),
            Node::text(
                format!("© 2025 {}. All rights reserved.", content.personal.name),
                TextProps {
                    fg: theme.text_muted,
                    attrs: Attr::DIM,
                    align: TextAlign::Center,
                    ..Default::default()
                },
            ),
        ],
    )
}
