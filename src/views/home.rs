//! Home page: hero with the typing line, stats banner, closing call to
//! action.

use crate::content::SiteContent;
use crate::theme::Theme;
use crate::types::Attr;
use crate::ui::{AlignItems, BoxProps, Justify, Node, TextAlign, TextProps};

use super::{page, section_colors};

/// Block cursor appended to the typing line.
const CURSOR: char = '▌';

pub fn view(theme: &Theme, content: &SiteContent, typing: &str) -> Node {
    page(vec![
        hero(theme, content, typing),
        banner(theme),
        closing_cta(theme),
    ])
}

fn hero(theme: &Theme, content: &SiteContent, typing: &str) -> Node {
    let colors = section_colors(theme, "home/hero");

    let mut social = Vec::with_capacity(content.social_links.len());
    for link in &content.social_links {
        social.push(Node::text(
            format!("{} {}", link.icon.glyph(), link.name),
            TextProps { fg: colors.accent, attrs: colors.extra, wrap: false, ..Default::default() },
        ));
    }

    Node::column(
        BoxProps { key: Some("home/hero"), gap: 1, padding: 1, ..Default::default() },
        vec![
            Node::text(
                "Hi, I'm",
                TextProps { fg: colors.muted, attrs: colors.extra, ..Default::default() },
            ),
            Node::text(
                content.personal.name,
                TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
            ),
            Node::text(
                format!("> {typing}{CURSOR}"),
                TextProps {
                    fg: colors.accent,
                    attrs: Attr::BOLD | colors.extra,
                    wrap: false,
                    ..Default::default()
                },
            ),
            Node::text(
                content.personal.bio,
                TextProps { fg: colors.fg, attrs: colors.extra, ..Default::default() },
            ),
            Node::row(
                BoxProps { gap: 3, ..Default::default() },
                vec![
                    Node::text(
                        "[3] View My Work",
                        TextProps { fg: colors.accent, attrs: Attr::BOLD | colors.extra, wrap: false, ..Default::default() },
                    ),
                    Node::text(
                        "[4] Get In Touch",
                        TextProps { fg: colors.fg, attrs: colors.extra, wrap: false, ..Default::default() },
                    ),
                ],
            ),
            Node::row(BoxProps { gap: 3, ..Default::default() }, social),
        ],
    )
}

const STATS: [(&str, &str); 3] = [
    ("10+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("89%", "Client Satisfaction"),
];

fn banner(theme: &Theme) -> Node {
    let colors = section_colors(theme, "home/banner");

    let mut stats = Vec::with_capacity(STATS.len());
    for (value, label) in STATS {
        stats.push(Node::column(
            BoxProps { align: AlignItems::Center, ..Default::default() },
            vec![
                Node::text(
                    value,
                    TextProps {
                        fg: colors.accent,
                        attrs: Attr::BOLD | colors.extra,
                        align: TextAlign::Center,
                        wrap: false,
                        ..Default::default()
                    },
                ),
                Node::text(
                    label,
                    TextProps {
                        fg: colors.muted,
                        attrs: colors.extra,
                        align: TextAlign::Center,
                        wrap: false,
                        ..Default::default()
                    },
                ),
            ],
        ));
    }

    Node::row(
        BoxProps {
            key: Some("home/banner"),
            justify: Justify::SpaceBetween,
            padding: 1,
            padding_x: 3,
            bg: Some(theme.surface),
            ..Default::default()
        },
        stats,
    )
}

fn closing_cta(theme: &Theme) -> Node {
    let colors = section_colors(theme, "home/cta");

    Node::column(
        BoxProps {
            key: Some("home/cta"),
            border: Some(if colors.extra.is_empty() { theme.border_focus } else { theme.border }),
            padding: 1,
            align: AlignItems::Center,
            gap: 1,
            ..Default::default()
        },
        vec![
            Node::text(
                "Have a project in mind?",
                TextProps {
                    fg: colors.bright,
                    attrs: Attr::BOLD | colors.extra,
                    align: TextAlign::Center,
                    ..Default::default()
                },
            ),
            Node::text(
                "Let's build something great together.",
                TextProps { fg: colors.fg, attrs: colors.extra, align: TextAlign::Center, ..Default::default() },
            ),
            Node::text(
                "[4] Get In Touch",
                TextProps {
                    fg: colors.accent,
                    attrs: Attr::BOLD | colors.extra,
                    align: TextAlign::Center,
                    wrap: false,
                    ..Default::default()
                },
            ),
        ],
    )
}
