//! About page: bio and details, skill groups, experience timeline.

use crate::content::SiteContent;
use crate::theme::Theme;
use crate::types::Attr;
use crate::ui::{BoxProps, Justify, Node, TextProps};

use super::{page, section_colors};

pub fn view(theme: &Theme, content: &SiteContent) -> Node {
    page(vec![
        intro(theme, content),
        skills(theme, content),
        experience(theme, content),
    ])
}

fn intro(theme: &Theme, content: &SiteContent) -> Node {
    let colors = section_colors(theme, "about/intro");
    let personal = &content.personal;

    Node::column(
        BoxProps { key: Some("about/intro"), gap: 1, ..Default::default() },
        vec![
            Node::text(
                "About Me",
                TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
            ),
            Node::text(
                personal.title,
                TextProps { fg: colors.accent, attrs: colors.extra, ..Default::default() },
            ),
            Node::text(
                personal.bio,
                TextProps { fg: colors.fg, attrs: colors.extra, ..Default::default() },
            ),
            Node::column(
                BoxProps::default(),
                vec![
                    detail_line(&colors, "Location", personal.location),
                    detail_line(&colors, "Email", personal.email),
                    detail_line(&colors, "Phone", personal.phone),
                    detail_line(&colors, "Resume", personal.resume_url),
                ],
            ),
        ],
    )
}

fn detail_line(colors: &super::SectionColors, label: &str, value: &str) -> Node {
    Node::text(
        format!("{label:<9} {value}"),
        TextProps { fg: colors.muted, attrs: colors.extra, wrap: false, ..Default::default() },
    )
}

fn skills(theme: &Theme, content: &SiteContent) -> Node {
    let colors = section_colors(theme, "about/skills");

    let mut rows = Vec::with_capacity(content.skills.len() + 1);
    rows.push(Node::text(
        "Skills",
        TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
    ));
    for group in &content.skills {
        rows.push(Node::column(
            BoxProps::default(),
            vec![
                Node::text(
                    group.category,
                    TextProps { fg: colors.accent, attrs: Attr::BOLD | colors.extra, wrap: false, ..Default::default() },
                ),
                Node::text(
                    group.items.join("  "),
                    TextProps { fg: colors.fg, attrs: colors.extra, ..Default::default() },
                ),
            ],
        ));
    }

    Node::column(BoxProps { key: Some("about/skills"), gap: 1, ..Default::default() }, rows)
}

fn experience(theme: &Theme, content: &SiteContent) -> Node {
    let colors = section_colors(theme, "about/experience");

    let mut rows = Vec::with_capacity(content.experience.len() + 1);
    rows.push(Node::text(
        "Experience",
        TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
    ));
    // Declaration order is chronological; no sorting here.
    for entry in &content.experience {
        rows.push(Node::column(
            BoxProps { border: Some(theme.border), padding_x: 1, ..Default::default() },
            vec![
                Node::row(
                    BoxProps { justify: Justify::SpaceBetween, ..Default::default() },
                    vec![
                        Node::text(
                            entry.title,
                            TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, wrap: false, ..Default::default() },
                        ),
                        Node::text(
                            entry.period,
                            TextProps { fg: colors.muted, attrs: colors.extra, wrap: false, ..Default::default() },
                        ),
                    ],
                ),
                Node::text(
                    entry.company,
                    TextProps { fg: colors.accent, attrs: colors.extra, wrap: false, ..Default::default() },
                ),
                Node::text(
                    entry.description,
                    TextProps { fg: colors.fg, attrs: colors.extra, ..Default::default() },
                ),
            ],
        ));
    }

    Node::column(BoxProps { key: Some("about/experience"), gap: 1, ..Default::default() }, rows)
}
