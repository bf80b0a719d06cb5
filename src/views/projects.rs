//! Projects page: tag filter bar and the project card grid.

use crate::content::{Project, SiteContent};
use crate::state::filter::{FILTER_BAR_TAGS, ProjectFilter, TagFilter, filter_bar_tags};
use crate::theme::Theme;
use crate::types::Attr;
use crate::ui::{BoxProps, Justify, Node, TextProps};

use super::{SectionColors, page, section_colors};

pub fn view(theme: &Theme, content: &SiteContent, filter: &ProjectFilter) -> Node {
    page(vec![header(theme, content, filter), grid(theme, filter)])
}

fn header(theme: &Theme, content: &SiteContent, filter: &ProjectFilter) -> Node {
    let colors = section_colors(theme, "projects/header");
    let selected = filter.tag();

    let mut chips = Vec::with_capacity(1 + FILTER_BAR_TAGS);
    chips.push(chip(theme, &colors, "All", selected == TagFilter::All));
    for tag in filter_bar_tags(content) {
        let active = selected == TagFilter::Tag(tag.to_string());
        chips.push(chip(theme, &colors, tag, active));
    }

    Node::column(
        BoxProps { key: Some("projects/header"), gap: 1, ..Default::default() },
        vec![
            Node::text(
                "Projects",
                TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
            ),
            Node::text(
                "Things I've built recently. Filter by technology with the arrow keys.",
                TextProps { fg: colors.muted, attrs: colors.extra, ..Default::default() },
            ),
            Node::row(BoxProps { gap: 2, ..Default::default() }, chips),
        ],
    )
}

fn chip(theme: &Theme, colors: &SectionColors, label: &str, active: bool) -> Node {
    if active {
        Node::text(
            format!(" {label} "),
            TextProps {
                fg: theme.background,
                bg: Some(colors.accent),
                attrs: Attr::BOLD,
                wrap: false,
                ..Default::default()
            },
        )
    } else {
        Node::text(
            format!(" {label} "),
            TextProps { fg: colors.muted, attrs: colors.extra, wrap: false, ..Default::default() },
        )
    }
}

fn grid(theme: &Theme, filter: &ProjectFilter) -> Node {
    let colors = section_colors(theme, "projects/grid");
    let displayed = filter.displayed();

    let mut rows = Vec::with_capacity(displayed.len() + 1);

    if displayed.is_empty() {
        rows.push(Node::text(
            "No projects match this filter.",
            TextProps { fg: colors.muted, attrs: Attr::ITALIC | colors.extra, ..Default::default() },
        ));
        rows.push(Node::text(
            "[a] Show all projects",
            TextProps { fg: colors.accent, attrs: colors.extra, wrap: false, ..Default::default() },
        ));
    }
    for project in &displayed {
        rows.push(card(theme, &colors, project));
    }

    if filter.has_hidden() {
        let hidden = filter.filtered().len() - displayed.len();
        rows.push(Node::text(
            format!("[m] Show more projects ({hidden} hidden)"),
            TextProps { fg: colors.accent, attrs: Attr::BOLD | colors.extra, wrap: false, ..Default::default() },
        ));
    }

    Node::column(BoxProps { key: Some("projects/grid"), gap: 1, ..Default::default() }, rows)
}

fn card(theme: &Theme, colors: &SectionColors, project: &Project) -> Node {
    let border = if project.featured { theme.border_focus } else { theme.border };

    let mut title_row = vec![Node::text(
        project.title,
        TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, wrap: false, ..Default::default() },
    )];
    if project.featured {
        title_row.push(Node::text(
            "★ FEATURED",
            TextProps { fg: colors.accent, attrs: colors.extra, wrap: false, ..Default::default() },
        ));
    }

    let mut links = vec![Node::text(
        project.live_url,
        TextProps { fg: colors.accent, attrs: Attr::UNDERLINE | colors.extra, wrap: false, ..Default::default() },
    )];
    if let Some(source) = project.source_url {
        links.push(Node::text(
            source,
            TextProps { fg: colors.muted, attrs: Attr::UNDERLINE | colors.extra, wrap: false, ..Default::default() },
        ));
    }

    Node::column(
        BoxProps { border: Some(border), padding_x: 1, ..Default::default() },
        vec![
            Node::row(BoxProps { justify: Justify::SpaceBetween, ..Default::default() }, title_row),
            Node::text(
                project.description,
                TextProps { fg: colors.fg, attrs: colors.extra, ..Default::default() },
            ),
            Node::text(
                project.technologies.join(" · "),
                TextProps { fg: theme.primary_dim, attrs: colors.extra, ..Default::default() },
            ),
            Node::row(BoxProps { gap: 2, ..Default::default() }, links),
        ],
    )
}
