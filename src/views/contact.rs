//! Contact page: details column and the message form.

use crate::content::SiteContent;
use crate::state::form::{ContactForm, Field, SubmitStatus};
use crate::theme::Theme;
use crate::types::{Attr, Dimension};
use crate::ui::{BoxProps, Node, TextProps};

use super::{SectionColors, page, section_colors};

pub fn view(theme: &Theme, content: &SiteContent, form: &ContactForm) -> Node {
    page(vec![header(theme, content), form_section(theme, form)])
}

fn header(theme: &Theme, content: &SiteContent) -> Node {
    let colors = section_colors(theme, "contact/header");
    let personal = &content.personal;

    let mut social = Vec::with_capacity(content.social_links.len());
    for link in &content.social_links {
        social.push(Node::text(
            format!("{} {}", link.icon.glyph(), link.url),
            TextProps { fg: colors.accent, attrs: colors.extra, wrap: false, ..Default::default() },
        ));
    }

    Node::column(
        BoxProps { key: Some("contact/header"), gap: 1, ..Default::default() },
        vec![
            Node::text(
                "Get In Touch",
                TextProps { fg: colors.bright, attrs: Attr::BOLD | colors.extra, ..Default::default() },
            ),
            Node::text(
                "Have a question or want to work together? Drop me a message.",
                TextProps { fg: colors.muted, attrs: colors.extra, ..Default::default() },
            ),
            Node::column(
                BoxProps::default(),
                vec![
                    contact_line(&colors, "Email", personal.email),
                    contact_line(&colors, "Phone", personal.phone),
                    contact_line(&colors, "Location", personal.location),
                ],
            ),
            Node::column(BoxProps::default(), social),
        ],
    )
}

fn contact_line(colors: &SectionColors, label: &str, value: &str) -> Node {
    Node::text(
        format!("{label:<9} {value}"),
        TextProps { fg: colors.fg, attrs: colors.extra, wrap: false, ..Default::default() },
    )
}

fn form_section(theme: &Theme, form: &ContactForm) -> Node {
    let colors = section_colors(theme, "contact/form");
    let focused = form.focused();

    let mut rows = Vec::with_capacity(Field::ALL.len() + 1);
    for field in Field::ALL {
        rows.push(field_box(theme, &colors, form, field, field == focused));
    }
    rows.push(status_line(theme, &colors, form));

    Node::column(BoxProps { key: Some("contact/form"), gap: 1, ..Default::default() }, rows)
}

fn field_box(
    theme: &Theme,
    colors: &SectionColors,
    form: &ContactForm,
    field: Field,
    focused: bool,
) -> Node {
    let value = form.field(field).get();

    let content = if value.is_empty() && !focused {
        Node::text(
            field.placeholder(),
            TextProps { fg: theme.text_muted, attrs: Attr::DIM, ..Default::default() },
        )
    } else {
        let shown = if focused { format!("{value}▌") } else { value };
        Node::text(
            shown,
            TextProps { fg: colors.bright, attrs: colors.extra, ..Default::default() },
        )
    };

    // The message field gets room to breathe; the rest are one line.
    let min_height = if field == Field::Message { Dimension::Cells(5) } else { Dimension::Auto };

    Node::column(
        BoxProps::default(),
        vec![
            Node::text(
                field.label(),
                TextProps {
                    fg: if focused { colors.accent } else { colors.muted },
                    attrs: if focused { Attr::BOLD } else { colors.extra },
                    wrap: false,
                    ..Default::default()
                },
            ),
            Node::column(
                BoxProps {
                    border: Some(if focused { theme.border_focus } else { theme.border }),
                    padding_x: 1,
                    min_height,
                    ..Default::default()
                },
                vec![content],
            ),
        ],
    )
}

fn status_line(theme: &Theme, colors: &SectionColors, form: &ContactForm) -> Node {
    let (text, fg, attrs) = match form.status() {
        SubmitStatus::Idle if form.can_submit() => {
            ("[enter] Send Message".to_string(), colors.accent, Attr::BOLD)
        }
        SubmitStatus::Idle => (
            "Fill in all fields to send".to_string(),
            colors.muted,
            Attr::DIM,
        ),
        SubmitStatus::Pending => ("Sending...".to_string(), colors.accent, Attr::NONE),
        SubmitStatus::Success => (
            "Message sent successfully! I'll get back to you soon.".to_string(),
            theme.success,
            Attr::BOLD,
        ),
        SubmitStatus::Error(reason) => {
            (format!("Sending failed: {reason}"), theme.error, Attr::BOLD)
        }
    };

    Node::text(text, TextProps { fg, attrs, ..Default::default() })
}
