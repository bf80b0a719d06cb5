//! Icon identifiers for social links.
//!
//! The original site mapped free-form icon name strings to components
//! through a lookup table, silently rendering nothing for unknown
//! names. Here the identifiers are a closed enum: content declares an
//! `Icon` directly, and anything arriving as a string goes through
//! [`Icon::from_name`], which logs and rejects unknown names.

use log::warn;

/// Closed set of renderable social icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Mail,
}

impl Icon {
    /// Parse an icon name as the original data files spelled them.
    ///
    /// Unknown names are rejected with a warning rather than silently
    /// dropped.
    pub fn from_name(name: &str) -> Option<Icon> {
        match name {
            "Github" => Some(Icon::Github),
            "Linkedin" => Some(Icon::Linkedin),
            "Twitter" => Some(Icon::Twitter),
            "Mail" => Some(Icon::Mail),
            other => {
                warn!("unknown icon identifier {other:?}, link will use fallback glyph");
                None
            }
        }
    }

    /// Short glyph shown next to the link label.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Github => "gh",
            Icon::Linkedin => "in",
            Icon::Twitter => "tw",
            Icon::Mail => "@",
        }
    }

    /// Glyph used when a link's icon could not be resolved.
    pub const FALLBACK_GLYPH: &'static str = "*";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(Icon::from_name("Github"), Some(Icon::Github));
        assert_eq!(Icon::from_name("Linkedin"), Some(Icon::Linkedin));
        assert_eq!(Icon::from_name("Twitter"), Some(Icon::Twitter));
        assert_eq!(Icon::from_name("Mail"), Some(Icon::Mail));
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(Icon::from_name("Discord"), None);
        assert_eq!(Icon::from_name(""), None);
        // Case-sensitive like the original lookup table
        assert_eq!(Icon::from_name("github"), None);
    }

    #[test]
    fn test_glyphs_nonempty() {
        for icon in [Icon::Github, Icon::Linkedin, Icon::Twitter, Icon::Mail] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
