//! Static content store.
//!
//! Read-only records describing the portfolio: who, what, where.
//! `site()` assembles the whole store once at startup; the app injects
//! it into views. Nothing here is mutated after construction, and all
//! derived views (filtered project lists, technology sets) are
//! recomputed from these records rather than cached.

pub mod icons;
mod site;

pub use icons::Icon;
pub use site::site;

// =============================================================================
// Records
// =============================================================================

/// The singleton profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub resume_url: &'static str,
}

/// An external profile link. The icon is a closed enum, not a free
/// string; see [`icons`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

/// A named group of skill labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// One job. Entries are chronological by declaration order; the views
/// never sort them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A portfolio project. `featured` marks the default-visible subset on
/// the projects page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: Option<&'static str>,
    pub featured: bool,
}

// =============================================================================
// Site content
// =============================================================================

/// The full content store, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub personal: PersonalInfo,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    /// Lines cycled by the home page typing animation.
    pub typing_texts: Vec<&'static str>,
}

impl SiteContent {
    /// Unique technology tags across all projects, in first-seen order.
    ///
    /// Recomputed on each call; the store itself stays untouched.
    pub fn all_technologies(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for project in &self.projects {
            for &tech in project.technologies {
                if !seen.contains(&tech) {
                    seen.push(tech);
                }
            }
        }
        seen
    }

    /// The featured subset of projects, in declaration order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_builds() {
        let content = site();
        assert!(!content.personal.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.typing_texts.is_empty());
        assert!(!content.social_links.is_empty());
    }

    #[test]
    fn test_all_technologies_unique_and_ordered() {
        let content = site();
        let techs = content.all_technologies();

        // Uniqueness
        for (i, t) in techs.iter().enumerate() {
            assert!(!techs[i + 1..].contains(t), "duplicate tech {t}");
        }

        // First-seen order: the first project's first tag leads
        assert_eq!(techs[0], content.projects[0].technologies[0]);
    }

    #[test]
    fn test_featured_subset() {
        let content = site();
        let featured = content.featured_projects();
        assert!(!featured.is_empty());
        assert!(featured.len() < content.projects.len());
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_experience_declaration_order_kept() {
        let content = site();
        // Most recent role is declared first and must stay first.
        assert!(content.experience[0].period.contains("Present"));
    }
}
