//! Project filter & pagination state.
//!
//! A selected tag (sentinel `All`) plus an "expanded" flag derive two
//! views of the static project list: the candidate set (tag match) and
//! the displayed set (featured subset while collapsed). Both are
//! deriveds recomputed from the content store, never cached copies.
//!
//! Tag matching is a case-insensitive substring test against each
//! project's technology tags, as the original page behaved.
//!
//! Decision (recorded in DESIGN.md): selecting a different tag resets
//! the expanded flag, so every filter starts from its featured subset.

use std::rc::Rc;

use spark_signals::{Derived, Signal, derived, signal};

use crate::content::{Project, SiteContent};

/// How many technologies the filter bar offers besides `All`.
pub const FILTER_BAR_TAGS: usize = 8;

/// The selected technology filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// Sentinel: no filtering, candidates = full list.
    #[default]
    All,
    /// Case-insensitive substring matched against technology tags.
    Tag(String),
}

/// Filter/pagination state for the projects page.
pub struct ProjectFilter {
    tag: Signal<TagFilter>,
    expanded: Signal<bool>,
    filtered: Derived<Vec<Project>>,
    displayed: Derived<Vec<Project>>,
}

impl ProjectFilter {
    pub fn new(content: Rc<SiteContent>) -> Self {
        let tag = signal(TagFilter::All);
        let expanded = signal(false);

        let tag_for_filtered = tag.clone();
        let content_for_filtered = content.clone();
        let filtered = derived(move || {
            let projects = &content_for_filtered.projects;
            match tag_for_filtered.get() {
                TagFilter::All => projects.clone(),
                TagFilter::Tag(needle) => {
                    let needle = needle.to_lowercase();
                    projects
                        .iter()
                        .filter(|project| {
                            project
                                .technologies
                                .iter()
                                .any(|tech| tech.to_lowercase().contains(&needle))
                        })
                        .cloned()
                        .collect()
                }
            }
        });

        let filtered_for_displayed = filtered.clone();
        let expanded_for_displayed = expanded.clone();
        let displayed = derived(move || {
            let candidates = filtered_for_displayed.get();
            if expanded_for_displayed.get() {
                candidates
            } else {
                candidates.into_iter().filter(|p| p.featured).collect()
            }
        });

        Self { tag, expanded, filtered, displayed }
    }

    /// Select a tag. Changing the filter re-collapses the view.
    pub fn select_tag(&self, tag: TagFilter) {
        if self.tag.get() != tag {
            self.tag.set(tag);
            self.expanded.set(false);
        }
    }

    /// Reveal the non-featured candidates ("Show More Projects").
    pub fn expand(&self) {
        self.expanded.set(true);
    }

    pub fn tag(&self) -> TagFilter {
        self.tag.get()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// The candidate set for the current tag.
    pub fn filtered(&self) -> Vec<Project> {
        self.filtered.get()
    }

    /// The set the page actually shows.
    pub fn displayed(&self) -> Vec<Project> {
        self.displayed.get()
    }

    /// Whether the "show more" control applies: collapsed, and the
    /// candidate set holds projects the featured subset hides.
    pub fn has_hidden(&self) -> bool {
        !self.is_expanded() && self.filtered().len() > self.displayed().len()
    }
}

/// Tags offered by the filter bar: the first [`FILTER_BAR_TAGS`] unique
/// technologies in declaration order.
pub fn filter_bar_tags(content: &SiteContent) -> Vec<&'static str> {
    let mut tags = content.all_technologies();
    tags.truncate(FILTER_BAR_TAGS);
    tags
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site;

    fn make_filter() -> (Rc<SiteContent>, ProjectFilter) {
        let content = Rc::new(site());
        let filter = ProjectFilter::new(content.clone());
        (content, filter)
    }

    #[test]
    fn test_all_is_identity() {
        let (content, filter) = make_filter();
        assert_eq!(filter.filtered(), content.projects);
    }

    #[test]
    fn test_tag_match_is_case_insensitive_substring() {
        let (_, filter) = make_filter();
        filter.select_tag(TagFilter::Tag("react".into()));

        let filtered = filter.filtered();
        assert!(!filtered.is_empty());
        for project in &filtered {
            assert!(
                project
                    .technologies
                    .iter()
                    .any(|t| t.to_lowercase().contains("react")),
                "{} has no tag matching 'react'",
                project.title
            );
        }
    }

    #[test]
    fn test_substring_matches_partial_tags() {
        let (content, filter) = make_filter();
        // "node" matches "Node.js"
        filter.select_tag(TagFilter::Tag("node".into()));
        let filtered = filter.filtered();
        assert!(!filtered.is_empty());
        assert!(filtered.len() < content.projects.len());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let (_, filter) = make_filter();
        filter.select_tag(TagFilter::Tag("cobol".into()));
        assert!(filter.filtered().is_empty());
        assert!(filter.displayed().is_empty());
        assert!(!filter.has_hidden());
    }

    #[test]
    fn test_collapsed_shows_featured_subset() {
        let (content, filter) = make_filter();

        let displayed = filter.displayed();
        let featured: Vec<Project> =
            content.projects.iter().filter(|p| p.featured).cloned().collect();
        assert_eq!(displayed, featured);
        assert!(filter.has_hidden());
    }

    #[test]
    fn test_expanded_shows_all_candidates() {
        let (_, filter) = make_filter();
        filter.expand();
        assert_eq!(filter.displayed(), filter.filtered());
        assert!(!filter.has_hidden());
    }

    #[test]
    fn test_changing_tag_recollapses() {
        let (_, filter) = make_filter();
        filter.expand();
        assert!(filter.is_expanded());

        filter.select_tag(TagFilter::Tag("react".into()));
        assert!(!filter.is_expanded());

        // Re-selecting the same tag is a no-op and keeps expansion
        filter.expand();
        filter.select_tag(TagFilter::Tag("react".into()));
        assert!(filter.is_expanded());
    }

    #[test]
    fn test_filter_bar_offers_first_eight() {
        let content = site();
        let tags = filter_bar_tags(&content);
        assert_eq!(tags.len(), FILTER_BAR_TAGS.min(content.all_technologies().len()));
        assert_eq!(&content.all_technologies()[..tags.len()], &tags[..]);
    }
}
