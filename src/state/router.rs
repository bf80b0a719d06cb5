//! Client-side routing between the four pages.
//!
//! A route signal plus a per-route scroll offset. Navigating to a
//! route is a fresh mount of that page: its scroll resets to the top
//! and its reveal latches are cleared (they re-fire as the content
//! scrolls into view again).

use spark_signals::{Signal, signal};

use super::reveal;

/// The four rendered routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    /// The web path this view corresponds to.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    /// Namespace prefix for this route's reveal regions.
    pub fn reveal_prefix(&self) -> &'static str {
        match self {
            Route::Home => "home/",
            Route::About => "about/",
            Route::Projects => "projects/",
            Route::Contact => "contact/",
        }
    }

    pub fn next(self) -> Route {
        match self {
            Route::Home => Route::About,
            Route::About => Route::Projects,
            Route::Projects => Route::Contact,
            Route::Contact => Route::Home,
        }
    }

    pub fn previous(self) -> Route {
        match self {
            Route::Home => Route::Contact,
            Route::About => Route::Home,
            Route::Projects => Route::About,
            Route::Contact => Route::Projects,
        }
    }
}

/// Route state plus per-route scroll offsets.
pub struct Router {
    current: Signal<Route>,
    scroll: [Signal<u16>; 4],
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: signal(Route::Home),
            scroll: [signal(0), signal(0), signal(0), signal(0)],
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn current_signal(&self) -> Signal<Route> {
        self.current.clone()
    }

    /// Navigate to `route`. A no-op when already there; otherwise the
    /// target page mounts fresh: scroll to top, reveal latches reset.
    pub fn navigate(&self, route: Route) {
        if self.current.get() == route {
            return;
        }
        reveal::reset_prefix(route.reveal_prefix());
        self.scroll_signal(route).set(0);
        self.current.set(route);
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    fn scroll_signal(&self, route: Route) -> Signal<u16> {
        let index = Route::ALL.iter().position(|r| *r == route).unwrap_or(0);
        self.scroll[index].clone()
    }

    /// Current route's scroll offset in content rows.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_signal(self.current.get()).get()
    }

    /// Scroll the current route by `delta` rows, clamped to `[0, max]`.
    ///
    /// Returns `true` if the offset actually moved.
    pub fn scroll_by(&self, delta: i32, max: u16) -> bool {
        let scroll = self.scroll_signal(self.current.get());
        let current = scroll.get();
        let next = ((current as i32) + delta).clamp(0, max as i32) as u16;
        if next == current {
            return false;
        }
        scroll.set(next);
        true
    }

    /// Jump the current route to the top.
    pub fn scroll_to_top(&self) {
        self.scroll_signal(self.current.get()).set(0);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_cycle_covers_all() {
        let mut route = Route::Home;
        for expected in [Route::About, Route::Projects, Route::Contact, Route::Home] {
            route = route.next();
            assert_eq!(route, expected);
        }
        assert_eq!(Route::Home.previous(), Route::Contact);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Projects.path(), "/projects");
    }

    #[test]
    fn test_navigation_resets_scroll() {
        reveal::reset_reveals();
        let router = Router::new();

        router.scroll_by(10, 100);
        assert_eq!(router.scroll_offset(), 10);

        router.navigate(Route::About);
        assert_eq!(router.scroll_offset(), 0);

        // Scroll position of Home was left as-is but re-entering resets it
        router.navigate(Route::Home);
        assert_eq!(router.scroll_offset(), 0);
    }

    #[test]
    fn test_navigation_resets_reveals_of_target() {
        reveal::reset_reveals();
        let router = Router::new();

        let latch = reveal::observe("about/intro");
        let rects = [("about/intro".to_string(), crate::types::Rect::new(0, 0, 80, 4))]
            .into_iter()
            .collect();
        reveal::sweep(&rects, 0, 24);
        assert!(latch.get());

        router.navigate(Route::About);
        assert!(!reveal::observe("about/intro").get());
    }

    #[test]
    fn test_scroll_clamps() {
        let router = Router::new();

        assert!(!router.scroll_by(-5, 100)); // already at top
        assert!(router.scroll_by(250, 100));
        assert_eq!(router.scroll_offset(), 100); // clamped to max

        assert!(!router.scroll_by(10, 100)); // at the bottom already
        assert!(router.scroll_by(-100, 100));
        assert_eq!(router.scroll_offset(), 0);
    }
}
