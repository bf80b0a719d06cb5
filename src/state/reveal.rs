//! Reveal latches - scroll-triggered one-shot visibility.
//!
//! Each page section registers a region by key and gets back a
//! `Signal<bool>` that flips false→true the first time the section's
//! rows intersect the viewport band, and never flips back. After
//! latching, the region is no longer checked (observe once, then
//! detach); the latch itself survives so views keep reading `true`.
//!
//! The app runs [`sweep`] after every layout pass, handing over each
//! region's computed rect. A registered region with no rect in the
//! sweep data cannot be observed, and the safe fallback is "visible" —
//! content must never stay hidden because observation was unavailable.
//!
//! Keys are namespaced by route (`"home/hero"`); re-entering a route is
//! a fresh mount, so the router calls [`reset_prefix`] for the
//! incoming route's namespace.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

use crate::types::Rect;

struct RegionEntry {
    key: String,
    latch: Signal<bool>,
    /// Still being observed. Cleared on latch.
    active: bool,
}

thread_local! {
    static REGIONS: RefCell<Vec<RegionEntry>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Register (or re-fetch) a region's latch signal.
///
/// Idempotent per key: the same key always yields the same latch until
/// it is reset, so views may call this on every rebuild.
pub fn observe(key: &str) -> Signal<bool> {
    REGIONS.with(|regions| {
        let mut regions = regions.borrow_mut();
        if let Some(entry) = regions.iter().find(|entry| entry.key == key) {
            return entry.latch.clone();
        }
        let latch = signal(false);
        regions.push(RegionEntry {
            key: key.to_string(),
            latch: latch.clone(),
            active: true,
        });
        latch
    })
}

/// Check every still-observed region against the viewport band
/// `[top, bottom)` in content rows. Latched regions detach from
/// further observation. Returns how many latched this sweep.
///
/// Regions missing from `rects` latch immediately (fallback: visible).
pub fn sweep(rects: &HashMap<String, Rect>, top: u16, bottom: u16) -> usize {
    REGIONS.with(|regions| {
        let mut regions = regions.borrow_mut();
        let mut latched = 0;

        for entry in regions.iter_mut().filter(|entry| entry.active) {
            let visible = match rects.get(&entry.key) {
                Some(rect) => rect.intersects_rows(top, bottom),
                None => true, // cannot observe: never hide content
            };
            if visible {
                entry.latch.set(true);
                entry.active = false;
                latched += 1;
            }
        }

        latched
    })
}

/// Forget every region whose key starts with `prefix`. The next
/// `observe` for such a key starts a fresh unlatched region (a new
/// mount of that route).
pub fn reset_prefix(prefix: &str) {
    REGIONS.with(|regions| {
        regions.borrow_mut().retain(|entry| !entry.key.starts_with(prefix));
    });
}

/// Drop all regions (for testing).
pub fn reset_reveals() {
    REGIONS.with(|regions| regions.borrow_mut().clear());
}

/// Number of regions still being observed.
pub fn active_count() -> usize {
    REGIONS.with(|regions| regions.borrow().iter().filter(|entry| entry.active).count())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_reveals();
    }

    fn rects_of(entries: &[(&str, Rect)]) -> HashMap<String, Rect> {
        entries.iter().map(|(k, r)| (k.to_string(), *r)).collect()
    }

    #[test]
    fn test_latches_when_region_enters_viewport() {
        setup();

        let latch = observe("home/hero");
        assert!(!latch.get());

        let rects = rects_of(&[("home/hero", Rect::new(0, 0, 80, 10))]);
        sweep(&rects, 0, 24);
        assert!(latch.get());
    }

    #[test]
    fn test_offscreen_region_stays_unlatched() {
        setup();

        let latch = observe("home/banner");
        let rects = rects_of(&[("home/banner", Rect::new(0, 50, 80, 10))]);

        sweep(&rects, 0, 24); // viewport rows 0..24, region at 50
        assert!(!latch.get());
        assert_eq!(active_count(), 1);
    }

    #[test]
    fn test_latch_never_reverts() {
        setup();

        let latch = observe("home/hero");
        let rects = rects_of(&[("home/hero", Rect::new(0, 0, 80, 10))]);

        sweep(&rects, 0, 24);
        assert!(latch.get());

        // Scroll away: the region is out of view, the latch holds
        sweep(&rects, 100, 124);
        assert!(latch.get());

        // And it detached: no longer observed
        assert_eq!(active_count(), 0);
    }

    #[test]
    fn test_observe_is_idempotent() {
        setup();

        let first = observe("about/skills");
        let rects = rects_of(&[("about/skills", Rect::new(0, 0, 80, 5))]);
        sweep(&rects, 0, 24);

        // Same key after latching still reads true
        let second = observe("about/skills");
        assert!(second.get());
        assert!(first.get());
    }

    #[test]
    fn test_missing_rect_falls_back_to_visible() {
        setup();

        let latch = observe("contact/form");
        // Sweep data knows nothing about the region
        sweep(&HashMap::new(), 0, 24);
        assert!(latch.get());
    }

    #[test]
    fn test_reset_prefix_is_a_fresh_mount() {
        setup();

        let latch = observe("home/hero");
        let rects = rects_of(&[("home/hero", Rect::new(0, 0, 80, 10))]);
        sweep(&rects, 0, 24);
        assert!(latch.get());

        reset_prefix("home/");

        // New registration starts unlatched
        let latch = observe("home/hero");
        assert!(!latch.get());

        // Other namespaces are untouched
        let about = observe("about/intro");
        sweep(&rects_of(&[("about/intro", Rect::new(0, 0, 80, 3))]), 0, 24);
        assert!(about.get());
        reset_prefix("home/");
        assert!(observe("about/intro").get());
    }

    #[test]
    fn test_independent_regions_fire_independently() {
        setup();

        let hero = observe("home/hero");
        let banner = observe("home/banner");
        let rects = rects_of(&[
            ("home/hero", Rect::new(0, 0, 80, 10)),
            ("home/banner", Rect::new(0, 40, 80, 10)),
        ]);

        assert_eq!(sweep(&rects, 0, 24), 1);
        assert!(hero.get());
        assert!(!banner.get());

        // Scroll down: the banner latches too
        assert_eq!(sweep(&rects, 30, 54), 1);
        assert!(banner.get());
    }
}
