//! Application core.
//!
//! Wires the reactive pipeline: state signals feed one frame derived
//! (views → layout → paint → scrolled screen buffer), and one render
//! effect pushes changed cells to the terminal. The main loop only
//! writes signals, fires due timers, and sweeps the reveal regions
//! after each produced frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error, info};
use spark_signals::{Derived, Signal, derived, effect, signal};

use crate::content::SiteContent;
use crate::layout::compute_layout;
use crate::render::{DiffRenderer, FrameBuffer, paint};
use crate::state::filter::{ProjectFilter, TagFilter, filter_bar_tags};
use crate::state::form::{ContactForm, SimulatedTransport};
use crate::state::reveal;
use crate::state::router::{Route, Router};
use crate::state::typing;
use crate::theme::Theme;
use crate::types::{Cleanup, Rect};
use crate::ui::Node;
use crate::views::{self, NAV_ROWS};

/// One computed frame: the screen to draw plus the sweep data the main
/// loop needs afterwards.
#[derive(Clone, PartialEq)]
pub struct Frame {
    pub screen: FrameBuffer,
    /// Computed rects of reveal-keyed sections, in content rows.
    pub regions: HashMap<String, Rect>,
    /// Viewport band in content rows, `[top, bottom)`.
    pub band: (u16, u16),
    pub max_scroll: u16,
}

pub struct App {
    content: Rc<SiteContent>,
    router: Rc<Router>,
    filter: Rc<ProjectFilter>,
    form: Rc<ContactForm>,
    /// Present while the home page is mounted.
    typing: Rc<RefCell<Option<(Signal<String>, Cleanup)>>>,
    size: Signal<(u16, u16)>,
    frame: Derived<Frame>,
}

impl App {
    pub fn new(content: SiteContent, theme: Theme, size: (u16, u16)) -> Self {
        let content = Rc::new(content);
        let router = Rc::new(Router::new());
        let filter = Rc::new(ProjectFilter::new(content.clone()));
        let form = Rc::new(ContactForm::new(Rc::new(SimulatedTransport)));
        let typing: Rc<RefCell<Option<(Signal<String>, Cleanup)>>> =
            Rc::new(RefCell::new(None));
        let size = signal(size);

        let frame = {
            let content = content.clone();
            let router = router.clone();
            let filter = filter.clone();
            let form = form.clone();
            let typing = typing.clone();
            let size = size.clone();
            derived(move || {
                compute_frame(&theme, &content, &router, &filter, &form, &typing, size.get())
            })
        };

        let app = Self { content, router, filter, form, typing, size, frame };
        // The home page is mounted from the start.
        app.start_typing();
        info!("app initialized at {:?}", app.size.get());
        app
    }

    // -------------------------------------------------------------------------
    // Frame access
    // -------------------------------------------------------------------------

    pub fn frame(&self) -> Frame {
        self.frame.get()
    }

    /// Attach the render effect. Returns the cleanup that detaches it.
    pub fn mount<W: Write + 'static>(
        &self,
        renderer: Rc<RefCell<DiffRenderer<W>>>,
    ) -> Cleanup {
        let frame = self.frame.clone();
        let stop = effect(move || {
            let frame = frame.get();
            if let Err(err) = renderer.borrow_mut().render(&frame.screen) {
                error!("render failed: {err}");
            }
        });
        Box::new(stop)
    }

    /// Check reveal regions against the frame's viewport band. Returns
    /// how many latched; a nonzero result means the next frame differs.
    pub fn sweep(&self, frame: &Frame) -> usize {
        let latched = reveal::sweep(&frame.regions, frame.band.0, frame.band.1);
        if latched > 0 {
            debug!("{latched} section(s) revealed");
        }
        latched
    }

    pub fn resize(&self, width: u16, height: u16) {
        self.size.set((width, height));
    }

    // -------------------------------------------------------------------------
    // Navigation & typing lifecycle
    // -------------------------------------------------------------------------

    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Navigate, mounting and unmounting the typing animation with the
    /// home page.
    pub fn navigate(&self, route: Route) {
        let from = self.router.current();
        if from == route {
            return;
        }
        self.router.navigate(route);
        if from == Route::Home {
            self.stop_typing();
        }
        if route == Route::Home {
            self.start_typing();
        }
        info!("navigated {} -> {}", from.path(), route.path());
    }

    fn start_typing(&self) {
        let mut slot = self.typing.borrow_mut();
        if slot.is_none() {
            *slot = Some(typing::start(self.content.typing_texts.clone()));
        }
    }

    fn stop_typing(&self) {
        if let Some((_, cleanup)) = self.typing.borrow_mut().take() {
            cleanup();
        }
    }

    /// Cancel everything that could fire after teardown.
    pub fn shutdown(&self) {
        self.stop_typing();
        self.form.cancel_pending();
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle a key event. Returns `false` when the app should quit.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Up => {
                self.scroll_by(-1);
                return true;
            }
            KeyCode::Down => {
                self.scroll_by(1);
                return true;
            }
            KeyCode::PageUp => {
                self.scroll_by(-self.page_rows());
                return true;
            }
            KeyCode::PageDown => {
                self.scroll_by(self.page_rows());
                return true;
            }
            _ => {}
        }

        if self.router.current() == Route::Contact {
            self.handle_contact_key(key)
        } else {
            self.handle_browse_key(key)
        }
    }

    fn handle_browse_key(&self, key: KeyEvent) -> bool {
        let route = self.router.current();
        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('1') => self.navigate(Route::Home),
            KeyCode::Char('2') => self.navigate(Route::About),
            KeyCode::Char('3') => self.navigate(Route::Projects),
            KeyCode::Char('4') => self.navigate(Route::Contact),
            KeyCode::Tab => self.navigate(route.next()),
            KeyCode::BackTab => self.navigate(route.previous()),
            KeyCode::Home => self.router.scroll_to_top(),
            KeyCode::Char('a') if route == Route::Projects => {
                self.filter.select_tag(TagFilter::All)
            }
            KeyCode::Left if route == Route::Projects => self.cycle_filter(-1),
            KeyCode::Right if route == Route::Projects => self.cycle_filter(1),
            KeyCode::Char('m') | KeyCode::Enter if route == Route::Projects => {
                self.filter.expand()
            }
            _ => {}
        }
        true
    }

    /// On the contact page printable keys edit the focused field, so
    /// browse shortcuts do not apply here.
    fn handle_contact_key(&self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_previous(),
            KeyCode::Enter => self.form.submit(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => self.form.insert_char(ch),
            _ => {}
        }
        true
    }

    fn scroll_by(&self, delta: i32) {
        let max = self.frame.get().max_scroll;
        self.router.scroll_by(delta, max);
    }

    fn page_rows(&self) -> i32 {
        self.size.get().1.saturating_sub(NAV_ROWS).max(1) as i32
    }

    /// Step the projects filter bar selection left or right, wrapping.
    fn cycle_filter(&self, step: i32) {
        let mut options = vec![TagFilter::All];
        options.extend(
            filter_bar_tags(&self.content)
                .into_iter()
                .map(|tag| TagFilter::Tag(tag.to_string())),
        );

        let current = self.filter.tag();
        let index = options.iter().position(|o| *o == current).unwrap_or(0) as i32;
        let next = (index + step).rem_euclid(options.len() as i32) as usize;
        self.filter.select_tag(options[next].clone());
    }
}

// =============================================================================
// FRAME COMPUTATION
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn compute_frame(
    theme: &Theme,
    content: &SiteContent,
    router: &Router,
    filter: &ProjectFilter,
    form: &ContactForm,
    typing: &RefCell<Option<(Signal<String>, Cleanup)>>,
    (width, height): (u16, u16),
) -> Frame {
    let route = router.current();

    let body = match route {
        Route::Home => {
            let line = typing
                .borrow()
                .as_ref()
                .map(|(display, _)| display.get())
                .unwrap_or_default();
            views::home::view(theme, content, &line)
        }
        Route::About => views::about::view(theme, content),
        Route::Projects => views::projects::view(theme, content, filter),
        Route::Contact => views::contact::view(theme, content, form),
    };
    let page = Node::column(
        Default::default(),
        vec![body, views::nav::footer(theme, content)],
    );

    // Page content at full width, unconstrained height.
    let layout = compute_layout(&page, width);
    let content_height = layout.content_height.max(1);
    let mut content_buf = FrameBuffer::new(width.max(1), content_height);
    content_buf.fill_rect(Rect::new(0, 0, width, content_height), theme.background);
    paint(&page, &layout, &mut content_buf);

    let view_rows = height.saturating_sub(NAV_ROWS);
    let max_scroll = layout.content_height.saturating_sub(view_rows);
    let scroll = router.scroll_offset().min(max_scroll);

    // Compose the screen: nav on top, scrolled content band below.
    let nav = views::nav::navbar(theme, route);
    let nav_layout = compute_layout(&nav, width);
    let mut nav_buf = FrameBuffer::new(width.max(1), NAV_ROWS);
    nav_buf.fill_rect(Rect::new(0, 0, width, NAV_ROWS), theme.surface);
    paint(&nav, &nav_layout, &mut nav_buf);

    let mut screen = FrameBuffer::new(width, height);
    screen.fill_rect(Rect::new(0, 0, width, height), theme.background);
    screen.blit_rows(&nav_buf, 0, 0, NAV_ROWS);
    screen.blit_rows(&content_buf, scroll, NAV_ROWS, view_rows);

    Frame {
        screen,
        regions: layout.region_rects(&page),
        band: (scroll, scroll + view_rows),
        max_scroll,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site;
    use crate::state::form::Field;
    use crate::theme::midnight;

    const SIZE: (u16, u16) = (80, 24);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_app() -> App {
        reveal::reset_reveals();
        crate::state::timers::reset_timers();
        App::new(site(), midnight(), SIZE)
    }

    #[test]
    fn test_initial_frame_is_home() {
        let app = make_app();
        let frame = app.frame();

        assert_eq!(frame.screen.width(), SIZE.0);
        assert_eq!(frame.screen.height(), SIZE.1);
        assert!(frame.regions.contains_key("home/hero"));
        assert_eq!(frame.band.0, 0);
    }

    #[test]
    fn test_sweep_latches_visible_sections() {
        let app = make_app();
        let frame = app.frame();

        assert!(app.sweep(&frame) > 0);
        assert!(reveal::observe("home/hero").get());
    }

    #[test]
    fn test_navigation_switches_page() {
        let app = make_app();
        app.navigate(Route::Projects);

        let frame = app.frame();
        assert!(frame.regions.contains_key("projects/header"));
        assert!(!frame.regions.contains_key("home/hero"));
    }

    #[test]
    fn test_typing_stops_when_leaving_home() {
        let app = make_app();
        assert_eq!(crate::state::timers::pending_count(), 1);

        app.navigate(Route::About);
        assert_eq!(crate::state::timers::pending_count(), 0);

        app.navigate(Route::Home);
        assert_eq!(crate::state::timers::pending_count(), 1);
        app.shutdown();
    }

    #[test]
    fn test_scroll_keys_move_the_band() {
        let app = make_app();
        let before = app.frame();
        assert!(before.max_scroll > 0, "home page should overflow 24 rows");

        assert!(app.handle_key(key(KeyCode::Down)));
        assert_eq!(app.frame().band.0, 1);

        app.handle_key(key(KeyCode::PageDown));
        let after = app.frame();
        assert!(after.band.0 > 1);
        assert!(after.band.0 <= after.max_scroll);
    }

    #[test]
    fn test_digit_keys_navigate() {
        let app = make_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.route(), Route::Projects);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.route(), Route::Contact);
    }

    #[test]
    fn test_contact_keys_edit_the_form() {
        let app = make_app();
        app.navigate(Route::Contact);

        // Digits are text here, not navigation
        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.route(), Route::Contact);
        assert_eq!(app.form.field(Field::Name).get(), "h1");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.form.field(Field::Email).get(), "x");
        app.shutdown();
    }

    #[test]
    fn test_filter_cycling_on_projects() {
        let app = make_app();
        app.navigate(Route::Projects);
        assert_eq!(app.filter.tag(), TagFilter::All);

        app.handle_key(key(KeyCode::Right));
        assert!(matches!(app.filter.tag(), TagFilter::Tag(_)));

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.filter.tag(), TagFilter::All);

        // Wraps backwards onto the last tag
        app.handle_key(key(KeyCode::Left));
        assert!(matches!(app.filter.tag(), TagFilter::Tag(_)));
    }

    #[test]
    fn test_quit_keys() {
        let app = make_app();
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));

        // 'q' types into the form instead of quitting
        app.navigate(Route::Contact);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.form.field(Field::Name).get(), "q");
        app.shutdown();
    }

    #[test]
    fn test_revealed_section_changes_the_frame() {
        let app = make_app();
        let before = app.frame();
        app.sweep(&before);

        // Latched sections render undimmed, so the frame differs.
        let after = app.frame();
        assert_ne!(before.screen, after.screen);
    }
}
