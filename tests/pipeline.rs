//! Headless end-to-end pass over the pipeline: content store through
//! views, layout, and paint, asserting on the painted cells.

use std::rc::Rc;

use termfolio::content::site;
use termfolio::layout::compute_layout;
use termfolio::render::{FrameBuffer, paint};
use termfolio::state::filter::{ProjectFilter, TagFilter};
use termfolio::state::form::{ContactForm, Field, SimulatedTransport};
use termfolio::state::reveal;
use termfolio::state::router::Route;
use termfolio::theme::midnight;
use termfolio::ui::Node;
use termfolio::views;

const WIDTH: u16 = 80;

fn render(tree: &Node) -> FrameBuffer {
    let layout = compute_layout(tree, WIDTH);
    let mut buffer = FrameBuffer::new(WIDTH, layout.content_height.max(1));
    paint(tree, &layout, &mut buffer);
    buffer
}

fn screen_text(buffer: &FrameBuffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if let Some(cell) = buffer.get(x, y) {
                text.push(cell.ch);
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn home_page_paints_profile_and_typing_line() {
    reveal::reset_reveals();
    let theme = midnight();
    let content = site();

    let tree = views::home::view(&theme, &content, "Full Stack Developer");
    let text = screen_text(&render(&tree));

    assert!(text.contains(content.personal.name));
    assert!(text.contains("> Full Stack Developer▌"));
    assert!(text.contains("Projects Completed"));
    assert!(text.contains("Have a project in mind?"));
}

#[test]
fn projects_page_follows_filter_state() {
    reveal::reset_reveals();
    let theme = midnight();
    let content = Rc::new(site());
    let filter = ProjectFilter::new(content.clone());

    // Collapsed: featured cards only, plus the show-more hint
    let text = screen_text(&render(&views::projects::view(&theme, &content, &filter)));
    assert!(text.contains("Inflowcare"));
    assert!(text.contains("★ FEATURED"));
    assert!(!text.contains("Weather Dashboard"));
    assert!(text.contains("[m] Show more projects"));

    // Expanded: everything, no hint
    filter.expand();
    let text = screen_text(&render(&views::projects::view(&theme, &content, &filter)));
    assert!(text.contains("Weather Dashboard"));
    assert!(!text.contains("[m] Show more projects"));

    // Tag filter narrows the candidates
    filter.select_tag(TagFilter::Tag("vue".into()));
    let text = screen_text(&render(&views::projects::view(&theme, &content, &filter)));
    assert!(text.contains("Task Management App"));
    assert!(!text.contains("Inflowcare"));

    // No match renders the empty notice
    filter.select_tag(TagFilter::Tag("cobol".into()));
    let text = screen_text(&render(&views::projects::view(&theme, &content, &filter)));
    assert!(text.contains("No projects match this filter."));
    assert!(text.contains("[a] Show all projects"));
}

#[test]
fn contact_page_gates_submission_on_complete_fields() {
    reveal::reset_reveals();
    let theme = midnight();
    let content = site();
    let form = ContactForm::new(Rc::new(SimulatedTransport));

    let text = screen_text(&render(&views::contact::view(&theme, &content, &form)));
    assert!(text.contains("Get In Touch"));
    assert!(text.contains("your.email@example.com")); // placeholder
    assert!(text.contains("Fill in all fields to send"));

    for field in Field::ALL {
        form.field(field).set("filled".into());
    }
    let text = screen_text(&render(&views::contact::view(&theme, &content, &form)));
    assert!(text.contains("[enter] Send Message"));
}

#[test]
fn navbar_highlights_the_active_route() {
    let theme = midnight();

    let tree = views::nav::navbar(&theme, Route::Projects);
    let buffer = render(&tree);
    let text = screen_text(&buffer);

    assert!(text.contains("sham.dev"));
    for route in Route::ALL {
        assert!(text.contains(route.title()));
    }
    assert_eq!(buffer.height(), views::NAV_ROWS);
}

#[test]
fn sections_brighten_after_their_latch_fires() {
    reveal::reset_reveals();
    let theme = midnight();
    let content = site();

    let before = render(&views::about::view(&theme, &content));

    let layout = compute_layout(&views::about::view(&theme, &content), WIDTH);
    let regions = layout.region_rects(&views::about::view(&theme, &content));
    let latched = reveal::sweep(&regions, 0, u16::MAX);
    assert!(latched >= 3, "intro, skills, and experience should latch");

    let after = render(&views::about::view(&theme, &content));
    assert_ne!(screen_buffer_attrs(&before), screen_buffer_attrs(&after));
}

fn screen_buffer_attrs(buffer: &FrameBuffer) -> Vec<u8> {
    let mut attrs = Vec::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if let Some(cell) = buffer.get(x, y) {
                attrs.push(cell.attrs.bits());
            }
        }
    }
    attrs
}
