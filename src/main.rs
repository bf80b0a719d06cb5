//! Binary entry point: logging, terminal setup, and the event loop.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::info;
use spark_signals::flush_sync;

use termfolio::app::App;
use termfolio::content::site;
use termfolio::error::AppError;
use termfolio::render::DiffRenderer;
use termfolio::state::timers;
use termfolio::{logging, theme};

/// Upper bound on how long the loop blocks when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() {
    let _logger = match logging::init() {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("termfolio: failed to set up logging: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run() {
        log::error!("fatal: {err}");
        eprintln!("termfolio: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let theme = std::env::var("TERMFOLIO_THEME")
        .ok()
        .and_then(|name| theme::get_preset(&name))
        .unwrap_or_else(theme::midnight);

    let size = terminal::size()?;
    let app = App::new(site(), theme, size);

    let renderer = Rc::new(RefCell::new(DiffRenderer::stdout()));
    renderer.borrow_mut().enter_fullscreen()?;

    let result = event_loop(&app, &renderer);

    // Restore the terminal even when the loop errored.
    app.shutdown();
    renderer.borrow_mut().exit_fullscreen()?;
    result
}

fn event_loop(
    app: &App,
    renderer: &Rc<RefCell<DiffRenderer<io::Stdout>>>,
) -> Result<(), AppError> {
    let _unmount = app.mount(renderer.clone());

    loop {
        flush_sync();

        // Sweep the reveal regions against the frame just rendered.
        // A latch dirties the frame, so go straight into another pass.
        let frame = app.frame();
        if app.sweep(&frame) > 0 {
            continue;
        }

        let timeout = timers::next_deadline().unwrap_or(IDLE_POLL).min(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if !app.handle_key(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                    renderer.borrow_mut().invalidate();
                }
                _ => {}
            }
        }
        timers::fire_due();
    }
}
