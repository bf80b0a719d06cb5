//! termfolio - a personal portfolio rendered as a reactive terminal UI.
//!
//! The pipeline is one straight line:
//!
//! ```text
//! state signals (route, scroll, typing, filter, form, reveal latches)
//!   │
//!   └─→ frame derived
//!         build the page's node tree from the views
//!         lay it out with Taffy at the terminal width
//!         paint it into a content buffer
//!         blit the scrolled band under the nav bar
//!   │
//!   └─→ render effect
//!         diff against the previous frame, emit changed cells
//! ```
//!
//! The main loop blocks on terminal input with a timeout equal to the
//! earliest pending timer deadline, so typing animation ticks and the
//! contact form's simulated submission fire without any busy polling.
//! After each frame the reveal regions are swept against the viewport
//! band; sections latch visible the first time they scroll in.

pub mod app;
pub mod content;
pub mod error;
pub mod layout;
pub mod logging;
pub mod render;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;

pub use app::{App, Frame};
pub use error::AppError;
