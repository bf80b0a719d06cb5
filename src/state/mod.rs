//! State modules: timers, routing, reveal latches, typing animation,
//! project filtering, and the contact form controller.
//!
//! Each page view owns its state independently; nothing here is shared
//! mutable state across components. Everything timer-driven goes
//! through [`timers`], so the main loop can block on input with a
//! timeout equal to the earliest pending deadline and every pending
//! callback stays cancellable.

pub mod filter;
pub mod form;
pub mod reveal;
pub mod router;
pub mod timers;
pub mod typing;
