//! Typing animation - the home page's cycling headline.
//!
//! Cycles through a list of strings, revealing one character per tick,
//! pausing when fully revealed, deleting one character per tick,
//! pausing when empty, then advancing to the next string (wrapping
//! forever).
//!
//! State machine: `Typing → PausedFull → Deleting → PausedEmpty →
//! Typing(next)`. The machine itself is pure ([`TypingState::tick`]
//! advances one step and reports the delay until the next), so tests
//! can drive it deterministically. [`start`] mounts it on the timer
//! queue; exactly one tick is outstanding at a time, and the returned
//! cleanup cancels it so no callback fires against a torn-down view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, signal};

use super::timers::{self, TimerHandle};
use crate::types::Cleanup;

// =============================================================================
// CADENCE
// =============================================================================

/// Delay between revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(120);
/// Delay between deleted characters.
pub const DELETE_INTERVAL: Duration = Duration::from_millis(60);
/// Hold time with the string fully revealed.
pub const PAUSE_FULL: Duration = Duration::from_millis(1500);
/// Hold time with the string fully erased.
pub const PAUSE_EMPTY: Duration = Duration::from_millis(500);

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Where the animation is within one reveal/erase cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// The pure typing-state machine.
pub struct TypingState {
    texts: Vec<&'static str>,
    index: usize,
    /// Characters of the current target currently shown.
    shown: usize,
    phase: Phase,
    display: Signal<String>,
}

impl TypingState {
    /// Create the machine over a non-empty list of target strings.
    ///
    /// # Panics
    ///
    /// Panics if `texts` is empty; the contract requires at least one.
    pub fn new(texts: Vec<&'static str>) -> Self {
        assert!(!texts.is_empty(), "typing animation needs at least one text");
        Self {
            texts,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            display: signal(String::new()),
        }
    }

    /// The reactive display string the view renders.
    pub fn display(&self) -> Signal<String> {
        self.display.clone()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance one step. Returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        let target = self.texts[self.index];
        let target_len = target.chars().count();

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(target_len);
                self.sync_display(target);
                if self.shown == target_len {
                    self.phase = Phase::PausedFull;
                    PAUSE_FULL
                } else {
                    TYPE_INTERVAL
                }
            }
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
                DELETE_INTERVAL
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                self.sync_display(target);
                if self.shown == 0 {
                    self.phase = Phase::PausedEmpty;
                    PAUSE_EMPTY
                } else {
                    DELETE_INTERVAL
                }
            }
            Phase::PausedEmpty => {
                self.index = (self.index + 1) % self.texts.len();
                self.phase = Phase::Typing;
                TYPE_INTERVAL
            }
        }
    }

    fn sync_display(&self, target: &str) {
        let shown: String = target.chars().take(self.shown).collect();
        self.display.set(shown);
    }
}

// =============================================================================
// TIMER DRIVER
// =============================================================================

/// Mount the animation on the timer queue.
///
/// Returns the display signal plus a cleanup that cancels the pending
/// tick. The first character appears after one [`TYPE_INTERVAL`].
pub fn start(texts: Vec<&'static str>) -> (Signal<String>, Cleanup) {
    let state = Rc::new(RefCell::new(TypingState::new(texts)));
    let display = state.borrow().display();

    // One slot for the single outstanding tick.
    let slot: Rc<Cell<Option<TimerHandle>>> = Rc::new(Cell::new(None));

    schedule_tick(state, slot.clone(), TYPE_INTERVAL);

    let cleanup: Cleanup = Box::new(move || {
        if let Some(handle) = slot.take() {
            handle.cancel();
        }
    });

    (display, cleanup)
}

fn schedule_tick(
    state: Rc<RefCell<TypingState>>,
    slot: Rc<Cell<Option<TimerHandle>>>,
    delay: Duration,
) {
    let state_cb = state.clone();
    let slot_cb = slot.clone();
    let handle = timers::schedule(
        delay,
        Box::new(move || {
            let next_delay = state_cb.borrow_mut().tick();
            schedule_tick(state_cb.clone(), slot_cb.clone(), next_delay);
        }),
    );
    slot.set(Some(handle));
}

// =============================================================================
// TESTS
// =============================================================================
