//! Timer queue - single-threaded, cancellable one-shot timers.
//!
//! All suspension points in the app (typing ticks, the simulated form
//! delay, the status-reset delay) are entries in this queue. The main
//! loop asks [`next_deadline`] how long it may block on terminal input,
//! then calls [`fire_due`] to run whatever became due.
//!
//! Every `schedule` returns a [`TimerHandle`]; the owning view must
//! cancel it on teardown so no callback fires against a removed view.
//! Entries run at most once. Recurring behavior (the typing animation)
//! is a callback that schedules its successor, which by construction
//! keeps exactly one tick outstanding per component.

use std::cell::RefCell;
use std::time::{Duration, Instant};

// =============================================================================
// TIMER REGISTRY
// =============================================================================

struct TimerEntry {
    id: u64,
    deadline: Instant,
    callback: Box<dyn FnOnce()>,
}

thread_local! {
    /// Pending timers, unordered. The queue is tiny (a handful of
    /// entries), so scans beat a heap.
    static TIMERS: RefCell<Vec<TimerEntry>> = const { RefCell::new(Vec::new()) };

    /// Counter for handle ids.
    static NEXT_ID: RefCell<u64> = const { RefCell::new(1) };
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Handle to a scheduled timer. Cancel it when the owning view goes
/// away; cancelling an already-fired timer is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
}

impl TimerHandle {
    /// Remove the timer from the queue if it has not fired yet.
    pub fn cancel(self) {
        TIMERS.with(|timers| {
            timers.borrow_mut().retain(|entry| entry.id != self.id);
        });
    }

    /// Check whether the timer is still pending.
    pub fn is_pending(self) -> bool {
        TIMERS.with(|timers| timers.borrow().iter().any(|entry| entry.id == self.id))
    }
}

/// Schedule `callback` to run once after `delay`.
pub fn schedule(delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    TIMERS.with(|timers| {
        timers.borrow_mut().push(TimerEntry {
            id,
            deadline: Instant::now() + delay,
            callback,
        });
    });

    TimerHandle { id }
}

/// Time until the earliest pending deadline, if any.
///
/// `Duration::ZERO` means a timer is already due. The main loop uses
/// this as its input-poll timeout; `None` means it may block freely.
pub fn next_deadline() -> Option<Duration> {
    TIMERS.with(|timers| {
        let timers = timers.borrow();
        let earliest = timers.iter().map(|entry| entry.deadline).min()?;
        Some(earliest.saturating_duration_since(Instant::now()))
    })
}

/// Run all callbacks whose deadline has passed. Returns how many fired.
///
/// Due entries are removed from the queue before their callbacks run,
/// so a callback may freely schedule new timers (the typing animation
/// does) or cancel others.
pub fn fire_due() -> usize {
    let now = Instant::now();

    let due: Vec<TimerEntry> = TIMERS.with(|timers| {
        let mut timers = timers.borrow_mut();
        let mut due = Vec::new();
        let mut i = 0;
        while i < timers.len() {
            if timers[i].deadline <= now {
                due.push(timers.swap_remove(i));
            } else {
                i += 1;
            }
        }
        // Stable firing order for entries scheduled at the same instant
        due.sort_by_key(|entry| entry.id);
        due
    });

    let count = due.len();
    for entry in due {
        (entry.callback)();
    }
    count
}

/// Number of pending timers.
pub fn pending_count() -> usize {
    TIMERS.with(|timers| timers.borrow().len())
}

/// Drop every pending timer (for testing).
pub fn reset_timers() {
    TIMERS.with(|timers| timers.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_timers();
    }

    #[test]
    fn test_due_timer_fires_once() {
        setup();

        let fired = Rc::new(Cell::new(0));
        let fired_cb = fired.clone();
        schedule(Duration::ZERO, Box::new(move || fired_cb.set(fired_cb.get() + 1)));

        assert_eq!(fire_due(), 1);
        assert_eq!(fired.get(), 1);

        // Entry is gone; firing again does nothing
        assert_eq!(fire_due(), 0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        setup();

        let fired = Rc::new(Cell::new(false));
        let fired_cb = fired.clone();
        let handle = schedule(Duration::ZERO, Box::new(move || fired_cb.set(true)));

        assert!(handle.is_pending());
        handle.cancel();
        assert!(!handle.is_pending());

        assert_eq!(fire_due(), 0);
        assert!(!fired.get());
    }

    #[test]
    fn test_future_timer_not_due() {
        setup();

        let fired = Rc::new(Cell::new(false));
        let fired_cb = fired.clone();
        schedule(Duration::from_secs(60), Box::new(move || fired_cb.set(true)));

        assert_eq!(fire_due(), 0);
        assert!(!fired.get());
        assert_eq!(pending_count(), 1);

        let deadline = next_deadline().unwrap();
        assert!(deadline > Duration::from_secs(50));
    }

    #[test]
    fn test_callback_may_reschedule() {
        setup();

        let fired = Rc::new(Cell::new(0));
        let fired_cb = fired.clone();
        schedule(
            Duration::ZERO,
            Box::new(move || {
                fired_cb.set(fired_cb.get() + 1);
                let inner = fired_cb.clone();
                schedule(Duration::ZERO, Box::new(move || inner.set(inner.get() + 1)));
            }),
        );

        // First sweep fires the original, which schedules a successor
        assert_eq!(fire_due(), 1);
        assert_eq!(pending_count(), 1);

        // Second sweep fires the successor
        assert_eq!(fire_due(), 1);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_next_deadline_empty() {
        setup();
        assert_eq!(next_deadline(), None);
    }

    #[test]
    fn test_same_instant_fires_in_schedule_order() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order_cb = order.clone();
            schedule(Duration::ZERO, Box::new(move || order_cb.borrow_mut().push(n)));
        }

        assert_eq!(fire_due(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }
}
