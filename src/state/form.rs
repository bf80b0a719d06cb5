//! Contact form controller.
//!
//! Four required text fields, a focus cursor for keyboard traversal,
//! and a simulated asynchronous submission. Submission goes through
//! the [`Transport`] seam: the shipped [`SimulatedTransport`] always
//! succeeds after an artificial delay, but the failure branch stays
//! reachable for any transport that can actually fail (and for tests).
//!
//! Status flow: `Idle → Pending → Success|Error → Idle` (the last
//! transition after a fixed display duration). While `Pending`,
//! re-submission is ignored. Success clears the fields; failure keeps
//! them so nothing typed is lost.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, signal};
use thiserror::Error;

use super::timers::{self, TimerHandle};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Artificial delay before the (simulated) transport resolves.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// How long the success/error status stays on screen before resetting.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(5000);

// =============================================================================
// TRANSPORT SEAM
// =============================================================================

/// Failure reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SendError(pub String);

/// The message assembled from the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Delivery seam for the contact form.
///
/// No real delivery exists in this design; the trait keeps the error
/// path reachable should one ever be wired in. Retry policy for a real
/// transport is deliberately undefined here.
pub trait Transport {
    fn send(&self, message: &OutgoingMessage) -> Result<(), SendError>;
}

/// The transport the app ships: resolves successfully, always.
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn send(&self, _message: &OutgoingMessage) -> Result<(), SendError> {
        Ok(())
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Submission status shown next to the submit control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

/// The four fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project or just say hello!",
        }
    }

    fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn previous(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// Contact form controller. Owns its field and status signals; nothing
/// else mutates them.
pub struct ContactForm {
    name: Signal<String>,
    email: Signal<String>,
    subject: Signal<String>,
    message: Signal<String>,
    status: Signal<SubmitStatus>,
    focused: Signal<Field>,
    transport: Rc<dyn Transport>,
    submit_timer: Rc<Cell<Option<TimerHandle>>>,
    reset_timer: Rc<Cell<Option<TimerHandle>>>,
}

impl ContactForm {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            name: signal(String::new()),
            email: signal(String::new()),
            subject: signal(String::new()),
            message: signal(String::new()),
            status: signal(SubmitStatus::Idle),
            focused: signal(Field::Name),
            transport,
            submit_timer: Rc::new(Cell::new(None)),
            reset_timer: Rc::new(Cell::new(None)),
        }
    }

    // -------------------------------------------------------------------------
    // Field access & editing
    // -------------------------------------------------------------------------

    pub fn field(&self, field: Field) -> Signal<String> {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Subject => self.subject.clone(),
            Field::Message => self.message.clone(),
        }
    }

    pub fn focused(&self) -> Field {
        self.focused.get()
    }

    pub fn focus_next(&self) {
        self.focused.set(self.focused.get().next());
    }

    pub fn focus_previous(&self) {
        self.focused.set(self.focused.get().previous());
    }

    /// Append a character to the focused field.
    pub fn insert_char(&self, ch: char) {
        let field = self.field(self.focused.get());
        let mut value = field.get();
        value.push(ch);
        field.set(value);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&self) {
        let field = self.field(self.focused.get());
        let mut value = field.get();
        value.pop();
        field.set(value);
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    pub fn status(&self) -> SubmitStatus {
        self.status.get()
    }

    /// Required-field gate: all four fields non-blank.
    pub fn fields_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.get().trim().is_empty())
    }

    /// Whether the submit control is enabled right now.
    pub fn can_submit(&self) -> bool {
        self.fields_complete() && self.status.get() != SubmitStatus::Pending
    }

    /// Submit the form.
    ///
    /// Ignored while a submission is pending or while any required
    /// field is blank; in both cases the status does not move. On
    /// success the fields clear; on failure they stay untouched and
    /// the error message is surfaced. Either way the status returns to
    /// `Idle` after [`STATUS_RESET_DELAY`].
    pub fn submit(&self) {
        if !self.can_submit() {
            return;
        }

        self.status.set(SubmitStatus::Pending);

        let message = OutgoingMessage {
            name: self.name.get(),
            email: self.email.get(),
            subject: self.subject.get(),
            body: self.message.get(),
        };

        let transport = self.transport.clone();
        let status = self.status.clone();
        let fields = [
            self.name.clone(),
            self.email.clone(),
            self.subject.clone(),
            self.message.clone(),
        ];
        let submit_timer = self.submit_timer.clone();
        let reset_timer = self.reset_timer.clone();

        let handle = timers::schedule(
            SUBMIT_DELAY,
            Box::new(move || {
                submit_timer.set(None);

                match transport.send(&message) {
                    Ok(()) => {
                        status.set(SubmitStatus::Success);
                        for field in &fields {
                            field.set(String::new());
                        }
                    }
                    Err(err) => {
                        // Entered data survives a failed send.
                        status.set(SubmitStatus::Error(err.0));
                    }
                }

                let status_for_reset = status.clone();
                let reset_slot = reset_timer.clone();
                let reset_handle = timers::schedule(
                    STATUS_RESET_DELAY,
                    Box::new(move || {
                        reset_slot.set(None);
                        status_for_reset.set(SubmitStatus::Idle);
                    }),
                );
                reset_timer.set(Some(reset_handle));
            }),
        );
        self.submit_timer.set(Some(handle));
    }

    /// Cancel any pending submission/reset timers (view teardown).
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.submit_timer.take() {
            handle.cancel();
        }
        if let Some(handle) = self.reset_timer.take() {
            handle.cancel();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
