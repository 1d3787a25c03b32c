//! Submit lifecycle of the contact form
//!
//! One attempt moves through `Idle -> Validating -> Submitting -> Finalizing
//! -> Idle`. The busy state of the submit button is held by a [`BusyGuard`]
//! for the whole `Submitting` phase and released when the guard drops, so the
//! button comes back on every exit path: success, failure, a panicking
//! transport task, or an attempt that is dropped half way.
//!
//! The attempt is split in three steps so the UI can keep drawing while the
//! transport call is in flight:
//!
//! 1. [`SubmissionCoordinator::begin`] validates and takes the snapshot.
//! 2. [`InFlight::deliver`] awaits the transport; it owns everything it
//!    needs and can run on a spawned task.
//! 3. [`SubmissionCoordinator::finish`] picks the message and resets the form.

use crate::state::{ContactForm, FormMessage};
use crate::submission::FormSubmission;
use crate::transport::Transport;
use crate::validation;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const VALIDATION_FAILED: &str = "Please fill in all required fields.";
pub const SUBMIT_SUCCEEDED: &str = "Thank you for your enquiry! We have received your message \
     and will contact you as soon as possible, usually within one working day.";
pub const SUBMIT_FAILED: &str =
    "Sorry, something went wrong. Please try again or call us directly.";

/// Phase of the current submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AttemptState {
    #[default]
    Idle = 0,
    Validating = 1,
    Submitting = 2,
    Finalizing = 3,
}

impl AttemptState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Validating,
            2 => Self::Submitting,
            3 => Self::Finalizing,
            _ => Self::Idle,
        }
    }
}

/// The form's submit button, shared between the UI and an in-flight attempt
#[derive(Debug)]
pub struct SubmitControl {
    disabled: AtomicBool,
    state: AtomicU8,
    label: String,
    loading_label: String,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>, loading_label: impl Into<String>) -> Self {
        Self {
            disabled: AtomicBool::new(false),
            state: AtomicU8::new(AttemptState::Idle as u8),
            label: label.into(),
            loading_label: loading_label.into(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Loading indicator is shown while a delivery is pending
    pub fn is_loading(&self) -> bool {
        self.state() == AttemptState::Submitting
    }

    pub fn state(&self) -> AttemptState {
        AttemptState::from_u8(self.state.load(Ordering::SeqCst))
    }

    fn set_state(&self, state: AttemptState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    /// Text currently shown on the button
    pub fn label(&self) -> &str {
        if self.is_loading() {
            &self.loading_label
        } else {
            &self.label
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new("Send request", "Sending…")
    }
}

/// Holds the submit button in its busy state; dropping it restores the button
#[derive(Debug)]
pub struct BusyGuard {
    control: Arc<SubmitControl>,
    was_disabled: bool,
}

impl BusyGuard {
    fn acquire(control: Arc<SubmitControl>) -> Self {
        let was_disabled = control.disabled.swap(true, Ordering::SeqCst);
        control.set_state(AttemptState::Submitting);
        Self {
            control,
            was_disabled,
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.control.set_state(AttemptState::Finalizing);
        self.control.set_disabled(self.was_disabled);
        self.control.set_state(AttemptState::Idle);
        tracing::debug!("Submit control released");
    }
}

/// What the transport reported for one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Result of pressing submit
pub enum SubmitStep<T: ?Sized> {
    /// The button is disabled, nothing happened
    Ignored,
    /// Validation failed; fields are marked and nothing was sent
    Rejected(FormMessage),
    /// The form passed and a delivery is ready to run
    Submitting(InFlight<T>),
}

/// A delivery that has not run yet; owns its snapshot and the busy guard
pub struct InFlight<T: ?Sized> {
    submission: FormSubmission,
    transport: Arc<T>,
    guard: BusyGuard,
}

impl<T: Transport + ?Sized> InFlight<T> {
    /// Call the transport; errors are logged and turned into a failure outcome
    pub async fn deliver(self) -> Delivered {
        let InFlight {
            submission,
            transport,
            guard,
        } = self;

        let outcome = match transport.deliver(&submission).await {
            Ok(()) => {
                tracing::info!(transport = transport.name(), "Contact request delivered");
                SubmissionOutcome::Success
            }
            Err(err) => {
                tracing::error!(transport = transport.name(), error = %err, "Form submission error");
                SubmissionOutcome::Failure(err.to_string())
            }
        };

        Delivered { outcome, guard }
    }
}

/// A finished delivery waiting to be applied to the form
#[derive(Debug)]
pub struct Delivered {
    outcome: SubmissionOutcome,
    guard: BusyGuard,
}

/// Runs submit attempts for one form
pub struct SubmissionCoordinator<T: ?Sized> {
    transport: Arc<T>,
    control: Arc<SubmitControl>,
    message_ttl: Duration,
}

impl<T: Transport + ?Sized> SubmissionCoordinator<T> {
    pub fn new(transport: Arc<T>, control: Arc<SubmitControl>, message_ttl: Duration) -> Self {
        Self {
            transport,
            control,
            message_ttl,
        }
    }

    pub fn control(&self) -> &Arc<SubmitControl> {
        &self.control
    }

    /// Validate the form and, if it passes, enter the busy state and take a snapshot
    pub fn begin(&self, form: &mut ContactForm) -> SubmitStep<T> {
        if self.control.is_disabled() {
            tracing::debug!("Submit ignored, control is disabled");
            return SubmitStep::Ignored;
        }

        self.control.set_state(AttemptState::Validating);
        let validated = match validation::validate(form) {
            Ok(validated) => validated,
            Err(_) => {
                self.control.set_state(AttemptState::Idle);
                return SubmitStep::Rejected(FormMessage::error(VALIDATION_FAILED));
            }
        };

        let guard = BusyGuard::acquire(Arc::clone(&self.control));
        let submission = FormSubmission::from_validated(validated, Utc::now());
        tracing::info!(
            transport = self.transport.name(),
            timestamp = %submission.timestamp_iso(),
            "Submitting contact request"
        );

        SubmitStep::Submitting(InFlight {
            submission,
            transport: Arc::clone(&self.transport),
            guard,
        })
    }

    /// Apply a finished delivery: pick the message, reset the form on success,
    /// then release the submit button
    pub fn finish(&self, form: &mut ContactForm, delivered: Delivered) -> FormMessage {
        let Delivered { outcome, guard } = delivered;

        let message = match outcome {
            SubmissionOutcome::Success => {
                form.reset();
                FormMessage::success(SUBMIT_SUCCEEDED, self.message_ttl)
            }
            SubmissionOutcome::Failure(_) => FormMessage::error(SUBMIT_FAILED),
        };

        drop(guard);
        message
    }

    /// The delivery task died before handing back a result; its guard has
    /// already been dropped with it
    pub fn finish_aborted(&self, reason: &dyn std::fmt::Display) -> FormMessage {
        tracing::error!(error = %reason, "Form submission task failed");
        FormMessage::error(SUBMIT_FAILED)
    }

    /// Run a whole attempt in place; `None` when the button was disabled
    #[allow(dead_code)] // The app spawns the delivery step instead
    pub async fn submit(&self, form: &mut ContactForm) -> Option<FormMessage> {
        match self.begin(form) {
            SubmitStep::Ignored => None,
            SubmitStep::Rejected(message) => Some(message),
            SubmitStep::Submitting(in_flight) => {
                let delivered = in_flight.deliver().await;
                Some(self.finish(form, delivered))
            }
        }
    }
}
