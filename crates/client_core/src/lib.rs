//! Booking form controller for the guest-house site. Owns the
//! draft/errors/status triple for one booking session and orchestrates
//! submission to the booking endpoint; the rendering surface consumes the
//! exposed state read-only and forwards user gestures to the operations
//! here.

use std::sync::Arc;

use shared::domain::{BookingDraft, RoomType};
use shared::protocol::{BookingId, BookingRequest};
use tracing::{info, warn};

pub mod endpoint;
pub mod validation;

pub use endpoint::{
    BookingDecision, BookingEndpoint, EndpointError, HttpBookingEndpoint, DEFAULT_REQUEST_TIMEOUT,
};
pub use validation::{validate, BookingField, ValidationErrors};

const MSG_CORRECT_ERRORS: &str = "Please correct the errors above.";
const MSG_IN_PROGRESS: &str = "Booking in progress...";
const MSG_CONNECT_FAILED: &str =
    "Booking failed. Could not connect to the server. Please try again later.";

/// Where the current (or last) submission stands. Not persisted across
/// sessions. The aggregate validation reminder is not a state of its own:
/// it derives from `Idle` plus attached errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    InProgress,
    Succeeded(BookingId),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

/// The one aggregate message shown above the form, with its styling tone.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

pub struct BookingFormController {
    endpoint: Arc<dyn BookingEndpoint>,
    draft: BookingDraft,
    errors: ValidationErrors,
    status: SubmissionStatus,
    is_open: bool,
}

impl BookingFormController {
    pub fn new(endpoint: Arc<dyn BookingEndpoint>) -> Self {
        Self {
            endpoint,
            draft: BookingDraft::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            is_open: false,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the booking surface, clearing status and errors. Field values
    /// are left alone; the draft reset point is [`close_session`]
    /// (deliberate asymmetry, kept from the observed behavior).
    ///
    /// [`close_session`]: BookingFormController::close_session
    pub fn open_session(&mut self) {
        self.is_open = true;
        self.status = SubmissionStatus::Idle;
        self.errors = ValidationErrors::default();
    }

    /// Closes the booking surface. Sole place draft data is cleared, so a
    /// guest who closes and reopens always starts from the defaults.
    pub fn close_session(&mut self) {
        self.is_open = false;
        self.draft = BookingDraft::default();
    }

    /// Assigns one raw input value into the named draft attribute, leaving
    /// every other field untouched. No re-validation happens here. A raw
    /// value the typed attributes cannot hold (unknown room type,
    /// non-numeric guest count) leaves the draft unchanged; the exposed
    /// controls cannot produce one.
    pub fn update_field(&mut self, field: BookingField, raw: &str) {
        match field {
            BookingField::Name => self.draft.name = raw.to_string(),
            BookingField::Email => self.draft.email = raw.to_string(),
            BookingField::CheckIn => self.draft.check_in = raw.to_string(),
            BookingField::CheckOut => self.draft.check_out = raw.to_string(),
            BookingField::RoomType => {
                if let Ok(room_type) = raw.parse::<RoomType>() {
                    self.draft.room_type = room_type;
                }
            }
            BookingField::Guests => {
                if let Ok(guests) = raw.trim().parse::<i64>() {
                    self.draft.guests = guests;
                }
            }
        }
    }

    /// Validates the draft and, if it is clean, issues exactly one call to
    /// the booking endpoint. A submit while a call is already in flight is
    /// a no-op, so rapid repeated gestures cannot place duplicate
    /// bookings. Every outcome leaves the session open and the draft
    /// intact; retrying is always a fresh user-initiated submit.
    pub async fn submit(&mut self) {
        if matches!(self.status, SubmissionStatus::InProgress) {
            return;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            self.status = SubmissionStatus::Idle;
            return;
        }

        self.errors = ValidationErrors::default();
        self.status = SubmissionStatus::InProgress;

        let request = BookingRequest::from(&self.draft);
        match self.endpoint.submit_booking(&request).await {
            Ok(BookingDecision::Accepted(accepted)) => {
                info!(booking_id = %accepted.booking_id, "booking accepted");
                self.status = SubmissionStatus::Succeeded(accepted.booking_id);
            }
            Ok(BookingDecision::Rejected(rejected)) => {
                warn!(message = %rejected.message, "booking rejected by endpoint");
                self.status =
                    SubmissionStatus::Failed(format!("Booking failed: {}", rejected.message));
            }
            Err(err) => {
                warn!(error = %err, "booking submission failed before a decision");
                self.status = SubmissionStatus::Failed(MSG_CONNECT_FAILED.to_string());
            }
        }
    }

    /// The aggregate status line, if one should currently be shown. Only a
    /// confirmed booking renders in the success tone.
    pub fn status_line(&self) -> Option<StatusLine> {
        match &self.status {
            SubmissionStatus::Idle if self.errors.is_empty() => None,
            SubmissionStatus::Idle => Some(StatusLine::error(MSG_CORRECT_ERRORS)),
            SubmissionStatus::InProgress => Some(StatusLine::error(MSG_IN_PROGRESS)),
            SubmissionStatus::Succeeded(booking_id) => Some(StatusLine {
                text: format!(
                    "Booking successful! We will contact you shortly. Booking ID: {booking_id}"
                ),
                tone: StatusTone::Success,
            }),
            SubmissionStatus::Failed(message) => Some(StatusLine::error(message.clone())),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
