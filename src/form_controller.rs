//! src/form_controller.rs
//!
//! State of the waiting list form as the visitor sees it. One instance per
//! rendered form; nothing here is shared between forms.

use crate::domain::{is_valid_email_shape, trim_email, WaitingListFormData};
use crate::routes::{ErrorCode, WaitingListResponse};
use std::time::{Duration, Instant};

/// How long the success message stays before the form goes back to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already registered in our waiting list.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub name: String,
    pub interest: String,
    pub location: String,
    pub newsletter: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            interest: String::new(),
            location: String::new(),
            newsletter: true,
        }
    }
}

impl From<&FormFields> for WaitingListFormData {
    fn from(fields: &FormFields) -> Self {
        Self {
            email: Some(fields.email.clone().into()),
            name: Some(fields.name.clone()),
            interest: Some(fields.interest.clone()),
            location: Some(fields.location.clone()),
            newsletter: fields.newsletter,
        }
    }
}

/// Why the last submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    DuplicateEmail,
    /// The server disagreed with our email check, shown inline at the field.
    InvalidEmail,
    Failed(Option<String>),
    Network,
}

impl SubmissionError {
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE,
            SubmissionError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            SubmissionError::Failed(Some(message)) => message.as_str(),
            SubmissionError::Failed(None) => DEFAULT_ERROR_MESSAGE,
            SubmissionError::Network => NETWORK_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success { since: Instant },
    Error(SubmissionError),
}

/// A submit that never left the form.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in flight.")]
    InFlight,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// What the backend answered, reduced to what the form cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReply {
    pub status: u16,
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<ErrorCode>,
}

impl SubmissionReply {
    pub fn from_api(status: u16, body: WaitingListResponse) -> Self {
        Self {
            status,
            success: body.success,
            message: body.message,
            error: body.error,
        }
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.success
    }
}

#[derive(Debug, Clone)]
pub struct WaitingListForm {
    fields: FormFields,
    status: FormStatus,
    email_error: bool,
    success_reset: Duration,
}

impl Default for WaitingListForm {
    fn default() -> Self {
        Self::new(SUCCESS_RESET_DELAY)
    }
}

impl WaitingListForm {
    pub fn new(success_reset: Duration) -> Self {
        Self {
            fields: FormFields::default(),
            status: FormStatus::Idle,
            email_error: false,
            success_reset,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Whether the inline email hint is shown.
    pub fn email_error(&self) -> bool {
        self.email_error
    }

    /// The submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    /// Message for the feedback area below the form, if any.
    pub fn feedback(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Success { .. } => Some(crate::routes::SUCCESS_MESSAGE),
            FormStatus::Error(SubmissionError::InvalidEmail) => None,
            FormStatus::Error(e) => Some(e.message()),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.fields.email = email.into();
        let email = trim_email(&self.fields.email);
        self.email_error = !self.fields.email.is_empty() && !is_valid_email_shape(&email);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_interest(&mut self, interest: impl Into<String>) {
        self.fields.interest = interest.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.fields.location = location.into();
    }

    pub fn set_newsletter(&mut self, newsletter: bool) {
        self.fields.newsletter = newsletter;
    }

    /// Moves to `Submitting` and hands out the payload to send. An invalid
    /// email only raises the inline hint; the status is left alone.
    pub fn begin_submit(&mut self) -> Result<WaitingListFormData, SubmitRejected> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        if !is_valid_email_shape(&trim_email(&self.fields.email)) {
            self.email_error = true;
            return Err(SubmitRejected::InvalidEmail);
        }
        self.email_error = false;
        self.status = FormStatus::Submitting;
        Ok((&self.fields).into())
    }

    /// Applies the backend's answer. Ignored unless a submission is in flight.
    pub fn complete(&mut self, reply: SubmissionReply, now: Instant) {
        if self.status != FormStatus::Submitting {
            return;
        }
        if reply.is_success() {
            self.fields = FormFields::default();
            self.status = FormStatus::Success { since: now };
            return;
        }
        let error = match reply.error {
            Some(ErrorCode::DuplicateEmail) => SubmissionError::DuplicateEmail,
            Some(ErrorCode::InvalidEmail) => {
                self.email_error = true;
                SubmissionError::InvalidEmail
            }
            _ => SubmissionError::Failed(reply.message.filter(|m| !m.is_empty())),
        };
        self.status = FormStatus::Error(error);
    }

    /// The request never got an answer.
    pub fn fail(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Error(SubmissionError::Network);
        }
    }

    /// Drops the success message once the reset delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if let FormStatus::Success { since } = self.status {
            if now.saturating_duration_since(since) >= self.success_reset {
                self.status = FormStatus::Idle;
            }
        }
    }
}
