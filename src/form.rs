//! Contact form state: field validation and the submission phase machine.
//!
//! There is no network here; submission is a simulated round trip driven by
//! timers in the DOM layer. This module owns what those timers are allowed
//! to do: the phase sequence is linear (idle → sending → sent → idle) with
//! no branching beyond up-front validation.

use crate::email::is_valid_email;

/// Trimmed values of the four contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormSubmission {
    /// Build a submission from raw field values, trimming each.
    pub fn from_fields(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Validate for submission. Errors map to inline notifications.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Validation failures shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Where the submit flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    /// Ready for input; submit button live.
    #[default]
    Idle,
    /// Simulated round trip in flight; button disabled with a spinner.
    Sending,
    /// Round trip done; success shown, reset timer pending.
    Sent,
}

impl FormPhase {
    /// Attempt to begin sending. Only valid from `Idle` with a valid
    /// submission; otherwise the phase is unchanged and the error is
    /// returned for display.
    pub fn begin_send(&mut self, submission: &FormSubmission) -> Result<(), FormError> {
        if *self != Self::Idle {
            // A submit while already in flight is ignored (button is
            // disabled, but a keyboard submit can still race the timer).
            return Ok(());
        }
        submission.validate()?;
        *self = Self::Sending;
        Ok(())
    }

    /// The simulated round trip completed.
    pub fn complete_send(&mut self) {
        if *self == Self::Sending {
            *self = Self::Sent;
        }
    }

    /// The reset timer fired; back to idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
