//! Comment form controller.
//!
//! An explicit state machine for one comment submission:
//! `Editing` -> `Submitting` -> `Submitted` (terminal), or back to
//! `Editing` on validation or delivery failure. Transitions are guarded:
//! a submit is only accepted from `Editing` with all required fields
//! present, and resubmission is rejected while a submission is in flight.

use serde::{Deserialize, Serialize};

/// One comment submission payload.
///
/// Transient: exists for the duration of a single submission attempt. The
/// serialized JSON shape `{_id, name, email, comment}` is the moderation
/// endpoint's wire contract; `_id` carries the post id from the form's
/// hidden field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInput {
    #[serde(rename = "_id")]
    pub post_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
}

impl CommentInput {
    /// Blank input carrying only the hidden post id, for a fresh form.
    pub fn empty(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            name: String::new(),
            email: String::new(),
            comment: String::new(),
        }
    }

    /// Check required fields. Whitespace-only values count as missing.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: self.name.trim().is_empty(),
            email: self.email.trim().is_empty(),
            comment: self.comment.trim().is_empty(),
        }
    }
}

/// Per-field required-value errors. A set flag means the field is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub comment: bool,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        !(self.name || self.email || self.comment)
    }
}

/// Why a submit attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Required fields are missing; the errors were recorded on the form.
    Invalid(FieldErrors),
    /// A submission is already in flight.
    InFlight,
    /// The form already completed successfully.
    AlreadySubmitted,
}

/// Comment form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// The visitor is editing; `errors` holds inline annotations from the
    /// last rejected submit, if any.
    Editing { errors: FieldErrors },
    /// A submission is in flight to the moderation endpoint.
    Submitting,
    /// Terminal: the submission was accepted and the thank-you notice
    /// replaces the form.
    Submitted,
}

impl Default for FormState {
    fn default() -> Self {
        Self::Editing {
            errors: FieldErrors::default(),
        }
    }
}

impl FormState {
    /// Attempt to start a submission.
    ///
    /// Accepted only from `Editing` with all required fields present.
    /// Invalid input records field errors and stays in `Editing`.
    pub fn begin_submit(&mut self, input: &CommentInput) -> Result<(), SubmitBlocked> {
        match self {
            Self::Editing { .. } => {
                let errors = input.validate();
                if errors.is_empty() {
                    *self = Self::Submitting;
                    Ok(())
                } else {
                    *self = Self::Editing { errors };
                    Err(SubmitBlocked::Invalid(errors))
                }
            }
            Self::Submitting => Err(SubmitBlocked::InFlight),
            Self::Submitted => Err(SubmitBlocked::AlreadySubmitted),
        }
    }

    /// The moderation endpoint accepted the submission.
    /// Only meaningful from `Submitting`; other states are unchanged.
    pub fn complete(&mut self) {
        if matches!(self, Self::Submitting) {
            *self = Self::Submitted;
        }
    }

    /// The submission failed (network or non-success status). The form
    /// returns to `Editing` with no error annotations; the failure is not
    /// surfaced to the visitor beyond the unchanged form.
    pub fn fail(&mut self) {
        if matches!(self, Self::Submitting) {
            *self = Self::Editing {
                errors: FieldErrors::default(),
            };
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Current inline field errors (empty outside `Editing`).
    pub fn errors(&self) -> FieldErrors {
        match self {
            Self::Editing { errors } => *errors,
            _ => FieldErrors::default(),
        }
    }
}
