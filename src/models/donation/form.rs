//! Donation form state and its transitions.
//!
//! The form is edited field by field and submitted as a whole:
//!
//! ```text
//! Editing --submit--> Validating --errors--> Rejected --> Editing (values kept)
//!                                \--ok-----> Accepted --> Editing (values reset)
//! ```
//!
//! Validating is the body of [`DonationForm::submit`]; it never outlives the
//! call. Both outcomes hand back a fresh form in the editing state.

use serde::{Deserialize, Serialize};

use super::notify::NgoNotifier;
use super::types::{DonationListing, DonationSubmission, Field, FieldErrors};

/// Kind of user-facing notification raised by a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Toast-style message shown once above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn listed() -> Self {
        Notice {
            kind: NoticeKind::Success,
            title: "Donation Listed Successfully!".to_string(),
            description: "Your item has been listed. Nearby NGOs will be notified shortly."
                .to_string(),
        }
    }

    /// Generic; the per-field messages are rendered next to each control.
    pub fn needs_attention() -> Self {
        Notice {
            kind: NoticeKind::Failure,
            title: "Missing Information".to_string(),
            description: "Please fill in all required fields and correct the highlighted entries."
                .to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { listing: DonationListing, notice: Notice },
    Rejected { errors: FieldErrors, notice: Notice },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            SubmitOutcome::Accepted { notice, .. } | SubmitOutcome::Rejected { notice, .. } => notice,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Current values plus the errors from the last rejected submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationForm {
    pub values: DonationSubmission,
    pub errors: FieldErrors,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field and clear only that field's error.
    pub fn edit(&self, field: Field, value: impl Into<String>) -> Self {
        DonationForm {
            values: self.values.with(field, value),
            errors: self.errors.without(field),
        }
    }

    /// Replace every value at once, as a full form post does. Errors for
    /// fields whose value changed are cleared; the rest are kept.
    pub fn edit_all(&self, values: DonationSubmission) -> Self {
        Field::ALL.into_iter().fold(self.clone(), |form, field| {
            if form.values.get(field) == values.get(field) {
                form
            } else {
                form.edit(field, values.get(field))
            }
        })
    }

    /// Validate the current snapshot and move to the next editing state.
    ///
    /// On acceptance the notifier is told about the listing before the form
    /// resets.
    pub fn submit(self, notifier: &dyn NgoNotifier) -> (DonationForm, SubmitOutcome) {
        match DonationListing::try_from(&self.values) {
            Ok(listing) => {
                notifier.notify(&listing);
                let outcome = SubmitOutcome::Accepted { listing, notice: Notice::listed() };
                (DonationForm::new(), outcome)
            }
            Err(errors) => {
                let next = DonationForm { values: self.values, errors: errors.clone() };
                let outcome = SubmitOutcome::Rejected { errors, notice: Notice::needs_attention() };
                (next, outcome)
            }
        }
    }
}
