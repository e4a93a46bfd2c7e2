mod form;
mod notify;
mod types;
mod validate;

pub use form::{DonationForm, Notice, NoticeKind, SubmitOutcome};
pub use notify::{LogNotifier, NgoNotifier};
pub use types::{
    Category, ContactMethod, DonationListing, DonationSubmission, Field, FieldErrors,
    FieldValidationError,
};
pub use validate::{
    ADDRESS_MAX, ADDRESS_MIN, DESCRIPTION_MAX, ITEM_NAME_MAX, ITEM_NAME_MIN, parse_contact,
    validate,
};
