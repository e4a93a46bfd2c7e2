//! Per-visitor donation form state, kept in the cookie session.

use std::collections::HashMap;

use actix_session::Session;

use crate::errors::AppError;
use crate::models::donation::{DonationForm, DonationSubmission, Notice};

const DRAFT_KEY: &str = "donation_draft";
const NOTICE_KEY: &str = "notice";

/// Browsers drop a `Set-Cookie` over 4096 bytes; the rest is left for the
/// cookie name and attributes.
const COOKIE_VALUE_BUDGET: usize = 3584;
/// AES-GCM nonce and tag added by the private cookie jar.
const SEAL_OVERHEAD: usize = 12 + 16;

/// The visitor's form, or an empty one if nothing is stored or the stored
/// value no longer deserializes.
pub fn load_draft(session: &Session) -> DonationForm {
    match session.get::<DonationForm>(DRAFT_KEY) {
        Ok(Some(form)) => form,
        Ok(None) => DonationForm::new(),
        Err(e) => {
            log::warn!("Discarding unreadable donation draft: {e}");
            session.remove(DRAFT_KEY);
            DonationForm::new()
        }
    }
}

/// Store the form for the next request. A draft whose values would push the
/// session cookie past the browser limit keeps only its errors.
pub fn save_draft(session: &Session, form: &DonationForm) -> Result<(), AppError> {
    if *form == DonationForm::new() {
        clear_draft(session);
        return Ok(());
    }

    let size = cookie_value_len(session, form)?;
    if size > COOKIE_VALUE_BUDGET {
        log::debug!("Session cookie would be {size} bytes, storing draft errors only");
        let errors_only = DonationForm {
            values: DonationSubmission::default(),
            errors: form.errors.clone(),
        };
        session.insert(DRAFT_KEY, &errors_only)?;
    } else {
        session.insert(DRAFT_KEY, form)?;
    }
    Ok(())
}

/// Length of the cookie value the session would produce with `form` stored
/// as the draft: the entry map as JSON, sealed, then base64 encoded.
fn cookie_value_len(session: &Session, form: &DonationForm) -> Result<usize, AppError> {
    let encode_err = |e: serde_json::Error| AppError::Session(format!("Failed to encode draft: {e}"));

    let mut state: HashMap<String, String> = session.entries().clone();
    state.insert(DRAFT_KEY.to_string(), serde_json::to_string(form).map_err(encode_err)?);
    let plain = serde_json::to_string(&state).map_err(encode_err)?.len();

    Ok((plain + SEAL_OVERHEAD).div_ceil(3) * 4)
}

pub fn clear_draft(session: &Session) {
    session.remove(DRAFT_KEY);
}

pub fn set_notice(session: &Session, notice: &Notice) -> Result<(), AppError> {
    session.insert(NOTICE_KEY, notice)?;
    Ok(())
}

/// Pop the pending notice so it shows exactly once.
pub fn take_notice(session: &Session) -> Option<Notice> {
    let notice = session.get::<Notice>(NOTICE_KEY).unwrap_or(None);
    if notice.is_some() {
        session.remove(NOTICE_KEY);
    }
    notice
}
