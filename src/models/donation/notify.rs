use super::types::{ContactMethod, DonationListing};

/// Receives accepted donations so nearby NGOs can be told about them.
pub trait NgoNotifier: Send + Sync {
    fn notify(&self, listing: &DonationListing);
}

/// Stand-in notifier: there is no NGO backend yet, so it only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NgoNotifier for LogNotifier {
    fn notify(&self, listing: &DonationListing) {
        let channel = match listing.contact {
            ContactMethod::Email(_) => "email",
            ContactMethod::Phone(_) => "phone",
        };
        log::info!(
            "Donation listed: '{}' ({}), contact by {}",
            listing.item_name,
            listing.category.token(),
            channel
        );
    }
}
