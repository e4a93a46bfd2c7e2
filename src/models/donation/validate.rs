use std::sync::LazyLock;

use regex::Regex;

use super::types::{
    Category, ContactMethod, DonationListing, DonationSubmission, Field, FieldErrors,
    FieldValidationError,
};

pub const ITEM_NAME_MIN: usize = 3;
pub const ITEM_NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 1000;
pub const ADDRESS_MIN: usize = 10;
pub const ADDRESS_MAX: usize = 500;

// Both patterns are intentionally loose: they reject obvious junk, not every
// malformed address or number.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid phone regex"));

struct Rule {
    field: Field,
    is_valid: fn(&DonationSubmission) -> bool,
    message: &'static str,
}

/// Checked in order; every rule runs regardless of earlier failures.
const RULES: [Rule; 5] = [
    Rule {
        field: Field::ItemName,
        is_valid: item_name_ok,
        message: "Item name must be between 3 and 100 characters",
    },
    Rule {
        field: Field::Category,
        is_valid: category_ok,
        message: "Please select a category",
    },
    Rule {
        field: Field::Description,
        is_valid: description_ok,
        message: "Description must be at most 1000 characters",
    },
    Rule {
        field: Field::Address,
        is_valid: address_ok,
        message: "Pickup address must be between 10 and 500 characters",
    },
    Rule {
        field: Field::Contact,
        is_valid: contact_ok,
        message: "Enter a valid email address or phone number",
    },
];

fn item_name_ok(s: &DonationSubmission) -> bool {
    within(&s.item_name, ITEM_NAME_MIN, ITEM_NAME_MAX)
}

fn category_ok(s: &DonationSubmission) -> bool {
    s.category.parse::<Category>().is_ok()
}

fn description_ok(s: &DonationSubmission) -> bool {
    within(&s.description, 0, DESCRIPTION_MAX)
}

fn address_ok(s: &DonationSubmission) -> bool {
    within(&s.address, ADDRESS_MIN, ADDRESS_MAX)
}

fn contact_ok(s: &DonationSubmission) -> bool {
    parse_contact(&s.contact).is_some()
}

/// Character count of the trimmed value lies in `min..=max`.
fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    (min..=max).contains(&len)
}

/// Classify a contact value as email or phone; `None` if it is neither.
pub fn parse_contact(raw: &str) -> Option<ContactMethod> {
    let trimmed = raw.trim();
    if EMAIL_RE.is_match(trimmed) {
        Some(ContactMethod::Email(trimmed.to_string()))
    } else if PHONE_RE.is_match(trimmed) {
        Some(ContactMethod::Phone(trimmed.to_string()))
    } else {
        None
    }
}

/// Run every rule against the submission and collect the failures.
pub fn validate(submission: &DonationSubmission) -> FieldErrors {
    RULES
        .iter()
        .filter(|rule| !(rule.is_valid)(submission))
        .map(|rule| FieldValidationError {
            field: rule.field,
            message: rule.message.to_string(),
        })
        .collect()
}

impl TryFrom<&DonationSubmission> for DonationListing {
    type Error = FieldErrors;

    fn try_from(submission: &DonationSubmission) -> Result<Self, Self::Error> {
        let errors = validate(submission);
        if !errors.is_empty() {
            return Err(errors);
        }

        // Rules passed, so both parses succeed.
        let category = submission.category.parse::<Category>().map_err(|_| errors.clone())?;
        let contact = parse_contact(&submission.contact).ok_or(errors)?;
        let description = submission.description.trim();

        Ok(DonationListing {
            item_name: submission.item_name.trim().to_string(),
            category,
            description: (!description.is_empty()).then(|| description.to_string()),
            address: submission.address.trim().to_string(),
            contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DonationSubmission {
        DonationSubmission {
            item_name: "Winter Jacket".into(),
            category: "clothes".into(),
            description: String::new(),
            address: "12 Example Street, Springfield".into(),
            contact: "jane@example.com".into(),
        }
    }

    #[test]
    fn valid_submission_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn item_name_length_is_measured_after_trim() {
        let s = valid().with(Field::ItemName, "  ab  ");
        let errors = validate(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::ItemName));

        let s = valid().with(Field::ItemName, "  abc  ");
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn item_name_upper_bound() {
        assert!(validate(&valid().with(Field::ItemName, "x".repeat(100))).is_empty());
        let errors = validate(&valid().with(Field::ItemName, "x".repeat(101)));
        assert!(errors.contains(Field::ItemName));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 100 two-byte characters
        let s = valid().with(Field::ItemName, "é".repeat(100));
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn category_must_match_token_exactly() {
        for bad in ["", "Clothes", " clothes", "shoes"] {
            let errors = validate(&valid().with(Field::Category, bad));
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Category], "{bad:?}");
        }
        for c in Category::ALL {
            assert!(validate(&valid().with(Field::Category, c.token())).is_empty());
        }
    }

    #[test]
    fn description_is_optional_but_bounded() {
        assert!(validate(&valid().with(Field::Description, "")).is_empty());
        assert!(validate(&valid().with(Field::Description, "a".repeat(1000))).is_empty());
        let errors = validate(&valid().with(Field::Description, "a".repeat(1001)));
        assert!(errors.contains(Field::Description));
    }

    #[test]
    fn address_bounds() {
        assert!(validate(&valid().with(Field::Address, "short")).contains(Field::Address));
        assert!(validate(&valid().with(Field::Address, "0123456789")).is_empty());
        assert!(validate(&valid().with(Field::Address, "a".repeat(501))).contains(Field::Address));
    }

    #[test]
    fn contact_accepts_email_or_phone() {
        for ok in ["jane@example.com", "+1 234-567-8900", "(555) 123-4567", "0123456789"] {
            assert!(parse_contact(ok).is_some(), "{ok}");
        }
        for bad in ["123", "jane@example", "not an email", "", "+12 34"] {
            assert!(parse_contact(bad).is_none(), "{bad}");
        }
    }

    #[test]
    fn contact_kind_is_classified() {
        assert_eq!(
            parse_contact(" jane@example.com "),
            Some(ContactMethod::Email("jane@example.com".into()))
        );
        assert_eq!(
            parse_contact("+1 234-567-8900"),
            Some(ContactMethod::Phone("+1 234-567-8900".into()))
        );
    }

    #[test]
    fn all_failures_are_reported_together() {
        let s = DonationSubmission {
            item_name: "ab".into(),
            category: String::new(),
            description: String::new(),
            address: "short".into(),
            contact: "123".into(),
        };
        let errors = validate(&s);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::ItemName, Field::Category, Field::Address, Field::Contact]
        );
    }

    #[test]
    fn listing_is_trimmed_and_typed() {
        let s = DonationSubmission {
            item_name: "  Winter Jacket ".into(),
            description: "   ".into(),
            ..valid()
        };
        let listing = DonationListing::try_from(&s).expect("valid listing");
        assert_eq!(listing.item_name, "Winter Jacket");
        assert_eq!(listing.category, Category::Clothes);
        assert_eq!(listing.description, None);
        assert!(matches!(listing.contact, ContactMethod::Email(_)));
    }

    #[test]
    fn listing_conversion_returns_errors() {
        let s = valid().with(Field::Contact, "nope");
        let errors = DonationListing::try_from(&s).expect_err("should fail");
        assert!(errors.contains(Field::Contact));
    }
}
