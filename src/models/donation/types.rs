use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One field of the donation form. Serialized with the form's input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ItemName,
    Category,
    Description,
    Address,
    Contact,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ItemName,
        Field::Category,
        Field::Description,
        Field::Address,
        Field::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ItemName => "itemName",
            Field::Category => "category",
            Field::Description => "description",
            Field::Address => "address",
            Field::Contact => "contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

/// Donation categories offered by the form's select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothes,
    Books,
    Furniture,
    Electronics,
    Toys,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Clothes,
        Category::Books,
        Category::Furniture,
        Category::Electronics,
        Category::Toys,
        Category::Other,
    ];

    /// Token submitted by the form.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Clothes => "clothes",
            Category::Books => "books",
            Category::Furniture => "furniture",
            Category::Electronics => "electronics",
            Category::Toys => "toys",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Clothes => "Clothes",
            Category::Books => "Books",
            Category::Furniture => "Furniture",
            Category::Electronics => "Electronics",
            Category::Toys => "Toys",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact, case-sensitive token match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// Raw form values as typed by the user, untrimmed.
///
/// Every field defaults to the empty string, so a browser that omits a
/// control (an unselected `<select>`, a missing textarea) still yields a
/// complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationSubmission {
    pub item_name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub contact: String,
}

impl DonationSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ItemName => &self.item_name,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Address => &self.address,
            Field::Contact => &self.contact,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::ItemName => next.item_name = value,
            Field::Category => next.category = value,
            Field::Description => next.description = value,
            Field::Address => next.address = value,
            Field::Contact => next.contact = value,
        }
        next
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldValidationError {}

/// Validation errors keyed by field. Empty means the submission is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldValidationError) {
        self.0.insert(error.field, error.message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the entry for `field`, leaving the others untouched.
    pub fn without(&self, field: Field) -> Self {
        let mut next = self.clone();
        next.0.remove(&field);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.0.iter().map(|(field, message)| FieldValidationError {
            field: *field,
            message: message.clone(),
        })
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for e in iter {
            errors.insert(e);
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMethod {
    Email(String),
    Phone(String),
}

/// A validated donation, ready to be handed to NGOs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationListing {
    pub item_name: String,
    pub category: Category,
    pub description: Option<String>,
    pub address: String,
    pub contact: ContactMethod,
}
