use askama::Template;

use crate::models::donation::{Category, DonationForm, Field, Notice};
use super::PageContext;

/// One input control: its name, current value, and error (if any).
pub struct FieldView {
    pub name: &'static str,
    pub value: String,
    pub error: Option<String>,
}

impl FieldView {
    fn of(form: &DonationForm, field: Field) -> Self {
        FieldView {
            name: field.as_str(),
            value: form.values.get(field).to_string(),
            error: form.errors.get(field).map(str::to_string),
        }
    }
}

pub struct CategoryOption {
    pub token: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub item_name: FieldView,
    pub category: FieldView,
    pub description: FieldView,
    pub address: FieldView,
    pub contact: FieldView,
    pub categories: Vec<CategoryOption>,
}

impl DonateTemplate {
    pub fn new(ctx: PageContext, form: &DonationForm, notice: Option<Notice>) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| CategoryOption {
                token: c.token(),
                label: c.label(),
                selected: form.values.category == c.token(),
            })
            .collect();

        DonateTemplate {
            ctx,
            notice,
            item_name: FieldView::of(form, Field::ItemName),
            category: FieldView::of(form, Field::Category),
            description: FieldView::of(form, Field::Description),
            address: FieldView::of(form, Field::Address),
            contact: FieldView::of(form, Field::Contact),
            categories,
        }
    }
}
