use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::donation::{DonationSubmission, Field, NgoNotifier, SubmitOutcome};
use crate::session::{csrf, store};
use crate::templates_structs::{DonateTemplate, PageContext};

/// Full form post. Controls the browser leaves out arrive as empty strings.
#[derive(Deserialize)]
pub struct DonationPost {
    #[serde(default, rename = "itemName")]
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl DonationPost {
    fn into_submission(self) -> DonationSubmission {
        DonationSubmission {
            item_name: self.item_name,
            category: self.category,
            description: self.description,
            address: self.address,
            contact: self.contact,
        }
    }
}

/// A single control changed while the user is typing.
#[derive(Deserialize)]
pub struct FieldEdit {
    pub field: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub csrf_token: String,
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/donate")?;
    let draft = store::load_draft(&session);
    let notice = store::take_notice(&session);
    render(DonateTemplate::new(ctx, &draft, notice))
}

pub async fn submit(
    session: Session,
    notifier: web::Data<dyn NgoNotifier>,
    form: web::Form<DonationPost>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let draft = store::load_draft(&session).edit_all(form.into_inner().into_submission());
    let (next, outcome) = draft.submit(notifier.get_ref());

    match outcome {
        SubmitOutcome::Accepted { notice, .. } => {
            store::clear_draft(&session);
            store::set_notice(&session, &notice)?;
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/donate"))
                .finish())
        }
        SubmitOutcome::Rejected { errors, notice } => {
            let fields: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
            log::debug!("Donation rejected, invalid fields: {}", fields.join(", "));

            store::save_draft(&session, &next)?;
            let ctx = PageContext::build(&session, "/donate")?;
            render(DonateTemplate::new(ctx, &next, Some(notice)))
        }
    }
}

/// Record one edited value and drop that field's error. Answers with the
/// errors still outstanding so the page can update without a reload.
pub async fn edit_field(
    session: Session,
    form: web::Form<FieldEdit>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let field = match form.field.parse::<Field>() {
        Ok(f) => f,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({ "error": e })));
        }
    };

    let next = store::load_draft(&session).edit(field, form.value.as_str());
    store::save_draft(&session, &next)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "errors": next.errors })))
}
