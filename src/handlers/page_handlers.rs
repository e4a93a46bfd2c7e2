use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::models::content;
use crate::templates_structs::{AboutTemplate, FeaturesTemplate, HomeTemplate, PageContext};

pub async fn home(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/")?;
    let tmpl = HomeTemplate {
        ctx,
        stats: &content::HOME_STATS,
        steps: &content::HOW_IT_WORKS,
    };
    render(tmpl)
}

pub async fn about(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/about")?;
    render(AboutTemplate { ctx, values: &content::VALUES })
}

pub async fn features(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/features")?;
    let tmpl = FeaturesTemplate {
        ctx,
        features: &content::FEATURES,
        donor_benefits: &content::DONOR_BENEFITS,
        ngo_benefits: &content::NGO_BENEFITS,
    };
    render(tmpl)
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
