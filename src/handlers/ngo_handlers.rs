use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::models::ngo::{self, FinderQuery};
use crate::templates_structs::{NgoFinderTemplate, PageContext};

pub async fn finder(
    session: Session,
    query: web::Query<FinderQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/ngo-finder")?;
    let result = ngo::search(&query);
    if let Some(e) = &result.error {
        log::debug!("NGO search with bad radius: {e}");
    }
    render(NgoFinderTemplate { ctx, result })
}
