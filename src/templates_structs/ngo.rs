use askama::Template;

use crate::models::ngo::FinderResult;
use super::PageContext;

#[derive(Template)]
#[template(path = "ngo_finder.html")]
pub struct NgoFinderTemplate {
    pub ctx: PageContext,
    pub result: FinderResult,
}
