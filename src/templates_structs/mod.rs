// Template context structures for Askama templates, organized by page.

use actix_session::Session;
use chrono::Datelike;

use crate::errors::AppError;
use crate::models::nav_item::{self, NavLink};
use crate::session::csrf;

mod common;
mod donate;
mod ngo;

pub use self::common::{AboutTemplate, FeaturesTemplate, HomeTemplate};
pub use self::donate::{CategoryOption, DonateTemplate, FieldView};
pub use self::ngo::NgoFinderTemplate;

pub const APP_NAME: &str = "ReUseIt";

/// Common context shared by all pages.
/// Templates access these as `ctx.nav_links`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub nav_links: Vec<NavLink>,
    pub csrf_token: String,
    pub year: i32,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Result<Self, AppError> {
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self {
            app_name: APP_NAME.to_string(),
            nav_links: nav_item::find_navigation(current_path),
            csrf_token,
            year: chrono::Local::now().year(),
        })
    }
}
