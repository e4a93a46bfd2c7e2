use askama::Template;

use crate::models::content::{Card, Stat, Step};
use super::PageContext;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub stats: &'static [Stat],
    pub steps: &'static [Step],
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub values: &'static [Card],
}

#[derive(Template)]
#[template(path = "features.html")]
pub struct FeaturesTemplate {
    pub ctx: PageContext,
    pub features: &'static [Card],
    pub donor_benefits: &'static [&'static str],
    pub ngo_benefits: &'static [&'static str],
}
