//! Shared test infrastructure for route-level tests.
//!
//! - `test_app!(notifier)` builds the full app (session middleware, routes,
//!   404 fallback) around the given `Arc<dyn NgoNotifier>`
//! - `Visitor` carries the session cookie between requests
//! - `extract_csrf_token()` pulls the hidden token out of a rendered form

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::ContentType;
use actix_web::test::{self, TestRequest};
use regex::Regex;

use reuseit::models::donation::{DonationListing, NgoNotifier};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Cookie name actix-session uses by default.
pub const SESSION_COOKIE: &str = "id";

/// Largest `Set-Cookie` value browsers are required to keep.
pub const BROWSER_COOKIE_LIMIT: usize = 4096;

pub const VALID_ITEM: &str = "Winter Jacket";
pub const VALID_CATEGORY: &str = "clothes";
pub const VALID_ADDRESS: &str = "12 Example Street, Springfield";
pub const VALID_CONTACT: &str = "jane@example.com";

// ============================================================================
// APP SETUP
// ============================================================================

macro_rules! test_app {
    ($notifier:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(reuseit::session::middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::from($notifier))
                .configure(reuseit::routes::configure)
                .default_service(actix_web::web::to(
                    reuseit::handlers::page_handlers::not_found,
                )),
        )
        .await
    };
}

/// Notifier that remembers every listing it is handed.
#[derive(Default)]
pub struct RecordingNotifier {
    pub listings: Mutex<Vec<DonationListing>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.listings.lock().expect("notifier lock").len()
    }
}

impl NgoNotifier for RecordingNotifier {
    fn notify(&self, listing: &DonationListing) {
        self.listings.lock().expect("notifier lock").push(listing.clone());
    }
}

// ============================================================================
// SESSION HANDLING
// ============================================================================

/// One browser: keeps whatever session cookie the server last set.
#[derive(Default)]
pub struct Visitor {
    cookie: Option<Cookie<'static>>,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    pub fn remember<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE) {
            self.cookie = Some(c.into_owned());
        }
    }
}

/// Full `Set-Cookie` line for the session cookie, attributes included.
pub fn session_set_cookie<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(String::from)
}

// ============================================================================
// REQUEST / RESPONSE HELPERS
// ============================================================================

/// Urlencoded POST, as a browser form submit sends it.
pub fn form_post(uri: &str, params: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(params).expect("Failed to encode form");
    TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

// ============================================================================
// CSRF TOKEN EXTRACTION
// ============================================================================

pub fn extract_csrf_token(html: &str) -> String {
    // <input type="hidden" name="csrf_token" value="...">
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#)
        .expect("Failed to compile regex");

    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .expect("CSRF token not found in HTML")
}
