use actix_web::web;

use crate::handlers;

/// Register every page route. Static files and the 404 fallback are added by
/// the caller, since both must come after these.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static pages
        .route("/", web::get().to(handlers::page_handlers::home))
        .route("/about", web::get().to(handlers::page_handlers::about))
        .route("/features", web::get().to(handlers::page_handlers::features))
        // Donation form
        .route("/donate", web::get().to(handlers::donate_handlers::form))
        .route("/donate", web::post().to(handlers::donate_handlers::submit))
        .route("/donate/field", web::post().to(handlers::donate_handlers::edit_field))
        // NGO finder
        .route("/ngo-finder", web::get().to(handlers::ngo_handlers::finder));
}
