use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use reuseit::config::AppConfig;
use reuseit::handlers;
use reuseit::models::donation::{LogNotifier, NgoNotifier};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let notifier: Arc<dyn NgoNotifier> = Arc::new(LogNotifier);

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let bind_addr = config.bind_addr();
    HttpServer::new(move || {
        App::new()
            .wrap(reuseit::session::middleware(
                config.session_key.clone(),
                config.cookie_secure,
            ))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(notifier.clone()))
            .configure(reuseit::routes::configure)
            .service(actix_files::Files::new("/static", &config.static_dir))
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::page_handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
