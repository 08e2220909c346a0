//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/login", web::post().to(authors::login))
            .service(
                web::resource("/authors")
                    .route(web::get().to(authors::list))
                    .route(web::post().to(authors::register)),
            )
            // Post routes; writes check credentials inside the service
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list))
                    .route(web::post().to(posts::create)),
            )
            .service(web::resource("/posts/stats").route(web::get().to(posts::summary)))
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get))
                    .route(web::put().to(posts::update))
                    .route(web::delete().to(posts::delete)),
            ),
    );
}

/// Malformed JSON bodies are answered with a 400 in the usual error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}
