//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/blogs")
                    // Bodies are parsed as JSON whatever their Content-Type says.
                    .app_data(
                        web::JsonConfig::default()
                            .content_type_required(false)
                            .error_handler(json_error_handler),
                    )
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .route(web::get().to(blogs::list_or_get))
                    .route(web::post().to(blogs::create))
                    .route(web::put().to(blogs::update))
                    .route(web::delete().to(blogs::delete)),
            ),
    );
}
