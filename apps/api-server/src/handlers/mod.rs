//! HTTP handlers and route configuration.

mod frontend;
mod github;
mod health;
mod posts;

use actix_web::web;

pub use frontend::configure as configure_frontend;

use crate::middleware::error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        // Liveness
        .route("/", web::get().to(health::status))
        .service(
            web::scope("/api")
                // Posts
                .route("/posts", web::post().to(posts::create_post))
                .route("/posts", web::get().to(posts::list_posts))
                .route("/posts/{id}", web::get().to(posts::get_post))
                .route("/posts/{id}", web::delete().to(posts::delete_post))
                // Upstream proxy
                .route("/github-repos", web::get().to(github::list_repos)),
        )
        // Unmatched and not served by the frontend bundle
        .default_service(web::to(frontend::not_found));
}
