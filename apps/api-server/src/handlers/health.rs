//! Liveness endpoint.

use actix_web::HttpResponse;
use blog_shared::StatusResponse;

/// Liveness probe - the process is up and serving requests.
///
/// GET /
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::active())
}
