//! Frontend bundle serving with single-page-app fallback.
//!
//! GET/HEAD requests that no API route claims are answered from the static directory.
//! Paths that do not name a file there get `index.html` so client-side routing works.

use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, ResponseError, guard, web};

use crate::middleware::error::{AppError, AppResult, NOT_FOUND};

const INDEX_FILE: &str = "index.html";

/// Mount the bundle at `/`. Must be registered after the API routes.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    // Files resolves against an empty root when the directory is missing
    if !static_dir.is_dir() {
        tracing::warn!(
            path = %static_dir.display(),
            "Frontend directory not found, bundle will not be served"
        );
        return;
    }

    let index = static_dir.join(INDEX_FILE);
    cfg.service(
        Files::new("/", static_dir)
            .index_file(INDEX_FILE)
            .guard(guard::Any(guard::Get()).or(guard::Head()))
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move { serve_index(req, &index).await }
            })),
    );
}

async fn serve_index(
    req: ServiceRequest,
    index: &Path,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();
    let response = match NamedFile::open_async(index).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            tracing::warn!("Frontend index '{}' unavailable: {}", index.display(), e);
            AppError::NotFound(NOT_FOUND).error_response()
        }
    };
    Ok(ServiceResponse::new(req, response))
}

/// Default service for requests neither the API nor the bundle answers.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound(NOT_FOUND))
}
