//! GitHub repository proxy.

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, NOT_FOUND};
use crate::state::AppState;

const GITHUB_ERROR: &str = "Error retrieving GitHub repositories.";

/// GET /api/github-repos
///
/// Forwards the configured account's repository list unchanged.
pub async fn list_repos(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let Some(catalog) = state.repos.as_ref() else {
        return Err(AppError::NotFound(NOT_FOUND));
    };

    let repos = catalog
        .list_repos()
        .await
        .map_err(|e| AppError::internal(GITHUB_ERROR, e))?;

    Ok(HttpResponse::Ok().json(repos))
}
