//! Business account endpoint.
//!
//! GET /api/instagram/business/{username} - resolve the caller's access
//! token to its linked Instagram business account, then return the profile
//! plus one page of posts.

use actix_web::{web, HttpResponse};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{BusinessAccountResponse, BusinessQuery, ErrorResponse};
use crate::services::{posts, resolver};
use crate::validation;
use crate::AppState;

/// Resolve a business account and list its recent posts.
///
/// The requested username must match the account the token resolves to;
/// a valid token is never allowed to disclose another account's data.
#[utoipa::path(
    get,
    path = "/api/instagram/business/{username}",
    tag = "instagram",
    params(
        ("username" = String, Path, description = "Instagram business account username"),
        BusinessQuery,
    ),
    responses(
        (status = 200, description = "Resolved profile and posts", body = BusinessAccountResponse),
        (status = 400, description = "Invalid username, limit, or missing access token", body = ErrorResponse),
        (status = 404, description = "Token does not resolve to the requested username", body = ErrorResponse),
        (status = 500, description = "Resolution or upstream failure", body = ErrorResponse),
    ),
)]
pub async fn get_business_account(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<BusinessQuery>,
) -> Result<HttpResponse, AppError> {
    let requested = path.into_inner();

    // Validation runs before any upstream call.
    let username = validation::validate_username(&requested)?;
    let limit = validation::validate_limit(query.limit.as_deref())?;
    let credential = query
        .access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingCredential)?;

    debug!(%username, limit, "resolving business account");
    let account = resolver::resolve(state.graph.as_ref(), &state.config.graph, credential).await?;

    if !resolver::username_matches(username, &account.profile.username) {
        warn!(requested = %username, resolved = %account.profile.username, "username mismatch");
        return Err(AppError::UsernameMismatch(username.to_string()));
    }

    let posts = posts::fetch_posts(
        state.graph.as_ref(),
        &state.config.graph,
        &account.profile.id,
        &account.page_token,
        limit,
    )
    .await?;

    Ok(HttpResponse::Ok().json(BusinessAccountResponse {
        success: true,
        username: account.profile.username.clone(),
        account_type: "business".to_string(),
        profile: account.profile,
        posts,
    }))
}
