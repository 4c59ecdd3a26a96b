//! Service meta endpoints: health, setup guide, JSON 404.

use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

use crate::models::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Static setup and limitations document.
#[utoipa::path(
    get,
    path = "/api/setup",
    tag = "health",
    responses((status = 200, description = "Setup guide")),
)]
pub async fn setup_guide() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "title": "Instagram Graph API gateway setup",
        "requirements": [
            "An Instagram business (or creator) account",
            "A Facebook page linked to that Instagram account",
            "A Meta developer app with the Instagram Graph API product enabled",
        ],
        "steps": [
            "Create an app at https://developers.facebook.com and note its app_id and app_secret",
            "Add a valid OAuth redirect URI to the app settings",
            "GET /api/auth/instagram?app_id=...&redirect_uri=... and open the returned auth_url",
            "POST the resulting code to /api/auth/token to obtain an access token",
            "GET /api/instagram/business/{username}?access_token=... to fetch profile and posts",
        ],
        "limitations": [
            "Only business/creator accounts are accessible; personal profiles are not",
            "The access token must belong to the account being requested",
            "A single page of up to 100 posts is returned; there is no pagination",
            "Tokens are never stored; every request supplies its own",
        ],
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Endpoint not found",
    }))
}
