//! OAuth helper endpoints.
//!
//! GET /api/auth/instagram - build the OAuth dialog URL for manual walk-through
//! POST /api/auth/token - exchange an authorization code for a user token
//!
//! Tokens are passed straight back to the caller; nothing is stored.

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::AppError;
use crate::models::{
    AuthUrlQuery, AuthUrlResponse, ErrorResponse, TokenExchangeRequest, TokenExchangeResponse,
};
use crate::services::oauth::{self, ExchangeParams};
use crate::AppState;

fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

/// Build the OAuth dialog URL the caller opens in a browser.
#[utoipa::path(
    get,
    path = "/api/auth/instagram",
    tag = "auth",
    params(AuthUrlQuery),
    responses(
        (status = 200, description = "Dialog URL and walk-through instructions", body = AuthUrlResponse),
        (status = 400, description = "Missing app_id or redirect_uri", body = ErrorResponse),
    ),
)]
pub async fn instagram_auth_url(
    state: web::Data<AppState>,
    query: web::Query<AuthUrlQuery>,
) -> Result<HttpResponse, AppError> {
    let app_id = require(query.app_id.as_deref(), "app_id")?;
    let redirect_uri = require(query.redirect_uri.as_deref(), "redirect_uri")?;

    let auth_url = oauth::build_auth_url(&state.config.graph, app_id, redirect_uri);
    debug!(%app_id, "built OAuth dialog URL");

    Ok(HttpResponse::Ok().json(AuthUrlResponse {
        success: true,
        auth_url,
        instructions: vec![
            "Open the auth_url in a browser and sign in with the Facebook account that manages your Instagram business account".to_string(),
            "Approve the requested permissions".to_string(),
            "Copy the 'code' query parameter from the redirect URL".to_string(),
            "POST the code to /api/auth/token together with app_id, app_secret and redirect_uri".to_string(),
        ],
    }))
}

/// Exchange an authorization code for a user access token.
#[utoipa::path(
    post,
    path = "/api/auth/token",
    tag = "auth",
    request_body = TokenExchangeRequest,
    responses(
        (status = 200, description = "Exchanged token", body = TokenExchangeResponse),
        (status = 400, description = "Missing body parameter", body = ErrorResponse),
        (status = 500, description = "Exchange failed upstream", body = ErrorResponse),
    ),
)]
pub async fn exchange_access_token(
    state: web::Data<AppState>,
    body: web::Json<TokenExchangeRequest>,
) -> Result<HttpResponse, AppError> {
    // All four parameters are checked before any outbound call.
    let params = ExchangeParams {
        code: require(body.code.as_deref(), "code")?,
        app_id: require(body.app_id.as_deref(), "app_id")?,
        app_secret: require(body.app_secret.as_deref(), "app_secret")?,
        redirect_uri: require(body.redirect_uri.as_deref(), "redirect_uri")?,
    };

    let grant = oauth::exchange_code(state.graph.as_ref(), &state.config.graph, params).await?;

    Ok(HttpResponse::Ok().json(TokenExchangeResponse {
        success: true,
        access_token: grant.access_token,
        token_type: grant.token_type,
        expires_in: grant.expires_in,
    }))
}
