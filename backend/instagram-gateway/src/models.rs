//! API request/response models.
//!
//! Upstream media and profile records are deserialized straight into the
//! public shapes. Field names follow the Graph API 1:1 (`like_count`,
//! `comments_count`, `media_type`); the gateway response stays a faithful
//! projection of the upstream record.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Resolved Instagram business account profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessProfile {
    pub id: String,
    pub username: String,
    /// Display name.
    pub name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub followers_count: Option<i64>,
    pub follows_count: Option<i64>,
    pub media_count: Option<i64>,
}

/// One media record, projected 1:1 from the upstream listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: String,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    /// Upstream value passed through verbatim (IMAGE, VIDEO, CAROUSEL_ALBUM).
    pub media_type: Option<String>,
    /// ISO-8601 timestamp as returned by the upstream.
    pub timestamp: Option<String>,
    pub like_count: Option<i64>,
    pub comments_count: Option<i64>,
    pub permalink: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessAccountResponse {
    pub success: bool,
    pub username: String,
    pub account_type: String,
    pub profile: BusinessProfile,
    pub posts: Vec<Post>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BusinessQuery {
    /// User access token obtained through the OAuth flow.
    pub access_token: Option<String>,
    /// Page size, 1-100. Defaults to 25.
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthUrlQuery {
    pub app_id: Option<String>,
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthUrlResponse {
    pub success: bool,
    pub auth_url: String,
    pub instructions: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenExchangeRequest {
    pub code: Option<String>,
    pub app_id: Option<String>,
    pub app_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenExchangeResponse {
    pub success: bool,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

/// Error envelope returned by every failure path.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC3339 timestamp of the response.
    pub timestamp: String,
}
