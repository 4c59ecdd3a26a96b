/// OpenAPI documentation for the Instagram gateway
use utoipa::OpenApi;

use crate::models::{
    AuthUrlResponse, BusinessAccountResponse, BusinessProfile, ErrorResponse, HealthResponse,
    Post, TokenExchangeRequest, TokenExchangeResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Instagram Gateway API",
        version = "1.0.0",
        description = "HTTP gateway over the Instagram/Facebook Graph API. Resolves a caller-supplied access token to its linked Instagram business account and republishes the profile and recent posts as a simplified JSON API. Includes helper endpoints for the OAuth dialog URL and the code-to-token exchange.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health and setup guide"),
        (name = "instagram", description = "Business account profile and posts"),
        (name = "auth", description = "OAuth dialog URL and token exchange"),
    ),
    paths(
        crate::handlers::meta::health,
        crate::handlers::meta::setup_guide,
        crate::handlers::business::get_business_account,
        crate::handlers::auth::instagram_auth_url,
        crate::handlers::auth::exchange_access_token,
    ),
    components(schemas(
        BusinessAccountResponse,
        BusinessProfile,
        Post,
        AuthUrlResponse,
        TokenExchangeRequest,
        TokenExchangeResponse,
        HealthResponse,
        ErrorResponse,
    )),
)]
pub struct ApiDoc;
