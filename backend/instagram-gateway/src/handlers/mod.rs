use actix_web::web;

pub mod auth;
pub mod business;
pub mod meta;

/// Wires the public HTTP surface. Unmatched routes fall through to the
/// JSON 404 handler.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(meta::health))
        .route("/api/setup", web::get().to(meta::setup_guide))
        .route(
            "/api/instagram/business/{username}",
            web::get().to(business::get_business_account),
        )
        .route("/api/auth/instagram", web::get().to(auth::instagram_auth_url))
        .route("/api/auth/token", web::post().to(auth::exchange_access_token))
        .default_service(web::route().to(meta::not_found));
}
