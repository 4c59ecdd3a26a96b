/// Configuration management for instagram-gateway
///
/// Loads configuration from environment variables with sensible defaults.
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub graph: GraphApiConfig,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: String,
}

/// Upstream Graph API endpoints.
///
/// The three base URLs are split because Meta serves page lookups and
/// Instagram profile/media lookups from different hosts. All of them are
/// overridable so tests and staging setups can point elsewhere.
#[derive(Clone, Debug)]
pub struct GraphApiConfig {
    /// Pages, page-account linkage, token exchange.
    pub facebook_base: String,
    /// Business profile fields and media listing.
    pub instagram_base: String,
    /// The interactive OAuth dialog.
    pub oauth_dialog_base: String,
    pub api_version: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, crate::error::AppError> {
        dotenv().ok();

        let port = match env::var("GATEWAY_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                crate::error::AppError::Config(format!("invalid GATEWAY_PORT '{raw}'"))
            })?,
            Err(_) => 3000,
        };

        Ok(Config {
            app: AppConfig {
                host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            graph: GraphApiConfig {
                facebook_base: env::var("FACEBOOK_GRAPH_BASE_URL")
                    .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
                instagram_base: env::var("INSTAGRAM_GRAPH_BASE_URL")
                    .unwrap_or_else(|_| "https://graph.instagram.com".to_string()),
                oauth_dialog_base: env::var("OAUTH_DIALOG_BASE_URL")
                    .unwrap_or_else(|_| "https://www.facebook.com".to_string()),
                api_version: env::var("GRAPH_API_VERSION")
                    .unwrap_or_else(|_| "v18.0".to_string()),
            },
        })
    }
}
