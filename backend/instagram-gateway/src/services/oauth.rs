//! OAuth helpers: dialog URL construction and the code → token exchange.
//!
//! The exchange is a single upstream call with no retry, caching, or
//! persistence; failures are reported straight back to the caller.

use serde::Deserialize;

use super::decode;
use crate::clients::graph::GraphTransport;
use crate::config::GraphApiConfig;
use crate::error::Result;

/// Scopes required for business account resolution and media listing.
pub const OAUTH_SCOPES: &str = "instagram_basic,pages_show_list,pages_read_engagement";

/// Builds the interactive OAuth dialog URL for the caller to open in a
/// browser.
pub fn build_auth_url(cfg: &GraphApiConfig, app_id: &str, redirect_uri: &str) -> String {
    format!(
        "{}/{}/dialog/oauth?client_id={}&redirect_uri={}&scope={}&response_type=code",
        cfg.oauth_dialog_base,
        cfg.api_version,
        app_id,
        urlencoding::encode(redirect_uri),
        OAUTH_SCOPES,
    )
}

/// A successful code → token exchange.
#[derive(Debug)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

pub struct ExchangeParams<'a> {
    pub code: &'a str,
    pub app_id: &'a str,
    pub app_secret: &'a str,
    pub redirect_uri: &'a str,
}

pub async fn exchange_code(
    graph: &dyn GraphTransport,
    cfg: &GraphApiConfig,
    params: ExchangeParams<'_>,
) -> Result<TokenGrant> {
    #[derive(Deserialize)]
    struct TokenResponse {
        access_token: String,
        token_type: Option<String>,
        expires_in: Option<i64>,
    }

    let url = format!("{}/{}/oauth/access_token", cfg.facebook_base, cfg.api_version);
    let payload = graph
        .post(
            &url,
            &[
                ("client_id", params.app_id),
                ("client_secret", params.app_secret),
                ("redirect_uri", params.redirect_uri),
                ("code", params.code),
            ],
        )
        .await?;
    let token: TokenResponse = decode(payload, "token exchange")?;

    Ok(TokenGrant {
        access_token: token.access_token,
        token_type: token.token_type.unwrap_or_else(|| "bearer".to_string()),
        expires_in: token.expires_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn auth_url_encodes_redirect_and_carries_scopes() {
        let cfg = Config::from_env().unwrap().graph;
        let url = build_auth_url(&cfg, "1234", "https://example.com/callback?x=1");

        assert!(url.starts_with("https://www.facebook.com/v18.0/dialog/oauth?"));
        assert!(url.contains("client_id=1234"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback%3Fx%3D1"));
        assert!(url.contains("scope=instagram_basic,pages_show_list,pages_read_engagement"));
        assert!(url.contains("response_type=code"));
    }
}
