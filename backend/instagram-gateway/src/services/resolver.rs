//! Credential → business account resolution.
//!
//! Three chained Graph API lookups, each short-circuiting on failure:
//! linked pages, then the page's business account linkage, then the profile
//! fields. The page-scoped token extracted in step one is the credential for
//! every subsequent call, including the media fetch. The caller's original
//! token is only ever used for the pages listing.

use serde::Deserialize;
use tracing::debug;

use super::decode;
use crate::clients::graph::GraphTransport;
use crate::config::GraphApiConfig;
use crate::error::{AppError, Result};
use crate::models::BusinessProfile;

/// Fixed field set requested from the profile lookup.
const PROFILE_FIELDS: &str =
    "id,username,name,profile_picture_url,followers_count,follows_count,media_count";

/// A resolved account plus the page-scoped token that must be used for
/// subsequent post fetches.
#[derive(Debug, Clone)]
pub struct ResolvedAccount {
    pub profile: BusinessProfile,
    pub page_token: String,
}

pub async fn resolve(
    graph: &dyn GraphTransport,
    cfg: &GraphApiConfig,
    credential: &str,
) -> Result<ResolvedAccount> {
    #[derive(Deserialize)]
    struct PageList {
        #[serde(default)]
        data: Vec<PageEntry>,
    }

    #[derive(Deserialize)]
    struct PageEntry {
        id: String,
        access_token: String,
    }

    let url = format!("{}/{}/me/accounts", cfg.facebook_base, cfg.api_version);
    let payload = graph.get(&url, &[("access_token", credential)]).await?;
    let pages: PageList = decode(payload, "linked pages")?;

    // First page wins; the upstream ordering is the only tie-break policy.
    let page = pages.data.into_iter().next().ok_or(AppError::NoLinkedPages)?;
    debug!(page_id = %page.id, "selected linked page");

    #[derive(Deserialize)]
    struct PageLinkage {
        instagram_business_account: Option<AccountRef>,
    }

    #[derive(Deserialize)]
    struct AccountRef {
        id: String,
    }

    let url = format!("{}/{}/{}", cfg.facebook_base, cfg.api_version, page.id);
    let payload = graph
        .get(
            &url,
            &[
                ("fields", "instagram_business_account"),
                ("access_token", page.access_token.as_str()),
            ],
        )
        .await?;
    let linkage: PageLinkage = decode(payload, "page linkage")?;
    let account = linkage
        .instagram_business_account
        .ok_or(AppError::NoBusinessAccount)?;
    debug!(account_id = %account.id, "resolved business account id");

    let url = format!("{}/{}", cfg.instagram_base, account.id);
    let payload = graph
        .get(
            &url,
            &[
                ("fields", PROFILE_FIELDS),
                ("access_token", page.access_token.as_str()),
            ],
        )
        .await?;
    let profile: BusinessProfile = decode(payload, "business profile")?;

    Ok(ResolvedAccount {
        profile,
        page_token: page.access_token,
    })
}

/// Username match gate: the caller-requested username must equal the
/// resolved one, case-insensitively, before any posts are fetched or
/// returned.
pub fn username_matches(requested: &str, resolved: &str) -> bool {
    requested.eq_ignore_ascii_case(resolved)
}

#[cfg(test)]
mod tests {
    use super::username_matches;

    #[test]
    fn username_gate_is_case_insensitive() {
        assert!(username_matches("ACCT", "acct"));
        assert!(username_matches("acct", "acct"));
        assert!(username_matches("AcCt", "aCcT"));
    }

    #[test]
    fn username_gate_rejects_different_names() {
        assert!(!username_matches("other", "acct"));
        assert!(!username_matches("acct2", "acct"));
        assert!(!username_matches("", "acct"));
    }
}
