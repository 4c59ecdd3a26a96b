//! Media listing for a resolved business account.
//!
//! One upstream call per request; the listing order is whatever the Graph
//! API returns (reverse-chronological by convention) and no further
//! pagination is attempted even if more records exist upstream.

use serde::Deserialize;

use super::decode;
use crate::clients::graph::GraphTransport;
use crate::config::GraphApiConfig;
use crate::error::Result;
use crate::models::Post;

/// Fixed field set requested from the media listing.
const MEDIA_FIELDS: &str =
    "id,caption,media_url,media_type,timestamp,like_count,comments_count,permalink";

pub async fn fetch_posts(
    graph: &dyn GraphTransport,
    cfg: &GraphApiConfig,
    account_id: &str,
    token: &str,
    limit: u32,
) -> Result<Vec<Post>> {
    #[derive(Deserialize)]
    struct MediaList {
        #[serde(default)]
        data: Vec<Post>,
    }

    let url = format!("{}/{}/media", cfg.instagram_base, account_id);
    let limit_param = limit.to_string();
    let payload = graph
        .get(
            &url,
            &[
                ("fields", MEDIA_FIELDS),
                ("limit", limit_param.as_str()),
                ("access_token", token),
            ],
        )
        .await?;
    let media: MediaList = decode(payload, "media list")?;

    Ok(media.data)
}
