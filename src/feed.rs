//! Release feed download.
//!
//! The feed is a hosted JSON file published by the z/OS Open Tools project.
//! It is fetched once per run with a plain GET; there is no retry, no
//! pagination and no authentication.

use crate::models::{ReleaseDocument, ReleaseFeed};
use crate::utils::truncate_for_log;
use reqwest::get;
use std::error::Error;
use tracing::{debug, error, info, instrument};

/// Location of the release feed.
pub const FEED_URL: &str =
    "https://raw.githubusercontent.com/ZOSOpenTools/meta/main/docs/api/zopen_releases.json";

/// Download the feed at `url` and return its `release_data` section.
///
/// # Errors
///
/// Returns an error on network failure, a non-success HTTP status, or a body
/// that [`parse_feed`] rejects.
#[instrument(level = "info")]
pub async fn fetch_feed(url: &str) -> Result<ReleaseFeed, Box<dyn Error>> {
    let response = get(url).await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), "Downloaded release feed");

    let feed = parse_feed(&body).inspect_err(|e| {
        error!(
            error = %e,
            body_preview = %truncate_for_log(&body, 300),
            "Release feed is not in the expected shape"
        );
    })?;

    info!(tools = feed.len(), "Parsed release feed");
    Ok(feed)
}

/// Parse a feed document and extract its `release_data` mapping.
///
/// Fails when the body is not JSON, when `release_data` is missing, or when a
/// release or asset lacks one of its required fields.
pub fn parse_feed(body: &str) -> Result<ReleaseFeed, serde_json::Error> {
    let doc: ReleaseDocument = serde_json::from_str(body)?;
    debug!(
        releases = doc.release_data.values().map(Vec::len).sum::<usize>(),
        "Counted releases in feed"
    );
    Ok(doc.release_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::error::Category;

    #[test]
    fn test_parse_feed_extracts_release_data() {
        let body = r#"{
            "release_data": {
                "gitport": [
                    {
                        "date": "2024-03-01 08:15:00+0000",
                        "assets": [{"name": "git-2.44.pax.Z", "url": "https://x/download/v2.44/git-2.44.pax.Z"}]
                    },
                    {
                        "date": "2024-02-01 08:15:00+0000",
                        "assets": [{"name": "git-2.43.pax.Z", "url": "https://x/download/v2.43/git-2.43.pax.Z"}]
                    }
                ]
            }
        }"#;

        let feed = parse_feed(body).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed["gitport"].len(), 2);
        assert_eq!(feed["gitport"][1].assets[0].name, "git-2.43.pax.Z");
    }

    #[test]
    fn test_parse_feed_missing_release_data() {
        let err = parse_feed(r#"{"releases": {}}"#).unwrap_err();
        assert_eq!(err.classify(), Category::Data);
    }

    #[test]
    fn test_parse_feed_not_json() {
        let err = parse_feed("<html><body>Not Found</body></html>").unwrap_err();
        assert_eq!(err.classify(), Category::Syntax);
    }

    #[test]
    fn test_parse_feed_truncated_body() {
        let err = parse_feed(r#"{"release_data": {"gitport": ["#).unwrap_err();
        assert_eq!(err.classify(), Category::Eof);
    }

    #[test]
    fn test_feed_url_points_at_zopen_releases() {
        assert!(FEED_URL.starts_with("https://"));
        assert!(FEED_URL.ends_with("/zopen_releases.json"));
    }
}
