//! Data models for the release feed and the digest derived from it.
//!
//! - [`ReleaseDocument`]: the top-level JSON document served by the feed
//! - [`Release`] and [`Asset`]: one publication event and its artifacts
//! - [`DigestAsset`]: the `{name, url}` pair rendered as a markdown link
//!
//! Unknown JSON fields are ignored; only the fields read by the digest are
//! modelled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tool name to its releases, in the order the feed lists them.
pub type ReleaseFeed = IndexMap<String, Vec<Release>>;

/// The document served at the feed URL.
#[derive(Debug, Deserialize)]
pub struct ReleaseDocument {
    /// Every tool's release history, keyed by tool name.
    pub release_data: ReleaseFeed,
}

/// One published release of a tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    /// Publication timestamp, e.g. `2024-01-02 10:00:00+0000`.
    pub date: String,
    /// Artifacts attached to the release. Only the first one is used.
    pub assets: Vec<Asset>,
}

/// A downloadable artifact attached to a release.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Asset {
    /// File name of the package, e.g. `curl-8.5.0.pax.Z`.
    pub name: String,
    /// Direct download URL of the package.
    pub url: String,
}

/// A rendered digest entry: the package name and its release page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestAsset {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_document_ignores_unknown_fields() {
        let json = r#"{
            "release_data": {
                "curlport": [{
                    "name": "curl 8.5.0",
                    "date": "2024-01-02 10:00:00+0000",
                    "assets": [{
                        "name": "curl-8.5.0.pax.Z",
                        "url": "https://github.com/ZOSOpenTools/curlport/releases/download/v8.5.0/curl-8.5.0.pax.Z",
                        "size": 1234
                    }]
                }]
            },
            "timestamp": "2024-01-03"
        }"#;

        let doc: ReleaseDocument = serde_json::from_str(json).unwrap();
        let releases = &doc.release_data["curlport"];
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].date, "2024-01-02 10:00:00+0000");
        assert_eq!(releases[0].assets[0].name, "curl-8.5.0.pax.Z");
    }

    #[test]
    fn test_release_feed_keeps_document_order() {
        let json = r#"{
            "release_data": {
                "zlibport": [],
                "bashport": [],
                "makeport": []
            }
        }"#;

        let doc: ReleaseDocument = serde_json::from_str(json).unwrap();
        let tools: Vec<&str> = doc.release_data.keys().map(String::as_str).collect();
        assert_eq!(tools, vec!["zlibport", "bashport", "makeport"]);
    }

    #[test]
    fn test_release_without_assets_field_is_rejected() {
        let json = r#"{"date": "2024-01-02 10:00:00+0000"}"#;
        let res = serde_json::from_str::<Release>(json);
        assert!(res.is_err());
    }
}
