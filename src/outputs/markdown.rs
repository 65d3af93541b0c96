//! Markdown rendering of the release digest.
//!
//! # Layout
//!
//! ```text
//! # Newly Released Tools
//!
//! ## 2024-01-03
//!
//! - **curlport**: [curl-8.5.0.pax.Z](https://github.com/ZOSOpenTools/curlport/releases/tag/v8.5.0)
//!
//! ## 2024-01-02
//!
//! - **gitport**: [git-2.43.pax.Z](https://github.com/ZOSOpenTools/gitport/releases/tag/v2.43)
//!
//! ```
//!
//! The layout is consumed verbatim by the docs site, so heading text, bullet
//! syntax and blank lines must not drift.

use crate::digest::Digest;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const TITLE: &str = "# Newly Released Tools";

/// Render `digest` as markdown, newest date first.
///
/// Tools and their assets keep the order in which the digest collected them.
pub fn digest_to_markdown(digest: &Digest) -> String {
    let mut md = String::new();
    md.push_str(TITLE);
    md.push_str("\n\n");

    for (date, tools) in digest.iter().sorted_by(|a, b| b.0.cmp(a.0)) {
        md.push_str(&format!("## {}\n\n", date.format("%Y-%m-%d")));
        for (tool, assets) in tools {
            for asset in assets {
                md.push_str(&format!("- **{}**: [{}]({})\n", tool, asset.name, asset.url));
            }
        }
        md.push('\n');
    }

    md
}

/// Render `digest` and write it to `path`, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn write_digest(digest: &Digest, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let md = digest_to_markdown(digest);
    fs::write(path.as_ref(), &md).await?;
    info!(bytes = md.len(), dates = digest.len(), "Wrote release digest");
    Ok(())
}
