//! Grouping of feed releases by calendar date and tool.
//!
//! The digest is built once per run and handed straight to the markdown
//! writer. Dates are kept in first-seen order here; the writer decides the
//! presentation order.

use crate::models::{DigestAsset, ReleaseFeed};
use crate::utils::{release_calendar_date, rewrite_release_url};
use chrono::NaiveDate;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Tool name to the assets it released on one day, in feed order.
pub type DateGroup = IndexMap<String, Vec<DigestAsset>>;

/// Calendar date to the tools released that day.
pub type Digest = IndexMap<NaiveDate, DateGroup>;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("release of {tool} dated {date} has no assets")]
    NoAssets { tool: String, date: String },

    #[error("release of {tool} has unparsable date {value:?}: {source}")]
    InvalidDate {
        tool: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Group every release in `feed` under its calendar date and tool.
///
/// Only the first asset of each release is used. Multiple releases of the
/// same tool on the same day accumulate in feed order.
///
/// # Errors
///
/// Aborts on the first release with an unparsable date or with no assets.
#[instrument(level = "info", skip_all, fields(tools = feed.len()))]
pub fn build_digest(feed: &ReleaseFeed) -> Result<Digest, DigestError> {
    let mut digest = Digest::new();

    for (tool, releases) in feed {
        for release in releases {
            let date = release_calendar_date(&release.date).map_err(|source| {
                DigestError::InvalidDate {
                    tool: tool.clone(),
                    value: release.date.clone(),
                    source,
                }
            })?;

            let asset = release.assets.first().ok_or_else(|| DigestError::NoAssets {
                tool: tool.clone(),
                date: release.date.clone(),
            })?;

            let entry = DigestAsset {
                name: asset.name.clone(),
                url: rewrite_release_url(&asset.url),
            };
            debug!(%tool, %date, name = %entry.name, "Adding release to digest");

            digest
                .entry(date)
                .or_default()
                .entry(tool.clone())
                .or_default()
                .push(entry);
        }
    }

    info!(dates = digest.len(), "Built release digest");
    Ok(digest)
}
