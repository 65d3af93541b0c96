//! Output generation for the release digest.
//!
//! # Submodules
//!
//! - [`markdown`]: renders the digest and writes the markdown file
//!
//! # Output
//!
//! A single file, `Newly_released_tools.md` unless `--output` says otherwise,
//! overwritten on every run.

pub mod markdown;
