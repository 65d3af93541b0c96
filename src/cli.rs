//! Command-line interface definitions for the release digest generator.
//!
//! The only knob is where the markdown lands. Log verbosity is controlled
//! through `RUST_LOG` and never changes the rendered output.

use clap::Parser;

/// Default file name for the rendered digest.
pub const DEFAULT_OUTPUT: &str = "Newly_released_tools.md";

/// Command-line arguments for the release digest generator.
///
/// # Examples
///
/// ```sh
/// # Write to ./Newly_released_tools.md
/// release_digest
///
/// # Write somewhere else
/// release_digest -o docs/Latest.md
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output markdown file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,
}
