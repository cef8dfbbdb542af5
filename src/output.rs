//! Rendering of resolved sizes.
//!
//! The default output is a single `"<size>\t<path>"` line. When `--json` is
//! passed, a [`JsonOutput`] document is serialized to stdout instead.

use std::path::Path;

use serde::Serialize;

use crate::{config::TraversalOptions, utils::format_size};

/// JSON document emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The path as given on the command line.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// Size rendered the same way as the plain output (e.g. `"1.2MB"`).
    pub formatted: String,

    /// Options the size was computed with.
    pub options: JsonOptions,
}

/// Options echoed back in the JSON document.
#[derive(Serialize, Debug)]
pub struct JsonOptions {
    #[serde(flatten)]
    pub traversal: TraversalOptions,

    pub human: bool,
}

impl JsonOutput {
    /// Build the JSON document for a resolved size.
    #[must_use]
    pub fn new(path: &Path, size: u64, traversal: TraversalOptions, human: bool) -> Self {
        Self {
            path: path.display().to_string(),
            size,
            formatted: format_size(size, human),
            options: JsonOptions { traversal, human },
        }
    }
}

/// Render the plain output line (without trailing newline).
#[must_use]
pub fn render_line(path: &Path, size: u64, human: bool) -> String {
    format!("{}\t{}", format_size(size, human), path.display())
}
