//! Traversal and output configuration.
//!
//! This module defines the options that control which entries the resolver
//! counts and how the resulting size is presented.

use serde::Serialize;

/// Configuration for size resolution.
///
/// Both flags default to `false`: hidden entries are skipped and
/// subdirectories contribute nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct TraversalOptions {
    /// Count entries whose name starts with `.`
    #[serde(rename = "all")]
    pub include_hidden: bool,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl TraversalOptions {
    /// Whether an entry with the given file name is counted under these options.
    #[must_use]
    pub fn counts_name(self, name: &str) -> bool {
        self.include_hidden || !name.starts_with('.')
    }
}

/// Configuration for presenting a resolved size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OutputOptions {
    /// Scale the size to the largest fitting binary unit
    pub human: bool,

    /// Emit a JSON document instead of the tab-separated line
    pub json: bool,
}
