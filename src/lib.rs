//! # path-size
//!
//! Disk usage of a single file or directory.
//!
//! The library exposes two operations: [`resolve_size`], which walks the
//! filesystem and adds up byte counts, and [`format_size`], which turns a
//! byte count into the string printed by the `path-size` binary.
//!
//! ## Rules
//!
//! - A regular file counts its length.
//! - A symbolic link counts whatever its resolved target counts, with the
//!   same options.
//! - A directory counts its immediate regular files and symlink entries;
//!   subdirectories only count when `recursive` is set.
//! - Entries whose name starts with `.` are skipped unless `include_hidden`
//!   is set. The path passed in is never filtered.
//!
//! ```no_run
//! use std::path::Path;
//! use path_size::{TraversalOptions, format_size, resolve_size};
//!
//! let options = TraversalOptions { include_hidden: false, recursive: true };
//! let size = resolve_size(Path::new("."), options)?;
//! println!("{}", format_size(size, true));
//! # Ok::<(), path_size::SizeError>(())
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod utils;

pub use config::{OutputOptions, TraversalOptions};
pub use error::SizeError;
pub use resolver::{SizeResolver, resolve_size};
pub use utils::format_size;
