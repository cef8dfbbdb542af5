//! Configuration types for traversal, output, and the persistent config file.

pub mod file;
pub mod traversal;

pub use file::FileConfig;
pub use traversal::{OutputOptions, TraversalOptions};
