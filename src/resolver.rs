//! Size resolution for files, directories, and symbolic links.
//!
//! This module computes the number of bytes attributed to a path. Regular
//! files count their length, directories the sum of their entries, and
//! symbolic links whatever their resolved target adds up to under the same
//! options. Traversal is sequential and stops at the first error.

use std::{
    fs::{self, DirEntry},
    io,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::{
    config::TraversalOptions,
    error::{FsOp, SizeError},
};

/// Computes disk usage for a path.
///
/// A `SizeResolver` holds no state beyond its options, so a single instance
/// can be reused for any number of paths.
#[derive(Clone, Debug, Default)]
pub struct SizeResolver {
    options: TraversalOptions,
}

impl SizeResolver {
    /// Create a resolver with the specified options.
    #[must_use]
    pub const fn new(options: TraversalOptions) -> Self {
        Self { options }
    }

    /// The options this resolver applies.
    #[must_use]
    pub const fn options(&self) -> TraversalOptions {
        self.options
    }

    /// Resolve the total size of `path` in bytes.
    ///
    /// The path itself is never subject to hidden-name filtering. A symbolic
    /// link is resolved to its final target and measured with the same
    /// options. A directory sums its immediate regular files, resolved
    /// symlink entries, and (when recursive) its subdirectories.
    ///
    /// # Errors
    ///
    /// - [`SizeError::NotFound`] if `path` does not exist
    /// - [`SizeError::Io`] if metadata, a directory listing, or a symlink
    ///   target cannot be read anywhere in the tree
    /// - [`SizeError::SymlinkLoop`] if a link points back into a directory
    ///   that is currently being walked
    pub fn resolve(&self, path: &Path) -> Result<u64, SizeError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SizeError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SizeError::io(FsOp::Lstat, path, e)
            }
        })?;

        let mut ancestors = Vec::new();

        if metadata.file_type().is_symlink() {
            let target = resolve_link(path)?;
            return self.resolve_target(&target, &mut ancestors);
        }

        if !metadata.is_dir() {
            return Ok(metadata.len());
        }

        let canonical =
            fs::canonicalize(path).map_err(|e| SizeError::io(FsOp::Canonicalize, path, e))?;
        self.dir_size(path, canonical, &mut ancestors)
    }

    /// Measure a fully resolved (symlink-free) path.
    fn resolve_target(
        &self,
        target: &Path,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<u64, SizeError> {
        let metadata =
            fs::symlink_metadata(target).map_err(|e| SizeError::io(FsOp::Lstat, target, e))?;

        if !metadata.is_dir() {
            return Ok(metadata.len());
        }

        if ancestors.iter().any(|dir| dir == target) {
            return Err(SizeError::SymlinkLoop {
                path: target.to_path_buf(),
            });
        }

        self.dir_size(target, target.to_path_buf(), ancestors)
    }

    /// Sum the entries of a directory.
    ///
    /// `canonical` is the symlink-free form of `dir`; it is kept on the
    /// ancestor stack for the duration of the walk.
    fn dir_size(
        &self,
        dir: &Path,
        canonical: PathBuf,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<u64, SizeError> {
        debug!("Descending into {}", dir.display());

        ancestors.push(canonical);
        let total = self.sum_entries(dir, ancestors);
        ancestors.pop();

        total
    }

    fn sum_entries(&self, dir: &Path, ancestors: &mut Vec<PathBuf>) -> Result<u64, SizeError> {
        let entries = fs::read_dir(dir).map_err(|e| SizeError::io(FsOp::ReadDir, dir, e))?;

        let mut total = 0u64;

        for entry in entries {
            let entry = entry.map_err(|e| SizeError::io(FsOp::ReadDir, dir, e))?;
            total = total.saturating_add(self.entry_size(&entry, ancestors)?);
        }

        Ok(total)
    }

    /// Size contributed by a single directory entry.
    fn entry_size(
        &self,
        entry: &DirEntry,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<u64, SizeError> {
        let name = entry.file_name();
        let path = entry.path();

        if !self.options.counts_name(&name.to_string_lossy()) {
            trace!("Skipping hidden entry {}", path.display());
            return Ok(0);
        }

        let file_type = entry
            .file_type()
            .map_err(|e| SizeError::io(FsOp::Lstat, &path, e))?;

        if file_type.is_symlink() {
            let target = resolve_link(&path)?;
            return self.resolve_target(&target, ancestors);
        }

        if file_type.is_file() {
            let len = entry
                .metadata()
                .map_err(|e| SizeError::io(FsOp::Lstat, &path, e))?
                .len();
            trace!("Counting {} ({len} bytes)", path.display());
            return Ok(len);
        }

        if file_type.is_dir() {
            if !self.options.recursive {
                trace!("Not descending into {}", path.display());
                return Ok(0);
            }

            // The parent is canonical and this entry is not a link, so the
            // joined path is canonical as well.
            let canonical = ancestors
                .last()
                .map_or_else(|| path.clone(), |parent| parent.join(&name));
            return self.dir_size(&path, canonical, ancestors);
        }

        trace!("Ignoring special file {}", path.display());
        Ok(0)
    }
}

/// Follow a symbolic link chain to its final real target.
fn resolve_link(link: &Path) -> Result<PathBuf, SizeError> {
    let target =
        fs::canonicalize(link).map_err(|e| SizeError::io(FsOp::ResolveLink, link, e))?;
    debug!("Resolved {} -> {}", link.display(), target.display());
    Ok(target)
}

/// Resolve the total size of `path` under the given options.
///
/// Convenience wrapper around [`SizeResolver::resolve`].
///
/// # Errors
///
/// See [`SizeResolver::resolve`].
pub fn resolve_size(path: &Path, options: TraversalOptions) -> Result<u64, SizeError> {
    SizeResolver::new(options).resolve(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    const fn opts(include_hidden: bool, recursive: bool) -> TraversalOptions {
        TraversalOptions {
            include_hidden,
            recursive,
        }
    }

    /// d/a.txt (4), d/.hidden (3), d/s/b.txt (3)
    fn scenario_dir() -> TempDir {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.txt"), "abcd");
        create_file(&tmp.path().join(".hidden"), "xyz");
        create_file(&tmp.path().join("s").join("b.txt"), "xyz");
        tmp
    }

    #[test]
    fn test_resolve_regular_file_ignores_flags() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("alpha.txt");
        create_file(&file, "abc");

        for (hidden, recursive) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(resolve_size(&file, opts(hidden, recursive)).unwrap(), 3);
        }
    }

    #[test]
    fn test_resolve_hidden_top_level_path_is_counted() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join(".secret");
        create_file(&file, "hello");

        assert_eq!(resolve_size(&file, opts(false, false)).unwrap(), 5);
    }

    #[test]
    fn test_resolve_scenario() {
        let tmp = scenario_dir();
        let d = tmp.path();

        assert_eq!(resolve_size(d, opts(false, false)).unwrap(), 4);
        assert_eq!(resolve_size(d, opts(true, false)).unwrap(), 7);
        assert_eq!(resolve_size(d, opts(false, true)).unwrap(), 7);
        assert_eq!(resolve_size(d, opts(true, true)).unwrap(), 10);
    }

    #[test]
    fn test_resolve_missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = resolve_size(&tmp.path().join("unknown.txt"), opts(false, false)).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolver_is_reusable() {
        let tmp = scenario_dir();
        let resolver = SizeResolver::new(opts(true, true));

        assert_eq!(resolver.options(), opts(true, true));
        assert_eq!(resolver.resolve(tmp.path()).unwrap(), 10);
        assert_eq!(resolver.resolve(tmp.path()).unwrap(), 10);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_ancestor_is_loop() {
        let tmp = scenario_dir();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("s").join("up")).unwrap();

        let err = resolve_size(tmp.path(), opts(false, true)).unwrap_err();
        assert!(matches!(err, SizeError::SymlinkLoop { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_self_referencing_link_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("me");
        std::os::unix::fs::symlink(&link, &link).unwrap();

        let err = resolve_size(&link, opts(false, false)).unwrap_err();
        assert!(matches!(
            err,
            SizeError::Io {
                op: FsOp::ResolveLink,
                ..
            }
        ));
    }
}
