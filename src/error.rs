//! Error types for size resolution.
//!
//! Every failure surfaced by the resolver falls into one of two classes: the
//! path handed in by the caller does not exist ([`SizeError::NotFound`]), or
//! the operating system refused one of the primitives used during traversal
//! (everything else). The first error aborts the whole computation.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Filesystem primitive that failed during traversal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FsOp {
    /// Reading metadata without following a final symlink.
    Lstat,

    /// Listing the entries of a directory.
    ReadDir,

    /// Resolving a symbolic link chain to its real target.
    ResolveLink,

    /// Computing the absolute, symlink-free form of a directory.
    Canonicalize,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lstat => "lstat",
            Self::ReadDir => "readdir",
            Self::ResolveLink => "readlink",
            Self::Canonicalize => "realpath",
        };
        f.write_str(name)
    }
}

/// Error returned by [`crate::resolve_size`].
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path passed to the resolver does not exist.
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    /// An OS-level failure while inspecting the tree.
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A symbolic link resolves to a directory that is already being walked.
    #[error("{}: too many levels of symbolic links", .path.display())]
    SymlinkLoop { path: PathBuf },
}

impl SizeError {
    pub(crate) fn io(op: FsOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Whether this is the not-found class rather than an I/O failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = SizeError::NotFound {
            path: PathBuf::from("missing.txt"),
        };

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "missing.txt: no such file or directory");
    }

    #[test]
    fn test_io_message_names_operation() {
        let err = SizeError::io(
            FsOp::ReadDir,
            "locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "readdir locked: permission denied");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = SizeError::io(FsOp::Lstat, "x", io::Error::other("boom"));

        assert!(err.source().is_some());
    }

    #[test]
    fn test_symlink_loop_is_io_class() {
        let err = SizeError::SymlinkLoop {
            path: PathBuf::from("/tmp/d"),
        };

        assert!(!err.is_not_found());
        assert!(err.to_string().contains("symbolic links"));
    }

    #[test]
    fn test_fs_op_display() {
        assert_eq!(FsOp::Lstat.to_string(), "lstat");
        assert_eq!(FsOp::ReadDir.to_string(), "readdir");
        assert_eq!(FsOp::ResolveLink.to_string(), "readlink");
        assert_eq!(FsOp::Canonicalize.to_string(), "realpath");
    }

    #[test]
    fn test_canonicalize_message_is_not_readlink() {
        let err = SizeError::io(
            FsOp::Canonicalize,
            "data",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );

        assert_eq!(err.to_string(), "realpath data: permission denied");
    }
}
