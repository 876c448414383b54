//! Error types for file processing.
//!
//! This module defines the `ProcessError` enum returned by the transform and
//! sample operations. Each variant captures one failure mode the menu reports
//! back to the user; none of them terminates the program.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Direction of the file access that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
        }
    }
}

/// Errors that can occur while reading, transforming or writing files.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input file does not exist.
    #[error("The file '{}' does not exist!", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Read or write access was denied by the operating system.
    #[error("Permission denied to {access} '{}'!", path.display())]
    PermissionDenied {
        /// Path that could not be accessed
        path: PathBuf,
        /// Whether the denied access was a read or a write
        access: Access,
    },

    /// Any other read/write fault.
    ///
    /// The underlying I/O error is kept as the source so its diagnostic can
    /// be shown to the user.
    #[error("Cannot {access} file '{}': {source}", path.display())]
    IoFailure {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Whether the failure happened while reading or writing
        access: Access,
        /// Diagnostic from the operating system
        #[source]
        source: io::Error,
    },

    /// The input file contains zero lines.
    #[error("'{}' is empty!", path.display())]
    EmptyInput {
        /// Path of the empty input file
        path: PathBuf,
    },
}

impl ProcessError {
    /// Classify an I/O error raised while accessing `path`.
    ///
    /// `NotFound` only maps to `FileNotFound` on the read side; a missing
    /// destination directory is a write fault like any other.
    pub fn from_io(err: io::Error, path: &Path, access: Access) -> Self {
        match (err.kind(), access) {
            (io::ErrorKind::NotFound, Access::Read) => ProcessError::FileNotFound {
                path: path.to_path_buf(),
            },
            (io::ErrorKind::PermissionDenied, _) => ProcessError::PermissionDenied {
                path: path.to_path_buf(),
                access,
            },
            _ => ProcessError::IoFailure {
                path: path.to_path_buf(),
                access,
                source: err,
            },
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ProcessError::FileNotFound { path }
            | ProcessError::PermissionDenied { path, .. }
            | ProcessError::IoFailure { path, .. }
            | ProcessError::EmptyInput { path } => path,
        }
    }
}
