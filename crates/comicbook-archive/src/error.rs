//! Error types for the container-reading layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`ArchiveError`] that wraps container-specific failures and converts them
//! to [`CbError`] for unified error handling across the library.

use comicbook_core::CbError;
use thiserror::Error;

/// Error type for archive container operations.
///
/// Wraps format-specific errors and provides conversion to [`CbError`].
/// `Open` and `Unsupported` map to open failures; `Io` and `Corrupt` map to
/// read failures, which abort a scan in progress.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The file could not be opened, or no container format matched its
    /// content.
    #[error("archive open error: {0}")]
    Open(String),

    /// I/O error reading archive data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container's structure is damaged or could not be parsed.
    #[error("corrupt archive: {0}")]
    Corrupt(String),

    /// The container format was recognized but cannot be read by this
    /// build.
    #[error("unsupported container: {0}")]
    Unsupported(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] CbError),
}

impl From<ArchiveError> for CbError {
    fn from(err: ArchiveError) -> Self {
        match err {
            ArchiveError::Open(msg) => CbError::OpenFailed(msg),
            ArchiveError::Io(e) => CbError::ReadFailed(e.to_string()),
            ArchiveError::Corrupt(msg) => CbError::ReadFailed(msg),
            ArchiveError::Unsupported(msg) => CbError::OpenFailed(msg),
            ArchiveError::Core(e) => e,
        }
    }
}
