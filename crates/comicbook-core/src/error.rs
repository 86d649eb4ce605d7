//! Error types for comicbook-rs.
//!
//! Provides [`CbError`], the single error taxonomy shared by every layer of
//! the library: archive access, scanning, index lookup, and page decoding.

use std::fmt;

/// Fatal error types for comic-book document processing.
///
/// These errors indicate conditions that prevent the current operation from
/// completing. Per-entry problems during the initial scan are deliberately
/// *not* errors: an entry whose image header never resolves is dropped from
/// the page index silently (a best-effort index), and only container-level
/// failures surface as [`CbError::OpenFailed`] or [`CbError::ReadFailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CbError {
    /// A required input was structurally invalid (empty path, zero-sized
    /// chunk configuration, and the like).
    InvalidArguments(String),
    /// The archive could not be opened: bad path, unreadable file, or no
    /// supported container format matched its content.
    OpenFailed(String),
    /// A fatal container error occurred while iterating entries.
    ReadFailed(String),
    /// No page at the requested position, or no matching entry was found
    /// while re-locating a page inside the archive.
    NotFound(String),
    /// Entry bytes did not decode to a valid image.
    DecodeFailed(String),
    /// Allocation failure reported by the host boundary.
    OutOfMemory,
    /// Positional lookup beyond the end of the page index.
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The number of pages in the index.
        len: usize,
    },
}

impl fmt::Display for CbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CbError::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            CbError::OpenFailed(msg) => write!(f, "failed to open archive: {msg}"),
            CbError::ReadFailed(msg) => write!(f, "archive read failed: {msg}"),
            CbError::NotFound(msg) => write!(f, "not found: {msg}"),
            CbError::DecodeFailed(msg) => write!(f, "image decode failed: {msg}"),
            CbError::OutOfMemory => write!(f, "out of memory"),
            CbError::OutOfRange { index, len } => {
                write!(f, "page index {index} out of range (0..{len})")
            }
        }
    }
}

impl std::error::Error for CbError {}
