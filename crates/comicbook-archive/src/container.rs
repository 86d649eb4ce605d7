//! Archive container backend trait.
//!
//! Defines the [`ContainerFormat`] trait that abstracts reading one archive
//! family (ZIP, TAR, 7z, RAR), and the [`EntryVisitor`] callback through
//! which callers consume entries. This keeps the scanning and page-loading
//! logic independent of any particular container library.

use std::io::Read;
use std::path::Path;

use crate::error::ArchiveError;

/// Flow control returned by an [`EntryVisitor`] after each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Proceed to the next entry.
    Continue,
    /// End the iteration now.
    Stop,
}

/// Callback invoked for each regular-file entry during iteration.
///
/// The visitor decides how much of each entry to consume: leave `data`
/// untouched to skip the entry, read a few blocks to probe it, or drain it
/// for the full contents. Bytes left unread are discarded by the container
/// backend before it moves to the next entry.
///
/// The visitor itself is infallible; visitors that can fail record their
/// outcome internally and return [`Walk::Stop`].
pub trait EntryVisitor {
    /// Called once per entry with its path and a reader over its bytes.
    fn visit(&mut self, path: &str, data: &mut dyn Read) -> Walk;
}

/// Trait abstracting one archive container family.
///
/// A format knows how to open an archive file and walk its entries in
/// container order, handing each regular file to an [`EntryVisitor`].
/// Directories and other non-file entries are never reported. Entries whose
/// names do not decode as UTF-8 are logged and skipped; iteration continues.
///
/// # Associated Types
///
/// - `Reader`: The open archive representation.
/// - `Error`: Format-specific error type, convertible to [`ArchiveError`].
///
/// # Usage
///
/// ```ignore
/// let mut reader = MyFormat::open(path)?;
/// MyFormat::visit_entries(&mut reader, &mut visitor)?;
/// ```
pub trait ContainerFormat {
    /// The open archive representation.
    type Reader;

    /// Format-specific error type, convertible to [`ArchiveError`].
    type Error: std::error::Error + Into<ArchiveError>;

    /// Opens the archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its container
    /// structure cannot be parsed.
    fn open(path: &Path) -> Result<Self::Reader, Self::Error>;

    /// Walks regular-file entries in container order.
    ///
    /// Stops early when the visitor returns [`Walk::Stop`].
    ///
    /// # Errors
    ///
    /// Returns an error on a fatal container failure between entries.
    /// Problems confined to one entry's data are the visitor's to handle.
    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error>;
}
