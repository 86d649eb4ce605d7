//! High-level document API over a comic-book archive.
//!
//! [`Document::open`] runs the scan once and freezes the resulting page
//! index; afterwards the document only answers metadata queries from memory.
//! Pixel data is produced on demand by [`Document::decode_page`], which
//! re-opens the archive for each call.

use std::path::{Path, PathBuf};

use comicbook_core::{CbError, OpenOptions, PageIndex, PageMeta, PathComparator, Pixmap};
use tracing::debug;

use crate::materialize;
use crate::registry::supported_extensions;
use crate::scan::scan;

/// Iterator over the pages of a [`Document`].
///
/// Created by [`Document::pages`]. Yields metadata in page order; the exact
/// length is known up front.
pub struct PagesIter<'a> {
    inner: std::slice::Iter<'a, PageMeta>,
}

impl<'a> Iterator for PagesIter<'a> {
    type Item = &'a PageMeta;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PagesIter<'_> {}

/// An opened comic-book archive with its frozen page index.
///
/// The document keeps the archive's path, not its content: metadata lives in
/// the index built at open time, and every pixel decode re-reads the file on
/// disk. Dropping the document releases everything it owns.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    options: OpenOptions,
    comparator: PathComparator,
    index: PageIndex,
}

impl Document {
    /// Opens the comic-book archive at `path` and scans it for pages.
    ///
    /// # Arguments
    ///
    /// * `path` - Archive file on disk (CBZ/ZIP, CB7/7z, CBT/TAR, tar.gz,
    ///   and CBR/RAR when compiled with the `rar` feature)
    /// * `options` - Scan tuning, or `None` for defaults
    ///
    /// # Errors
    ///
    /// Returns [`CbError::InvalidArguments`] for unusable options,
    /// [`CbError::OpenFailed`] when the file is missing or no supported
    /// container format matches, and [`CbError::ReadFailed`] when the
    /// container fails mid-scan. An archive without any decodable image
    /// entries opens successfully with zero pages.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use comicbook::Document;
    ///
    /// let doc = Document::open("series/issue-01.cbz", None)?;
    /// println!("{} pages", doc.page_count());
    /// ```
    pub fn open(path: impl AsRef<Path>, options: Option<OpenOptions>) -> Result<Self, CbError> {
        let path = path.as_ref();
        let options = options.unwrap_or_default();
        options.validate()?;

        let comparator = PathComparator::new()?;
        let extensions = supported_extensions();
        let index = scan(path, &extensions, &comparator, &options)?;

        debug!(path = %path.display(), pages = index.len(), "document opened");
        Ok(Self {
            path: path.to_path_buf(),
            options,
            comparator,
            index,
        })
    }

    /// Path of the underlying archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages discovered by the scan.
    pub fn page_count(&self) -> usize {
        self.index.len()
    }

    /// Metadata for the page at `index`, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`CbError::OutOfRange`] when `index >= page_count()`.
    pub fn page(&self, index: usize) -> Result<&PageMeta, CbError> {
        self.index.get(index)
    }

    /// Iterates page metadata in page order.
    pub fn pages(&self) -> PagesIter<'_> {
        PagesIter {
            inner: self.index.iter(),
        }
    }

    /// The frozen page index built at open time.
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    /// Decodes the page at `index` into an RGBA pixmap.
    ///
    /// Re-opens the archive and streams the full entry; nothing is cached
    /// between calls.
    ///
    /// # Errors
    ///
    /// Returns [`CbError::OutOfRange`] for a bad index, and otherwise the
    /// materializer's errors: [`CbError::OpenFailed`] when the archive no
    /// longer opens, [`CbError::NotFound`] when the entry has disappeared
    /// from the archive, [`CbError::DecodeFailed`] when its bytes no longer
    /// decode.
    pub fn decode_page(&self, index: usize) -> Result<Pixmap, CbError> {
        let meta = self.index.get(index)?;
        self.decode_entry(meta.path())
    }

    /// Decodes the entry matching `entry_path` under the scan's comparator.
    pub(crate) fn decode_entry(&self, entry_path: &str) -> Result<Pixmap, CbError> {
        materialize::decode_page(&self.path, entry_path, &self.comparator, &self.options)
    }
}
