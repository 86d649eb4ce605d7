//! Archive scanning: one pass over a container producing the page index.
//!
//! The scan walks every entry, filters candidates by file-name suffix, and
//! streams just enough of each candidate's bytes to learn its pixel
//! dimensions. Entries that never yield dimensions are dropped without
//! failing the scan; only a fatal container error aborts it.

use std::io::{self, Read};
use std::path::Path;

use comicbook_archive::{ArchiveReader, EntryVisitor, Walk};
use comicbook_core::{
    CbError, ExtensionSet, OpenOptions, PageIndex, PageMeta, PathComparator, path_suffix,
};
use tracing::{debug, trace};

use crate::sniff::DimensionSniffer;

/// Builds the ordered page index for the archive at `archive_path`.
///
/// Entries qualify as pages when their path suffix is in `extensions` and
/// their leading bytes reveal positive pixel dimensions. The result is
/// sorted with `comparator`; container order does not survive.
///
/// # Errors
///
/// Returns [`CbError::OpenFailed`] when the archive cannot be opened or is
/// not a supported container, and [`CbError::ReadFailed`] when the container
/// reader fails mid-iteration. Undecodable candidate entries are not errors;
/// they are omitted from the index.
pub fn scan(
    archive_path: &Path,
    extensions: &ExtensionSet,
    comparator: &PathComparator,
    options: &OpenOptions,
) -> Result<PageIndex, CbError> {
    options.validate()?;

    let mut reader = ArchiveReader::open(archive_path)?;
    let mut visitor = ScanVisitor {
        extensions,
        options,
        pages: Vec::new(),
    };
    reader.visit_entries(&mut visitor)?;

    debug!(
        path = %archive_path.display(),
        pages = visitor.pages.len(),
        "archive scan complete"
    );
    Ok(PageIndex::from_unsorted(visitor.pages, comparator))
}

/// Visitor collecting one [`PageMeta`] per image-bearing entry.
struct ScanVisitor<'a> {
    extensions: &'a ExtensionSet,
    options: &'a OpenOptions,
    pages: Vec<PageMeta>,
}

impl EntryVisitor for ScanVisitor<'_> {
    fn visit(&mut self, path: &str, data: &mut dyn Read) -> Walk {
        let Some(suffix) = path_suffix(path) else {
            return Walk::Continue;
        };
        if !self.extensions.matches(suffix) {
            return Walk::Continue;
        }

        let mut sniffer = DimensionSniffer::with_options(self.options);
        let mut block = vec![0u8; self.options.chunk_size];
        loop {
            let read = match data.read(&mut block) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // A bad candidate entry does not fail the scan.
                    debug!(entry = path, error = %e, "candidate read failed, dropping entry");
                    break;
                }
            };
            if !sniffer.feed(&block[..read]) {
                break;
            }
            if sniffer.width() > 0 || sniffer.height() > 0 {
                trace!(entry = path, fed = sniffer.bytes_fed(), "dimensions known, stopping early");
                break;
            }
        }

        if sniffer.width() > 0 && sniffer.height() > 0 {
            self.pages
                .push(PageMeta::new(path, sniffer.width(), sniffer.height()));
        } else {
            debug!(entry = path, "no image dimensions found, entry dropped");
        }
        Walk::Continue
    }
}
