//! Page materialization: entry path back to decoded pixels.
//!
//! Every render opens the archive fresh, locates the entry whose path
//! matches under the case-insensitive comparator, streams the whole entry
//! into memory and decodes it. Nothing is cached between calls; memory
//! stays bounded to one page at a time.

use std::io::{self, Read};
use std::path::Path;

use comicbook_archive::{ArchiveReader, EntryVisitor, Walk};
use comicbook_core::{CbError, OpenOptions, PathComparator, Pixmap};
use tracing::debug;

/// Decodes the archive entry matching `entry_path` into an RGBA pixmap.
///
/// The match uses the same comparator as the scan, so any path recorded in
/// the page index is re-locatable even when the stored case differs from
/// the entry's. The first matching entry wins.
///
/// # Errors
///
/// Returns [`CbError::OpenFailed`] when the archive no longer opens,
/// [`CbError::NotFound`] when no entry matches, and
/// [`CbError::DecodeFailed`] when the matching entry cannot be read or its
/// bytes do not form a decodable image.
pub fn decode_page(
    archive_path: &Path,
    entry_path: &str,
    comparator: &PathComparator,
    options: &OpenOptions,
) -> Result<Pixmap, CbError> {
    options.validate()?;

    let mut reader = ArchiveReader::open(archive_path)?;
    let mut visitor = FindVisitor {
        target: entry_path,
        comparator,
        chunk_size: options.chunk_size,
        outcome: None,
    };
    reader.visit_entries(&mut visitor)?;

    match visitor.outcome {
        Some(Ok(bytes)) => {
            debug!(entry = entry_path, bytes = bytes.len(), "entry streamed, decoding");
            decode_pixmap(&bytes)
        }
        Some(Err(e)) => Err(e),
        None => Err(CbError::NotFound(format!(
            "no archive entry matches '{entry_path}'"
        ))),
    }
}

/// Decodes a complete in-memory image into an RGBA pixmap.
pub fn decode_pixmap(bytes: &[u8]) -> Result<Pixmap, CbError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| CbError::DecodeFailed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Pixmap::from_rgba8(width, height, rgba.into_raw())
}

/// Visitor that stops on the first comparator match and keeps its bytes.
struct FindVisitor<'a> {
    target: &'a str,
    comparator: &'a PathComparator,
    chunk_size: usize,
    outcome: Option<Result<Vec<u8>, CbError>>,
}

impl EntryVisitor for FindVisitor<'_> {
    fn visit(&mut self, path: &str, data: &mut dyn Read) -> Walk {
        if !self.comparator.matches(path, self.target) {
            return Walk::Continue;
        }

        let mut bytes = Vec::new();
        let mut block = vec![0u8; self.chunk_size];
        loop {
            match data.read(&mut block) {
                Ok(0) => break,
                Ok(n) => bytes.extend_from_slice(&block[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.outcome = Some(Err(CbError::DecodeFailed(format!(
                        "streaming '{path}': {e}"
                    ))));
                    return Walk::Stop;
                }
            }
        }
        self.outcome = Some(Ok(bytes));
        Walk::Stop
    }
}
