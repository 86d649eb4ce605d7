//! RAR container backend (CBR), compiled with the `rar` feature.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::container::{ContainerFormat, EntryVisitor, Walk};
use crate::error::ArchiveError;

/// RAR archive backend built on the `unrar` crate.
///
/// The underlying library walks headers with a consuming cursor and hands
/// back whole entries, so each visit decompresses the matched entry fully
/// into memory before the visitor sees it.
pub struct RarFormat;

/// An opened RAR archive, held by path.
///
/// The cursor API consumes the native handle during iteration, so the
/// reader re-opens the archive when entries are walked.
pub struct RarReader {
    path: PathBuf,
}

fn rar_err(err: unrar::error::UnrarError) -> ArchiveError {
    ArchiveError::Corrupt(err.to_string())
}

impl ContainerFormat for RarFormat {
    type Reader = RarReader;
    type Error = ArchiveError;

    fn open(path: &Path) -> Result<Self::Reader, Self::Error> {
        // Open once now so header damage surfaces at open time.
        unrar::Archive::new(path)
            .open_for_processing()
            .map_err(|e| ArchiveError::Open(e.to_string()))?;
        Ok(RarReader {
            path: path.to_path_buf(),
        })
    }

    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error> {
        let mut cursor = unrar::Archive::new(&reader.path)
            .open_for_processing()
            .map_err(rar_err)?;
        while let Some(before_file) = cursor.read_header().map_err(rar_err)? {
            let (is_file, name) = {
                let entry = before_file.entry();
                (
                    entry.is_file(),
                    entry.filename.to_str().map(str::to_owned),
                )
            };
            if !is_file {
                cursor = before_file.skip().map_err(rar_err)?;
                continue;
            }
            let Some(name) = name else {
                warn!("skipping rar entry with undecodable name");
                cursor = before_file.skip().map_err(rar_err)?;
                continue;
            };
            let (data, next) = before_file.read().map_err(rar_err)?;
            cursor = next;
            let mut slice: &[u8] = &data;
            match visitor.visit(&name, &mut slice) {
                Walk::Continue => {}
                Walk::Stop => return Ok(()),
            }
        }
        Ok(())
    }
}

// No archive fixtures here: producing a RAR file needs the proprietary
// packer.
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RarFormat::open(&dir.path().join("absent.cbr")).unwrap_err();
        assert!(matches!(err, ArchiveError::Open(_)));
    }

    #[test]
    fn open_rejects_truncated_signature() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Rar!\x1a\x07\x00").unwrap();
        file.flush().unwrap();
        assert!(RarFormat::open(file.path()).is_err());
    }
}
