//! ZIP container backend (CBZ).

use std::fs::File;
use std::path::Path;

use tracing::warn;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::container::{ContainerFormat, EntryVisitor, Walk};
use crate::error::ArchiveError;

/// ZIP archive backend built on the `zip` crate.
pub struct ZipFormat;

fn zip_err(err: ZipError) -> ArchiveError {
    match err {
        ZipError::Io(e) => ArchiveError::Io(e),
        other => ArchiveError::Corrupt(other.to_string()),
    }
}

impl ContainerFormat for ZipFormat {
    type Reader = ZipArchive<File>;
    type Error = ArchiveError;

    fn open(path: &Path) -> Result<Self::Reader, Self::Error> {
        let file = File::open(path)?;
        ZipArchive::new(file).map_err(zip_err)
    }

    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error> {
        for i in 0..reader.len() {
            let mut entry = reader.by_index(i).map_err(zip_err)?;
            if !entry.is_file() {
                continue;
            }
            let path = match std::str::from_utf8(entry.name_raw()) {
                Ok(p) => p.to_owned(),
                Err(_) => {
                    warn!(index = i, "skipping zip entry with undecodable name");
                    continue;
                }
            };
            match visitor.visit(&path, &mut entry) {
                Walk::Continue => {}
                Walk::Stop => return Ok(()),
            }
        }
        Ok(())
    }
}
