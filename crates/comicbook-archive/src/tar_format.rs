//! Tar container backends (CBT), plain and gzip-compressed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::warn;

use crate::container::{ContainerFormat, EntryVisitor, Walk};
use crate::error::ArchiveError;

/// Plain tar archive backend built on the `tar` crate.
pub struct TarFormat;

/// gzip-compressed tar backend: a gzip filter in front of [`TarFormat`]'s
/// reading.
pub struct TarGzFormat;

impl ContainerFormat for TarFormat {
    type Reader = tar::Archive<File>;
    type Error = ArchiveError;

    fn open(path: &Path) -> Result<Self::Reader, Self::Error> {
        Ok(tar::Archive::new(File::open(path)?))
    }

    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error> {
        visit_tar(reader, visitor)
    }
}

impl ContainerFormat for TarGzFormat {
    type Reader = tar::Archive<GzDecoder<File>>;
    type Error = ArchiveError;

    fn open(path: &Path) -> Result<Self::Reader, Self::Error> {
        Ok(tar::Archive::new(GzDecoder::new(File::open(path)?)))
    }

    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error> {
        visit_tar(reader, visitor)
    }
}

/// Walks a tar stream, regular files only.
///
/// The tar reader skips any bytes the visitor leaves unread when it
/// advances to the next header, so partial reads are safe on both plain
/// and gzip-filtered input.
fn visit_tar<R: Read>(
    archive: &mut tar::Archive<R>,
    visitor: &mut dyn EntryVisitor,
) -> Result<(), ArchiveError> {
    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let path = {
            let bytes = entry.path_bytes();
            match std::str::from_utf8(&bytes) {
                Ok(p) => p.to_owned(),
                Err(_) => {
                    warn!("skipping tar entry with undecodable name");
                    continue;
                }
            }
        };
        match visitor.visit(&path, &mut entry) {
            Walk::Continue => {}
            Walk::Stop => return Ok(()),
        }
    }
    Ok(())
}
