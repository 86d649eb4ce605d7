//! Runtime container dispatch.
//!
//! Provides [`ArchiveReader`], which sniffs a file's content to pick the
//! container backend and then forwards entry iteration to it. Every open
//! reads the archive fresh; nothing is shared or cached between readers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::container::{ContainerFormat, EntryVisitor};
use crate::detect::{ContainerKind, DETECT_HEADER_LEN, detect};
use crate::error::ArchiveError;
use crate::sevenz_format::SevenZFormat;
use crate::tar_format::{TarFormat, TarGzFormat};
use crate::zip_format::ZipFormat;

#[cfg(feature = "rar")]
use crate::rar_format::RarFormat;

/// An open comic-book archive with its container format resolved.
///
/// The format is chosen by content, never by file extension: a `.cbz` whose
/// bytes are a 7z archive is read as 7z.
pub struct ArchiveReader {
    kind: ContainerKind,
    backend: Backend,
}

impl std::fmt::Debug for ArchiveReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Backend readers (tar, 7z) do not implement Debug themselves.
        f.debug_struct("ArchiveReader")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

enum Backend {
    Zip(<ZipFormat as ContainerFormat>::Reader),
    SevenZ(<SevenZFormat as ContainerFormat>::Reader),
    Tar(<TarFormat as ContainerFormat>::Reader),
    TarGz(<TarGzFormat as ContainerFormat>::Reader),
    #[cfg(feature = "rar")]
    Rar(<RarFormat as ContainerFormat>::Reader),
}

impl ArchiveReader {
    /// Opens the archive at `path`, detecting its container format.
    ///
    /// # Errors
    ///
    /// `Open` when the file cannot be read or no supported container
    /// signature matches; `Unsupported` when the signature names a format
    /// this build cannot read.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let header = read_header(path)?;
        let kind = detect(&header).ok_or_else(|| {
            ArchiveError::Open(format!(
                "{}: no supported container format",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), kind = %kind, "detected container format");
        let backend = match kind {
            ContainerKind::Zip => Backend::Zip(ZipFormat::open(path)?),
            ContainerKind::SevenZ => Backend::SevenZ(SevenZFormat::open(path)?),
            ContainerKind::Tar => Backend::Tar(TarFormat::open(path)?),
            ContainerKind::TarGz => Backend::TarGz(TarGzFormat::open(path)?),
            #[cfg(feature = "rar")]
            ContainerKind::Rar => Backend::Rar(RarFormat::open(path)?),
            #[cfg(not(feature = "rar"))]
            ContainerKind::Rar => {
                return Err(ArchiveError::Unsupported(format!(
                    "{}: RAR support not compiled in (enable the `rar` feature)",
                    path.display()
                )));
            }
        };
        Ok(Self { kind, backend })
    }

    /// The detected container family.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Walks regular-file entries in container order.
    pub fn visit_entries(&mut self, visitor: &mut dyn EntryVisitor) -> Result<(), ArchiveError> {
        match &mut self.backend {
            Backend::Zip(reader) => ZipFormat::visit_entries(reader, visitor),
            Backend::SevenZ(reader) => SevenZFormat::visit_entries(reader, visitor),
            Backend::Tar(reader) => TarFormat::visit_entries(reader, visitor),
            Backend::TarGz(reader) => TarGzFormat::visit_entries(reader, visitor),
            #[cfg(feature = "rar")]
            Backend::Rar(reader) => RarFormat::visit_entries(reader, visitor),
        }
    }
}

fn read_header(path: &Path) -> Result<Vec<u8>, ArchiveError> {
    let file = File::open(path)
        .map_err(|e| ArchiveError::Open(format!("{}: {e}", path.display())))?;
    let mut header = Vec::with_capacity(DETECT_HEADER_LEN);
    file.take(DETECT_HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(|e| ArchiveError::Open(format!("{}: {e}", path.display())))?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Walk;
    use std::io::Write;

    fn zip_fixture(suffix: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("one.png", options).unwrap();
        writer.write_all(b"fake pixels").unwrap();
        writer.finish().unwrap();
        file
    }

    struct Names(Vec<String>);

    impl EntryVisitor for Names {
        fn visit(&mut self, path: &str, _data: &mut dyn Read) -> Walk {
            self.0.push(path.to_string());
            Walk::Continue
        }
    }

    // --- Detection through open ---

    #[test]
    fn opens_zip_by_content() {
        let fixture = zip_fixture(".cbz");
        let reader = ArchiveReader::open(fixture.path()).unwrap();
        assert_eq!(reader.kind(), ContainerKind::Zip);
    }

    #[test]
    fn extension_does_not_matter() {
        // ZIP bytes behind a .cbr name still open as zip.
        let fixture = zip_fixture(".cbr");
        let reader = ArchiveReader::open(fixture.path()).unwrap();
        assert_eq!(reader.kind(), ContainerKind::Zip);
    }

    #[test]
    fn opens_tar_by_content() {
        let mut builder = tar::Builder::new(Vec::new());
        let mut header = tar::Header::new_ustar();
        header.set_size(3);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, "x.png", b"abc".as_slice())
            .unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&builder.into_inner().unwrap()).unwrap();
        file.flush().unwrap();

        let mut reader = ArchiveReader::open(file.path()).unwrap();
        assert_eq!(reader.kind(), ContainerKind::Tar);
        let mut names = Names(Vec::new());
        reader.visit_entries(&mut names).unwrap();
        assert_eq!(names.0, vec!["x.png"]);
    }

    #[test]
    fn opens_tar_gz_by_content() {
        let mut builder = tar::Builder::new(Vec::new());
        let mut header = tar::Header::new_ustar();
        header.set_size(1);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, "y.png", b"z".as_slice())
            .unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&builder.into_inner().unwrap()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();
        file.flush().unwrap();

        let mut reader = ArchiveReader::open(file.path()).unwrap();
        assert_eq!(reader.kind(), ContainerKind::TarGz);
        let mut names = Names(Vec::new());
        reader.visit_entries(&mut names).unwrap();
        assert_eq!(names.0, vec!["y.png"]);
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArchiveReader::open(&dir.path().join("absent.cbz")).unwrap_err();
        assert!(matches!(err, ArchiveError::Open(_)));
    }

    #[test]
    fn rejects_unrecognized_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is an ordinary text file, not an archive")
            .unwrap();
        file.flush().unwrap();
        let err = ArchiveReader::open(file.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::Open(_)));
        assert!(err.to_string().contains("no supported container format"));
    }

    #[cfg(not(feature = "rar"))]
    #[test]
    fn rar_signature_reports_unsupported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Rar!\x1a\x07\x00rest-of-archive").unwrap();
        file.flush().unwrap();
        let err = ArchiveReader::open(file.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::Unsupported(_)));
        assert!(err.to_string().contains("rar"));
    }
}
