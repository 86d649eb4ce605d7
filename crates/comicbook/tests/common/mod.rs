//! Shared fixture builders for integration tests.
//!
//! Each builder produces a real archive file on disk holding the given
//! `(entry name, bytes)` pairs, one per supported container format.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Encodes a solid-color PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, image::ImageFormat::Png)
}

/// Encodes a solid-color JPEG.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, image::ImageFormat::Jpeg)
}

fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([120, 140, 160, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, format)
        .unwrap();
    out.into_inner()
}

/// Writes a ZIP archive (the CBZ flavor).
pub fn zip_archive(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let file = tempfile::Builder::new().suffix(".cbz").tempfile().unwrap();
    let mut writer = ZipWriter::new(file.reopen().unwrap());
    for (name, data) in entries {
        writer
            .start_file(name.to_string(), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
    file
}

/// Serializes entries as an uncompressed USTAR stream.
pub fn tar_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, data) in entries {
        let mut header = tar::Header::new_ustar();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.into_inner().unwrap()
}

/// Writes a TAR archive (the CBT flavor).
pub fn tar_archive(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".cbt").tempfile().unwrap();
    file.write_all(&tar_bytes(entries)).unwrap();
    file.flush().unwrap();
    file
}

/// Writes a gzip-compressed TAR archive.
pub fn targz_archive(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let mut encoder =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&tar_bytes(entries)).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut file = tempfile::Builder::new().suffix(".tgz").tempfile().unwrap();
    file.write_all(&compressed).unwrap();
    file.flush().unwrap();
    file
}

/// Writes a 7z archive (the CB7 flavor).
pub fn sevenz_archive(entries: &[(&str, &[u8])]) -> NamedTempFile {
    let staging = tempfile::tempdir().unwrap();
    let file = tempfile::Builder::new().suffix(".cb7").tempfile().unwrap();
    let mut writer = sevenz_rust::SevenZWriter::create(file.path()).unwrap();
    for (i, (name, data)) in entries.iter().enumerate() {
        let src = staging.path().join(format!("entry-{i}"));
        std::fs::write(&src, data).unwrap();
        writer
            .push_archive_entry(
                sevenz_rust::SevenZArchiveEntry::from_path(&src, name.to_string()),
                Some(File::open(&src).unwrap()),
            )
            .unwrap();
    }
    writer.finish().unwrap();
    file
}

/// The reference comic: two images under `page/` plus a text file.
///
/// Expected index: `page/A.JPG` (32x32) first, `page/b.png` (64x96) second.
pub fn comic_entries() -> Vec<(String, Vec<u8>)> {
    vec![
        ("page/b.png".to_string(), png_bytes(64, 96)),
        ("page/A.JPG".to_string(), jpeg_bytes(32, 32)),
        ("readme.txt".to_string(), b"not a page".to_vec()),
    ]
}

/// Borrows `comic_entries`-style data in the shape the builders take.
pub fn as_slices(entries: &[(String, Vec<u8>)]) -> Vec<(&str, &[u8])> {
    entries
        .iter()
        .map(|(name, data)| (name.as_str(), data.as_slice()))
        .collect()
}
