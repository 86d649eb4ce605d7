//! Integration tests for the `extract` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("comicbook").unwrap()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([64, 128, 192, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn comic_fixture() -> NamedTempFile {
    let file = tempfile::Builder::new().suffix(".cbz").tempfile().unwrap();
    let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
    for (name, data) in [
        ("pages/002.png", png_bytes(40, 60)),
        ("pages/001.png", png_bytes(20, 30)),
    ] {
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(&data).unwrap();
    }
    writer.finish().unwrap();
    file
}

#[test]
fn extract_writes_all_pages_as_png() {
    let fixture = comic_fixture();
    let out_dir = tempfile::tempdir().unwrap();

    cmd()
        .args([
            "extract",
            fixture.path().to_str().unwrap(),
            "--output-dir",
            out_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-001.png"))
        .stdout(predicate::str::contains("page-002.png"));

    let first = out_dir.path().join("page-001.png");
    let second = out_dir.path().join("page-002.png");
    assert!(first.exists());
    assert!(second.exists());

    // Page 1 sorts as pages/001.png, so its pixels are the 20x30 image.
    assert_eq!(image::image_dimensions(&first).unwrap(), (20, 30));
    assert_eq!(image::image_dimensions(&second).unwrap(), (40, 60));
}

#[test]
fn extract_respects_page_selection() {
    let fixture = comic_fixture();
    let out_dir = tempfile::tempdir().unwrap();

    cmd()
        .args([
            "extract",
            fixture.path().to_str().unwrap(),
            "--pages",
            "2",
            "--output-dir",
            out_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(!out_dir.path().join("page-001.png").exists());
    assert!(out_dir.path().join("page-002.png").exists());
}

#[test]
fn extract_creates_output_directory() {
    let fixture = comic_fixture();
    let parent = tempfile::tempdir().unwrap();
    let nested = parent.path().join("deep").join("out");

    cmd()
        .args([
            "extract",
            fixture.path().to_str().unwrap(),
            "--output-dir",
            nested.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(nested.join("page-001.png").exists());
}

#[test]
fn extract_missing_file_fails() {
    let out_dir = tempfile::tempdir().unwrap();
    cmd()
        .args([
            "extract",
            "/no/such/archive.cbz",
            "--output-dir",
            out_dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn extract_invalid_range_fails() {
    let fixture = comic_fixture();
    let out_dir = tempfile::tempdir().unwrap();
    cmd()
        .args([
            "extract",
            fixture.path().to_str().unwrap(),
            "--pages",
            "0",
            "--output-dir",
            out_dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pages start at 1"));
}
