//! Content-based container format detection.
//!
//! Identifies the container family from a file's leading bytes, never from
//! its extension. A `.cbz` that is really a 7z archive opens as 7z.

use std::fmt;

/// Number of leading bytes needed for format detection.
///
/// One tar header block; every other signature sits inside the first few
/// bytes.
pub const DETECT_HEADER_LEN: usize = 512;

const ZIP_LOCAL_MAGIC: &[u8] = b"PK\x03\x04";
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";
const SEVENZ_MAGIC: &[u8] = &[0x37, 0x7a, 0xbc, 0xaf, 0x27, 0x1c];
const RAR_MAGIC: &[u8] = b"Rar!\x1a\x07";
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const TAR_MAGIC_OFFSET: usize = 257;
const TAR_CHECKSUM_RANGE: std::ops::Range<usize> = 148..156;

/// Container families recognized by content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// ZIP archive (CBZ).
    Zip,
    /// 7z archive (CB7).
    SevenZ,
    /// RAR archive (CBR).
    Rar,
    /// gzip-compressed tar archive (CBT variant).
    TarGz,
    /// Plain tar archive (CBT).
    Tar,
}

impl ContainerKind {
    /// Returns the short name for this container family.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Zip => "zip",
            ContainerKind::SevenZ => "7z",
            ContainerKind::Rar => "rar",
            ContainerKind::TarGz => "tar.gz",
            ContainerKind::Tar => "tar",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the container family from a file's leading bytes.
///
/// `header` should hold up to [`DETECT_HEADER_LEN`] bytes; a shorter buffer
/// is fine for the signature checks but rules out tar. Returns `None` when
/// no supported container matches.
pub fn detect(header: &[u8]) -> Option<ContainerKind> {
    if header.starts_with(ZIP_LOCAL_MAGIC) || header.starts_with(ZIP_EMPTY_MAGIC) {
        return Some(ContainerKind::Zip);
    }
    if header.starts_with(SEVENZ_MAGIC) {
        return Some(ContainerKind::SevenZ);
    }
    if header.starts_with(RAR_MAGIC) {
        return Some(ContainerKind::Rar);
    }
    if header.starts_with(GZIP_MAGIC) {
        return Some(ContainerKind::TarGz);
    }
    if looks_like_tar(header) {
        return Some(ContainerKind::Tar);
    }
    None
}

/// Tests whether `header` starts with a plausible tar header block.
///
/// Accepts the ustar/POSIX magic, an all-zero block (an empty archive is
/// nothing but end-of-archive markers), and pre-POSIX headers, which carry
/// no magic and are validated through the header checksum instead.
fn looks_like_tar(header: &[u8]) -> bool {
    let Some(block) = header.get(..DETECT_HEADER_LEN) else {
        return false;
    };
    if &block[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + 5] == b"ustar" {
        return true;
    }
    if block.iter().all(|&b| b == 0) {
        return true;
    }
    tar_checksum_valid(block)
}

/// Validates the octal checksum at bytes 148..156 of a tar header block.
///
/// The recorded sum covers the whole block with the checksum field itself
/// read as eight spaces.
fn tar_checksum_valid(block: &[u8]) -> bool {
    let mut recorded: u32 = 0;
    let mut digits = false;
    for &b in &block[TAR_CHECKSUM_RANGE] {
        match b {
            b'0'..=b'7' => {
                recorded = recorded * 8 + u32::from(b - b'0');
                digits = true;
            }
            b' ' | 0 => {
                if digits {
                    break;
                }
            }
            _ => return false,
        }
    }
    if !digits {
        return false;
    }
    let sum: u32 = block
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if TAR_CHECKSUM_RANGE.contains(&i) {
                u32::from(b' ')
            } else {
                u32::from(b)
            }
        })
        .sum();
    sum == recorded
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal valid pre-POSIX tar header block for `name`.
    fn v7_header(name: &str) -> Vec<u8> {
        let mut block = vec![0u8; DETECT_HEADER_LEN];
        block[..name.len()].copy_from_slice(name.as_bytes());
        // mode, uid, gid, size, mtime as octal fields
        block[100..107].copy_from_slice(b"0000644");
        block[124..135].copy_from_slice(b"00000000000");
        let sum: u32 = block
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                if TAR_CHECKSUM_RANGE.contains(&i) {
                    u32::from(b' ')
                } else {
                    u32::from(b)
                }
            })
            .sum();
        let field = format!("{sum:06o}\0 ");
        block[TAR_CHECKSUM_RANGE].copy_from_slice(field.as_bytes());
        block
    }

    // --- Signature detection ---

    #[test]
    fn detects_zip() {
        assert_eq!(detect(b"PK\x03\x04rest"), Some(ContainerKind::Zip));
    }

    #[test]
    fn detects_empty_zip() {
        // An archive with no entries is just the end-of-central-directory
        // record.
        assert_eq!(detect(b"PK\x05\x06\0\0\0\0"), Some(ContainerKind::Zip));
    }

    #[test]
    fn detects_sevenz() {
        assert_eq!(
            detect(&[0x37, 0x7a, 0xbc, 0xaf, 0x27, 0x1c, 0x00, 0x04]),
            Some(ContainerKind::SevenZ)
        );
    }

    #[test]
    fn detects_rar4_and_rar5() {
        assert_eq!(detect(b"Rar!\x1a\x07\x00"), Some(ContainerKind::Rar));
        assert_eq!(detect(b"Rar!\x1a\x07\x01\x00"), Some(ContainerKind::Rar));
    }

    #[test]
    fn detects_gzip_as_tar_gz() {
        assert_eq!(detect(&[0x1f, 0x8b, 0x08, 0x00]), Some(ContainerKind::TarGz));
    }

    // --- Tar detection ---

    #[test]
    fn detects_ustar_magic() {
        let mut block = vec![0u8; DETECT_HEADER_LEN];
        block[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + 6].copy_from_slice(b"ustar\0");
        assert_eq!(detect(&block), Some(ContainerKind::Tar));
    }

    #[test]
    fn detects_gnu_tar_magic() {
        let mut block = vec![0u8; DETECT_HEADER_LEN];
        block[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + 8].copy_from_slice(b"ustar  \0");
        assert_eq!(detect(&block), Some(ContainerKind::Tar));
    }

    #[test]
    fn detects_all_zero_block_as_empty_tar() {
        let block = vec![0u8; DETECT_HEADER_LEN];
        assert_eq!(detect(&block), Some(ContainerKind::Tar));
    }

    #[test]
    fn detects_v7_tar_by_checksum() {
        assert_eq!(detect(&v7_header("old.png")), Some(ContainerKind::Tar));
    }

    #[test]
    fn rejects_v7_header_with_bad_checksum() {
        let mut block = v7_header("old.png");
        block[0] ^= 0xff;
        assert_eq!(detect(&block), None);
    }

    // --- Rejection ---

    #[test]
    fn rejects_short_input() {
        assert_eq!(detect(b""), None);
        assert_eq!(detect(b"PK"), None);
        assert_eq!(detect(&[0u8; 100]), None);
    }

    #[test]
    fn rejects_plain_text() {
        let mut data = b"this file is not an archive at all".to_vec();
        data.resize(DETECT_HEADER_LEN, b' ');
        assert_eq!(detect(&data), None);
    }

    #[test]
    fn rejects_png_bytes() {
        let mut data = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
        data.resize(DETECT_HEADER_LEN, 0);
        assert_eq!(detect(&data), None);
    }

    // --- Display ---

    #[test]
    fn kind_display_names() {
        assert_eq!(ContainerKind::Zip.to_string(), "zip");
        assert_eq!(ContainerKind::SevenZ.to_string(), "7z");
        assert_eq!(ContainerKind::Rar.to_string(), "rar");
        assert_eq!(ContainerKind::TarGz.to_string(), "tar.gz");
        assert_eq!(ContainerKind::Tar.to_string(), "tar");
    }
}
