//! Page metadata types.
//!
//! Provides [`PageMeta`], the per-page record produced by the archive scan.

/// Metadata for a single image page discovered inside a comic-book archive.
///
/// Holds the entry's full path within the archive plus the intrinsic pixel
/// dimensions read from the image header. Pixel data is never stored here:
/// pages are re-decoded from the archive each time they are rendered.
///
/// Instances are immutable once created. Within a [`PageIndex`] both
/// dimensions are always positive; entries whose dimensions never resolved
/// during the scan are dropped before the index is built.
///
/// [`PageIndex`]: crate::index::PageIndex
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMeta {
    path: String,
    width: u32,
    height: u32,
}

impl PageMeta {
    /// Creates page metadata for an archive entry.
    pub fn new(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Full entry path inside the archive, directories included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Intrinsic image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_fields() {
        let meta = PageMeta::new("page/001.png", 800, 1200);
        assert_eq!(meta.path(), "page/001.png");
        assert_eq!(meta.width(), 800);
        assert_eq!(meta.height(), 1200);
    }

    #[test]
    fn new_accepts_owned_path() {
        let path = String::from("cover.jpg");
        let meta = PageMeta::new(path, 32, 32);
        assert_eq!(meta.path(), "cover.jpg");
    }

    #[test]
    fn clone_and_eq() {
        let meta1 = PageMeta::new("a.png", 10, 20);
        let meta2 = meta1.clone();
        assert_eq!(meta1, meta2);
        assert_ne!(meta1, PageMeta::new("b.png", 10, 20));
        assert_ne!(meta1, PageMeta::new("a.png", 10, 21));
    }
}
