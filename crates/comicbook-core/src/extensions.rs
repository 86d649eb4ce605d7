//! File-name extension handling for the archive scan.
//!
//! Provides [`path_suffix`] for pulling the extension out of an entry path
//! and [`ExtensionSet`] for matching it against the decoder's declared
//! formats.

use std::collections::BTreeSet;

/// Returns the suffix after the last `.` in the full entry path.
///
/// The whole path is searched, not just the final component, so a dot in a
/// directory name yields a suffix containing `/` (which then matches no
/// registered extension). Returns `None` when the path has no dot or ends
/// with one.
pub fn path_suffix(path: &str) -> Option<&str> {
    let dot = path.rfind('.')?;
    let suffix = &path[dot + 1..];
    if suffix.is_empty() { None } else { Some(suffix) }
}

/// Set of lowercase file-name extensions accepted by the scan.
///
/// Built once per document open from the image decoder's format table and
/// shared read-only afterwards. Extensions are stored without a leading dot.
/// An empty set is valid and matches nothing, which yields a document with
/// zero pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an extension, lower-casing it (ASCII).
    pub fn insert(&mut self, extension: &str) {
        self.extensions.insert(extension.to_ascii_lowercase());
    }

    /// Tests whether a path suffix names a registered extension.
    ///
    /// The suffix is ASCII lower-cased before the exact membership test, so
    /// `"JPG"` matches a set containing `"jpg"`.
    pub fn matches(&self, suffix: &str) -> bool {
        self.extensions.contains(&suffix.to_ascii_lowercase())
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` when no extension is registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterates the registered extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for extension in iter {
            set.insert(extension);
        }
        set
    }
}

impl FromIterator<String> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for extension in iter {
            set.insert(&extension);
        }
        set
    }
}
