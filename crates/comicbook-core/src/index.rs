//! The ordered page index.
//!
//! Provides [`PageIndex`], the sorted sequence of [`PageMeta`] records that
//! defines a document's page order.

use crate::compare::PathComparator;
use crate::error::CbError;
use crate::meta::PageMeta;

/// Ordered collection of pages discovered in a comic-book archive.
///
/// Built exactly once when a document is opened and read-only afterwards.
/// Pages are ordered by entry path under the locale-aware case-insensitive
/// comparator; entries that compare equal under the fold keep their scan
/// order relative to each other (stable sort), though no particular tie
/// order is promised to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndex {
    pages: Vec<PageMeta>,
}

impl PageIndex {
    /// Builds an index from scan results, sorting by path.
    pub fn from_unsorted(mut pages: Vec<PageMeta>, comparator: &PathComparator) -> Self {
        pages.sort_by(|a, b| comparator.compare(a.path(), b.path()));
        Self { pages }
    }

    /// Number of pages in the index.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` when the index holds no pages.
    ///
    /// An empty index is a valid state: an archive with no decodable image
    /// entries opens as a zero-page document.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the page at `index`, or `OutOfRange` past the end.
    pub fn get(&self, index: usize) -> Result<&PageMeta, CbError> {
        self.pages.get(index).ok_or(CbError::OutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    /// Iterates pages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageMeta> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a PageIndex {
    type Item = &'a PageMeta;
    type IntoIter = std::slice::Iter<'a, PageMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
