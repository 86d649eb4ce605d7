//! Locale-aware path comparison.
//!
//! Provides [`PathComparator`], the Unicode case-insensitive collating
//! comparator that defines the page order of a document. The same comparator
//! semantics are used twice: once to sort scanned entries into the page
//! index, and again to re-locate a page's entry inside the archive at render
//! time. Using one comparator for both guarantees that every indexed entry
//! can be found again.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

use crate::error::CbError;

/// Unicode case-insensitive, locale-aware path comparator.
///
/// Collates at secondary strength: case differences compare equal
/// (`"A.JPG"` and `"a.jpg"` are ties) while base letters and accents
/// collate normally. Paths are compared as whole strings; there is no
/// numeric or component-wise treatment.
pub struct PathComparator {
    collator: CollatorBorrowed<'static>,
}

impl PathComparator {
    /// Creates a comparator backed by the root-locale collation tables.
    ///
    /// Fails only when the compiled collation data is unavailable.
    pub fn new() -> Result<Self, CbError> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);
        let collator = Collator::try_new(Default::default(), options)
            .map_err(|e| CbError::OpenFailed(format!("collation data unavailable: {e}")))?;
        Ok(Self { collator })
    }

    /// Compares two entry paths, ignoring case.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Returns `true` when two entry paths are equal under the fold.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl fmt::Debug for PathComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathComparator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator() -> PathComparator {
        PathComparator::new().unwrap()
    }

    // --- Fold behavior ---

    #[test]
    fn case_difference_is_a_tie() {
        let cmp = comparator();
        assert_eq!(cmp.compare("A.JPG", "a.jpg"), Ordering::Equal);
        assert_eq!(cmp.compare("PAGE/B.PNG", "page/b.png"), Ordering::Equal);
        assert!(cmp.matches("Cover.Png", "cover.png"));
    }

    #[test]
    fn base_letters_still_order() {
        let cmp = comparator();
        assert_eq!(cmp.compare("a.png", "b.png"), Ordering::Less);
        assert_eq!(cmp.compare("page/A.JPG", "page/b.png"), Ordering::Less);
        assert_eq!(cmp.compare("z.png", "a.png"), Ordering::Greater);
    }

    #[test]
    fn accents_are_not_folded() {
        let cmp = comparator();
        assert_ne!(cmp.compare("e.png", "\u{e9}.png"), Ordering::Equal);
        assert!(!cmp.matches("resume.png", "resum\u{e9}.png"));
    }

    #[test]
    fn identical_paths_match() {
        let cmp = comparator();
        assert!(cmp.matches("page/001.png", "page/001.png"));
        assert_eq!(cmp.compare("", ""), Ordering::Equal);
    }

    // --- Sorting ---

    #[test]
    fn sort_orders_mixed_case_paths() {
        let cmp = comparator();
        let mut paths = vec!["page/b.png", "page/A.JPG"];
        paths.sort_by(|a, b| cmp.compare(a, b));
        assert_eq!(paths, vec!["page/A.JPG", "page/b.png"]);
    }

    #[test]
    fn sort_keeps_equal_fold_paths() {
        let cmp = comparator();
        let mut paths = vec!["DUP.png", "a.png", "dup.PNG"];
        paths.sort_by(|a, b| cmp.compare(a, b));
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], "a.png");
        assert!(paths.contains(&"DUP.png"));
        assert!(paths.contains(&"dup.PNG"));
    }
}
