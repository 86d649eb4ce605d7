use std::io::{self, IsTerminal, Write};
use std::path::Path;

use comicbook::Document;

use crate::page_range::parse_page_range;

/// Open a comic-book archive with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file does not
/// exist or cannot be opened as a supported container.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Document::open(file, None).map_err(|e| {
        eprintln!("Error: failed to open archive: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page positions.
///
/// `None` means all pages.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Escape a string for CSV output.
///
/// Fields containing commas, double quotes, or newlines are wrapped in
/// double quotes with internal quotes doubled.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Prints "Processing page N/M..." to stderr, but only when stderr is a
/// terminal.
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` pages.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for page `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty {
            eprint!("\rProcessing page {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
