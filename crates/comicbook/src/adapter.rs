//! Host-facing document lifecycle adapter.
//!
//! Document viewers drive plugins through a fixed call sequence: open the
//! document, initialize pages to learn their dimensions, render initialized
//! pages to a surface, clear pages, free the document. [`DocumentAdapter`]
//! captures that sequence as a trait and [`CbAdapter`] implements it on top
//! of [`Document`]. The core scanning and decoding logic does not depend on
//! this layer.

use std::path::Path;

use comicbook_core::{CbError, OpenOptions, RenderSurface};
use tracing::debug;

use crate::document::Document;

/// MIME types a comic-book document type registers for: the four comic
/// flavors plus their underlying container types.
pub const MIME_TYPES: [&str; 8] = [
    "application/x-cbr",
    "application/x-rar",
    "application/x-cbz",
    "application/zip",
    "application/x-cb7",
    "application/x-7z-compressed",
    "application/x-cbt",
    "application/x-tar",
];

/// Per-page state between `page_init` and `page_clear`.
///
/// Holds a copy of the page's entry path. Dimensions are not kept here;
/// they are handed to the host once at init time. Pixels are never kept
/// anywhere; every render decodes anew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandle {
    entry_path: String,
}

impl PageHandle {
    /// Archive entry path this handle refers to.
    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }
}

/// Result of initializing a page: the handle plus its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInit {
    /// State the host keeps until `page_clear`.
    pub handle: PageHandle,
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
}

/// The open/init/render/clear/free call surface a host viewer drives.
///
/// # Usage
///
/// ```ignore
/// let adapter = CbAdapter::new();
/// let doc = adapter.open(Path::new("issue-01.cbz"))?;
/// let init = adapter.page_init(&doc, 0)?;
/// adapter.page_render(&doc, &init.handle, &mut surface, false)?;
/// adapter.page_clear(init.handle)?;
/// adapter.free(doc)?;
/// ```
pub trait DocumentAdapter {
    /// Opens the document and builds its page index.
    fn open(&self, path: &Path) -> Result<Document, CbError>;

    /// Releases the document and everything it owns.
    fn free(&self, document: Document) -> Result<(), CbError>;

    /// Initializes the page at `index`, yielding its handle and dimensions.
    ///
    /// Fails with [`CbError::NotFound`] when no page exists at that
    /// position.
    fn page_init(&self, document: &Document, index: usize) -> Result<PageInit, CbError>;

    /// Releases per-page state.
    fn page_clear(&self, handle: PageHandle) -> Result<(), CbError>;

    /// Decodes the page behind `handle` and paints it onto `surface` at the
    /// origin. The `printing` flag is accepted and ignored; print renders
    /// are identical to screen renders.
    fn page_render(
        &self,
        document: &Document,
        handle: &PageHandle,
        surface: &mut dyn RenderSurface,
        printing: bool,
    ) -> Result<(), CbError>;

    /// MIME types to register with the host.
    fn mime_types(&self) -> &'static [&'static str] {
        &MIME_TYPES
    }
}

/// The standard adapter: scan on open, re-decode on every render.
#[derive(Debug, Clone, Default)]
pub struct CbAdapter {
    options: OpenOptions,
}

impl CbAdapter {
    /// Creates an adapter with default scan options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that opens documents with `options`.
    pub fn with_options(options: OpenOptions) -> Self {
        Self { options }
    }
}

impl DocumentAdapter for CbAdapter {
    fn open(&self, path: &Path) -> Result<Document, CbError> {
        Document::open(path, Some(self.options.clone()))
    }

    fn free(&self, document: Document) -> Result<(), CbError> {
        debug!(path = %document.path().display(), "freeing document");
        drop(document);
        Ok(())
    }

    fn page_init(&self, document: &Document, index: usize) -> Result<PageInit, CbError> {
        let meta = document
            .page(index)
            .map_err(|_| CbError::NotFound(format!("no page at position {index}")))?;
        Ok(PageInit {
            handle: PageHandle {
                entry_path: meta.path().to_string(),
            },
            width: meta.width(),
            height: meta.height(),
        })
    }

    fn page_clear(&self, handle: PageHandle) -> Result<(), CbError> {
        drop(handle);
        Ok(())
    }

    fn page_render(
        &self,
        document: &Document,
        handle: &PageHandle,
        surface: &mut dyn RenderSurface,
        printing: bool,
    ) -> Result<(), CbError> {
        let _ = printing;
        let pixmap = document.decode_entry(handle.entry_path())?;
        surface.paint(&pixmap)
    }
}
