//! comicbook: comic-book archives presented as ordered image pages.
//!
//! A comic book on disk is a plain archive (CBZ is ZIP, CBT is TAR, CB7 is
//! 7z, CBR is RAR) whose image entries are the pages. This crate opens such
//! an archive, indexes the image entries in locale-aware case-insensitive
//! path order, and decodes individual pages to RGBA pixel buffers on
//! demand.
//!
//! [`Document`] is the main entry point; [`adapter`] adds the
//! open/init/render/clear lifecycle a host viewer drives.

pub mod adapter;
pub mod document;
pub mod materialize;
pub mod registry;
pub mod scan;
pub mod sniff;

pub use adapter::{CbAdapter, DocumentAdapter, MIME_TYPES, PageHandle, PageInit};
pub use document::{Document, PagesIter};
pub use materialize::{decode_page, decode_pixmap};
pub use registry::supported_extensions;
pub use scan::scan;
pub use sniff::DimensionSniffer;

pub use comicbook_archive;
pub use comicbook_core;

pub use comicbook_core::{
    CbError, ExtensionSet, OpenOptions, PageIndex, PageMeta, PathComparator, Pixmap,
    RenderSurface,
};
