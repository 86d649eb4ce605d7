//! comicbook-core: Container-independent data types and algorithms.
//!
//! This crate provides the foundational types (CbError, PageMeta, PageIndex,
//! ExtensionSet, Pixmap) and the locale-aware path comparator used by
//! comicbook-rs. It knows nothing about archive containers or image codecs;
//! its only external dependency is the collation library behind
//! [`PathComparator`].

pub mod compare;
pub mod error;
pub mod extensions;
pub mod index;
pub mod meta;
pub mod options;
pub mod pixmap;

pub use compare::PathComparator;
pub use error::CbError;
pub use extensions::{ExtensionSet, path_suffix};
pub use index::PageIndex;
pub use meta::PageMeta;
pub use options::{DEFAULT_CHUNK_SIZE, OpenOptions};
pub use pixmap::{Pixmap, RenderSurface};
