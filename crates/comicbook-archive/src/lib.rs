//! comicbook-archive: Container reading for comicbook-rs.
//!
//! This crate detects an archive's container family from its content and
//! walks its entries behind a pluggable [`ContainerFormat`] backend, one per
//! family: ZIP (CBZ), tar and gzip-compressed tar (CBT), 7z (CB7), and,
//! behind the `rar` feature, RAR (CBR). It depends on comicbook-core for
//! shared data types and knows nothing about images or pages.

pub mod container;
pub mod detect;
pub mod error;
pub mod reader;
pub mod sevenz_format;
pub mod tar_format;
pub mod zip_format;

#[cfg(feature = "rar")]
pub mod rar_format;

pub use comicbook_core;
pub use container::{ContainerFormat, EntryVisitor, Walk};
pub use detect::{ContainerKind, DETECT_HEADER_LEN, detect};
pub use error::ArchiveError;
pub use reader::ArchiveReader;
