//! 7z container backend (CB7).

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sevenz_rust::{Password, SevenZReader};

use crate::container::{ContainerFormat, EntryVisitor, Walk};
use crate::error::ArchiveError;

/// 7z archive backend built on the `sevenz-rust` crate.
pub struct SevenZFormat;

fn sevenz_err(err: sevenz_rust::Error) -> ArchiveError {
    ArchiveError::Corrupt(err.to_string())
}

impl ContainerFormat for SevenZFormat {
    type Reader = SevenZReader<File>;
    type Error = ArchiveError;

    fn open(path: &Path) -> Result<Self::Reader, Self::Error> {
        SevenZReader::open(path, Password::empty()).map_err(sevenz_err)
    }

    fn visit_entries(
        reader: &mut Self::Reader,
        visitor: &mut dyn EntryVisitor,
    ) -> Result<(), Self::Error> {
        reader
            .for_each_entries(|entry, data| {
                if entry.is_directory() {
                    return Ok(true);
                }
                let walk = visitor.visit(entry.name(), data);
                match walk {
                    Walk::Continue => {
                        // Entries in a solid block share one decoder stream;
                        // leftover bytes must be consumed before the next
                        // entry can be read.
                        io::copy(data, &mut io::sink())?;
                        Ok(true)
                    }
                    Walk::Stop => Ok(false),
                }
            })
            .map_err(sevenz_err)
    }
}
