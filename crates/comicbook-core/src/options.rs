//! Options controlling archive access.

use crate::error::CbError;

/// Default streaming block size in bytes for reading entry data.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Options for opening a comic-book document.
///
/// Provides sensible defaults for all settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenOptions {
    /// Block size used when streaming entry bytes out of the archive
    /// (default: 8192). Must be non-zero.
    pub chunk_size: usize,
    /// Maximum bytes fed to the dimension sniffer per entry during the scan
    /// (default: None = read until the header resolves or the entry ends).
    ///
    /// Entries whose dimensions are still unknown when the cap is reached
    /// are dropped from the index, the same as any other undecodable entry.
    pub max_sniff_bytes: Option<usize>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_sniff_bytes: None,
        }
    }
}

impl OpenOptions {
    /// Checks the options for structural validity.
    pub fn validate(&self) -> Result<(), CbError> {
        if self.chunk_size == 0 {
            return Err(CbError::InvalidArguments(
                "chunk_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
