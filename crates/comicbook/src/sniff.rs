//! Incremental image-dimension sniffing.
//!
//! During a scan each candidate entry is streamed block by block into a
//! [`DimensionSniffer`]. The sniffer accumulates bytes and reparses the
//! prefix after every block, so dimensions surface as soon as the header
//! material is complete. Callers stop feeding once a dimension is known;
//! for most raster formats that happens within the first block.

use comicbook_core::OpenOptions;
use tracing::trace;

/// Probes a byte stream for image pixel dimensions.
///
/// Feed blocks with [`feed`](Self::feed) until it returns `false` or until
/// [`width`](Self::width) or [`height`](Self::height) turns positive. The
/// sniffer never decodes pixel data; it only parses header material.
#[derive(Debug)]
pub struct DimensionSniffer {
    buf: Vec<u8>,
    max_bytes: Option<usize>,
    size: Option<(u32, u32)>,
}

impl DimensionSniffer {
    /// Creates a sniffer that accepts at most `max_bytes` of input, or
    /// unbounded input when `None`.
    pub fn new(max_bytes: Option<usize>) -> Self {
        Self {
            buf: Vec::new(),
            max_bytes,
            size: None,
        }
    }

    /// Creates a sniffer honoring the `max_sniff_bytes` limit in `options`.
    pub fn with_options(options: &OpenOptions) -> Self {
        Self::new(options.max_sniff_bytes)
    }

    /// Feeds one block of data.
    ///
    /// Returns `false` when the sniffer refuses the block because the input
    /// limit would be exceeded. Once dimensions are known further blocks are
    /// accepted but ignored.
    pub fn feed(&mut self, block: &[u8]) -> bool {
        if self.size.is_some() {
            return true;
        }
        if let Some(max) = self.max_bytes {
            if self.buf.len().saturating_add(block.len()) > max {
                trace!(limit = max, "sniffer input limit reached");
                return false;
            }
        }
        self.buf.extend_from_slice(block);
        if let Ok(size) = imagesize::blob_size(&self.buf) {
            let width = u32::try_from(size.width).unwrap_or(u32::MAX);
            let height = u32::try_from(size.height).unwrap_or(u32::MAX);
            self.size = Some((width, height));
        }
        true
    }

    /// Width in pixels, or 0 while unknown.
    pub fn width(&self) -> u32 {
        self.size.map_or(0, |(w, _)| w)
    }

    /// Height in pixels, or 0 while unknown.
    pub fn height(&self) -> u32 {
        self.size.map_or(0, |(_, h)| h)
    }

    /// Whether both dimensions have been discovered and are positive.
    pub fn complete(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    /// Bytes accepted so far.
    pub fn bytes_fed(&self) -> usize {
        self.buf.len()
    }
}
