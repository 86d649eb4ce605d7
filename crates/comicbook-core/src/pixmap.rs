//! Decoded pixel buffers and the paint boundary.
//!
//! Provides [`Pixmap`], the RGBA pixel buffer produced by decoding a page,
//! and [`RenderSurface`], the trait the host's graphics backend implements
//! to receive it.

use crate::error::CbError;

/// A decoded page image: tightly packed 8-bit RGBA, row-major.
///
/// The stride is always `4 * width` bytes; rows are not padded. The caller
/// that requested the decode owns the buffer, and nothing else retains a
/// reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Wraps a tightly packed RGBA buffer.
    ///
    /// Fails with `InvalidArguments` when `data` is not exactly
    /// `4 * width * height` bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CbError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                CbError::InvalidArguments(format!("pixmap dimensions {width}x{height} overflow"))
            })?;
        if data.len() != expected {
            return Err(CbError::InvalidArguments(format!(
                "pixmap buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        4 * self.width as usize
    }

    /// The pixel bytes, row-major RGBA.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the pixmap, returning the pixel bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Paint target for page rendering.
///
/// Implementations draw the pixmap with its top-left corner at the surface
/// origin. Scaling, placement within a larger canvas, and color management
/// are the host's business.
pub trait RenderSurface {
    /// Paints `pixmap` at origin (0,0).
    fn paint(&mut self, pixmap: &Pixmap) -> Result<(), CbError>;
}
