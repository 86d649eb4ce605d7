//! Extension registry derived from the image decoder's format table.
//!
//! The scanner admits an archive entry only when its file-name suffix is
//! registered here. Building the set from [`image::ImageFormat`] keeps the
//! registry in lockstep with the codecs that are actually compiled in: a
//! format the decoder cannot read never contributes an extension.

use comicbook_core::ExtensionSet;
use image::ImageFormat;

/// Collects the file-name extensions of every image format the decoder can
/// read in this build.
///
/// Extensions come back already lowercased and without a leading dot, e.g.
/// `jpg`, `jpeg`, `png`, `webp`.
pub fn supported_extensions() -> ExtensionSet {
    ImageFormat::all()
        .filter(ImageFormat::reading_enabled)
        .flat_map(ImageFormat::extensions_str)
        .copied()
        .collect()
}
