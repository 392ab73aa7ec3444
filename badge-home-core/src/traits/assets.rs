//! Asset loading trait

/// Errors that can occur while loading an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// Nothing stored at the requested path
    NotFound,
    /// Data found but could not be decoded
    Decode,
    /// Format not supported by this host
    Unsupported,
}

/// Source of decoded images and fonts, addressed by path
///
/// Implementations decide where the bytes live (flash, filesystem,
/// compiled-in blobs). Loading is expected to happen once at startup,
/// so implementations may be slow.
pub trait AssetSource {
    /// Decoded image handle
    type Image;
    /// Loaded font handle
    type Font;

    /// Load and decode the image stored at `path`
    fn load_image(&mut self, path: &str) -> Result<Self::Image, AssetError>;

    /// Load the font stored at `path`
    fn load_font(&mut self, path: &str) -> Result<Self::Font, AssetError>;
}
