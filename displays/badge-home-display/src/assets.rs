//! Compiled-in asset table
//!
//! Maps asset paths to byte blobs (images) and mono fonts. Firmware fills
//! the table at boot from `include_bytes!` data; tests fill it from
//! hand-built BMP files.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;
use tinybmp::Bmp;

use badge_home_core::traits::{AssetError, AssetSource};

/// Returned when a table has no room for another entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TableFull;

/// Asset table with room for `N` images and `N` fonts
pub struct AssetTable<'a, const N: usize> {
    images: Vec<(&'a str, &'a [u8]), N>,
    fonts: Vec<(&'a str, &'a MonoFont<'a>), N>,
}

impl<'a, const N: usize> Default for AssetTable<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> AssetTable<'a, N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            images: Vec::new(),
            fonts: Vec::new(),
        }
    }

    /// Register BMP data under `path`
    ///
    /// An empty blob is accepted and treated as a missing asset, so build
    /// scripts can always emit a file even when the asset is absent.
    pub fn add_image(&mut self, path: &'a str, data: &'a [u8]) -> Result<(), TableFull> {
        self.images.push((path, data)).map_err(|_| TableFull)
    }

    /// Register a mono font under `path`
    pub fn add_font(&mut self, path: &'a str, font: &'a MonoFont<'a>) -> Result<(), TableFull> {
        self.fonts.push((path, font)).map_err(|_| TableFull)
    }

    /// Number of registered images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of registered fonts
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}

impl<'a, const N: usize> AssetSource for AssetTable<'a, N> {
    type Image = Bmp<'a, Rgb565>;
    type Font = &'a MonoFont<'a>;

    fn load_image(&mut self, path: &str) -> Result<Self::Image, AssetError> {
        let data = self
            .images
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, data)| *data)
            .ok_or(AssetError::NotFound)?;

        if data.is_empty() {
            return Err(AssetError::NotFound);
        }

        Bmp::from_slice(data).map_err(|_| AssetError::Decode)
    }

    fn load_font(&mut self, path: &str) -> Result<Self::Font, AssetError> {
        self.fonts
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, font)| *font)
            .ok_or(AssetError::NotFound)
    }
}
