//! Drawing surface trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// Communication error with the display
    Communication,
    /// Drawing outside the surface was rejected
    OutOfBounds,
    /// Surface not initialized
    NotInitialized,
}

/// 24-bit brush color
///
/// Stored as an `[r, g, b]` triple in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    pub const fn r(&self) -> u8 {
        self.0
    }

    pub const fn g(&self) -> u8 {
        self.1
    }

    pub const fn b(&self) -> u8 {
        self.2
    }
}

/// Antialiasing mode for text and shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Antialias {
    Off,
    /// 2x supersampling
    #[default]
    X2,
    /// 4x supersampling
    X4,
}

/// Drawing surface provided by the host
///
/// The surface keeps a current brush color and font; `text`, `clear` and
/// `blit` use whatever was set last. Coordinates are pixels with (0, 0) in
/// the top-left corner, and text is positioned by its top-left corner.
pub trait Canvas {
    /// Decoded image handle
    type Image;
    /// Loaded font handle
    type Font;

    /// Get the surface size in pixels as (width, height)
    fn size(&self) -> (u32, u32);

    /// Set the brush used by subsequent drawing operations
    fn set_brush(&mut self, color: Rgb);

    /// Fill the whole surface with the current brush
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Draw text with the current brush and font
    fn text(&mut self, text: &str, x: i32, y: i32) -> Result<(), CanvasError>;

    /// Width in pixels `text` would occupy with the current font
    fn measure_text(&self, text: &str) -> u32;

    /// Copy an image onto the surface with its top-left corner at (x, y)
    fn blit(&mut self, image: &Self::Image, x: i32, y: i32) -> Result<(), CanvasError>;

    /// Get image dimensions as (width, height)
    fn image_size(&self, image: &Self::Image) -> (u32, u32);

    /// Replace the current font
    fn set_font(&mut self, font: &Self::Font);

    /// Set the antialiasing mode
    fn set_antialias(&mut self, mode: Antialias);

    /// Get the surface width
    fn width(&self) -> u32 {
        self.size().0
    }
}
