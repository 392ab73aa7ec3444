//! Canvas backend over embedded-graphics
//!
//! Implements the home screen `Canvas` trait for any RGB565 draw target.

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use tinybmp::Bmp;

use badge_home_core::traits::{Antialias, Canvas, CanvasError, Rgb};

/// Font used until a loaded font replaces it
pub const DEFAULT_FONT: &MonoFont<'static> = &FONT_6X10;

/// Canvas drawing into an embedded-graphics target
///
/// Text is placed by its top-left corner (`Baseline::Top`). Mono fonts and
/// BMP images have no sub-pixel coverage, so the antialias mode is only
/// recorded for callers that want to honour it.
pub struct GraphicsCanvas<'a, D> {
    target: D,
    brush: Rgb565,
    font: &'a MonoFont<'a>,
    antialias: Antialias,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap a draw target, starting with a white brush and the default font
    pub fn new(target: D) -> Self {
        Self {
            target,
            brush: Rgb565::WHITE,
            font: DEFAULT_FONT,
            antialias: Antialias::Off,
        }
    }

    /// Get the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Get the underlying draw target mutably (e.g. to flush it)
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwrap the draw target
    pub fn into_target(self) -> D {
        self.target
    }

    /// Get the current brush
    pub fn brush(&self) -> Rgb565 {
        self.brush
    }

    /// Get the current antialias mode
    pub fn antialias(&self) -> Antialias {
        self.antialias
    }

    fn text_style(&self) -> MonoTextStyle<'a, Rgb565> {
        MonoTextStyle::new(self.font, self.brush)
    }
}

/// Convert a 24-bit brush color to RGB565
pub fn to_rgb565(color: Rgb) -> Rgb565 {
    Rgb888::new(color.r(), color.g(), color.b()).into()
}

impl<'a, D> Canvas for GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    type Image = Bmp<'a, Rgb565>;
    type Font = &'a MonoFont<'a>;

    fn size(&self) -> (u32, u32) {
        let size = self.target.size();
        (size.width, size.height)
    }

    fn set_brush(&mut self, color: Rgb) {
        self.brush = to_rgb565(color);
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        self.target
            .clear(self.brush)
            .map_err(|_| CanvasError::Communication)
    }

    fn text(&mut self, text: &str, x: i32, y: i32) -> Result<(), CanvasError> {
        let style = self.text_style();
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| CanvasError::Communication)
    }

    fn measure_text(&self, text: &str) -> u32 {
        let metrics = self
            .text_style()
            .measure_string(text, Point::zero(), Baseline::Top);
        metrics.next_position.x.max(0) as u32
    }

    fn blit(&mut self, image: &Self::Image, x: i32, y: i32) -> Result<(), CanvasError> {
        Image::new(image, Point::new(x, y))
            .draw(&mut self.target)
            .map_err(|_| CanvasError::Communication)
    }

    fn image_size(&self, image: &Self::Image) -> (u32, u32) {
        let size = image.size();
        (size.width, size.height)
    }

    fn set_font(&mut self, font: &Self::Font) {
        self.font = *font;
    }

    fn set_antialias(&mut self, mode: Antialias) {
        self.antialias = mode;
    }
}
