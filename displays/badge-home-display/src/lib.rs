//! embedded-graphics host for the badge home screen
//!
//! This crate provides:
//! - `GraphicsCanvas`, the `Canvas` implementation over any RGB565 `DrawTarget`
//! - `FrameBuffer`, an in-RAM RGB565 frame for panels that are flushed in one go
//! - `AssetTable`, an `AssetSource` over compiled-in BMP images and mono fonts
//!
//! # Architecture
//!
//! The home screen logic in `badge-home-core` only talks to the host traits.
//! Firmware draws into a `FrameBuffer` through a `GraphicsCanvas` and then
//! pushes the finished frame to the panel. Host-side tests use the same path
//! and inspect the frame buffer directly.

#![no_std]

pub mod assets;
pub mod backend;
pub mod framebuffer;

// Re-export key types
pub use assets::{AssetTable, TableFull};
pub use backend::{GraphicsCanvas, DEFAULT_FONT};
pub use framebuffer::{scale_row_be, FrameBuffer, HomeFrame, FRAME_HEIGHT, FRAME_WIDTH};

#[cfg(test)]
mod tests {
    use core::ops::Range;

    use embedded_graphics::mono_font::ascii::FONT_5X8;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;

    use badge_home_core::battery::PollOutcome;
    use badge_home_core::config::{text, HomeConfig};
    use badge_home_core::home::AssetStatus;
    use badge_home_core::traits::{AssetError, BatteryError, BatteryGauge};
    use badge_home_core::HomeScreen;

    use super::*;
    use crate::assets::tests::solid_bmp;
    use crate::backend::to_rgb565;

    const QR_PATH: &str = "/system/apps/home/assets/github_qr.bmp";
    const FONT_PATH: &str = "/system/assets/fonts/nope.ppf";

    struct FixedGauge(Result<u8, BatteryError>);

    impl BatteryGauge for FixedGauge {
        fn level_percent(&mut self) -> Result<u8, BatteryError> {
            self.0
        }
    }

    fn config() -> HomeConfig {
        let mut config = HomeConfig::default();
        config.name = text("Ada Lovelace");
        config.username = text("ada");
        config.qr_image_path = text(QR_PATH);
        config.font_path = Some(text(FONT_PATH));
        config
    }

    /// True if every pixel in the rectangle has `color`
    fn region_is(frame: &HomeFrame, x: Range<usize>, y: Range<usize>, color: Rgb565) -> bool {
        y.clone()
            .all(|py| x.clone().all(|px| frame.pixel(px, py) == Some(color)))
    }

    #[test]
    fn test_renders_qr_image_centered() {
        // Pure green never appears in the palette
        let qr = solid_bmp(66, 66, (0, 255, 0));
        let mut assets = AssetTable::<2>::new();
        assets.add_image(QR_PATH, &qr).unwrap();
        assets.add_font(FONT_PATH, &FONT_5X8).unwrap();

        let mut canvas = GraphicsCanvas::new(HomeFrame::new());
        let mut home = HomeScreen::new(config());
        let report = home.init(&mut assets, &mut canvas);
        assert_eq!(report.image, AssetStatus::Loaded);
        assert_eq!(report.font, AssetStatus::Loaded);

        let mut gauge = FixedGauge(Ok(90));
        let frame_report = home.update(&mut canvas, 0, &mut gauge).unwrap();
        assert!(!frame_report.image_missing);

        let frame = canvas.target();
        // (160 - 66) / 2 = 47
        assert!(region_is(frame, 47..113, 45..111, Rgb565::GREEN));
        assert_eq!(frame.pixel(46, 60), Some(to_rgb565(HomeConfig::default().palette.background)));
        assert_eq!(frame.count(Rgb565::GREEN), 66 * 66);
    }

    #[test]
    fn test_missing_qr_image_renders_message() {
        let mut assets = AssetTable::<2>::new();
        assets.add_image(QR_PATH, &[]).unwrap();

        let mut canvas = GraphicsCanvas::new(HomeFrame::new());
        let mut home = HomeScreen::new(config());
        let report = home.init(&mut assets, &mut canvas);
        assert_eq!(report.image, AssetStatus::Fallback(AssetError::NotFound));
        // Font not registered: default font stays
        assert_eq!(report.font, AssetStatus::Fallback(AssetError::NotFound));

        let mut gauge = FixedGauge(Err(BatteryError::NotReady));
        let frame_report = home.update(&mut canvas, 0, &mut gauge).unwrap();
        assert!(frame_report.image_missing);

        let error = to_rgb565(HomeConfig::default().palette.error);
        let frame = canvas.target();
        assert!(frame.count(error) > 0);
        // Message glyphs sit on the message row only
        for y in 0..120 {
            for x in 0..160 {
                if frame.pixel(x, y) == Some(error) {
                    assert!((60..70).contains(&y), "y = {}", y);
                }
            }
        }
    }

    #[test]
    fn test_battery_readout_in_corner() {
        let mut assets = AssetTable::<1>::new();
        let mut canvas = GraphicsCanvas::new(HomeFrame::new());
        let mut home = HomeScreen::new(config());
        home.init(&mut assets, &mut canvas);

        let mut gauge = FixedGauge(Ok(42));
        let report = home.update(&mut canvas, 5001, &mut gauge).unwrap();
        assert_eq!(report.battery, PollOutcome::Refreshed(42));

        let battery = to_rgb565(HomeConfig::default().palette.battery);
        let frame = canvas.target();
        assert!(frame.count(battery) > 0);
        for y in 0..120 {
            for x in 0..160 {
                if frame.pixel(x, y) == Some(battery) {
                    // "42%" in the 6x10 font starting at (125, 2)
                    assert!((125..143).contains(&x), "x = {}", x);
                    assert!((2..12).contains(&y), "y = {}", y);
                }
            }
        }
    }

    #[test]
    fn test_identical_frame_needs_no_flush() {
        let mut assets = AssetTable::<1>::new();
        let mut canvas = GraphicsCanvas::new(HomeFrame::new());
        let mut home = HomeScreen::new(config());
        home.init(&mut assets, &mut canvas);
        let mut gauge = FixedGauge(Ok(42));

        home.update(&mut canvas, 0, &mut gauge).unwrap();
        assert!(canvas.target().is_dirty());
        canvas.target_mut().mark_clean();

        // Battery not polled yet: same content
        home.update(&mut canvas, 50, &mut gauge).unwrap();
        assert!(!canvas.target().is_dirty());

        // 100% -> 42% changes the corner
        home.update(&mut canvas, 5001, &mut gauge).unwrap();
        assert!(canvas.target().is_dirty());
    }
}
