//! Home screen application
//!
//! `HomeScreen` owns all state the screen needs between frames: the cached
//! QR image and font handles, the battery poller, and the configuration.
//! The host calls [`HomeScreen::init`] once, [`HomeScreen::update`] every
//! frame and [`HomeScreen::exit`] when the app is left.

use core::fmt::Write;

use heapless::String;

use crate::battery::{format_percent, BatteryPoller, PollOutcome};
use crate::config::{HomeConfig, MAX_TEXT_LEN};
use crate::layout::FrameLayout;
use crate::traits::{AssetError, AssetSource, BatteryGauge, Canvas, CanvasError};

/// Load status of one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetStatus {
    Loaded,
    /// No path configured
    Skipped,
    /// Load failed, default used instead
    Fallback(AssetError),
}

/// What `init` managed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitReport {
    pub image: AssetStatus,
    pub font: AssetStatus,
}

/// What one `update` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Battery poll result for this frame
    pub battery: PollOutcome,
    /// Percentage drawn in the corner
    pub battery_percent: u8,
    /// True if the missing-image message was drawn instead of the QR code
    pub image_missing: bool,
}

/// The home screen app
pub struct HomeScreen<C: Canvas> {
    config: HomeConfig,
    /// Decoded QR image, `None` if loading failed
    image: Option<C::Image>,
    /// Loaded font, `None` if unset or loading failed
    font: Option<C::Font>,
    battery: BatteryPoller,
}

impl<C: Canvas> HomeScreen<C> {
    /// Create the app; nothing is loaded until `init`
    pub fn new(config: HomeConfig) -> Self {
        let battery = BatteryPoller::new(config.battery_poll_ms);
        Self {
            config,
            image: None,
            font: None,
            battery,
        }
    }

    /// Load assets once and prepare the canvas
    ///
    /// Never fails: a missing image is drawn as a message, a missing font
    /// leaves the canvas default font in place.
    pub fn init<A>(&mut self, assets: &mut A, canvas: &mut C) -> InitReport
    where
        A: AssetSource<Image = C::Image, Font = C::Font>,
    {
        let image = match assets.load_image(&self.config.qr_image_path) {
            Ok(image) => {
                self.image = Some(image);
                AssetStatus::Loaded
            }
            Err(e) => {
                self.image = None;
                AssetStatus::Fallback(e)
            }
        };

        let font = match self.config.font_path() {
            Some(path) => match assets.load_font(path) {
                Ok(font) => {
                    canvas.set_font(&font);
                    self.font = Some(font);
                    AssetStatus::Loaded
                }
                Err(e) => {
                    self.font = None;
                    AssetStatus::Fallback(e)
                }
            },
            None => AssetStatus::Skipped,
        };

        canvas.set_antialias(self.config.antialias);

        InitReport { image, font }
    }

    /// Draw one frame
    ///
    /// `now_ms` is the host's monotonic millisecond tick. The battery is
    /// queried at most once per polling interval; failures keep the last
    /// known value on screen.
    pub fn update<G>(
        &mut self,
        canvas: &mut C,
        now_ms: u32,
        gauge: &mut G,
    ) -> Result<FrameReport, CanvasError>
    where
        G: BatteryGauge + ?Sized,
    {
        let battery = self.battery.poll(now_ms, gauge);

        let config = &self.config;
        let palette = &config.palette;
        let layout = FrameLayout::new(canvas.width(), &config.layout);

        canvas.set_brush(palette.background);
        canvas.clear()?;

        canvas.set_brush(palette.name);
        let (x, y) = layout.name(canvas.measure_text(&config.name));
        canvas.text(&config.name, x, y)?;

        canvas.set_brush(palette.username);
        let handle = handle_text(&config.username);
        let (x, y) = layout.username(canvas.measure_text(&handle));
        canvas.text(&handle, x, y)?;

        let image_missing = match &self.image {
            Some(image) => {
                let (width, _) = canvas.image_size(image);
                let (x, y) = layout.qr_image(width);
                canvas.blit(image, x, y)?;

                canvas.set_brush(palette.label);
                let (x, y) = layout.qr_label(canvas.measure_text(&config.qr_label));
                canvas.text(&config.qr_label, x, y)?;
                false
            }
            None => {
                canvas.set_brush(palette.error);
                let message = &config.missing_image_text;
                let (x, y) = layout.missing_image(canvas.measure_text(message));
                canvas.text(message, x, y)?;
                true
            }
        };

        let percent = self.battery.percent();
        canvas.set_brush(palette.battery);
        let (x, y) = layout.battery();
        canvas.text(&format_percent(percent), x, y)?;

        Ok(FrameReport {
            battery,
            battery_percent: percent,
            image_missing,
        })
    }

    /// Release cached asset handles
    ///
    /// After `exit` the screen renders the missing-image message until
    /// `init` is called again.
    pub fn exit(&mut self) {
        self.image = None;
        self.font = None;
    }

    /// Get the configuration
    pub fn config(&self) -> &HomeConfig {
        &self.config
    }

    /// Check if the QR image is loaded
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Check if a custom font is loaded
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Get the cached battery percentage
    pub fn battery_percent(&self) -> u8 {
        self.battery.percent()
    }
}

/// `@username`, truncated to fit
fn handle_text(username: &str) -> String<{ MAX_TEXT_LEN + 1 }> {
    let mut out = String::new();
    let _ = write!(out, "@{}", username);
    out
}
