//! Configuration type definitions
//!
//! These types describe what the home screen shows and where. The firmware
//! stores them as postcard-serialized binary data generated from a TOML file
//! at build time.

use heapless::String;

use super::validate::CONFIG_VERSION;
use crate::traits::{Antialias, Rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of displayed text fields
pub const MAX_TEXT_LEN: usize = 32;

/// Maximum length of asset paths
pub const MAX_PATH_LEN: usize = 64;

/// Logical display width in pixels
pub const DISPLAY_WIDTH: u32 = 160;

/// Logical display height in pixels
pub const DISPLAY_HEIGHT: u32 = 120;

/// Default battery polling interval
pub const DEFAULT_BATTERY_POLL_MS: u32 = 5000;

/// Default image asset path
pub const DEFAULT_QR_IMAGE_PATH: &str = "/system/apps/home/assets/github_qr.bmp";

/// Default font asset path
pub const DEFAULT_FONT_PATH: &str = "/system/assets/fonts/nope.ppf";

/// Brush colors for each element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub background: Rgb,
    pub name: Rgb,
    pub username: Rgb,
    pub label: Rgb,
    /// Missing-image message
    pub error: Rgb,
    pub battery: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(10, 20, 30),
            name: Rgb(255, 255, 255),
            username: Rgb(100, 150, 255),
            label: Rgb(150, 150, 150),
            error: Rgb(255, 100, 100),
            battery: Rgb(80, 80, 80),
        }
    }
}

/// Fixed element positions (pixels from the top-left corner)
///
/// Horizontal positions of centered elements are computed per frame from
/// the measured widths; only the battery readout has a fixed x.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub name_y: i32,
    pub username_y: i32,
    /// Top edge of the QR image
    pub qr_y: i32,
    /// Label under the QR image
    pub label_y: i32,
    /// Fallback message shown instead of the image
    pub missing_image_y: i32,
    pub battery_x: i32,
    pub battery_y: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name_y: 10,
            username_y: 25,
            qr_y: 45,
            label_y: 112,
            missing_image_y: 60,
            battery_x: 125,
            battery_y: 2,
        }
    }
}

/// Home screen configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HomeConfig {
    /// Config format version
    pub version: u8,
    /// Owner name (first line)
    pub name: String<MAX_TEXT_LEN>,
    /// Username, shown with a leading `@`
    pub username: String<MAX_TEXT_LEN>,
    /// Caption under the QR image
    pub qr_label: String<MAX_TEXT_LEN>,
    /// Message shown when the QR image could not be loaded
    pub missing_image_text: String<MAX_TEXT_LEN>,
    pub qr_image_path: String<MAX_PATH_LEN>,
    /// Optional font; the host default font is used when unset or missing
    pub font_path: Option<String<MAX_PATH_LEN>>,
    pub antialias: Antialias,
    /// Minimum time between battery queries
    pub battery_poll_ms: u32,
    pub palette: Palette,
    pub layout: LayoutConfig,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            name: text("Badge Owner"),
            username: text("badgeowner"),
            qr_label: text("Scan for GitHub"),
            missing_image_text: text("QR code not found"),
            qr_image_path: text(DEFAULT_QR_IMAGE_PATH),
            font_path: Some(text(DEFAULT_FONT_PATH)),
            antialias: Antialias::X2,
            battery_poll_ms: DEFAULT_BATTERY_POLL_MS,
            palette: Palette::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Build a fixed-capacity string, truncating at a char boundary if needed
pub fn text<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for ch in s.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl HomeConfig {
    /// Font to load at startup; an empty path counts as no font
    pub fn font_path(&self) -> Option<&str> {
        self.font_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }
}
