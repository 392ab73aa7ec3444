//! Configuration validation

use super::types::{HomeConfig, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Config version does not match this firmware
    VersionMismatch,
    /// Name must not be empty
    EmptyName,
    /// Image path must not be empty
    EmptyImagePath,
    /// Battery polling interval must be non-zero
    ZeroPollInterval,
    /// A layout position lies outside the display
    OffScreen(LayoutField),
}

/// Layout field named in an `OffScreen` error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutField {
    NameY,
    UsernameY,
    QrY,
    LabelY,
    MissingImageY,
    BatteryX,
    BatteryY,
}

impl HomeConfig {
    /// Check the configuration for values the home screen cannot render
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.qr_image_path.is_empty() {
            return Err(ConfigError::EmptyImagePath);
        }
        if self.battery_poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        let layout = &self.layout;
        let rows = [
            (layout.name_y, LayoutField::NameY),
            (layout.username_y, LayoutField::UsernameY),
            (layout.qr_y, LayoutField::QrY),
            (layout.label_y, LayoutField::LabelY),
            (layout.missing_image_y, LayoutField::MissingImageY),
            (layout.battery_y, LayoutField::BatteryY),
        ];
        for (y, field) in rows {
            if !on_screen(y, DISPLAY_HEIGHT) {
                return Err(ConfigError::OffScreen(field));
            }
        }
        if !on_screen(layout.battery_x, DISPLAY_WIDTH) {
            return Err(ConfigError::OffScreen(LayoutField::BatteryX));
        }

        Ok(())
    }
}

fn on_screen(pos: i32, extent: u32) -> bool {
    pos >= 0 && (pos as u32) < extent
}
