//! Layout math for the home screen
//!
//! Every text line and the QR image are centered horizontally; the
//! vertical positions come from `LayoutConfig`.

use crate::config::LayoutConfig;

/// X coordinate that centers `content_width` on a display `display_width` wide
///
/// Uses floor division, so content wider than the display gets a negative
/// x and is clipped evenly (rounded to the left) on both sides.
pub fn centered_x(display_width: u32, content_width: u32) -> i32 {
    let slack = display_width as i64 - content_width as i64;
    slack.div_euclid(2) as i32
}

/// Resolved positions for one frame
///
/// Built from the configured rows plus the widths measured for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameLayout {
    display_width: u32,
    rows: RowPositions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct RowPositions {
    name_y: i32,
    username_y: i32,
    qr_y: i32,
    label_y: i32,
    missing_image_y: i32,
    battery: (i32, i32),
}

impl FrameLayout {
    /// Create a layout for a display of the given width
    pub fn new(display_width: u32, config: &LayoutConfig) -> Self {
        Self {
            display_width,
            rows: RowPositions {
                name_y: config.name_y,
                username_y: config.username_y,
                qr_y: config.qr_y,
                label_y: config.label_y,
                missing_image_y: config.missing_image_y,
                battery: (config.battery_x, config.battery_y),
            },
        }
    }

    /// Position of the name line
    pub fn name(&self, text_width: u32) -> (i32, i32) {
        (self.center(text_width), self.rows.name_y)
    }

    /// Position of the `@username` line
    pub fn username(&self, text_width: u32) -> (i32, i32) {
        (self.center(text_width), self.rows.username_y)
    }

    /// Top-left corner of the QR image
    pub fn qr_image(&self, image_width: u32) -> (i32, i32) {
        (self.center(image_width), self.rows.qr_y)
    }

    /// Position of the caption under the QR image
    pub fn qr_label(&self, text_width: u32) -> (i32, i32) {
        (self.center(text_width), self.rows.label_y)
    }

    /// Position of the message shown when the image is missing
    pub fn missing_image(&self, text_width: u32) -> (i32, i32) {
        (self.center(text_width), self.rows.missing_image_y)
    }

    /// Position of the battery readout (not centered)
    pub fn battery(&self) -> (i32, i32) {
        self.rows.battery
    }

    fn center(&self, width: u32) -> i32 {
        centered_x(self.display_width, width)
    }
}
