//! Compiled-in assets
//!
//! Registers the QR image and the UI font under the paths named in the
//! configuration, so lookups behave the same as on a filesystem.

use defmt::*;
use embedded_graphics::mono_font::ascii::FONT_5X8;

use badge_home_core::config::HomeConfig;
use badge_home_display::AssetTable;

/// QR image copied by build.rs (empty when absent at build time)
const QR_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/github_qr.bmp"));

/// Images and fonts each
pub const ASSET_SLOTS: usize = 2;

/// Build the asset table for a configuration
pub fn asset_table(config: &'static HomeConfig) -> AssetTable<'static, ASSET_SLOTS> {
    let mut table = AssetTable::new();

    if table.add_image(&config.qr_image_path, QR_IMAGE).is_err() {
        warn!("Asset table full, QR image not registered");
    }
    if let Some(path) = config.font_path() {
        if table.add_font(path, &FONT_5X8).is_err() {
            warn!("Asset table full, font not registered");
        }
    }

    debug!(
        "Assets: {} image(s) ({} bytes), {} font(s)",
        table.image_count(),
        QR_IMAGE.len(),
        table.font_count()
    );
    table
}
