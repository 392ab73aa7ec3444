//! Embedded configuration loader
//!
//! Decodes the postcard blob produced by build.rs from home.toml.
//! Falls back to built-in defaults if the blob is unusable.

use defmt::*;

use badge_home_core::config::{decode_or_default, HomeConfig};

/// Validated configuration serialized by build.rs
const EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/home.cfg"));

/// Load the home screen configuration
///
/// Never fails: a broken blob is logged and replaced with the defaults.
pub fn load_config() -> HomeConfig {
    let (config, error) = decode_or_default(EMBEDDED_CONFIG);

    match error {
        None => info!(
            "Loaded home config ({} bytes), poll every {} ms",
            EMBEDDED_CONFIG.len(),
            config.battery_poll_ms
        ),
        Some(e) => warn!("Embedded config unusable ({:?}), using defaults", e),
    }

    config
}
