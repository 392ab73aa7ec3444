//! Embedded configuration blobs
//!
//! The firmware build serializes a validated `HomeConfig` with postcard.
//! Decoding validates again, since the blob may come from an older build.

use super::types::HomeConfig;
use super::validate::ConfigError;

/// Configuration blob errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlobError {
    /// No configuration was embedded
    Empty,
    /// Deserialization failed
    Deserialize,
    /// Decoded config failed validation
    Invalid(ConfigError),
}

/// Decode and validate a postcard configuration blob
pub fn decode(blob: &[u8]) -> Result<HomeConfig, BlobError> {
    if blob.is_empty() {
        return Err(BlobError::Empty);
    }

    let config: HomeConfig = postcard::from_bytes(blob).map_err(|_| BlobError::Deserialize)?;
    config.validate().map_err(BlobError::Invalid)?;

    Ok(config)
}

/// Decode a blob, falling back to the defaults
///
/// The error, if any, is returned alongside so the caller can log it.
pub fn decode_or_default(blob: &[u8]) -> (HomeConfig, Option<BlobError>) {
    match decode(blob) {
        Ok(config) => (config, None),
        Err(e) => (HomeConfig::default(), Some(e)),
    }
}
