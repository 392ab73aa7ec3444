//! Configuration types
//!
//! Board-agnostic configuration structures, written as TOML and stored as
//! postcard binary data.

#[cfg(feature = "serde")]
pub mod blob;
pub mod types;
pub mod validate;

#[cfg(feature = "serde")]
pub use blob::{decode, decode_or_default, BlobError};
pub use types::*;
pub use validate::{ConfigError, LayoutField, CONFIG_VERSION};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::traits::{Antialias, Rgb};

    #[test]
    fn test_toml_overrides_merge_with_defaults() {
        let input = r#"
            name = "Ada Lovelace"
            username = "ada"
            antialias = "off"

            [palette]
            background = [0, 0, 0]

            [layout]
            qr_y = 40
        "#;

        let config: HomeConfig = toml::from_str(input).unwrap();
        assert_eq!(config.name.as_str(), "Ada Lovelace");
        assert_eq!(config.username.as_str(), "ada");
        assert_eq!(config.antialias, Antialias::Off);
        assert_eq!(config.palette.background, Rgb::BLACK);
        // Untouched palette entries keep their defaults
        assert_eq!(config.palette.username, Rgb(100, 150, 255));
        assert_eq!(config.layout.qr_y, 40);
        assert_eq!(config.layout.label_y, 112);
        assert_eq!(config.battery_poll_ms, DEFAULT_BATTERY_POLL_MS);
        assert_eq!(config.font_path(), Some(DEFAULT_FONT_PATH));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_empty_font_path_means_default_font() {
        let config: HomeConfig = toml::from_str(r#"font_path = """#).unwrap();
        assert_eq!(config.font_path(), None);
    }

    #[test]
    fn test_oversized_name_rejected_by_parser() {
        let input = "name = \"This name is far longer than thirty-two characters\"";
        assert!(toml::from_str::<HomeConfig>(input).is_err());
    }

    #[test]
    fn test_postcard_blob_restores_config() {
        let mut config = HomeConfig::default();
        config.name = text("Grace Hopper");
        config.font_path = None;

        let bytes = postcard::to_allocvec(&config).unwrap();
        let restored: HomeConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_text_truncates_to_capacity() {
        let s: heapless::String<4> = text("abcdef");
        assert_eq!(s.as_str(), "abcd");
    }
}
