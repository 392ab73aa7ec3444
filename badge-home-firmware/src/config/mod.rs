//! Configuration loading
//!
//! The configuration is validated and serialized at build time, then
//! decoded from flash at boot.

pub mod loader;

pub use loader::load_config;
