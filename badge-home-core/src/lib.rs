//! Board-agnostic logic for the badge home screen
//!
//! This crate contains everything that does not depend on a specific
//! display, storage or power-management implementation:
//!
//! - Host traits (canvas, asset source, battery gauge)
//! - Home screen configuration types and validation
//! - Layout math for the fixed home screen layout
//! - Battery polling with a coarse tick gate
//! - The `HomeScreen` application (init, per-frame update, exit)

#![no_std]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod home;
pub mod layout;
pub mod traits;

pub use home::{FrameReport, HomeScreen, InitReport};
