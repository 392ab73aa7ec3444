//! Host traits
//!
//! These traits define the interface between the home screen and the
//! framework that owns the display, the assets and the power telemetry.

pub mod assets;
pub mod battery;
pub mod canvas;

pub use assets::{AssetError, AssetSource};
pub use battery::{BatteryError, BatteryGauge};
pub use canvas::{Antialias, Canvas, CanvasError, Rgb};
