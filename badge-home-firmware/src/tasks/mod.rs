//! Embassy async tasks

pub mod battery;
pub mod frame;

pub use battery::battery_task;
pub use frame::{frame_task, HomeCanvas};
