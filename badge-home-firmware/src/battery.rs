//! Battery gauge backed by the VSYS sample
//!
//! The battery task writes the latest VSYS voltage here; the frame task
//! reads it through `BatteryGauge` when the home screen asks.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use badge_home_core::battery::level_from_millivolts;
use badge_home_core::traits::{BatteryError, BatteryGauge};

/// Latest VSYS voltage in millivolts, `None` until the first sample
pub static VSYS_MV: Mutex<CriticalSectionRawMutex, Cell<Option<u16>>> =
    Mutex::new(Cell::new(None));

/// Publish a new VSYS sample
pub fn publish_millivolts(mv: u16) {
    VSYS_MV.lock(|sample| sample.set(Some(mv)));
}

/// Gauge reading the shared VSYS sample
pub struct AdcBattery;

impl BatteryGauge for AdcBattery {
    fn level_percent(&mut self) -> Result<u8, BatteryError> {
        level_from_millivolts(VSYS_MV.lock(|sample| sample.get()))
    }
}
