//! VSYS sampling task
//!
//! Reads VSYS through the on-board 3:1 divider once per second and
//! publishes the voltage for the battery gauge.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use badge_home_core::battery::vsys_millivolts;

use crate::battery::publish_millivolts;

/// Sample interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 1000;

/// Battery sampling task
#[embassy_executor::task]
pub async fn battery_task(mut adc: Adc<'static, Async>, mut vsys: Channel<'static>) {
    info!("Battery task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        match adc.read(&mut vsys).await {
            Ok(raw) => {
                let mv = vsys_millivolts(raw);
                trace!("VSYS: raw={} {}mV", raw, mv);
                publish_millivolts(mv);
            }
            Err(e) => {
                warn!("VSYS read failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}
