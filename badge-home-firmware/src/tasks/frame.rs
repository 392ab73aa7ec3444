//! Home screen frame task
//!
//! Redraws the home screen at a fixed rate and pushes the frame to the
//! panel. The battery is only queried when the poll interval has passed;
//! the home screen handles that gate itself.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Duration, Instant, Ticker};

use badge_home_core::battery::PollOutcome;
use badge_home_core::HomeScreen;
use badge_home_display::{GraphicsCanvas, HomeFrame};

use crate::battery::AdcBattery;
use crate::st7789::St7789;

/// Frame interval in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Canvas the home screen draws on
pub type HomeCanvas = GraphicsCanvas<'static, HomeFrame>;

/// Panel on SPI0
pub type Panel = St7789<Spi<'static, embassy_rp::peripherals::SPI0, Async>, Output<'static>>;

/// Frame task
#[embassy_executor::task]
pub async fn frame_task(
    mut home: HomeScreen<HomeCanvas>,
    canvas: &'static mut HomeCanvas,
    mut panel: Panel,
) {
    info!("Frame task started");

    let mut gauge = AdcBattery;
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    let mut flush_failed = false;

    loop {
        ticker.next().await;

        // Wraps after ~49 days; the poll gate uses wrapping arithmetic
        let now_ms = Instant::now().as_millis() as u32;

        match home.update(canvas, now_ms, &mut gauge) {
            Ok(report) => match report.battery {
                PollOutcome::Refreshed(percent) => debug!("Battery: {}%", percent),
                PollOutcome::Failed(e) => debug!("Battery query failed: {:?}", e),
                PollOutcome::Skipped => {}
            },
            Err(e) => {
                warn!("Frame draw failed: {:?}", e);
                continue;
            }
        }

        let frame = canvas.target_mut();
        if !frame.is_dirty() {
            continue;
        }

        match panel.flush(frame).await {
            Ok(()) => {
                frame.mark_clean();
                if flush_failed {
                    info!("Panel flush recovered");
                    flush_failed = false;
                }
            }
            Err(e) => {
                // Log once per failure streak; the next frame retries
                if !flush_failed {
                    error!("Panel flush failed: {:?}", e);
                    flush_failed = true;
                }
            }
        }
    }
}
