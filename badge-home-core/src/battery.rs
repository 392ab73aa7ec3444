//! Battery polling
//!
//! Querying the battery touches hardware, so the home screen only asks
//! once per polling interval and draws the cached value in between.

use core::fmt::Write;

use heapless::String;

use crate::traits::{BatteryError, BatteryGauge};

/// Percentage shown before the first successful query
pub const INITIAL_PERCENT: u8 = 100;

/// Single-cell LiPo discharge curve
/// Format: (millivolts, percent), descending
const DISCHARGE_TABLE: &[(u16, u8)] = &[
    (4200, 100),
    (4100, 90),
    (4000, 80),
    (3900, 65),
    (3800, 50),
    (3700, 35),
    (3600, 20),
    (3500, 10),
    (3400, 5),
    (3300, 0),
];

/// Result of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Interval not elapsed, gauge not queried
    Skipped,
    /// Gauge queried, cached value replaced
    Refreshed(u8),
    /// Gauge queried but failed; cached value kept
    Failed(BatteryError),
}

/// Cached battery percentage with a coarse refresh gate
#[derive(Debug, Clone)]
pub struct BatteryPoller {
    /// Minimum ticks between queries
    interval_ms: u32,
    /// Tick of the last successful query
    last_check_ms: u32,
    /// Cached state of charge (0-100)
    percent: u8,
}

impl BatteryPoller {
    /// Create a new poller
    ///
    /// The last check starts at tick 0, so the first query happens once
    /// the tick counter has passed `interval_ms`.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_check_ms: 0,
            percent: INITIAL_PERCENT,
        }
    }

    /// Refresh the cached value if more than the interval has elapsed
    ///
    /// A failed query leaves both the cached value and the last-check tick
    /// untouched, so the gauge is asked again on the next call. Tick
    /// arithmetic wraps, so a counter rollover does not stall polling.
    pub fn poll<G: BatteryGauge + ?Sized>(&mut self, now_ms: u32, gauge: &mut G) -> PollOutcome {
        if now_ms.wrapping_sub(self.last_check_ms) <= self.interval_ms {
            return PollOutcome::Skipped;
        }

        match gauge.level_percent() {
            Ok(percent) => {
                self.percent = percent.min(100);
                self.last_check_ms = now_ms;
                PollOutcome::Refreshed(self.percent)
            }
            Err(e) => PollOutcome::Failed(e),
        }
    }

    /// Get the cached percentage
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Get the tick of the last successful query
    pub fn last_check_ms(&self) -> u32 {
        self.last_check_ms
    }

    /// Get the polling interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

/// Convert a cell voltage to a state of charge
///
/// Linear interpolation over the discharge table, clamped to 0-100.
pub fn percent_from_millivolts(mv: u16) -> u8 {
    let (top_mv, top_pct) = DISCHARGE_TABLE[0];
    let (bottom_mv, bottom_pct) = DISCHARGE_TABLE[DISCHARGE_TABLE.len() - 1];

    if mv >= top_mv {
        return top_pct;
    }
    if mv <= bottom_mv {
        return bottom_pct;
    }

    for pair in DISCHARGE_TABLE.windows(2) {
        let (mv_high, pct_high) = pair[0];
        let (mv_low, pct_low) = pair[1];

        if mv <= mv_high && mv >= mv_low {
            let mv_range = (mv_high - mv_low) as u32;
            let pct_range = (pct_high - pct_low) as u32;
            let mv_offset = (mv - mv_low) as u32;

            return pct_low + (pct_range * mv_offset / mv_range) as u8;
        }
    }

    bottom_pct
}

/// ADC reference voltage
const ADC_VREF_MV: u32 = 3300;

/// Largest 12-bit ADC count
const ADC_MAX_COUNT: u16 = 4095;

/// VSYS sense divider ratio (3:1)
const VSYS_DIVIDER: u32 = 3;

/// Convert a raw 12-bit ADC count on the VSYS sense pin to millivolts
pub fn vsys_millivolts(raw: u16) -> u16 {
    let raw = raw.min(ADC_MAX_COUNT) as u32;
    (raw * ADC_VREF_MV * VSYS_DIVIDER / (ADC_MAX_COUNT as u32 + 1)) as u16
}

/// Lowest plausible VSYS reading; below this the sense line is floating
pub const MIN_PLAUSIBLE_MV: u16 = 2500;

/// Highest plausible VSYS reading (USB power through the divider)
pub const MAX_PLAUSIBLE_MV: u16 = 6000;

/// Turn the latest voltage sample into a gauge reading
///
/// `None` means nothing has been sampled yet. Readings above a full cell
/// (USB power) report 100 %.
pub fn level_from_millivolts(sample: Option<u16>) -> Result<u8, BatteryError> {
    let mv = sample.ok_or(BatteryError::NotReady)?;
    if !(MIN_PLAUSIBLE_MV..=MAX_PLAUSIBLE_MV).contains(&mv) {
        return Err(BatteryError::OutOfRange);
    }
    Ok(percent_from_millivolts(mv))
}

/// Format a percentage for the corner readout, e.g. `"87%"`
pub fn format_percent(percent: u8) -> String<4> {
    let mut out = String::new();
    // "100%" is exactly four bytes
    let _ = write!(out, "{}%", percent.min(100));
    out
}
