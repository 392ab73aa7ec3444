//! Battery telemetry trait

/// Errors that can occur when querying the battery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryError {
    /// No measurement available yet
    NotReady,
    /// Telemetry not provided by this board
    Unavailable,
    /// Measurement outside the plausible range
    OutOfRange,
}

/// Trait for battery charge telemetry
pub trait BatteryGauge {
    /// Read the state of charge in percent (0-100)
    ///
    /// Takes `&mut self` because reading usually touches an ADC or a
    /// fuel-gauge bus.
    fn level_percent(&mut self) -> Result<u8, BatteryError>;
}
