//! ST7789 TFT Display Driver
//!
//! Driver for 320x240 ST7789 panels over SPI (RGB565, landscape).
//! The home screen is drawn at 160x120 and every pixel is doubled on the
//! way out, so one logical row becomes two panel rows.

use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

use badge_home_display::{scale_row_be, HomeFrame, FRAME_WIDTH};

/// Panel dimensions
const WIDTH: u16 = 320;
const HEIGHT: u16 = 240;

/// Panel pixels per logical pixel, on each axis
const SCALE: usize = 2;

/// Bytes in one doubled panel row
const ROW_BYTES: usize = FRAME_WIDTH * SCALE * 2;

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// MADCTL: row/column exchange for landscape, mirrored columns
const MADCTL_LANDSCAPE: u8 = 0x70;

/// COLMOD: 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// Panel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// SPI transfer failed
    Spi,
    /// Control pin could not be driven
    Pin,
}

/// ST7789 driver
pub struct St7789<SPI, PIN> {
    spi: SPI,
    /// Data/command select (low = command)
    dc: PIN,
    cs: PIN,
    backlight: PIN,
    /// Scratch buffer for one doubled row
    row: [u8; ROW_BYTES],
}

impl<SPI, PIN> St7789<SPI, PIN>
where
    SPI: SpiBus<u8>,
    PIN: OutputPin,
{
    /// Create a new driver; the panel stays dark until `init`
    pub fn new(spi: SPI, dc: PIN, cs: PIN, backlight: PIN) -> Self {
        Self {
            spi,
            dc,
            cs,
            backlight,
            row: [0; ROW_BYTES],
        }
    }

    /// Initialize the panel and turn the backlight on
    pub async fn init(&mut self) -> Result<(), PanelError> {
        self.command(cmd::SWRESET, &[]).await?;
        Timer::after_millis(150).await;

        self.command(cmd::SLPOUT, &[]).await?;
        Timer::after_millis(10).await;

        self.command(cmd::COLMOD, &[COLMOD_RGB565]).await?;
        self.command(cmd::MADCTL, &[MADCTL_LANDSCAPE]).await?;
        // IPS panels need inversion for true colors
        self.command(cmd::INVON, &[]).await?;
        self.command(cmd::NORON, &[]).await?;
        Timer::after_millis(10).await;

        self.command(cmd::DISPON, &[]).await?;
        Timer::after_millis(10).await;

        self.set_backlight(true)
    }

    /// Switch the backlight
    pub fn set_backlight(&mut self, on: bool) -> Result<(), PanelError> {
        let result = if on {
            self.backlight.set_high()
        } else {
            self.backlight.set_low()
        };
        result.map_err(|_| PanelError::Pin)
    }

    /// Send a full frame to the panel
    pub async fn flush(&mut self, frame: &HomeFrame) -> Result<(), PanelError> {
        let [x_hi, x_lo] = (WIDTH - 1).to_be_bytes();
        let [y_hi, y_lo] = (HEIGHT - 1).to_be_bytes();
        self.command(cmd::CASET, &[0, 0, x_hi, x_lo]).await?;
        self.command(cmd::RASET, &[0, 0, y_hi, y_lo]).await?;
        self.command(cmd::RAMWR, &[]).await?;

        self.dc.set_high().map_err(|_| PanelError::Pin)?;
        self.cs.set_low().map_err(|_| PanelError::Pin)?;

        let mut result = Ok(());
        for logical_row in frame.rows() {
            scale_row_be(logical_row, SCALE, &mut self.row);
            for _ in 0..SCALE {
                if self.spi.write(&self.row).await.is_err() {
                    result = Err(PanelError::Spi);
                    break;
                }
            }
            if result.is_err() {
                break;
            }
        }

        if self.spi.flush().await.is_err() {
            result = Err(PanelError::Spi);
        }
        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result
    }

    /// Send a command followed by its parameter bytes
    async fn command(&mut self, command: u8, params: &[u8]) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::Pin)?;

        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        let mut result = self.spi.write(&[command]).await;
        if result.is_ok() && !params.is_empty() {
            self.dc.set_high().map_err(|_| PanelError::Pin)?;
            result = self.spi.write(params).await;
        }
        if result.is_ok() {
            result = self.spi.flush().await;
        }

        self.cs.set_high().map_err(|_| PanelError::Pin)?;
        result.map_err(|_| PanelError::Spi)
    }
}
