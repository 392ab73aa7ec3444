//! Badge Home Screen Firmware
//!
//! Shows the owner's name, username and a QR code on a 320x240 ST7789
//! panel (drawn at 160x120 and pixel-doubled), with the battery level in
//! the top-right corner.
//!
//! Pinout (Pico with a 2.0" display pack):
//! - SPI0: SCK=GPIO18, MOSI=GPIO19
//! - CS=GPIO17, DC=GPIO16, backlight=GPIO20
//! - VSYS sense: GPIO29 (ADC3)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use badge_home_core::config::HomeConfig;
use badge_home_core::HomeScreen;
use badge_home_display::{GraphicsCanvas, HomeFrame};

use crate::st7789::St7789;
use crate::tasks::HomeCanvas;

mod assets;
mod battery;
mod config;
mod st7789;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// SPI clock for the panel
const PANEL_SPI_HZ: u32 = 62_500_000;

// Static cells (must live forever for task references)
static HOME_CONFIG: StaticCell<HomeConfig> = StaticCell::new();
static CANVAS: StaticCell<HomeCanvas> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Badge home firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Asset paths borrow from the config, so it lives in a static
    let config: &'static HomeConfig = HOME_CONFIG.init(config::load_config());

    // Panel
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let backlight = Output::new(p.PIN_20, Level::Low);

    let mut panel = St7789::new(spi, dc, cs, backlight);
    match panel.init().await {
        Ok(()) => info!("Panel initialized"),
        Err(e) => error!("Panel init failed: {:?}", e),
    }

    // Home screen
    let mut assets = assets::asset_table(config);
    let canvas = CANVAS.init_with(|| GraphicsCanvas::new(HomeFrame::new()));
    let mut home = HomeScreen::new(config.clone());
    let report = home.init(&mut assets, canvas);
    info!("Home screen ready: image={:?} font={:?}", report.image, report.font);

    // Battery sense
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let vsys = Channel::new_pin(p.PIN_29, Pull::None);

    spawner.spawn(tasks::battery_task(adc, vsys)).unwrap();
    spawner.spawn(tasks::frame_task(home, canvas, panel)).unwrap();

    info!("All tasks spawned, firmware running");
}
