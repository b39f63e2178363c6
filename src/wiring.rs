//! Board pin mapping for the Waveshare ESP32-S3 Touch AMOLED 1.43".
//!
//! The following wiring is assumed (Standard SPI, no D/C pin):
//! - CS   => GPIO9
//! - SCK  => GPIO10
//! - MOSI => GPIO11 (IO0; IO1..IO3 unused)
//! - RST  => GPIO21

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{Peripherals, DMA_CH0, GPIO10, GPIO11, SPI2};

pub struct DisplayPins<'a> {
    pub spi2: SPI2<'a>,
    pub cs: Output<'a>,
    pub clk: GPIO10<'a>,
    pub do0: GPIO11<'a>,
    pub rst: Output<'a>,
    pub dma_ch0: DMA_CH0<'a>,
}

/// Claims the panel pins. CS idles high, RST starts released.
pub fn init_display_pins(p: Peripherals) -> DisplayPins<'static> {
    let cs = Output::new(p.GPIO9, Level::High, OutputConfig::default());
    let rst = Output::new(p.GPIO21, Level::High, OutputConfig::default());

    DisplayPins {
        spi2: p.SPI2,
        cs,
        clk: p.GPIO10,
        do0: p.GPIO11,
        rst,
        dma_ch0: p.DMA_CH0,
    }
}
