//! Board bring-up for the CO5300 panel.
//
// Builds the SPI2 + DMA bus and wraps it in the compositor's CO5300
// controller. Nothing is sent to the panel here; that happens in
// `Compositor::init`.

use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    delay::Delay,
    dma::{DmaRxBuf, DmaTxBuf},
    dma_buffers,
    gpio::Output,
    spi::master::{Config, Spi, SpiDmaBus},
    spi::Mode,
    time::Rate,
    Blocking,
};

use crate::controller::LayerId;
use crate::panel::Co5300Panel;
use crate::wiring::DisplayPins;

pub type SpiDev<'a> = ExclusiveDevice<SpiDmaBus<'a, Blocking>, Output<'a>, NoDelay>;

pub type PanelType<'a> = Co5300Panel<SpiDev<'a>, Output<'a>, Delay>;

/// SPI clock; 40 MHz is known stable, 60 MHz works on most boards.
pub const SPI_FREQ_HZ: u32 = 60_000_000;

/// Panics if the SPI or DMA peripherals cannot be configured.
pub fn setup_panel<'a>(display_pins: DisplayPins<'a>, visible: LayerId) -> PanelType<'a> {
    let DisplayPins { spi2, cs, clk, do0, rst, dma_ch0 } = display_pins;

    let spi = Spi::new(
        spi2,
        Config::default().with_frequency(Rate::from_hz(SPI_FREQ_HZ)).with_mode(Mode::_0),
    )
    .expect("SPI2 config rejected")
    .with_sck(clk)
    .with_mosi(do0)
    .with_dma(dma_ch0);

    let (rx_buf, rx_desc, tx_buf, tx_desc) = dma_buffers!(4096, 65536);
    let rx = DmaRxBuf::new(rx_desc, rx_buf).expect("DMA rx buffer");
    let tx = DmaTxBuf::new(tx_desc, tx_buf).expect("DMA tx buffer");

    let spi_bus: SpiDmaBus<'_, Blocking> = spi.with_buffers(rx, tx);
    let spi_dev = ExclusiveDevice::new(spi_bus, cs, NoDelay).expect("CS pin");

    Co5300Panel::new(spi_dev, Some(rst), Delay::new(), visible)
}
