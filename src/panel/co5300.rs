// CO5300 AMOLED panel as a compositor display controller (Standard SPI mode,
// no D/C pin).
//
// Wiring on Waveshare ESP32-S3 Touch AMOLED 1.43" (CO5300):
//   CS  = GPIO9
//   SCK = GPIO10
//   IO0/MOSI = GPIO11
//   RST = GPIO21
//
// Protocol (Standard SPI):
//   Every write is 0x02, 0x00, CMD, 0x00 followed by N data bytes, all in one
//   CS-asserted transaction.
//   Example: [0x02, 0x00, 0x11, 0x00]       -> Sleep Out
//            [0x02, 0x00, 0x3A, 0x00, 0x55] -> Pixel Format = 16bpp (RGB565)
//
// The panel keeps its own GRAM and has a single plane, so a "scanout" here is
// a full-frame copy: the front buffer is converted to big-endian RGB565 and
// streamed with RAMWR / RAMWRC. Only one compositor layer can be visible.

extern crate alloc;

use alloc::{boxed::Box, vec};
use core::fmt;
use core::sync::atomic::{compiler_fence, Ordering};

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};

use crate::controller::{DisplayController, LayerId};
use crate::framebuffer::FrameBuffer;

pub const CO5300_WIDTH: u16 = 466;
pub const CO5300_HEIGHT: u16 = 466;

const SWRESET: u8 = 0x01;
const SLPIN: u8 = 0x10;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPOFF: u8 = 0x28;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR_OPCODE: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;
const RAMWRC_OPCODE: u8 = 0x3C;
const WRDISBV: u8 = 0x51;
const WRCTRLD: u8 = 0x53;

// 32736 = 32 * 1023
pub const DMA_CHUNK: usize = 32 * 1023;

/// Error type that wraps SPI and GPIO errors.
#[derive(Debug, PartialEq, Eq)]
pub enum Co5300Error<SpiE, GpioE> {
    Spi(SpiE),
    Gpio(GpioE),
    /// Frame or window does not fit the panel.
    OutOfBounds,
}

impl<SpiE: fmt::Debug, GpioE: fmt::Debug> fmt::Display for Co5300Error<SpiE, GpioE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Co5300Error::Spi(e) => write!(f, "CO5300 SPI error: {:?}", e),
            Co5300Error::Gpio(e) => write!(f, "CO5300 reset pin error: {:?}", e),
            Co5300Error::OutOfBounds => f.write_str("CO5300 frame out of bounds"),
        }
    }
}

pub struct Co5300Panel<SPI, RST, D> {
    spi: SPI,
    rst: Option<RST>,
    delay: D,
    w: u16,
    h: u16,
    x_off: u16,
    y_off: u16,
    visible: LayerId,
    bounce: Box<[u8]>,
}

impl<SPI, RST, D> Co5300Panel<SPI, RST, D>
where
    // embedded-hal 1.0 `SpiDevice<u8>` so we can do atomic CS-asserted transfers.
    SPI: SpiDevice<u8>,
    RST: OutputPin,
    D: DelayNs,
{
    /// Wraps the bus; nothing is sent until `init_panel`.
    ///
    /// Only flips of `visible` reach the glass.
    pub fn new(spi: SPI, rst: Option<RST>, delay: D, visible: LayerId) -> Self {
        Self {
            spi,
            rst,
            delay,
            w: CO5300_WIDTH,
            h: CO5300_HEIGHT,
            // the 1.43" glass starts 6 columns into GRAM
            x_off: 0x0006,
            y_off: 0x0000,
            visible,
            bounce: vec![0u8; DMA_CHUNK].into_boxed_slice(),
        }
    }

    pub fn with_offset(mut self, x_off: u16, y_off: u16) -> Self {
        self.x_off = x_off;
        self.y_off = y_off;
        self
    }

    /// Bytes per RAMWR/RAMWRC transfer, rounded down to whole pixels.
    pub fn with_chunk_size(mut self, bytes: usize) -> Self {
        let bytes = (bytes & !1).max(2);
        self.bounce = vec![0u8; bytes].into_boxed_slice();
        self
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.w, self.h)
    }

    #[inline]
    pub fn visible_layer(&self) -> LayerId {
        self.visible
    }

    pub fn set_visible_layer(&mut self, layer: LayerId) {
        self.visible = layer;
    }

    pub fn release(self) -> (SPI, Option<RST>, D) {
        (self.spi, self.rst, self.delay)
    }

    fn reset(&mut self) -> Result<(), Co5300Error<SPI::Error, RST::Error>> {
        if let Some(r) = self.rst.as_mut() {
            r.set_high().map_err(Co5300Error::Gpio)?;
            self.delay.delay_ms(2);
            r.set_low().map_err(Co5300Error::Gpio)?;
            self.delay.delay_ms(80);
            r.set_high().map_err(Co5300Error::Gpio)?;
            self.delay.delay_ms(200);
        }
        Ok(())
    }

    // Raw window set, applies panel offsets
    #[cfg_attr(feature = "esp32s3", esp_hal::ram)]
    fn set_window_raw(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Co5300Error<SPI::Error, RST::Error>> {
        if x0 > x1 || y0 > y1 || x1 >= self.w || y1 >= self.h {
            return Err(Co5300Error::OutOfBounds);
        }

        let (Some(x0p), Some(x1p), Some(y0p), Some(y1p)) = (
            x0.checked_add(self.x_off),
            x1.checked_add(self.x_off),
            y0.checked_add(self.y_off),
            y1.checked_add(self.y_off),
        ) else {
            return Err(Co5300Error::OutOfBounds);
        };

        let ca = [(x0p >> 8) as u8, (x0p & 0xFF) as u8, (x1p >> 8) as u8, (x1p & 0xFF) as u8];
        let ra = [(y0p >> 8) as u8, (y0p & 0xFF) as u8, (y1p >> 8) as u8, (y1p & 0xFF) as u8];

        self.cmd(CASET, &ca)?;
        self.cmd(RASET, &ra)?;
        Ok(())
    }

    // Full frame, converted into the bounce buffer and streamed chunk by chunk:
    //  - first chunk: RAMWR (0x2C)
    //  - following chunks: RAMWRC (0x3C), continuing at the current GRAM address
    #[cfg_attr(feature = "esp32s3", esp_hal::ram)]
    fn stream_frame(&mut self, front: &FrameBuffer) -> Result<(), Co5300Error<SPI::Error, RST::Error>> {
        self.set_window_raw(0, 0, self.w - 1, self.h - 1)?;

        let cap = self.bounce.len();
        let mut first = true;
        let mut filled = 0usize;

        for px in front.pixels() {
            if filled + 2 > cap {
                self.flush(&mut first, filled)?;
                filled = 0;
            }
            let be = px.to_rgb565_be();
            self.bounce[filled] = be[0];
            self.bounce[filled + 1] = be[1];
            filled += 2;
        }
        self.flush(&mut first, filled)
    }

    #[cfg_attr(feature = "esp32s3", esp_hal::ram)]
    fn flush(&mut self, first: &mut bool, count: usize) -> Result<(), Co5300Error<SPI::Error, RST::Error>> {
        if count == 0 {
            return Ok(());
        }
        let cmd = if *first { RAMWR_OPCODE } else { RAMWRC_OPCODE };
        *first = false;
        let hdr: [u8; 4] = [0x02, 0x00, cmd, 0x00];

        // Make sure DMA sees the bytes we just wrote
        compiler_fence(Ordering::Release);
        self.spi
            .transaction(&mut [Operation::Write(&hdr), Operation::Write(&self.bounce[..count])])
            .map_err(Co5300Error::Spi)?;
        compiler_fence(Ordering::Acquire);
        Ok(())
    }

    #[cfg_attr(feature = "esp32s3", esp_hal::ram)]
    fn cmd(&mut self, cmd: u8, data: &[u8]) -> Result<(), Co5300Error<SPI::Error, RST::Error>> {
        let hdr: [u8; 4] = [0x02, 0x00, cmd, 0x00];
        if data.is_empty() {
            self.spi.write(&hdr).map_err(Co5300Error::Spi)
        } else {
            self.spi
                .transaction(&mut [Operation::Write(&hdr), Operation::Write(data)])
                .map_err(Co5300Error::Spi)
        }
    }
}

impl<SPI, RST, D> DisplayController for Co5300Panel<SPI, RST, D>
where
    SPI: SpiDevice<u8>,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = Co5300Error<SPI::Error, RST::Error>;

    fn init_panel(&mut self, width: u16, height: u16) -> Result<(), Self::Error> {
        if width == 0 || height == 0 || width > CO5300_WIDTH || height > CO5300_HEIGHT {
            return Err(Co5300Error::OutOfBounds);
        }
        self.w = width;
        self.h = height;

        self.reset()?;

        // SW reset + settle
        self.cmd(SWRESET, &[])?;
        self.delay.delay_ms(150);

        // Sleep out + settle
        self.cmd(SLPOUT, &[])?;
        self.delay.delay_ms(180);

        // Pixel format + small settle
        self.cmd(COLMOD, &[0x55])?;
        self.delay.delay_ms(2);

        self.cmd(0xC4, &[0x80])?;
        self.cmd(NORON, &[])?;

        self.cmd(WRCTRLD, &[0x20])?;
        self.delay.delay_ms(1);

        // vendor enable
        self.cmd(0x63, &[0xFF])?;
        self.delay.delay_ms(1);

        // dark until the panel is on
        self.cmd(WRDISBV, &[0x00])?;
        self.delay.delay_ms(1);

        // Display ON + longer settle before any RAMWR
        self.cmd(DISPON, &[])?;
        self.delay.delay_ms(200);

        self.cmd(WRDISBV, &[0xFF])?;
        self.cmd(MADCTL, &[0x00])?;

        self.set_window_raw(0, 0, width - 1, height - 1)?;
        log::info!("co5300: up, {}x{}, showing {:?}", width, height, self.visible);
        Ok(())
    }

    fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), Self::Error> {
        if layer != self.visible {
            return Ok(());
        }
        if front.width() != self.w || front.height() != self.h {
            return Err(Co5300Error::OutOfBounds);
        }
        self.stream_frame(front)
    }

    fn deinit_panel(&mut self) {
        // best effort, the panel may already be gone
        let _ = self.cmd(DISPOFF, &[]);
        let _ = self.cmd(SLPIN, &[]);
        self.delay.delay_ms(120);
        if let Some(r) = self.rst.as_mut() {
            let _ = r.set_low();
        }
        log::info!("co5300: down");
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error> {
        let hw = ((percent.min(100) as u16) * 255 / 100) as u8;
        self.cmd(WRDISBV, &[hw])
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        self.cmd(DISPON, &[])?;
        // small settle before first RAMWR
        self.delay.delay_ms(10);
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        self.cmd(DISPOFF, &[])
    }
}
