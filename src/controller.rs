//! Seam between the compositor and the display hardware.
//!
//! The compositor never touches registers or buses itself. Panel bring-up and
//! the per-flip scanout update are delegated to a [`DisplayController`], which
//! lets the same rendering code drive an address-based LCD-TFT controller, an
//! SPI panel with its own GRAM, or a recording mock in tests.

use crate::framebuffer::FrameBuffer;

/// One of the two hardware layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    Layer0 = 0,
    Layer1 = 1,
}

impl LayerId {
    pub const ALL: [LayerId; 2] = [LayerId::Layer0, LayerId::Layer1];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(LayerId::Layer0),
            1 => Some(LayerId::Layer1),
            _ => None,
        }
    }
}

pub trait DisplayController {
    type Error: core::fmt::Debug;

    /// Brings up the panel for a `width` x `height` frame.
    fn init_panel(&mut self, width: u16, height: u16) -> Result<(), Self::Error>;

    /// Makes `front` the buffer scanned out on `layer`.
    ///
    /// Address-based controllers program `front.base_address()`; panels with
    /// their own frame memory copy the pixels out. Must not wait for vblank.
    fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), Self::Error>;

    /// Shuts the panel down. Called at most once per successful `init_panel`.
    fn deinit_panel(&mut self);

    /// Backlight / emission level in percent (0..=100).
    fn set_brightness(&mut self, _percent: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: DisplayController + ?Sized> DisplayController for &mut T {
    type Error = T::Error;

    fn init_panel(&mut self, width: u16, height: u16) -> Result<(), Self::Error> {
        (**self).init_panel(width, height)
    }

    fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), Self::Error> {
        (**self).set_scanout(layer, front)
    }

    fn deinit_panel(&mut self) {
        (**self).deinit_panel()
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error> {
        (**self).set_brightness(percent)
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        (**self).display_on()
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        (**self).display_off()
    }
}
