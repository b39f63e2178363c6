//! Panel configuration.
//
// Geometry is fixed for the lifetime of a compositor: buffers are sized from it
// once at init and never resized.

use crate::controller::LayerId;
use crate::pixel::Argb4444;

/// 800x480 DSI panel of the F769I discovery board.
pub const DEFAULT_WIDTH: u16 = 800;
pub const DEFAULT_HEIGHT: u16 = 480;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    pub width: u16,
    pub height: u16,
    /// Layer whose flips reach single-plane panels (see `panel::co5300`).
    pub visible_layer: LayerId,
    /// Draw color right after init.
    pub initial_color: Argb4444,
    /// Register the compiled-in fonts at init.
    pub builtin_fonts: bool,
}

impl PanelConfig {
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            visible_layer: LayerId::Layer0,
            initial_color: Argb4444::TRANSPARENT,
            builtin_fonts: cfg!(feature = "builtin-fonts"),
        }
    }

    pub const fn with_visible_layer(mut self, layer: LayerId) -> Self {
        self.visible_layer = layer;
        self
    }

    pub const fn with_initial_color(mut self, color: Argb4444) -> Self {
        self.initial_color = color;
        self
    }

    pub const fn with_builtin_fonts(mut self, enabled: bool) -> Self {
        self.builtin_fonts = enabled;
        self
    }

    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per frame buffer (ARGB4444 is 2 bytes per pixel).
    #[inline]
    pub const fn buffer_size(&self) -> usize {
        self.pixel_count() * core::mem::size_of::<Argb4444>()
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_800x480() {
        let cfg = PanelConfig::default();
        assert_eq!((cfg.width, cfg.height), (800, 480));
        assert_eq!(cfg.buffer_size(), 800 * 480 * 2);
        assert_eq!(cfg.visible_layer, LayerId::Layer0);
    }

    #[test]
    fn builder_overrides() {
        let cfg = PanelConfig::new(466, 466)
            .with_visible_layer(LayerId::Layer1)
            .with_builtin_fonts(false);
        assert_eq!(cfg.visible_layer, LayerId::Layer1);
        assert!(!cfg.builtin_fonts);
        assert_eq!(cfg.pixel_count(), 466 * 466);
    }

    #[test]
    fn initial_color_override() {
        let cfg = PanelConfig::default().with_initial_color(Argb4444::GREEN);
        assert_eq!(cfg.initial_color, Argb4444::GREEN);
        assert_eq!(PanelConfig::default().initial_color, Argb4444::TRANSPARENT);
    }
}
