//! Dual-layer display compositor.
//!
//! Owns the display controller, both double-buffered layers and the font
//! registry. Drawing goes to the back buffer of the layer picked with
//! [`Compositor::set_draw_buffer`]; nothing is drawn until one is picked.
//! The target is resolved on every call, so it follows the back buffer across
//! flips.
//!
//! ```ignore
//! let mut disp = Compositor::new(panel, PanelConfig::default());
//! disp.init()?;
//! disp.set_draw_buffer(LayerId::Layer0);
//! disp.set_draw_color(0xF0F0);
//! disp.draw_rect_fill(Coord::new(10, 10), Coord::new(100, 50));
//! disp.flip_layer0()?;
//! ```

use crate::config::PanelConfig;
use crate::controller::{DisplayController, LayerId};
use crate::error::DisplayError;
use crate::fonts;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Coord;
use crate::layer::DoubleBufferLayer;
use crate::pixel::Argb4444;
use crate::raster;
use crate::registry::{Alignment, FontRegistry};

/// Lifecycle of a [`Compositor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Initializing,
    Ready,
    /// Last `init` failed and was rolled back. `init` may be retried.
    Failed,
}

pub struct Compositor<C: DisplayController> {
    controller: C,
    config: PanelConfig,
    state: State,
    panel_up: bool,
    layers: [DoubleBufferLayer; 2],
    fonts: FontRegistry,
    draw_layer: Option<LayerId>,
    draw_color: Argb4444,
}

impl<C: DisplayController> Compositor<C> {
    pub fn new(controller: C, config: PanelConfig) -> Self {
        Self {
            controller,
            config,
            state: State::Uninitialized,
            panel_up: false,
            layers: [DoubleBufferLayer::new(LayerId::Layer0), DoubleBufferLayer::new(LayerId::Layer1)],
            fonts: FontRegistry::new(),
            draw_layer: None,
            draw_color: config.initial_color,
        }
    }

    /// Brings up the panel, allocates both layers and registers the
    /// compiled-in fonts.
    ///
    /// Does nothing when already [`State::Ready`]. On failure everything that
    /// was set up is torn down again and the state becomes [`State::Failed`].
    pub fn init(&mut self) -> Result<(), DisplayError<C::Error>> {
        if self.state == State::Ready {
            return Ok(());
        }

        log::info!("display: init {}x{}", self.config.width, self.config.height);
        self.state = State::Initializing;

        match self.bring_up() {
            Ok(()) => {
                self.state = State::Ready;
                log::info!("display: ready, {} font(s)", self.fonts.len());
                Ok(())
            }
            Err(e) => {
                log::warn!("display: init failed: {}", e);
                self.teardown();
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), DisplayError<C::Error>> {
        let (w, h) = (self.config.width, self.config.height);

        // builtin fonts always start at index 0
        self.fonts.clear();

        self.controller.init_panel(w, h).map_err(DisplayError::Panel)?;
        self.panel_up = true;

        for layer in self.layers.iter_mut() {
            layer.init(&mut self.controller, w, h).map_err(DisplayError::Panel)?;
        }

        if self.config.builtin_fonts {
            fonts::register_builtin(&mut self.fonts)?;
        }

        self.draw_layer = None;
        self.set_draw_color(self.config.initial_color);
        Ok(())
    }

    /// Releases everything `init` acquired. Safe to call in any state, any
    /// number of times.
    pub fn deinit(&mut self) {
        if self.state != State::Uninitialized {
            log::info!("display: deinit");
        }
        self.teardown();
        self.state = State::Uninitialized;
    }

    fn teardown(&mut self) {
        self.fonts.clear();
        self.draw_layer = None;
        for layer in self.layers.iter_mut() {
            layer.deinit();
        }
        if self.panel_up {
            self.controller.deinit_panel();
            self.panel_up = false;
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    #[inline]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn layer(&self, id: LayerId) -> &DoubleBufferLayer {
        &self.layers[id.index()]
    }

    // ---- draw state ----

    /// Directs drawing at the back buffer of `layer`.
    pub fn set_draw_buffer(&mut self, layer: LayerId) {
        self.draw_layer = Some(layer);
    }

    #[inline]
    pub fn draw_buffer(&self) -> Option<LayerId> {
        self.draw_layer
    }

    pub fn set_draw_color(&mut self, color: impl Into<Argb4444>) {
        self.draw_color = color.into();
        self.fonts.set_draw_color(self.draw_color);
    }

    /// Draw color from 4-bit channels; higher bits are discarded.
    pub fn set_draw_color_argb(&mut self, a: u8, r: u8, g: u8, b: u8) {
        self.set_draw_color(Argb4444::from_argb(a, r, g, b));
    }

    #[inline]
    pub fn draw_color(&self) -> Argb4444 {
        self.draw_color
    }

    /// The buffer drawing currently lands in, if any.
    ///
    /// It implements `DrawTarget`, so embedded-graphics primitives can be
    /// drawn straight into it.
    pub fn draw_target(&mut self) -> Option<&mut FrameBuffer> {
        let id = self.draw_layer?;
        self.layers[id.index()].back_buffer_mut()
    }

    /// Back buffer of `layer`, whether or not it is the draw target.
    pub fn back_buffer(&self, layer: LayerId) -> Option<&FrameBuffer> {
        self.layers[layer.index()].back_buffer()
    }

    // ---- primitives ----

    pub fn clear_buffer(&mut self) {
        let color = self.draw_color;
        if let Some(buf) = self.draw_target() {
            raster::clear(buf, color);
        }
    }

    pub fn draw_pixel(&mut self, p: Coord) {
        let color = self.draw_color;
        if let Some(buf) = self.draw_target() {
            raster::draw_pixel(buf, color, p);
        }
    }

    pub fn draw_line(&mut self, a: Coord, b: Coord) {
        let color = self.draw_color;
        if let Some(buf) = self.draw_target() {
            raster::draw_line(buf, color, a, b);
        }
    }

    pub fn draw_rect(&mut self, c1: Coord, c2: Coord) {
        let color = self.draw_color;
        if let Some(buf) = self.draw_target() {
            raster::draw_rect(buf, color, c1, c2);
        }
    }

    pub fn draw_rect_fill(&mut self, c1: Coord, c2: Coord) {
        let color = self.draw_color;
        if let Some(buf) = self.draw_target() {
            raster::draw_rect_fill(buf, color, c1, c2);
        }
    }

    // ---- text ----

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Registry access for adding application fonts after `init`.
    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }

    pub fn set_font_by_index(&mut self, idx: usize) -> bool {
        self.fonts.set_font_by_index(idx)
    }

    pub fn set_font_by_name(&mut self, name: &str) -> bool {
        self.fonts.set_font_by_name(name)
    }

    pub fn measure_str(&self, s: &str) -> u32 {
        self.fonts.measure_str(s)
    }

    /// Draws `ch` at `pos` and returns its width, 0 if nothing was drawn.
    pub fn draw_char(&mut self, pos: Coord, ch: char) -> u16 {
        let Some(id) = self.draw_layer else {
            return 0;
        };
        match self.layers[id.index()].back_buffer_mut() {
            Some(buf) => self.fonts.draw_char(buf, pos, ch),
            None => 0,
        }
    }

    pub fn draw_str(&mut self, pos: Coord, s: &str, align: Alignment) {
        let Some(id) = self.draw_layer else {
            return;
        };
        if let Some(buf) = self.layers[id.index()].back_buffer_mut() {
            self.fonts.draw_str(buf, pos, s, align);
        }
    }

    pub fn draw_str_l(&mut self, pos: Coord, s: &str) {
        self.draw_str(pos, s, Alignment::Left);
    }

    pub fn draw_str_c(&mut self, pos: Coord, s: &str) {
        self.draw_str(pos, s, Alignment::Center);
    }

    pub fn draw_str_r(&mut self, pos: Coord, s: &str) {
        self.draw_str(pos, s, Alignment::Right);
    }

    // ---- flips ----

    /// Shows what was drawn into `layer`'s back buffer.
    pub fn flip_layer(&mut self, layer: LayerId) -> Result<(), DisplayError<C::Error>> {
        self.layers[layer.index()].flip(&mut self.controller).map_err(|e| {
            log::warn!("display: flip of {:?} rejected: {:?}", layer, e);
            DisplayError::Panel(e)
        })
    }

    pub fn flip_layer0(&mut self) -> Result<(), DisplayError<C::Error>> {
        self.flip_layer(LayerId::Layer0)
    }

    pub fn flip_layer1(&mut self) -> Result<(), DisplayError<C::Error>> {
        self.flip_layer(LayerId::Layer1)
    }

    // ---- panel control ----

    /// Forwarded to the controller; ignored while the panel is down.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), DisplayError<C::Error>> {
        if !self.panel_up {
            return Ok(());
        }
        self.controller.set_brightness(percent.min(100)).map_err(DisplayError::Panel)
    }

    pub fn display_on(&mut self) -> Result<(), DisplayError<C::Error>> {
        if !self.panel_up {
            return Ok(());
        }
        self.controller.display_on().map_err(DisplayError::Panel)
    }

    pub fn display_off(&mut self) -> Result<(), DisplayError<C::Error>> {
        if !self.panel_up {
            return Ok(());
        }
        self.controller.display_off().map_err(DisplayError::Panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Panel {
        inits: usize,
        deinits: usize,
        scanouts: Vec<(LayerId, usize)>,
        brightness: Option<u8>,
        fail_init: bool,
        reject_after: Option<usize>,
    }

    impl DisplayController for Panel {
        type Error = &'static str;

        fn init_panel(&mut self, _w: u16, _h: u16) -> Result<(), Self::Error> {
            if self.fail_init {
                return Err("no panel");
            }
            self.inits += 1;
            Ok(())
        }

        fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), Self::Error> {
            if self.reject_after.is_some_and(|n| self.scanouts.len() >= n) {
                return Err("scanout");
            }
            self.scanouts.push((layer, front.base_address()));
            Ok(())
        }

        fn deinit_panel(&mut self) {
            self.deinits += 1;
        }

        fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error> {
            self.brightness = Some(percent);
            Ok(())
        }
    }

    fn small() -> PanelConfig {
        PanelConfig::new(64, 32).with_builtin_fonts(true)
    }

    fn ready() -> Compositor<Panel> {
        let mut disp = Compositor::new(Panel::default(), small());
        disp.init().unwrap();
        disp
    }

    #[test]
    fn init_is_idempotent() {
        let mut disp = ready();
        assert_eq!(disp.state(), State::Ready);
        disp.init().unwrap();
        assert_eq!(disp.controller().inits, 1);
        assert_eq!(disp.controller().scanouts.len(), 2);
        assert_eq!(disp.fonts().len(), 1);
    }

    #[test]
    fn init_starts_with_nothing_selected() {
        let mut disp = ready();
        assert_eq!(disp.draw_buffer(), None);
        assert_eq!(disp.draw_color(), Argb4444::TRANSPARENT);
        assert!(disp.fonts().current().is_none());
        disp.set_draw_color(0xFFFFu16);
        disp.draw_rect_fill(Coord::new(0, 0), Coord::new(63, 31));
        for id in LayerId::ALL {
            assert_eq!(disp.back_buffer(id).unwrap().count(Argb4444::WHITE), 0);
        }
    }

    #[test]
    fn failed_panel_init_rolls_back_and_retries() {
        let mut disp = Compositor::new(Panel { fail_init: true, ..Default::default() }, small());
        assert_eq!(disp.init(), Err(DisplayError::Panel("no panel")));
        assert_eq!(disp.state(), State::Failed);
        assert_eq!(disp.controller().deinits, 0);
        assert!(disp.back_buffer(LayerId::Layer0).is_none());
    }

    #[test]
    fn failed_layer_init_tears_panel_down() {
        let panel = Panel { reject_after: Some(1), ..Default::default() };
        let mut disp = Compositor::new(panel, small());
        assert!(disp.init().is_err());
        assert_eq!(disp.state(), State::Failed);
        assert_eq!(disp.controller().deinits, 1);
        assert!(!disp.layer(LayerId::Layer0).is_initialized());
        assert!(disp.fonts().is_empty());
    }

    #[test]
    fn deinit_any_number_of_times() {
        let mut disp = ready();
        disp.deinit();
        disp.deinit();
        assert_eq!(disp.state(), State::Uninitialized);
        assert_eq!(disp.controller().deinits, 1);
        assert!(disp.fonts().is_empty());

        let mut fresh = Compositor::new(Panel::default(), small());
        fresh.deinit();
        assert_eq!(fresh.controller().deinits, 0);
    }

    #[test]
    fn draw_target_follows_flips() {
        let mut disp = ready();
        disp.set_draw_buffer(LayerId::Layer1);
        let before = disp.draw_target().unwrap().base_address();
        disp.flip_layer1().unwrap();
        let after = disp.draw_target().unwrap().base_address();
        assert_ne!(before, after);
        assert_eq!(disp.controller().scanouts.last(), Some(&(LayerId::Layer1, before)));
    }

    #[test]
    fn color_is_mirrored_into_fonts() {
        let mut disp = ready();
        disp.set_draw_color_argb(0xF, 0x1, 0x2, 0x3);
        assert_eq!(disp.draw_color().raw(), 0xF123);
        assert_eq!(disp.fonts().draw_color().raw(), 0xF123);
    }

    #[test]
    fn text_uses_selected_back_buffer() {
        let mut disp = ready();
        disp.set_draw_buffer(LayerId::Layer0);
        disp.set_draw_color(Argb4444::WHITE);
        assert_eq!(disp.draw_char(Coord::new(0, 0), 'A'), 0);
        assert!(disp.set_font_by_name("SegoeUI12pt"));
        assert_eq!(disp.draw_char(Coord::new(0, 0), 'A'), 10);
        assert!(disp.back_buffer(LayerId::Layer0).unwrap().count(Argb4444::WHITE) > 0);
        assert_eq!(disp.back_buffer(LayerId::Layer1).unwrap().count(Argb4444::WHITE), 0);
    }

    #[test]
    fn brightness_only_reaches_a_live_panel() {
        let mut disp = Compositor::new(Panel::default(), small());
        disp.set_brightness(50).unwrap();
        assert_eq!(disp.controller().brightness, None);
        disp.init().unwrap();
        disp.set_brightness(150).unwrap();
        assert_eq!(disp.controller().brightness, Some(100));
    }

    #[test]
    fn fonts_added_before_init_are_replaced() {
        use crate::font::GlyphDescriptor;
        static DESC: [GlyphDescriptor; 1] = [GlyphDescriptor::new(8, 0)];
        static BITS: [u8; 1] = [0xFF];

        let mut disp = Compositor::new(Panel::default(), small());
        disp.fonts_mut().add("Stale", &DESC, &BITS, 1, 4, 1).unwrap();
        disp.init().unwrap();

        assert_eq!(disp.fonts().len(), 1);
        assert_eq!(disp.fonts().font(0).map(|f| f.name()), Some("SegoeUI12pt"));
        assert!(!disp.set_font_by_name("Stale"));
    }

    #[test]
    fn init_applies_the_configured_color() {
        let cfg = small().with_initial_color(Argb4444::RED);
        let mut disp = Compositor::new(Panel::default(), cfg);
        disp.set_draw_color(Argb4444::BLUE);
        disp.init().unwrap();
        assert_eq!(disp.draw_color(), Argb4444::RED);
        assert_eq!(disp.fonts().draw_color(), Argb4444::RED);
    }
}
