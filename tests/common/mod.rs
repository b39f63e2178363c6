use std::cell::Cell;

use lcd_compositor::{DisplayController, FrameBuffer, LayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Init(u16, u16),
    Scanout(LayerId, usize),
    Deinit,
    Brightness(u8),
    On,
    Off,
}

/// Records every controller call. The failure switches can be flipped
/// through `Compositor::controller()` while the compositor owns it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    pub fail_init: Cell<bool>,
    pub reject_scanouts: Cell<bool>,
}

impl Recorder {
    pub fn scanouts(&self) -> Vec<(LayerId, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Scanout(l, a) => Some((*l, *a)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, ev: &Event) -> usize {
        self.events.iter().filter(|e| *e == ev).count()
    }
}

impl DisplayController for Recorder {
    type Error = &'static str;

    fn init_panel(&mut self, width: u16, height: u16) -> Result<(), Self::Error> {
        if self.fail_init.get() {
            return Err("panel did not answer");
        }
        self.events.push(Event::Init(width, height));
        Ok(())
    }

    fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), Self::Error> {
        if self.reject_scanouts.get() {
            return Err("scanout rejected");
        }
        self.events.push(Event::Scanout(layer, front.base_address()));
        Ok(())
    }

    fn deinit_panel(&mut self) {
        self.events.push(Event::Deinit);
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Brightness(percent));
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::On);
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Off);
        Ok(())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
