//! Double-buffered display layer.
//!
//! Each layer owns two frame buffers. The front one belongs to the display
//! hardware, which scans it out; the back one belongs to the renderer. Only the
//! back buffer is ever handed out, and [`DoubleBufferLayer::flip`] is the only
//! thing that changes which is which, so the renderer can never draw into the
//! buffer being displayed.

use crate::controller::{DisplayController, LayerId};
use crate::framebuffer::FrameBuffer;

/// Position of a buffer within the pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Slot0 = 0,
    Slot1 = 1,
}

impl Slot {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Slot::Slot0 => Slot::Slot1,
            Slot::Slot1 => Slot::Slot0,
        }
    }
}

struct Buffers {
    slots: [FrameBuffer; 2],
    // back is always `front.other()`
    front: Slot,
}

pub struct DoubleBufferLayer {
    id: LayerId,
    buffers: Option<Buffers>,
}

impl DoubleBufferLayer {
    pub const fn new(id: LayerId) -> Self {
        Self { id, buffers: None }
    }

    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.buffers.is_some()
    }

    /// Allocates both buffers and points the controller at slot 0.
    ///
    /// A no-op if the layer is already initialized. On failure nothing stays
    /// allocated.
    pub fn init<C: DisplayController>(
        &mut self,
        controller: &mut C,
        width: u16,
        height: u16,
    ) -> Result<(), C::Error> {
        if self.buffers.is_some() {
            return Ok(());
        }

        let slots = [FrameBuffer::new(width, height), FrameBuffer::new(width, height)];
        controller.set_scanout(self.id, &slots[Slot::Slot0 as usize])?;

        log::debug!(
            "layer {:?}: buffers at {:#x} / {:#x}",
            self.id,
            slots[0].base_address(),
            slots[1].base_address()
        );
        self.buffers = Some(Buffers { slots, front: Slot::Slot0 });
        Ok(())
    }

    /// Releases both buffers.
    pub fn deinit(&mut self) {
        self.buffers = None;
    }

    pub fn front_slot(&self) -> Option<Slot> {
        self.buffers.as_ref().map(|b| b.front)
    }

    pub fn back_slot(&self) -> Option<Slot> {
        self.buffers.as_ref().map(|b| b.front.other())
    }

    /// Address the hardware is currently scanning out.
    pub fn front_address(&self) -> Option<usize> {
        self.buffers.as_ref().map(|b| b.slots[b.front as usize].base_address())
    }

    /// The renderer-owned buffer; stable until the next flip.
    pub fn back_buffer(&self) -> Option<&FrameBuffer> {
        self.buffers.as_ref().map(|b| &b.slots[b.front.other() as usize])
    }

    pub fn back_buffer_mut(&mut self) -> Option<&mut FrameBuffer> {
        self.buffers.as_mut().map(|b| &mut b.slots[b.front.other() as usize])
    }

    /// Hands the back buffer to the hardware and takes the old front back.
    ///
    /// Does not wait for vertical blank: the caller must not flip faster than
    /// the panel refreshes. If the controller rejects the new buffer the roles
    /// stay as they were. Uninitialized layers ignore the call.
    pub fn flip<C: DisplayController>(&mut self, controller: &mut C) -> Result<(), C::Error> {
        let Some(b) = self.buffers.as_mut() else {
            return Ok(());
        };

        let next = b.front.other();
        controller.set_scanout(self.id, &b.slots[next as usize])?;
        b.front = next;

        log::trace!("layer {:?}: front -> {:?}", self.id, next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Scanouts {
        log: Vec<(LayerId, usize)>,
        reject: bool,
    }

    impl DisplayController for Scanouts {
        type Error = ();

        fn init_panel(&mut self, _w: u16, _h: u16) -> Result<(), ()> {
            Ok(())
        }

        fn set_scanout(&mut self, layer: LayerId, front: &FrameBuffer) -> Result<(), ()> {
            if self.reject {
                return Err(());
            }
            self.log.push((layer, front.base_address()));
            Ok(())
        }

        fn deinit_panel(&mut self) {}
    }

    #[test]
    fn init_scans_out_slot0() {
        let mut ctrl = Scanouts::default();
        let mut layer = DoubleBufferLayer::new(LayerId::Layer1);
        layer.init(&mut ctrl, 16, 8).unwrap();

        assert_eq!(layer.front_slot(), Some(Slot::Slot0));
        assert_eq!(layer.back_slot(), Some(Slot::Slot1));
        assert_eq!(ctrl.log, [(LayerId::Layer1, layer.front_address().unwrap())]);
        assert_ne!(layer.back_buffer().unwrap().base_address(), ctrl.log[0].1);
    }

    #[test]
    fn flip_alternates_back_buffer() {
        let mut ctrl = Scanouts::default();
        let mut layer = DoubleBufferLayer::new(LayerId::Layer0);
        layer.init(&mut ctrl, 16, 8).unwrap();

        let mut backs = Vec::new();
        for _ in 0..4 {
            let back = layer.back_buffer().unwrap().base_address();
            layer.flip(&mut ctrl).unwrap();
            // the buffer we drew into is now what the hardware shows
            assert_eq!(ctrl.log.last().unwrap().1, back);
            assert_ne!(layer.back_buffer().unwrap().base_address(), back);
            backs.push(back);
        }
        assert_eq!(backs[0], backs[2]);
        assert_eq!(backs[1], backs[3]);
        assert_ne!(backs[0], backs[1]);
    }

    #[test]
    fn rejected_flip_keeps_roles() {
        let mut ctrl = Scanouts::default();
        let mut layer = DoubleBufferLayer::new(LayerId::Layer0);
        layer.init(&mut ctrl, 4, 4).unwrap();

        ctrl.reject = true;
        assert!(layer.flip(&mut ctrl).is_err());
        assert_eq!(layer.front_slot(), Some(Slot::Slot0));
    }

    #[test]
    fn failed_init_allocates_nothing() {
        let mut ctrl = Scanouts { reject: true, ..Default::default() };
        let mut layer = DoubleBufferLayer::new(LayerId::Layer0);
        assert!(layer.init(&mut ctrl, 4, 4).is_err());
        assert!(!layer.is_initialized());
        assert!(layer.back_buffer().is_none());
    }

    #[test]
    fn uninitialized_layer_is_inert() {
        let mut ctrl = Scanouts::default();
        let mut layer = DoubleBufferLayer::new(LayerId::Layer0);
        assert!(layer.back_buffer_mut().is_none());
        assert_eq!(layer.flip(&mut ctrl), Ok(()));
        assert!(ctrl.log.is_empty());
    }
}
