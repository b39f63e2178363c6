//! Dual-layer LCD compositor.
//!
//! Two double-buffered ARGB4444 layers, a primitive rasterizer, packed bitmap
//! fonts and a [`Compositor`] that ties them to a [`DisplayController`].
//! The library is `no_std` + `alloc`; board support for the ESP32-S3 CO5300
//! AMOLED lives behind the `esp32s3` feature.

#![cfg_attr(not(test), no_std)]

pub mod compositor;
pub mod config;
pub mod controller;
pub mod error;
pub mod font;
pub mod fonts;
pub mod framebuffer;
pub mod geometry;
pub mod layer;
pub mod panel;
pub mod pixel;
pub mod raster;
pub mod registry;

#[cfg(feature = "esp32s3")]
pub mod display;
#[cfg(feature = "esp32s3")]
pub mod logging;
#[cfg(feature = "esp32s3")]
pub mod wiring;

pub use compositor::{Compositor, State};
pub use config::PanelConfig;
pub use controller::{DisplayController, LayerId};
pub use error::{DisplayError, RegistryFull};
pub use font::{BitOrder, Font, GlyphDescriptor};
pub use framebuffer::FrameBuffer;
pub use geometry::Coord;
pub use pixel::Argb4444;
pub use registry::{Alignment, FontRegistry};
