//! Jacket Core - Geometrie und Rendering für verkettete LED-Panels
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie bildet das logische Pixel-Raster auf die Reihenfolge der seriellen
//! LED-Kette ab und spricht die Hardware nur über den `LedChain` Trait an.

#![no_std]

pub mod adapter;
pub mod color;
pub mod diagnostics;
pub mod display;
pub mod framebuffer;
pub mod jacket;
pub mod mask;
pub mod render;
pub mod topology;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use adapter::StagedChain;
pub use color::rgb565_to_rgb8;
pub use diagnostics::light_single;
pub use display::LedJacket;
pub use framebuffer::FrameBuffer;
pub use jacket::{
    JACKET_BACK_LED_COUNT, JACKET_BACK_MASK, JACKET_BACK_MASK_CAPACITY, JACKET_BACK_PIXELS,
    JACKET_BACK_TOPOLOGY, JacketBack,
};
pub use mask::MaskSet;
pub use render::SerpentineRenderer;
pub use topology::Topology;
pub use traits::{LedChain, LedError};
pub use types::{ConfigError, Coord};
