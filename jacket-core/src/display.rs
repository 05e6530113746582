//! LED-Jacke: Framebuffer + Renderer + Treiber hinter einer Schnittstelle
//!
//! Das ist die Fläche, die Zeichen-Code sieht. Er arbeitet nur mit logischen
//! Koordinaten und ruft danach `render()` bzw. `show()` auf.

use embedded_graphics::pixelcolor::Rgb565;

use crate::framebuffer::FrameBuffer;
use crate::render::SerpentineRenderer;
use crate::topology::Topology;
use crate::traits::{LedChain, LedError};
use crate::types::ConfigError;

/// Anzeige aus seriell verketteten LED-Panels
///
/// - `D`: Treiber der physischen Kette
/// - `N`: Rasterpunkte (`width × height`)
/// - `M`: Kapazität der Maske
///
/// Nicht thread-safe: genau ein Besitzer zeichnet und rendert. Während
/// `render()` läuft, kann der Puffer durch `&self` nicht verändert werden.
pub struct LedJacket<D, const N: usize, const M: usize> {
    frame: FrameBuffer<N>,
    renderer: SerpentineRenderer<M>,
    driver: D,
}

impl<D: LedChain, const N: usize, const M: usize> LedJacket<D, N, M> {
    /// Prüft die Konfiguration und übernimmt den Treiber
    ///
    /// Die Länge der Kette kommt aus `driver.led_count()`.
    ///
    /// # Fehlerbehandlung
    /// Jeder `ConfigError` verhindert, dass die Anzeige entsteht. Es wird
    /// nie gerendert.
    pub fn new(topology: Topology, mask: &[(u16, u16)], driver: D) -> Result<Self, ConfigError> {
        let frame = FrameBuffer::new(topology)?;
        let renderer = SerpentineRenderer::new(topology, mask, driver.led_count())?;
        Ok(Self {
            frame,
            renderer,
            driver,
        })
    }

    pub fn width(&self) -> u16 {
        self.frame.width()
    }

    pub fn height(&self) -> u16 {
        self.frame.height()
    }

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.frame.set_pixel(x, y);
    }

    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.frame.clear_pixel(x, y);
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.frame.get_pixel(x, y)
    }

    pub fn set_foreground_color(&mut self, color: Rgb565) {
        self.frame.set_foreground_color(color);
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.frame.set_background_color(color);
    }

    /// Framebuffer als `DrawTarget` für embedded-graphics
    pub fn frame_mut(&mut self) -> &mut FrameBuffer<N> {
        &mut self.frame
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn renderer(&self) -> &SerpentineRenderer<M> {
        &self.renderer
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Schreibt den Framebuffer in Ketten-Reihenfolge in den Treiber
    ///
    /// Gibt die Anzahl geschriebener LEDs zurück (immer `total_leds`).
    pub fn render(&mut self) -> usize {
        self.renderer.render(&self.frame, &mut self.driver)
    }

    /// Überträgt die gesammelten Farben an die Hardware
    pub fn transmit(&mut self) -> Result<(), LedError> {
        self.driver.transmit()
    }

    /// `render()` gefolgt von `transmit()`: ein Refresh-Zyklus
    pub fn show(&mut self) -> Result<(), LedError> {
        self.render();
        self.transmit()
    }
}
