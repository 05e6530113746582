//! Framebuffer im logischen Koordinatensystem
//!
//! Zeichen-Code schreibt nur hierher; der Renderer liest den Puffer und kennt
//! als einziger die Reihenfolge der Kette.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, RgbColor, Size};

use crate::topology::Topology;
use crate::types::{ConfigError, Coord};

/// 2D-Raster gepackter Farben, zeilenweise abgelegt (`index = y * width + x`)
///
/// `N` muss genau `width × height` der Topologie sein. Der Puffer wird nie
/// vergrößert oder verkleinert.
///
/// Vorder- und Hintergrundfarbe gehören zum Zeichenkontext: `set_pixel`
/// schreibt die Vordergrundfarbe, `clear_pixel` und `clear` die
/// Hintergrundfarbe.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb565; N],
    width: u16,
    height: u16,
    foreground: Rgb565,
    background: Rgb565,
}

impl<const N: usize> FrameBuffer<N> {
    /// Erstellt einen Puffer in Hintergrundfarbe (schwarz)
    ///
    /// # Fehlerbehandlung
    /// `BufferSizeMismatch` wenn `N` nicht zur Topologie passt.
    pub fn new(topology: Topology) -> Result<Self, ConfigError> {
        topology.validate()?;
        if topology.pixel_count() != N {
            return Err(ConfigError::BufferSizeMismatch {
                expected: topology.pixel_count(),
                actual: N,
            });
        }
        Ok(Self {
            pixels: [Rgb565::BLACK; N],
            width: topology.width(),
            height: topology.height(),
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn foreground_color(&self) -> Rgb565 {
        self.foreground
    }

    pub fn background_color(&self) -> Rgb565 {
        self.background
    }

    pub fn set_foreground_color(&mut self, color: Rgb565) {
        self.foreground = color;
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.background = color;
    }

    /// Setzt jedes Pixel auf die Hintergrundfarbe
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Setzt jedes Pixel auf `color`
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Schreibt die Vordergrundfarbe; außerhalb des Rasters passiert nichts
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.write(x, y, self.foreground);
    }

    /// Schreibt die Hintergrundfarbe; außerhalb des Rasters passiert nichts
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.write(x, y, self.background);
    }

    /// Liest ein Pixel, `None` außerhalb des Rasters
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    /// Roher Pufferinhalt in Zeilenreihenfolge
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    pub(crate) fn pixel_at(&self, coord: Coord) -> Option<Rgb565> {
        self.get_pixel(coord.x.into(), coord.y.into())
    }

    fn write(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u16::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

impl<const N: usize> OriginDimensions for FrameBuffer<N> {
    fn size(&self) -> Size {
        Size::new(self.width.into(), self.height.into())
    }
}

/// Anbindung an embedded-graphics: Primitive und Text zeichnen direkt in den
/// Puffer, Pixel außerhalb werden wie bei `set_pixel` verworfen.
impl<const N: usize> DrawTarget for FrameBuffer<N> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.write(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
