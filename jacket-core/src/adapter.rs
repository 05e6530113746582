//! Adapter: `LedChain` über einem beliebigen `SmartLedsWrite`-Treiber
//!
//! Sammelt die Farben aller `N` LEDs und schreibt sie bei `transmit()` in
//! einem Rutsch auf den Bus (RMT, SPI, Bitbang, ...).

use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::traits::{LedChain, LedError};

/// LED-Kette mit Zwischenspeicher für `N` Farben
pub struct StagedChain<W, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
}

impl<W, const N: usize> StagedChain<W, N> {
    /// Alle LEDs starten aus (schwarz)
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [RGB8::default(); N],
        }
    }

    /// Zuletzt gesetzte Farben in Ketten-Reihenfolge
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W, const N: usize> LedChain for StagedChain<W, N>
where
    W: SmartLedsWrite<Color = RGB8> + Send,
{
    fn led_count(&self) -> usize {
        N
    }

    fn set_color(&mut self, index: usize, color: RGB8) {
        debug_assert!(index < N, "physical index {} outside chain of {}", index, N);
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn transmit(&mut self) -> Result<(), LedError> {
        self.writer
            .write(self.pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
