//! Inbetriebnahme: einzelne LEDs der Kette gezielt ansteuern
//!
//! Umgeht Framebuffer und Maske. Damit lässt sich die Verkabelung LED für
//! LED gegen die erwartete Serpentinen-Reihenfolge prüfen.

use rgb::RGB8;

use crate::traits::{LedChain, LedError};

/// Schaltet genau eine LED auf `on`, alle anderen auf `off`, und überträgt
///
/// # Fehlerbehandlung
/// - `IndexOutOfRange` wenn `index` nicht in der Kette liegt (nichts wird
///   geschrieben)
/// - Fehler aus `transmit()` werden weitergereicht
pub fn light_single<D: LedChain>(
    driver: &mut D,
    index: usize,
    on: RGB8,
    off: RGB8,
) -> Result<(), LedError> {
    let count = driver.led_count();
    if index >= count {
        return Err(LedError::IndexOutOfRange);
    }
    for i in 0..count {
        driver.set_color(i, if i == index { on } else { off });
    }
    driver.transmit()
}
