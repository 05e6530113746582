//! Hardware Abstraction Traits
//!
//! Schnittstelle zur physischen LED-Kette ohne konkrete Implementierung.
//! Der Renderer kennt nur diesen Trait, nie den Bus dahinter.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Übertragung an die Kette fehlgeschlagen
    WriteFailed,
    /// Hardware-Initialisierung fehlgeschlagen
    InitFailed,
    /// Physischer Index außerhalb der Kette
    IndexOutOfRange,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WriteFailed => f.write_str("LED transmission failed"),
            Self::InitFailed => f.write_str("LED driver initialization failed"),
            Self::IndexOutOfRange => f.write_str("physical LED index out of range"),
        }
    }
}

impl core::error::Error for LedError {}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::InitFailed => defmt::write!(fmt, "InitFailed"),
            LedError::IndexOutOfRange => defmt::write!(fmt, "IndexOutOfRange"),
        }
    }
}

/// Trait für eine serielle LED-Kette (WS2812/Neopixel)
///
/// Farben werden erst gesammelt (`set_color`) und dann in einem Rutsch
/// übertragen (`transmit`).
///
/// # Implementierungen
/// - **Production:** `StagedChain` über dem RMT-Adapter (ESP32)
/// - **Testing:** `MockLedChain` (in-memory Mock)
pub trait LedChain: Send {
    /// Anzahl der LEDs, für die der Treiber gebaut wurde
    fn led_count(&self) -> usize;

    /// Setzt die Farbe der LED an `index` im Zwischenspeicher
    ///
    /// `index` muss in `0..led_count()` liegen; alles andere ist ein
    /// Programmierfehler.
    fn set_color(&mut self, index: usize, color: RGB8);

    /// Überträgt alle gesammelten Farben an die Kette
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn der Bus-Transfer fehlschlägt.
    /// Retry-Strategie entscheidet der Aufrufer.
    fn transmit(&mut self) -> Result<(), LedError>;
}
