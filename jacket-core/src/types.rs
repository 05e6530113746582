//! Core Types für die Jacken-Geometrie
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Logische Koordinate `(x, y)` im Pixel-Raster
///
/// `(0, 0)` ist oben links, `x` wächst nach rechts, `y` nach unten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Coord {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Fehler-Typ für ungültige Konfiguration
///
/// Wird einmalig beim Start erkannt. Ein Gerät mit fehlerhafter Konfiguration
/// darf seine Render-Schleife nicht betreten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Mindestens eine Panel- oder LED-Dimension ist 0
    ZeroDimension,
    /// Breite oder Höhe des Rasters passt nicht in `u16`
    GridTooLarge,
    /// Maskierte Koordinate liegt außerhalb des Rasters
    MaskOutOfBounds { x: u16, y: u16 },
    /// Mehr eindeutige Masken-Einträge als Kapazität vorhanden
    MaskCapacityExceeded { capacity: usize },
    /// Framebuffer-Größe passt nicht zu `width × height`
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Berechnete LED-Anzahl passt nicht zur Länge der physischen Kette
    ChainLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => f.write_str("panel and LED dimensions must be positive"),
            Self::GridTooLarge => f.write_str("logical grid does not fit in u16 coordinates"),
            Self::MaskOutOfBounds { x, y } => {
                write!(f, "mask coordinate ({x}, {y}) is outside the grid")
            }
            Self::MaskCapacityExceeded { capacity } => {
                write!(f, "more than {capacity} unique mask coordinates")
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "frame buffer holds {actual} pixels, grid needs {expected}")
            }
            Self::ChainLengthMismatch { expected, actual } => {
                write!(f, "chain has {actual} LEDs, configuration needs {expected}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Coord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "({}, {})", self.x, self.y)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::ZeroDimension => defmt::write!(fmt, "ZeroDimension"),
            ConfigError::GridTooLarge => defmt::write!(fmt, "GridTooLarge"),
            ConfigError::MaskOutOfBounds { x, y } => {
                defmt::write!(fmt, "MaskOutOfBounds {{ x: {}, y: {} }}", x, y)
            }
            ConfigError::MaskCapacityExceeded { capacity } => {
                defmt::write!(fmt, "MaskCapacityExceeded {{ capacity: {} }}", capacity)
            }
            ConfigError::BufferSizeMismatch { expected, actual } => {
                defmt::write!(
                    fmt,
                    "BufferSizeMismatch {{ expected: {}, actual: {} }}",
                    expected,
                    actual
                )
            }
            ConfigError::ChainLengthMismatch { expected, actual } => {
                defmt::write!(
                    fmt,
                    "ChainLengthMismatch {{ expected: {}, actual: {} }}",
                    expected,
                    actual
                )
            }
        }
    }
}
