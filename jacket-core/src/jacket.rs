//! Vorkonfiguration: Rückenteil der LED-Jacke
//!
//! 2 × 5 Panels mit je 16 × 8 LEDs ergeben ein Raster von 40 × 32 Pixeln.
//! Oben links und oben rechts fehlen dreieckige Bereiche (Halsausschnitt).

use crate::display::LedJacket;
use crate::mask::unique_len;
use crate::topology::Topology;

/// Geometrie des Rückenteils
pub const JACKET_BACK_TOPOLOGY: Topology = Topology::new(2, 5, 16, 8);

/// Rasterpunkte inklusive Ausschnitt
pub const JACKET_BACK_PIXELS: usize = JACKET_BACK_TOPOLOGY.pixel_count();

/// Kapazität der Maske (Länge der Tabelle, Duplikate eingeschlossen)
pub const JACKET_BACK_MASK_CAPACITY: usize = JACKET_BACK_MASK.len();

/// Verbaute LEDs in der Kette
pub const JACKET_BACK_LED_COUNT: usize = JACKET_BACK_PIXELS - unique_len(&JACKET_BACK_MASK);

/// Positionen ohne LED, wie verkabelt
///
/// `(0, 13)` und `(39, 13)` stehen doppelt in der Tabelle. Die Maske ist eine
/// Menge, deshalb zählen sie nur einmal.
#[rustfmt::skip]
pub const JACKET_BACK_MASK: [(u16, u16); 128] = [
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0),
    (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1),
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4),
    (0, 5), (1, 5), (2, 5), (3, 5), (4, 5),
    (0, 6), (1, 6), (2, 6), (3, 6), (4, 6),
    (0, 7), (1, 7), (2, 7), (3, 7),
    (0, 8), (1, 8), (2, 8), (3, 8),
    (0, 9), (1, 9), (2, 9),
    (0, 10), (1, 10), (2, 10),
    (0, 11), (1, 11),
    (0, 12), (1, 12),
    (0, 13),
    (0, 13),
    (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0),
    (33, 1), (34, 1), (35, 1), (36, 1), (37, 1), (38, 1), (39, 1),
    (33, 2), (34, 2), (35, 2), (36, 2), (37, 2), (38, 2), (39, 2),
    (34, 3), (35, 3), (36, 3), (37, 3), (38, 3), (39, 3),
    (34, 4), (35, 4), (36, 4), (37, 4), (38, 4), (39, 4),
    (35, 5), (36, 5), (37, 5), (38, 5), (39, 5),
    (35, 6), (36, 6), (37, 6), (38, 6), (39, 6),
    (36, 7), (37, 7), (38, 7), (39, 7),
    (36, 8), (37, 8), (38, 8), (39, 8),
    (37, 9), (38, 9), (39, 9),
    (37, 10), (38, 10), (39, 10),
    (38, 11), (39, 11),
    (38, 12), (39, 12),
    (39, 13),
    (39, 13),
];

/// LED-Jacke mit der Geometrie des Rückenteils
pub type JacketBack<D> = LedJacket<D, JACKET_BACK_PIXELS, JACKET_BACK_MASK_CAPACITY>;
