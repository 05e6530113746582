//! Positionen ohne physische LED (Nähte, Träger, Ausschnitte)

use heapless::Vec;

use crate::topology::Topology;
use crate::types::{ConfigError, Coord};

/// Menge der logischen Koordinaten ohne LED
///
/// Die Einträge werden sortiert und ohne Duplikate in einem Array fester
/// Kapazität `M` abgelegt. Doppelte Einträge in der Konfiguration zählen
/// nur einmal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSet<const M: usize> {
    entries: Vec<Coord, M>,
}

impl<const M: usize> MaskSet<M> {
    /// Leere Maske: jede Rasterposition trägt eine LED
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Baut die Maske aus `(x, y)`-Paaren und prüft sie gegen die Topologie
    ///
    /// # Fehlerbehandlung
    /// - `MaskOutOfBounds` für Koordinaten außerhalb des Rasters
    /// - `MaskCapacityExceeded` wenn mehr als `M` eindeutige Einträge vorliegen
    pub fn new(topology: &Topology, coords: &[(u16, u16)]) -> Result<Self, ConfigError> {
        let mut entries = Vec::new();
        for &(x, y) in coords {
            if !topology.contains(x, y) {
                return Err(ConfigError::MaskOutOfBounds { x, y });
            }
            let coord = Coord::new(x, y);
            if let Err(position) = entries.binary_search(&coord) {
                entries
                    .insert(position, coord)
                    .map_err(|_| ConfigError::MaskCapacityExceeded { capacity: M })?;
            }
        }
        Ok(Self { entries })
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.binary_search(&coord).is_ok()
    }

    /// Anzahl eindeutiger maskierter Positionen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.iter().copied()
    }
}

/// Anzahl eindeutiger Paare in einer Masken-Tabelle, auch zur Compile-Zeit
///
/// ```
/// # use jacket_core::mask::unique_len;
/// const TABLE: [(u16, u16); 3] = [(0, 13), (1, 13), (0, 13)];
/// const UNIQUE: usize = unique_len(&TABLE);
/// assert_eq!(UNIQUE, 2);
/// ```
pub const fn unique_len(coords: &[(u16, u16)]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < coords.len() {
        let mut seen = false;
        let mut j = 0;
        while j < i {
            if coords[j].0 == coords[i].0 && coords[j].1 == coords[i].1 {
                seen = true;
                break;
            }
            j += 1;
        }
        if !seen {
            count += 1;
        }
        i += 1;
    }
    count
}

impl<const M: usize> Default for MaskSet<M> {
    fn default() -> Self {
        Self::empty()
    }
}
