//! Serpentinen-Renderer: logisches Raster → Reihenfolge der LED-Kette
//!
//! ```text
//!        Panel-Spalte 0         Panel-Spalte 1
//!  y=0   ─────────►┐            ┌─────────► Ende
//!  y=1   ┌◄────────┘            └◄────────┐
//!  y=2   └────────►┐            ┌────────►┘
//!  y=3   ┌◄────────┘            └◄────────┐
//!        │                                │
//!        └────────────────────────────────┘
//! ```
//!
//! Jede zweite Panel-Spalte läuft von unten nach oben, jede ungerade Zeile
//! von rechts nach links. Beides ist durch die Verlötung vorgegeben.

use crate::color::rgb565_to_rgb8;
use crate::framebuffer::FrameBuffer;
use crate::mask::MaskSet;
use crate::topology::Topology;
use crate::traits::LedChain;
use crate::types::{ConfigError, Coord};

/// Setzt den Framebuffer in Schreibbefehle für die Kette um
///
/// Topologie, Maske und LED-Anzahl werden einmal beim Erzeugen geprüft.
/// Danach kann `render` nicht mehr fehlschlagen und trägt keinen Zustand
/// von einem Durchlauf zum nächsten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpentineRenderer<const M: usize> {
    topology: Topology,
    mask: MaskSet<M>,
    total_leds: usize,
}

impl<const M: usize> SerpentineRenderer<M> {
    /// Prüft die komplette Konfiguration gegen die Länge der Kette
    ///
    /// # Fehlerbehandlung
    /// - Fehler aus `Topology::validate` und `MaskSet::new`
    /// - `ChainLengthMismatch` wenn `width × height − |Maske|` nicht
    ///   `chain_length` ergibt
    pub fn new(
        topology: Topology,
        mask: &[(u16, u16)],
        chain_length: usize,
    ) -> Result<Self, ConfigError> {
        topology.validate()?;
        let mask = MaskSet::new(&topology, mask)?;
        let total_leds = topology.pixel_count() - mask.len();
        if total_leds != chain_length {
            return Err(ConfigError::ChainLengthMismatch {
                expected: total_leds,
                actual: chain_length,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Renderer: {}, {} masked, {} LEDs",
            topology,
            mask.len(),
            total_leds
        );

        Ok(Self {
            topology,
            mask,
            total_leds,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn mask(&self) -> &MaskSet<M> {
        &self.mask
    }

    /// Anzahl physischer LEDs: `width × height − |Maske|`
    pub fn total_leds(&self) -> usize {
        self.total_leds
    }

    /// Logische Koordinaten in der Reihenfolge der Kette
    ///
    /// Das n-te Element gehört zum physischen Index n. Maskierte Positionen
    /// fehlen.
    pub fn physical_order(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.topology.pixel_count())
            .map(|step| serpentine_coord(&self.topology, step))
            .filter(|&coord| !self.mask.contains(coord))
    }

    /// Koordinate der LED an `physical_index`
    pub fn coord_of(&self, physical_index: usize) -> Option<Coord> {
        self.physical_order().nth(physical_index)
    }

    /// Physischer Index der LED an `(x, y)`, `None` für maskierte oder
    /// ungültige Positionen
    pub fn physical_index_of(&self, x: u16, y: u16) -> Option<usize> {
        let target = Coord::new(x, y);
        self.physical_order().position(|coord| coord == target)
    }

    /// Ein vollständiger Render-Durchlauf
    ///
    /// Ruft `set_color` genau einmal pro LED auf, mit aufsteigenden Indizes
    /// `0..total_leds`. Überträgt nichts; das macht der Aufrufer mit
    /// `transmit()`.
    ///
    /// `frame` muss mit derselben Topologie erzeugt worden sein.
    pub fn render<D: LedChain, const N: usize>(
        &self,
        frame: &FrameBuffer<N>,
        driver: &mut D,
    ) -> usize {
        let fallback = frame.background_color();
        let mut physical_index = 0;
        for coord in self.physical_order() {
            let color = frame.pixel_at(coord).unwrap_or(fallback);
            driver.set_color(physical_index, rgb565_to_rgb8(color));
            physical_index += 1;
        }
        debug_assert_eq!(physical_index, self.total_leds);
        physical_index
    }
}

/// Koordinate des `step`-ten Rasterpunkts entlang der Verdrahtung
///
/// Schleifen von außen nach innen: Panel-Spalte, Zeile über die volle Höhe,
/// LED-Spalte innerhalb des Panels.
fn serpentine_coord(topology: &Topology, step: usize) -> Coord {
    let height = usize::from(topology.height());
    let columns = usize::from(topology.led_columns_per_panel);
    let per_panel_column = height * columns;

    let panel_column = step / per_panel_column;
    let row_step = (step % per_panel_column) / columns;
    let column_step = step % columns;

    // jede zweite Panel-Spalte läuft von unten nach oben
    let row = if panel_column % 2 == 1 {
        height - 1 - row_step
    } else {
        row_step
    };
    // jede ungerade Zeile läuft von rechts nach links
    let led_column = if row % 2 == 1 {
        columns - 1 - column_step
    } else {
        column_step
    };

    // passt in u16, Topology::validate hat das Raster geprüft
    Coord::new((panel_column * columns + led_column) as u16, row as u16)
}
