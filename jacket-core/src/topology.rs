//! Physische Installation: Panel-Raster und LEDs pro Panel

use crate::types::ConfigError;

/// Unveränderliche Beschreibung der verbauten Panels
///
/// Die Panels bilden ein Raster aus `panel_rows × panel_columns`, jedes Panel
/// ein Raster aus `led_rows_per_panel × led_columns_per_panel` LEDs. Daraus
/// ergibt sich das logische Pixel-Raster der gesamten Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    pub panel_rows: u16,
    pub panel_columns: u16,
    pub led_rows_per_panel: u16,
    pub led_columns_per_panel: u16,
}

impl Topology {
    pub const fn new(
        panel_rows: u16,
        panel_columns: u16,
        led_rows_per_panel: u16,
        led_columns_per_panel: u16,
    ) -> Self {
        Self {
            panel_rows,
            panel_columns,
            led_rows_per_panel,
            led_columns_per_panel,
        }
    }

    /// Prüft die Dimensionen
    ///
    /// Alle vier Werte müssen positiv sein und das logische Raster muss in
    /// `u16`-Koordinaten passen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_rows == 0
            || self.panel_columns == 0
            || self.led_rows_per_panel == 0
            || self.led_columns_per_panel == 0
        {
            return Err(ConfigError::ZeroDimension);
        }
        self.panel_columns
            .checked_mul(self.led_columns_per_panel)
            .and(self.panel_rows.checked_mul(self.led_rows_per_panel))
            .map(|_| ())
            .ok_or(ConfigError::GridTooLarge)
    }

    /// Logische Breite: `panel_columns × led_columns_per_panel`
    pub const fn width(&self) -> u16 {
        self.panel_columns.wrapping_mul(self.led_columns_per_panel)
    }

    /// Logische Höhe: `panel_rows × led_rows_per_panel`
    pub const fn height(&self) -> u16 {
        self.panel_rows.wrapping_mul(self.led_rows_per_panel)
    }

    /// Anzahl der Rasterpunkte inklusive maskierter Positionen
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width() && y < self.height()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Topology {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Topology {{ panels: {}x{}, leds/panel: {}x{}, grid: {}x{} }}",
            self.panel_columns,
            self.panel_rows,
            self.led_columns_per_panel,
            self.led_rows_per_panel,
            self.width(),
            self.height()
        )
    }
}
