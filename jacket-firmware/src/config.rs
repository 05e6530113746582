// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die Geometrie der Jacke (Panels, Maske, LED-Anzahl) steht in
// jacket_core::jacket und wird hier nur übernommen.

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// LED-Kette
// ============================================================================

/// GPIO-Pin für die Datenleitung der Kette (WS2812)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs in der Kette (Rückenteil ohne Ausschnitt)
pub const LED_COUNT: usize = jacket_core::JACKET_BACK_LED_COUNT;

/// RMT-Pulse pro Kette: 24 Bit pro LED + 1 Reset
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// Refresh
// ============================================================================

/// Abstand zwischen zwei Refresh-Zyklen (render + transmit) in Millisekunden
/// Eine Übertragung von 1154 LEDs dauert ca. 35 ms
pub const REFRESH_INTERVAL_MS: u64 = 50;

// ============================================================================
// Inbetriebnahme
// ============================================================================

/// Beim Start jede LED einzeln durchlaufen (Verkabelung prüfen)
pub const CHAIN_TEST_ON_BOOT: bool = false;

/// Verweildauer pro LED beim Ketten-Test in Millisekunden
pub const CHAIN_TEST_STEP_MS: u64 = 50;

/// Helligkeit der aktiven LED beim Ketten-Test (0-255)
/// Wert ist gedimmt, 1154 LEDs an einem Netzteil
pub const CHAIN_TEST_BRIGHTNESS: u8 = 32;

// ============================================================================
// Farben
// ============================================================================

/// Vordergrundfarbe (set_pixel), gedimmtes Grün
pub const FOREGROUND_COLOR: Rgb565 = Rgb565::new(0, 16, 0);

/// Hintergrundfarbe (clear, clear_pixel)
pub const BACKGROUND_COLOR: Rgb565 = Rgb565::new(0, 0, 0);
