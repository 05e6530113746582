// RMT-Anbindung der LED-Kette
//
// Bindet den LedChain Trait aus jacket-core an das RMT Peripheral des ESP32-C6.
// Die Kette selbst (Zwischenspeicher + Übertragung) ist StagedChain aus dem
// Core; hier wird nur der SmartLED-Adapter gebaut.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use jacket_core::{LedError, StagedChain};

use crate::config::{LED_BUFFER_SIZE, LED_COUNT};

/// LED-Kette der Jacke über RMT Kanal 0
pub type RmtLedChain<'a> = StagedChain<SmartLedsAdapter<'a, LED_BUFFER_SIZE>, LED_COUNT>;

/// Erstellt die RMT-Kette
///
/// # Parameter
/// - `data_pin`: GPIO8 Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral
/// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
/// - `buffer`: Puls-Buffer (erstellt mit smart_led_buffer!(LED_COUNT) Macro)
///
/// # Fehlerbehandlung
/// `LedError::InitFailed` wenn das RMT Peripheral nicht konfiguriert werden kann
pub fn rmt_led_chain<'a>(
    data_pin: esp_hal::peripherals::GPIO8<'a>,
    rmt_peripheral: esp_hal::peripherals::RMT<'a>,
    rmt_clock_mhz: u32,
    buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
) -> Result<RmtLedChain<'a>, LedError> {
    let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
        .map_err(|_| LedError::InitFailed)?;

    let adapter = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

    Ok(StagedChain::new(adapter))
}
