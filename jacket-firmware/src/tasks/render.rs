// Render Task - Refresh-Schleife der LED-Jacke
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use esp_hal::rmt::PulseCode;
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;
use static_cell::StaticCell;

use crate::config::{
    BACKGROUND_COLOR, CHAIN_TEST_BRIGHTNESS, CHAIN_TEST_ON_BOOT, CHAIN_TEST_STEP_MS,
    FOREGROUND_COLOR, LED_BUFFER_SIZE, LED_COUNT, REFRESH_INTERVAL_MS, RMT_CLOCK_MHZ,
};
use crate::hal::rmt_led_chain;
use crate::{JACKET_BACK_MASK, JACKET_BACK_TOPOLOGY, JacketBack, LedChain, light_single};

/// Ketten-Test - jede LED einzeln in Ketten-Reihenfolge
///
/// Loggt zu jedem physischen Index die logische Koordinate. Stimmt das
/// Leuchten nicht mit dem Log überein, ist Maske oder Verdrahtung falsch.
pub async fn run_chain_test<D: LedChain>(jacket: &mut JacketBack<D>) {
    let on = RGB8 {
        r: CHAIN_TEST_BRIGHTNESS,
        g: CHAIN_TEST_BRIGHTNESS,
        b: CHAIN_TEST_BRIGHTNESS,
    };
    let off = RGB8::default();
    let total = jacket.renderer().total_leds();

    info!("Chain test: {} LEDs", total);

    for index in 0..total {
        if let Some(coord) = jacket.renderer().coord_of(index) {
            info!("Chain test: LED {} -> {}", index, coord);
        }
        if let Err(e) = light_single(jacket.driver_mut(), index, on, off) {
            warn!("Chain test: LED {} failed: {}", index, e);
        }
        Timer::after(Duration::from_millis(CHAIN_TEST_STEP_MS)).await;
    }

    info!("Chain test done");
}

/// Statisches Startbild: Rahmen und beide Diagonalen
///
/// Pixel im Ausschnitt werden mitgezeichnet, aber nie ausgegeben.
pub fn draw_boot_pattern<D: LedChain>(jacket: &mut JacketBack<D>) {
    jacket.clear();

    let style = PrimitiveStyle::with_stroke(FOREGROUND_COLOR, 1);
    let size = jacket.frame().size();
    let corner = Point::new(size.width as i32 - 1, size.height as i32 - 1);

    let Ok(()) = Rectangle::new(Point::zero(), size)
        .into_styled(style)
        .draw(jacket.frame_mut());
    let Ok(()) = Line::new(Point::zero(), corner)
        .into_styled(style)
        .draw(jacket.frame_mut());
    let Ok(()) = Line::new(Point::new(0, corner.y), Point::new(corner.x, 0))
        .into_styled(style)
        .draw(jacket.frame_mut());
}

/// Refresh-Schleife - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf genau ein `show()` (render + transmit), danach gibt der
/// Task die CPU bis zum nächsten Zyklus ab. Übertragungsfehler werden
/// geloggt, der nächste Zyklus versucht es erneut.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `D: LedChain` ermöglicht:
/// - Real Hardware (RmtLedChain) im Production-Code
/// - Mock Implementation in Tests
pub async fn render_logic<D: LedChain>(jacket: &mut JacketBack<D>) {
    let mut failures: u32 = 0;

    loop {
        match jacket.show() {
            Ok(()) if failures > 0 => {
                info!("Transmit recovered after {} failed frames", failures);
                failures = 0;
            }
            Ok(()) => {}
            Err(e) => {
                if failures == 0 {
                    error!("Transmit failed: {}", e);
                }
                failures = failures.saturating_add(1);
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
    }
}

/// Render Task - Embassy Task für die LED-Jacke
///
/// Initialisiert RMT und Kette, prüft die Konfiguration und betritt erst
/// danach die Refresh-Schleife. Bei ungültiger Konfiguration endet der Task.
///
/// # Parameter
/// - `data_pin`: GPIO8 Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn render_task(
    data_pin: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Puls-Buffer für die ganze Kette (24 Pulse pro LED), statisch statt
    // auf dem Task-Stack
    static RMT_BUFFER: StaticCell<[PulseCode; LED_BUFFER_SIZE]> = StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init_with(|| smart_led_buffer!(LED_COUNT));

    let chain = match rmt_led_chain(data_pin, rmt_peripheral, RMT_CLOCK_MHZ, rmt_buffer) {
        Ok(chain) => chain,
        Err(e) => {
            error!("LED chain init failed: {}", e);
            return;
        }
    };

    // Konfiguration prüfen - bei Fehler kein einziger Render-Durchlauf
    let mut jacket = match JacketBack::new(JACKET_BACK_TOPOLOGY, &JACKET_BACK_MASK, chain) {
        Ok(jacket) => jacket,
        Err(e) => {
            error!("Invalid jacket configuration: {}", e);
            return;
        }
    };

    info!(
        "Jacket ready: {} ({} LEDs)",
        JACKET_BACK_TOPOLOGY,
        jacket.renderer().total_leds()
    );

    jacket.set_foreground_color(FOREGROUND_COLOR);
    jacket.set_background_color(BACKGROUND_COLOR);

    if CHAIN_TEST_ON_BOOT {
        run_chain_test(&mut jacket).await;
    }

    draw_boot_pattern(&mut jacket);
    render_logic(&mut jacket).await;
}
