// Hardware Abstraction Layer (HAL) Module
//
// Kapselt den Zugriff auf das RMT Peripheral hinter dem LedChain Trait,
// damit die Render-Logik ohne Hardware testbar bleibt.

pub mod led_writer;

pub use led_writer::{RmtLedChain, rmt_led_chain};
