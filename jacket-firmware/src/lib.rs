// Library-Root: Firmware-Module für die LED-Jacke
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von jacket-core
pub use jacket_core::{
    JACKET_BACK_MASK, JACKET_BACK_TOPOLOGY, JacketBack, LedChain, LedError, light_single,
};
