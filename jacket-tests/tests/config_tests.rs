//! Integration Tests für die Konfigurationsprüfung
//!
//! Jede fehlerhafte Konfiguration muss abgelehnt werden, bevor gerendert wird.

use jacket_core::{
    ConfigError, FrameBuffer, JACKET_BACK_LED_COUNT, JACKET_BACK_MASK, JACKET_BACK_TOPOLOGY,
    JacketBack, LedChain, LedError, LedJacket, MaskSet, SerpentineRenderer, Topology,
};
use rgb::RGB8;

/// Mock, der jeden Schreibzugriff zählt
#[derive(Default)]
struct CountingChain {
    led_count: usize,
    set_color_calls: usize,
}

impl LedChain for CountingChain {
    fn led_count(&self) -> usize {
        self.led_count
    }

    fn set_color(&mut self, _index: usize, _color: RGB8) {
        self.set_color_calls += 1;
    }

    fn transmit(&mut self) -> Result<(), LedError> {
        Ok(())
    }
}

fn chain(led_count: usize) -> CountingChain {
    CountingChain {
        led_count,
        ..Default::default()
    }
}

// ============================================================================
// Tests: Topologie
// ============================================================================

#[test]
fn test_zero_dimensions_rejected() {
    for topology in [
        Topology::new(0, 1, 1, 1),
        Topology::new(1, 0, 1, 1),
        Topology::new(1, 1, 0, 1),
        Topology::new(1, 1, 1, 0),
    ] {
        assert_eq!(
            LedJacket::<_, 1, 0>::new(topology, &[], chain(1)).err(),
            Some(ConfigError::ZeroDimension)
        );
        assert_eq!(
            SerpentineRenderer::<0>::new(topology, &[], 0).err(),
            Some(ConfigError::ZeroDimension)
        );
    }
}

#[test]
fn test_buffer_size_must_match_grid() {
    let topology = Topology::new(1, 2, 2, 2);
    assert_eq!(
        FrameBuffer::<6>::new(topology).err(),
        Some(ConfigError::BufferSizeMismatch {
            expected: 8,
            actual: 6
        })
    );
    assert!(LedJacket::<_, 16, 0>::new(topology, &[], chain(8)).is_err());
}

// ============================================================================
// Tests: Maske
// ============================================================================

#[test]
fn test_mask_out_of_bounds_rejected() {
    let topology = Topology::new(1, 2, 2, 2);
    assert_eq!(
        LedJacket::<_, 8, 2>::new(topology, &[(0, 0), (4, 1)], chain(6)).err(),
        Some(ConfigError::MaskOutOfBounds { x: 4, y: 1 })
    );
    assert_eq!(
        MaskSet::<2>::new(&topology, &[(3, 2)]),
        Err(ConfigError::MaskOutOfBounds { x: 3, y: 2 })
    );
}

#[test]
fn test_duplicate_mask_entries_count_once() {
    let topology = Topology::new(1, 2, 2, 2);
    let jacket = LedJacket::<_, 8, 4>::new(topology, &[(1, 1), (1, 1), (2, 0), (2, 0)], chain(6));
    assert!(jacket.is_ok());

    // als Multimenge gezählt wären es 4 LEDs: das muss abgelehnt werden
    assert_eq!(
        LedJacket::<_, 8, 4>::new(topology, &[(1, 1), (1, 1), (2, 0), (2, 0)], chain(4)).err(),
        Some(ConfigError::ChainLengthMismatch {
            expected: 6,
            actual: 4
        })
    );
}

#[test]
fn test_mask_capacity_exceeded() {
    let topology = Topology::new(1, 2, 2, 2);
    assert_eq!(
        LedJacket::<_, 8, 1>::new(topology, &[(0, 0), (1, 0)], chain(6)).err(),
        Some(ConfigError::MaskCapacityExceeded { capacity: 1 })
    );
}

// ============================================================================
// Tests: Länge der Kette
// ============================================================================

#[test]
fn test_chain_length_mismatch_rejected() {
    let topology = Topology::new(1, 2, 2, 2);
    assert_eq!(
        LedJacket::<_, 8, 1>::new(topology, &[(0, 0)], chain(8)).err(),
        Some(ConfigError::ChainLengthMismatch {
            expected: 7,
            actual: 8
        })
    );
}

#[test]
fn test_jacket_back_needs_exact_chain() {
    assert!(
        JacketBack::new(
            JACKET_BACK_TOPOLOGY,
            &JACKET_BACK_MASK,
            chain(JACKET_BACK_LED_COUNT)
        )
        .is_ok()
    );
    // Länge aus der rohen Tabelle (mit Duplikaten) passt nicht
    assert_eq!(
        JacketBack::new(
            JACKET_BACK_TOPOLOGY,
            &JACKET_BACK_MASK,
            chain(1280 - JACKET_BACK_MASK.len())
        )
        .err(),
        Some(ConfigError::ChainLengthMismatch {
            expected: JACKET_BACK_LED_COUNT,
            actual: 1152
        })
    );
}

// ============================================================================
// Tests: Fehlermeldungen
// ============================================================================

#[test]
fn test_error_display() {
    assert_eq!(
        ConfigError::MaskOutOfBounds { x: 40, y: 3 }.to_string(),
        "mask coordinate (40, 3) is outside the grid"
    );
    assert_eq!(
        ConfigError::ChainLengthMismatch {
            expected: 1154,
            actual: 1152
        }
        .to_string(),
        "chain has 1152 LEDs, configuration needs 1154"
    );
    assert_eq!(LedError::WriteFailed.to_string(), "LED transmission failed");
}

#[test]
fn test_valid_config_renders_once_per_led() {
    let topology = Topology::new(1, 2, 2, 2);
    let mut jacket = LedJacket::<_, 8, 1>::new(topology, &[(0, 0)], chain(7)).unwrap();
    jacket.render();
    assert_eq!(jacket.driver().set_color_calls, 7);
}
