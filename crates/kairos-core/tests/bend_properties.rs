//! Property-based tests for the bend transform.
//!
//! These verify the transform invariants hold for all valid configurations:
//! - Continuity at the pivot (no jump where acceleration starts)
//! - Identity configuration leaves raw time untouched
//! - Logical time never reverses for non-negative acceleration
//! - Acceleration factor 1.0 reduces to a pure offset

use kairos_core::BendConfig;
use proptest::prelude::*;

// Strategy for valid bend configurations. Bounds keep the arithmetic well
// inside i64 and inside f64's exact-integer range.
fn config_strategy() -> impl Strategy<Value = BendConfig> {
    (
        -1_000_000_000_000i64..1_000_000_000_000,
        0.0f64..64.0,
        -1_000_000_000_000i64..1_000_000_000_000,
    )
        .prop_map(|(offset, acceleration_factor, start_at)| BendConfig {
            offset,
            acceleration_factor,
            start_at,
        })
}

fn raw_time_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000
}

#[test]
fn prop_continuity_at_pivot() {
    proptest!(|(config in config_strategy())| {
        // The raw instant that lands exactly on the pivot
        let raw = config.start_at - config.offset;
        prop_assert_eq!(config.apply(raw), config.start_at);
    });
}

#[test]
fn prop_identity_configuration() {
    proptest!(|(raw in raw_time_strategy())| {
        prop_assert_eq!(BendConfig::IDENTITY.apply(raw), raw);
    });
}

#[test]
fn prop_monotonic_for_nonnegative_acceleration() {
    proptest!(|(config in config_strategy(), t1 in raw_time_strategy(), dt in 0i64..1_000_000_000)| {
        let t2 = t1 + dt;
        prop_assert!(config.apply(t1) <= config.apply(t2));
    });
}

#[test]
fn prop_unaccelerated_is_pure_offset() {
    proptest!(|(offset in -1_000_000_000_000i64..1_000_000_000_000,
                start_at in -1_000_000_000_000i64..1_000_000_000_000,
                raw in raw_time_strategy())| {
        let config = BendConfig::new(offset, 1.0, start_at);
        prop_assert_eq!(config.apply(raw), raw + offset);
    });
}

#[test]
fn prop_validation_accepts_all_nonnegative_factors() {
    proptest!(|(config in config_strategy())| {
        prop_assert!(config.validate().is_ok());
    });
}
