//! Property tests for the level classifier's band algebra.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets. On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use levelwatch::level::{classify, encode_action, status_line, StatusBand, Thresholds};
use proptest::prelude::*;

/// Arbitrary valid thresholds: 0 < safe < warning < critical.
fn arb_thresholds() -> impl Strategy<Value = Thresholds> {
    (0.1f32..200.0, 0.1f32..200.0, 0.1f32..200.0).prop_map(|(safe, d1, d2)| Thresholds {
        safe_cm: safe,
        warning_cm: safe + d1,
        critical_cm: safe + d1 + d2,
    })
}

proptest! {
    /// Non-positive measurements always classify as Invalid.
    #[test]
    fn non_positive_is_invalid(
        t in arb_thresholds(),
        d in -1.0e6f32..=0.0,
    ) {
        prop_assert_eq!(classify(d, &t), StatusBand::Invalid);
    }

    /// The band matches interval membership exactly — the three live
    /// bands partition (0, ∞) with boundaries belonging to the lower band.
    #[test]
    fn band_matches_interval_membership(
        t in arb_thresholds(),
        d in 1.0e-6f32..1.0e6,
    ) {
        let expected = if d <= t.safe_cm {
            StatusBand::Safe
        } else if d <= t.warning_cm {
            StatusBand::Warning
        } else {
            StatusBand::Critical
        };
        prop_assert_eq!(classify(d, &t), expected);
    }

    /// Exactly one band per input: classify is a total function and two
    /// calls with the same input always agree.
    #[test]
    fn classification_is_deterministic(
        t in arb_thresholds(),
        d in proptest::num::f32::ANY,
    ) {
        prop_assert_eq!(classify(d, &t), classify(d, &t));
    }

    /// Threshold boundary values belong to the lower band.
    #[test]
    fn boundaries_belong_to_lower_band(t in arb_thresholds()) {
        prop_assert_eq!(classify(t.safe_cm, &t), StatusBand::Safe);
        // The warning boundary is only reachable when it is strictly above
        // safe, which arb_thresholds guarantees.
        prop_assert_eq!(classify(t.warning_cm, &t), StatusBand::Warning);
    }

    /// encode_action is deterministic and only Invalid suppresses the
    /// relay message.
    #[test]
    fn encode_action_is_pure_and_message_gated(
        d in 0.001f32..1.0e4,
    ) {
        for band in [
            StatusBand::Safe,
            StatusBand::Warning,
            StatusBand::Critical,
            StatusBand::Invalid,
        ] {
            let a = encode_action(band, d);
            let b = encode_action(band, d);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.message.is_none(), band == StatusBand::Invalid);
        }
    }

    /// The wire line always splits into exactly three fields on `:`, with
    /// a distance field that parses back to the original value.
    #[test]
    fn status_line_round_trips_distance(
        d in 0.001f32..1.0e4,
    ) {
        let line = status_line(d);
        let parts: Vec<&str> = line.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(parts[0], "WATER");
        prop_assert_eq!(parts[2], "AUTO");
        let parsed: f32 = parts[1].parse().unwrap();
        prop_assert_eq!(parsed, d);
    }
}
