//! Biometric modifier: a multiplicative adjustment derived from how a
//! choice was made, not which choice it was.
//!
//! A fast, low-effort selection of a negative-valence option is treated
//! as more representative of instinct than a slow one; a long-deliberated
//! but still-logical selection is discounted as internal conflict.

use mindos_core::{BiometricData, Choice};

/// Deciding faster than this reads as impulsive (ms).
pub const FAST_DECISION_MS: f64 = 500.0;
/// Deciding slower than this reads as conflicted (ms).
pub const SLOW_DECISION_MS: f64 = 5000.0;
/// More clicks than this before deciding reads as indecision.
pub const CLICK_INDECISION_THRESHOLD: u32 = 3;
/// More pointer travel than this reads as restlessness (screen units).
pub const RESTLESS_DISTANCE: f64 = 1000.0;

/// Fast impulsive choice amplification.
const FAST_IMPULSIVE_FACTOR: f64 = 2.0;
/// Deliberated-but-logical discount.
const CONFLICTED_FACTOR: f64 = 0.7;
/// Indecision discount per the click rule.
const INDECISION_FACTOR: f64 = 0.9;
/// Restlessness discount per the pointer-travel rule.
const RESTLESSNESS_FACTOR: f64 = 0.95;

/// Bounds on the stacked product. The four rules stack multiplicatively
/// and are otherwise unbounded; the clamp keeps pathological timing
/// input from driving a contribution arbitrarily large or small.
const MULTIPLIER_FLOOR: f64 = 0.5;
const MULTIPLIER_CEILING: f64 = 2.0;

/// Compute the biometric multiplier for one answered scene.
///
/// The four rules are independent and all of them may fire on the same
/// event; each multiplies into the running product in fixed order. The
/// result is clamped to [0.5, 2.0] and defaults to 1.0 when nothing
/// fires. Applied by the accumulator to negative-weight axes only.
pub fn biometric_multiplier(data: &BiometricData, choice: &Choice) -> f64 {
    let mut multiplier = 1.0;

    // Decided within half a second: impulsive, if an impulsive
    // (negative-weighted) option was available in this choice.
    if data.time_to_decision < FAST_DECISION_MS && choice.has_negative_weight() {
        multiplier *= FAST_IMPULSIVE_FACTOR;
    }

    // Deliberated for over five seconds yet picked a logical
    // (positive-weighted) option: discount for internal conflict.
    if data.time_to_decision > SLOW_DECISION_MS && choice.has_positive_weight() {
        multiplier *= CONFLICTED_FACTOR;
    }

    // Many clicks before committing: indecision.
    if data.click_count > CLICK_INDECISION_THRESHOLD {
        multiplier *= INDECISION_FACTOR;
    }

    // Long pointer travel: restlessness.
    if data.mouse_distance > RESTLESS_DISTANCE {
        multiplier *= RESTLESSNESS_FACTOR;
    }

    multiplier.clamp(MULTIPLIER_FLOOR, MULTIPLIER_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn choice(weights: &[(&str, i32)]) -> Choice {
        Choice {
            id: "c1".to_string(),
            text: "test".to_string(),
            scores: weights
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            instinct_weight: None,
        }
    }

    fn data(time_to_decision: f64, click_count: u32, mouse_distance: f64) -> BiometricData {
        BiometricData::new(0.0, time_to_decision, click_count, mouse_distance)
    }

    #[test]
    fn test_neutral_default() {
        let c = choice(&[("planning", 2)]);
        assert_eq!(biometric_multiplier(&data(1500.0, 1, 100.0), &c), 1.0);
    }

    #[test]
    fn test_fast_impulsive_amplification() {
        let c = choice(&[("impulseControl", -2)]);
        assert_eq!(biometric_multiplier(&data(300.0, 1, 100.0), &c), 2.0);
    }

    #[test]
    fn test_fast_without_negative_weight_does_not_fire() {
        let c = choice(&[("planning", 2)]);
        assert_eq!(biometric_multiplier(&data(300.0, 1, 100.0), &c), 1.0);
    }

    #[test]
    fn test_conflicted_discount() {
        let c = choice(&[("planning", 2)]);
        let m = biometric_multiplier(&data(6000.0, 1, 100.0), &c);
        assert!((m - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_rules_stack_multiplicatively() {
        let c = choice(&[("planning", 2)]);
        // slow+positive, >3 clicks, >1000 distance: 0.7 * 0.9 * 0.95
        let m = biometric_multiplier(&data(6000.0, 5, 1500.0), &c);
        assert!((m - 0.7 * 0.9 * 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_fast_and_restless_stack() {
        let c = choice(&[("impulseControl", -2)]);
        let m = biometric_multiplier(&data(300.0, 5, 1500.0), &c);
        assert!((m - 2.0 * 0.9 * 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_product_stays_within_bounds() {
        let negative = choice(&[("impulseControl", -3), ("selfControl", -2)]);
        let positive = choice(&[("planning", 3), ("empathy", 1)]);

        let extremes = [
            data(0.0, 0, 0.0),
            data(0.0, 100, 1e9),
            data(1e9, 100, 1e9),
            data(499.9, 4, 1000.1),
        ];
        for d in &extremes {
            for c in [&negative, &positive] {
                let m = biometric_multiplier(d, c);
                assert!((0.5..=2.0).contains(&m), "multiplier {m} out of bounds");
            }
        }
    }

    #[test]
    fn test_boundary_values_do_not_fire() {
        let c = choice(&[("impulseControl", -2), ("planning", 2)]);
        // Exactly 500ms is not "under 500"; exactly 3 clicks and exactly
        // 1000 units are not over their thresholds.
        assert_eq!(biometric_multiplier(&data(500.0, 3, 1000.0), &c), 1.0);
    }
}
