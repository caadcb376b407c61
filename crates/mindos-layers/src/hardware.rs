//! Hardware layer: sensory processing and autonomic regulation.

use serde::{Deserialize, Serialize};

/// Raw sensory screening readings, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensoryTestResult {
    pub visual_sensitivity: f64,
    pub auditory_sensitivity: f64,
    pub discomfort_score: f64,
}

/// Raw stress-reactivity readings from the timed stress task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestResult {
    /// Mean reaction time at baseline (ms)
    pub baseline_reaction_time: f64,
    /// Mean reaction time under stress (ms)
    pub stressed_reaction_time: f64,
    /// Time to return to baseline after the stressor (seconds)
    pub recovery_time: f64,
    /// Performance degradation under stress (%)
    pub performance_degradation: f64,
}

/// Bounded hardware-layer axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareResult {
    /// Sensory processing sensitivity, [-2, 2]; positive = hypersensitive
    pub sensory_sensitivity: f64,
    /// Autonomic state, [-2, 2]; positive = hyperaroused, negative = hypoaroused
    pub polyvagal_state: f64,
    /// Circadian preference, [-1, 1]; 1 = morning type, -1 = evening type
    pub chronotype: f64,
    /// Post-stress recovery time (seconds)
    pub recovery_time: f64,
}

impl HardwareResult {
    /// Derive the hardware layer from its raw test results.
    ///
    /// `chronotype` is measured separately and passed through.
    pub fn from_tests(
        sensory: &SensoryTestResult,
        stress: &StressTestResult,
        chronotype: f64,
    ) -> Self {
        Self {
            sensory_sensitivity: sensory_sensitivity(sensory),
            polyvagal_state: polyvagal_state(stress),
            chronotype: chronotype.clamp(-1.0, 1.0),
            recovery_time: stress.recovery_time,
        }
    }
}

/// Linear rescale of the averaged 0-100 sensitivity readings to [-2, 2].
pub fn sensory_sensitivity(result: &SensoryTestResult) -> f64 {
    let avg = (result.visual_sensitivity + result.auditory_sensitivity) / 2.0;
    (avg - 50.0) / 25.0
}

/// Autonomic state from additive rule increments, clamped to [-2, 2].
///
/// Heavy degradation with slow recovery reads as hyperarousal; light
/// degradation with fast recovery reads as hypoarousal.
pub fn polyvagal_state(result: &StressTestResult) -> f64 {
    let degradation = result.performance_degradation;
    let recovery = result.recovery_time;

    let mut state: f64 = 0.0;

    if degradation > 30.0 {
        state += 1.0;
    }
    if recovery > 5.0 {
        state += 0.5;
    }
    if degradation < 10.0 && recovery < 2.0 {
        state -= 0.5;
    }

    state.clamp(-2.0, 2.0)
}
