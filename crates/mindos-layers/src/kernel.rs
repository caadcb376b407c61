//! Kernel layer: executive function and attention control.
//!
//! Two timed tasks feed this layer: an n-back task for working memory
//! and a go/no-go task for inhibition. The remaining axes are fixed
//! linear combinations of those two composites - deliberately
//! correlated estimates, not independent measurements.

use serde::{Deserialize, Serialize};

/// Raw n-back task result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NBackResult {
    /// N-back level administered (1, 2, 3, ...)
    pub level: u8,
    pub correct: u32,
    pub total: u32,
    /// Mean reaction time (ms)
    pub reaction_time: f64,
    /// Fraction correct, [0, 1]
    pub accuracy: f64,
}

/// Raw go/no-go task result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoNoGoResult {
    pub go_correct: u32,
    pub go_total: u32,
    pub no_go_correct: u32,
    pub no_go_total: u32,
    pub false_alarms: u32,
    /// Mean reaction time (ms)
    pub reaction_time: f64,
}

/// Kernel-layer axes, each on a 0-100 scale except visual dominance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelResult {
    pub working_memory: f64,
    pub inhibition: f64,
    pub shifting: f64,
    pub selective_attention: f64,
    pub sustained_attention: f64,
    /// [-1, 1]; 1 = visual dominant, -1 = auditory dominant
    pub visual_dominance: f64,
}

impl KernelResult {
    /// Derive the kernel layer from its raw task results.
    ///
    /// `visual_dominance` is measured separately and passed through.
    pub fn from_tasks(n_back: &NBackResult, go_no_go: &GoNoGoResult, visual_dominance: f64) -> Self {
        let working_memory = n_back_score(n_back);
        let inhibition = go_no_go_score(go_no_go);

        Self {
            working_memory,
            inhibition,
            shifting: (working_memory + inhibition) / 2.0,
            selective_attention: inhibition * 0.8,
            sustained_attention: working_memory * 0.9,
            visual_dominance: visual_dominance.clamp(-1.0, 1.0),
        }
    }
}

/// Accuracy-weighted n-back composite with a speed bonus.
pub fn n_back_score(result: &NBackResult) -> f64 {
    const ACCURACY_WEIGHT: f64 = 0.7;
    const SPEED_WEIGHT: f64 = 0.3;

    let accuracy_score = result.accuracy * 100.0;
    let speed_score = (100.0 - result.reaction_time / 10.0).max(0.0);

    accuracy_score * ACCURACY_WEIGHT + speed_score * SPEED_WEIGHT
}

/// Inhibition composite: no-go hit rate minus false-alarm rate, on a
/// 0-100 scale. Zero-trial tasks contribute zero rates rather than NaN.
pub fn go_no_go_score(result: &GoNoGoResult) -> f64 {
    let no_go_accuracy = if result.no_go_total > 0 {
        result.no_go_correct as f64 / result.no_go_total as f64
    } else {
        0.0
    };
    let false_alarm_rate = if result.no_go_total > 0 {
        result.false_alarms as f64 / result.no_go_total as f64
    } else {
        0.0
    };

    ((no_go_accuracy - false_alarm_rate) * 100.0).clamp(0.0, 100.0)
}
