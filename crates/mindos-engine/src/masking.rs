//! Masking-gap analysis: how far everyday behavior departs from
//! instinct.
//!
//! Each masking scenario asks twice - once for the instinctive answer,
//! once for the answer actually acted out - and the gap between the two
//! instinct scores measures the cost of keeping up the mask.

use serde::{Deserialize, Serialize};

/// One answered masking scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingResult {
    pub scenario_id: String,
    /// Choice picked when asked for the honest, instinctive answer
    pub instinct_choice: String,
    /// Choice picked when asked what they actually do
    pub behavior_choice: String,
    /// Instinct score of the instinct choice minus that of the behavior
    /// choice; sign records direction, magnitude records divergence.
    pub gap: i32,
    /// Time to each answer (ms)
    pub instinct_response_ms: f64,
    pub behavior_response_ms: f64,
}

impl MaskingResult {
    /// Gap between two instinct scores.
    pub fn gap_between(instinct_score: i32, behavior_score: i32) -> i32 {
        instinct_score - behavior_score
    }
}

/// How draining the measured masking is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExhaustionLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ExhaustionLevel {
    /// Fixed breakpoints on the average absolute gap: 2 / 3 / 4.
    pub fn from_average_gap(avg_gap: f64) -> Self {
        if avg_gap >= 4.0 {
            ExhaustionLevel::VeryHigh
        } else if avg_gap >= 3.0 {
            ExhaustionLevel::High
        } else if avg_gap >= 2.0 {
            ExhaustionLevel::Moderate
        } else {
            ExhaustionLevel::Low
        }
    }
}

/// Aggregated masking cost over a scenario set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingCost {
    pub total_gap: f64,
    pub average_gap: f64,
    pub exhaustion_level: ExhaustionLevel,
}

impl MaskingCost {
    /// Sum and average the absolute gaps. No scenarios means no measured
    /// cost, not an error.
    pub fn from_results(results: &[MaskingResult]) -> Self {
        if results.is_empty() {
            return Self {
                total_gap: 0.0,
                average_gap: 0.0,
                exhaustion_level: ExhaustionLevel::Low,
            };
        }

        let total_gap: f64 = results.iter().map(|r| r.gap.abs() as f64).sum();
        let average_gap = total_gap / results.len() as f64;

        Self {
            total_gap,
            average_gap,
            exhaustion_level: ExhaustionLevel::from_average_gap(average_gap),
        }
    }
}
