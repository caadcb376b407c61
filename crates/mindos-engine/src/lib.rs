//! # MindOS-Engine
//!
//! The diagnosis pipeline: interaction events are folded into a trait
//! score vector (with biometric re-weighting of negative contributions),
//! the vector is classified into an OS type through a first-match-wins
//! threshold cascade, and independent advice predicates produce the
//! recommendation list.
//!
//! ## Pipeline
//!
//! ```text
//! events -> accumulator (+ biometric modifier) -> TraitScores
//!        -> classifier -> OsType -> advice -> Vec<String>
//! ```
//!
//! In unified mode the four layer sub-scorers feed an extended cascade
//! alongside the trait scores, and the report additionally carries risk
//! factors, strengths, and a clinical risk level.
//!
//! The engine is synchronous and pure: no I/O, no shared state, nothing
//! retained between sessions. Unresolved references and unrecognized
//! axis keys are skipped with a debug trace, never surfaced as errors.

pub mod accumulator;
pub mod advice;
pub mod biometrics;
pub mod masking;
pub mod unified;

pub use accumulator::{accumulate, apply_event};
pub use advice::{recommendations, unified_recommendations};
pub use biometrics::biometric_multiplier;
pub use masking::{ExhaustionLevel, MaskingCost, MaskingResult};
pub use unified::{determine_unified_os_type, ClinicalRisk, UnifiedDiagnosis};

use mindos_core::{Catalog, InteractionEvent, OsType, TraitScores};
use serde::{Deserialize, Serialize};

/// Basic-mode session output: scores, label, and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub final_scores: TraitScores,
    pub os_type: OsType,
    pub recommendations: Vec<String>,
}

/// Run a complete basic-mode session over an event sequence.
pub fn diagnose(catalog: &Catalog, events: &[InteractionEvent]) -> DiagnosisReport {
    let final_scores = accumulate(catalog, events);
    let os_type = OsType::from_scores(&final_scores);
    let recommendations = recommendations(&final_scores, os_type);

    DiagnosisReport {
        final_scores,
        os_type,
        recommendations,
    }
}
