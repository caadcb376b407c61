//! OS-type classification labels and the basic threshold cascade.
//!
//! Classification is a prioritized if/else cascade: rules are evaluated
//! top to bottom and the first match wins. Categories are not mutually
//! exclusive by score alone, so the order encodes specificity — the
//! trauma-combination rule must be checked before the general ADHD rule.
//! Ties at a threshold fall through to the next rule.

use serde::{Deserialize, Serialize};

use crate::scores::TraitScores;

/// The fixed catalog of classification labels.
///
/// Only the classifiers construct these; every other component consumes
/// them. The extended (unified) classifier can additionally produce the
/// sensory, attachment, and executive variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    /// High impulsivity, low planning, weak boundary setting
    AdhdTrauma,
    /// Impulsive, but compensating through other capacities
    HighIqAdhd,
    /// General ADHD-like profile
    Adhd,
    /// No axis strays far from neutral
    Balanced,
    /// Sensory sensitivity dominates the picture (extended mode only)
    SensoryProcessing,
    /// Attachment difficulties dominate (extended mode only)
    AttachmentDisordered,
    /// Executive-function difficulties dominate (extended mode only)
    ExecutiveDysfunction,
    /// No rule matched
    Unclassified,
}

impl OsType {
    /// Human-readable label, stable across releases.
    pub fn label(&self) -> &'static str {
        match self {
            OsType::AdhdTrauma => "ADHD-Trauma type",
            OsType::HighIqAdhd => "High-IQ ADHD type",
            OsType::Adhd => "ADHD type",
            OsType::Balanced => "Balanced type",
            OsType::SensoryProcessing => "Sensory-Processing type",
            OsType::AttachmentDisordered => "Attachment-Disordered type",
            OsType::ExecutiveDysfunction => "Executive-Dysfunction type",
            OsType::Unclassified => "Unclassified",
        }
    }

    /// Whether this label belongs to the ADHD family of types (used by
    /// the advice generator for the environment-adjustment entry).
    pub fn is_adhd_family(&self) -> bool {
        matches!(
            self,
            OsType::AdhdTrauma | OsType::HighIqAdhd | OsType::Adhd
        )
    }

    /// Basic-mode classification from a trait score vector alone.
    ///
    /// First match wins; thresholds are literal constants.
    pub fn from_scores(scores: &TraitScores) -> Self {
        // ADHD-Trauma: high impulsivity, low planning, weak boundaries
        if scores.impulse_control < -2.0 && scores.planning < -2.0 && scores.boundary_setting < -1.0
        {
            return OsType::AdhdTrauma;
        }

        // High-IQ ADHD: impulsive but planning still intact
        if scores.impulse_control < -1.0 && scores.planning > 0.0 {
            return OsType::HighIqAdhd;
        }

        // General ADHD
        if scores.impulse_control < -1.0 || scores.self_control < -1.0 {
            return OsType::Adhd;
        }

        // Balanced: both headline axes near neutral
        if scores.impulse_control.abs() <= 1.0 && scores.planning.abs() <= 1.0 {
            return OsType::Balanced;
        }

        OsType::Unclassified
    }
}
