//! Session input types: interaction events and their biometric records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interaction-timing record captured while a single scene was answered.
///
/// All durations are in milliseconds; pointer distance is in screen
/// units. Values are non-negative; negative raw measurements are clamped
/// to zero at construction rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricData {
    /// Time from scene display to the first action (ms)
    pub time_to_first_interaction: f64,

    /// Time from scene display to the final decision (ms)
    pub time_to_decision: f64,

    /// Accumulated hover time per choice id (ms)
    #[serde(default)]
    pub hover_duration: HashMap<String, f64>,

    /// Number of clicks before the decision
    pub click_count: u32,

    /// Total pointer travel distance (screen units)
    pub mouse_distance: f64,
}

impl BiometricData {
    /// Build a record with negative durations and distances clamped to 0.
    pub fn new(
        time_to_first_interaction: f64,
        time_to_decision: f64,
        click_count: u32,
        mouse_distance: f64,
    ) -> Self {
        Self {
            time_to_first_interaction: time_to_first_interaction.max(0.0),
            time_to_decision: time_to_decision.max(0.0),
            hover_duration: HashMap::new(),
            click_count,
            mouse_distance: mouse_distance.max(0.0),
        }
    }

    /// Clamp any negative measurements to zero in place.
    ///
    /// Deserialized records may carry out-of-range values from buggy
    /// collectors; the documented policy is clamp-to-zero, not reject.
    pub fn sanitize(&mut self) {
        self.time_to_first_interaction = self.time_to_first_interaction.max(0.0);
        self.time_to_decision = self.time_to_decision.max(0.0);
        self.mouse_distance = self.mouse_distance.max(0.0);
        for v in self.hover_duration.values_mut() {
            *v = v.max(0.0);
        }
    }
}

/// One answered scene: which choice was taken, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    pub episode_id: String,
    pub scene_id: String,
    pub choice_id: String,
    pub biometric_data: BiometricData,

    /// Wall-clock time the decision was recorded (ms since epoch)
    #[serde(default)]
    pub timestamp: u64,
}

impl InteractionEvent {
    pub fn new(
        episode_id: impl Into<String>,
        scene_id: impl Into<String>,
        choice_id: impl Into<String>,
        biometric_data: BiometricData,
    ) -> Self {
        Self {
            episode_id: episode_id.into(),
            scene_id: scene_id.into(),
            choice_id: choice_id.into(),
            biometric_data,
            timestamp: 0,
        }
    }
}
