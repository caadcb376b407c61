//! Logs layer: life history, adverse experiences, and resilience.

use serde::{Deserialize, Serialize};

/// Adverse-childhood-experiences questionnaire: ten independent flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AceQuestionnaire {
    pub physical_abuse: bool,
    pub emotional_abuse: bool,
    pub sexual_abuse: bool,
    pub physical_neglect: bool,
    pub emotional_neglect: bool,
    pub household_substance_abuse: bool,
    pub household_mental_illness: bool,
    pub parental_separation: bool,
    pub domestic_violence: bool,
    pub household_criminal_behavior: bool,
}

impl AceQuestionnaire {
    /// Count of flagged items, 0-10.
    pub fn score(&self) -> u8 {
        [
            self.physical_abuse,
            self.emotional_abuse,
            self.sexual_abuse,
            self.physical_neglect,
            self.emotional_neglect,
            self.household_substance_abuse,
            self.household_mental_illness,
            self.parental_separation,
            self.domestic_violence,
            self.household_criminal_behavior,
        ]
        .iter()
        .filter(|&&flag| flag)
        .count() as u8
    }
}

/// Ordered trauma-level categories derived from the ACE score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraumaLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl TraumaLevel {
    /// Fixed breakpoints: 0 / 1-2 / 3-4 / 5+.
    pub fn from_ace_score(ace_score: u8) -> Self {
        match ace_score {
            0 => TraumaLevel::Low,
            1..=2 => TraumaLevel::Moderate,
            3..=4 => TraumaLevel::High,
            _ => TraumaLevel::Severe,
        }
    }
}

/// Kind of a life-timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeEventKind {
    Positive,
    Negative,
    Neutral,
    TurningPoint,
}

/// One entry of the life timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEvent {
    pub age: u8,
    #[serde(rename = "type")]
    pub kind: LifeEventKind,
    #[serde(default)]
    pub description: String,
    /// Subjective impact, [-2, 2]
    pub impact: f64,
}

/// Summary counts over the life timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeNarrative {
    pub positive_events: usize,
    pub negative_events: usize,
    pub turning_points: usize,
}

/// Logs-layer result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsResult {
    /// ACE count, 0-10
    pub ace_score: u8,
    pub trauma_level: TraumaLevel,
    /// Self-efficacy, [-2, 2]
    pub self_efficacy: f64,
    /// Resilience, [0, 100]
    pub resilience: f64,
    pub life_narrative: LifeNarrative,
}

impl LogsResult {
    /// Derive the logs layer from the questionnaire and timeline.
    pub fn from_history(questionnaire: &AceQuestionnaire, events: &[LifeEvent]) -> Self {
        let ace_score = questionnaire.score();
        let trauma_level = TraumaLevel::from_ace_score(ace_score);
        let self_efficacy = self_efficacy(events);
        let resilience = resilience(ace_score, self_efficacy);

        let life_narrative = LifeNarrative {
            positive_events: events
                .iter()
                .filter(|e| e.kind == LifeEventKind::Positive)
                .count(),
            negative_events: events
                .iter()
                .filter(|e| e.kind == LifeEventKind::Negative)
                .count(),
            turning_points: events
                .iter()
                .filter(|e| e.kind == LifeEventKind::TurningPoint)
                .count(),
        };

        Self {
            ace_score,
            trauma_level,
            self_efficacy,
            resilience,
            life_narrative,
        }
    }
}

/// Self-efficacy from the positive/negative balance of the timeline plus
/// a turning-point bonus, clamped to [-2, 2]. An empty timeline is
/// neutral, not an error.
pub fn self_efficacy(events: &[LifeEvent]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let n = events.len() as f64;
    let positive = events
        .iter()
        .filter(|e| e.kind == LifeEventKind::Positive || e.impact > 0.0)
        .count() as f64;
    let negative = events
        .iter()
        .filter(|e| e.kind == LifeEventKind::Negative || e.impact < 0.0)
        .count() as f64;
    let turning = events
        .iter()
        .filter(|e| e.kind == LifeEventKind::TurningPoint)
        .count() as f64;

    let efficacy = (positive / n - negative / n) * 2.0 + turning / n;
    efficacy.clamp(-2.0, 2.0)
}

/// Resilience: baseline 50, adjusted by trauma band and self-efficacy,
/// clamped to [0, 100]. Trauma with high self-efficacy still reads as
/// resilient.
pub fn resilience(ace_score: u8, self_efficacy: f64) -> f64 {
    let mut resilience = 50.0;

    resilience += match TraumaLevel::from_ace_score(ace_score) {
        TraumaLevel::Low => 20.0,
        TraumaLevel::Moderate => 10.0,
        TraumaLevel::High => -10.0,
        TraumaLevel::Severe => -20.0,
    };

    resilience += self_efficacy * 15.0;

    resilience.clamp(0.0, 100.0)
}
