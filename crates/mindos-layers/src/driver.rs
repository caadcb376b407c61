//! Driver layer: defense mechanisms, attachment style, and self-esteem.

use serde::{Deserialize, Serialize};

/// Raw implicit-association (IAT) reaction times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IatResult {
    /// Mean reaction time pairing self with positive words (ms)
    pub self_positive_time: f64,
    /// Mean reaction time pairing self with negative words (ms)
    pub self_negative_time: f64,
    pub other_positive_time: f64,
    pub other_negative_time: f64,
    pub self_positive_errors: u32,
    pub self_negative_errors: u32,
}

/// Raw projective test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectiveTestResult {
    pub story_ending: String,
    pub image_interpretation: String,
    /// Negative-interpretation bias, [0, 1]
    pub bias_score: f64,
}

/// Attachment style categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

/// Estimated defense-mechanism intensities, each [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseMechanisms {
    pub repression: f64,
    pub projection: f64,
    pub sublimation: f64,
    pub denial: f64,
}

/// Early-maladaptive-schema activations, each [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreSchemas {
    pub abandonment: f64,
    pub mistrust: f64,
    pub defectiveness: f64,
    pub failure: f64,
}

/// Driver-layer result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResult {
    pub defense_mechanisms: DefenseMechanisms,
    pub attachment_style: AttachmentStyle,
    pub core_schemas: CoreSchemas,
    /// Self-esteem, [-2, 2]
    pub self_esteem: f64,
}

impl DriverResult {
    /// Derive the driver layer from the IAT and projective results.
    pub fn from_tests(iat: &IatResult, projective: &ProjectiveTestResult) -> Self {
        let self_esteem = self_esteem_from_iat(iat);
        let bias = projective.bias_score;

        Self {
            defense_mechanisms: defense_mechanisms(projective),
            attachment_style: attachment_style(self_esteem, bias),
            core_schemas: CoreSchemas {
                abandonment: if bias > 0.6 { 0.8 } else { 0.3 },
                mistrust: bias,
                defectiveness: if self_esteem < -0.5 { 0.7 } else { 0.3 },
                failure: if self_esteem < -1.0 { 0.8 } else { 0.3 },
            },
            self_esteem,
        }
    }
}

/// Self-esteem from the relative speed of the two self pairings.
///
/// Faster self+positive responses read as higher self-esteem. The
/// normalized difference is scaled by 4 and clamped to [-2, 2], so a raw
/// difference of +-0.5 or beyond pins the axis at the bound.
pub fn self_esteem_from_iat(result: &IatResult) -> f64 {
    let total = result.self_positive_time + result.self_negative_time;
    if total <= 0.0 {
        return 0.0;
    }

    let self_positive_share = result.self_positive_time / total;
    let self_negative_share = result.self_negative_time / total;

    // A smaller self+positive time share means the positive pairing came
    // easier, so the difference is taken negative-minus-positive.
    let difference = self_negative_share - self_positive_share;
    (difference * 4.0).clamp(-2.0, 2.0)
}

/// Defense-mechanism intensities from independent bias-score bands.
pub fn defense_mechanisms(result: &ProjectiveTestResult) -> DefenseMechanisms {
    let bias = result.bias_score;

    DefenseMechanisms {
        repression: if bias > 0.5 { 0.7 } else { 0.3 },
        projection: if bias > 0.3 { 0.6 } else { 0.4 },
        sublimation: if bias < 0.2 { 0.8 } else { 0.4 },
        denial: if bias > 0.7 { 0.9 } else { 0.3 },
    }
}

/// Attachment style from the self-esteem/mistrust threshold grid.
pub fn attachment_style(self_esteem: f64, mistrust: f64) -> AttachmentStyle {
    if self_esteem > 0.5 && mistrust < 0.3 {
        AttachmentStyle::Secure
    } else if self_esteem < -0.5 && mistrust > 0.5 {
        AttachmentStyle::Avoidant
    } else if self_esteem < 0.0 && mistrust > 0.3 {
        AttachmentStyle::Anxious
    } else {
        AttachmentStyle::Disorganized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projective(bias: f64) -> ProjectiveTestResult {
        ProjectiveTestResult {
            story_ending: "reconciliation".to_string(),
            image_interpretation: "two people talking".to_string(),
            bias_score: bias,
        }
    }

    #[test]
    fn test_self_esteem_sign() {
        // Faster self+positive = positive self-esteem
        let quick_positive = IatResult {
            self_positive_time: 400.0,
            self_negative_time: 700.0,
            other_positive_time: 500.0,
            other_negative_time: 500.0,
            self_positive_errors: 0,
            self_negative_errors: 2,
        };
        assert!(self_esteem_from_iat(&quick_positive) > 0.0);
    }

    #[test]
    fn test_self_esteem_clamped_at_bounds() {
        // Extreme asymmetry drives the raw difference beyond 0.5; the
        // axis must clamp to exactly 2.0, not overshoot.
        let all_negative = IatResult {
            self_positive_time: 1000.0,
            self_negative_time: 0.0,
            other_positive_time: 500.0,
            other_negative_time: 500.0,
            self_positive_errors: 0,
            self_negative_errors: 0,
        };
        assert_eq!(self_esteem_from_iat(&all_negative), -2.0);

        let all_positive = IatResult {
            self_positive_time: 0.0,
            self_negative_time: 1000.0,
            other_positive_time: 500.0,
            other_negative_time: 500.0,
            self_positive_errors: 0,
            self_negative_errors: 0,
        };
        assert_eq!(self_esteem_from_iat(&all_positive), 2.0);
    }

    #[test]
    fn test_self_esteem_zero_times() {
        let empty = IatResult {
            self_positive_time: 0.0,
            self_negative_time: 0.0,
            other_positive_time: 0.0,
            other_negative_time: 0.0,
            self_positive_errors: 0,
            self_negative_errors: 0,
        };
        assert_eq!(self_esteem_from_iat(&empty), 0.0);
    }

    #[test]
    fn test_defense_bands() {
        let high_bias = defense_mechanisms(&projective(0.8));
        assert_eq!(high_bias.repression, 0.7);
        assert_eq!(high_bias.projection, 0.6);
        assert_eq!(high_bias.sublimation, 0.4);
        assert_eq!(high_bias.denial, 0.9);

        let low_bias = defense_mechanisms(&projective(0.1));
        assert_eq!(low_bias.repression, 0.3);
        assert_eq!(low_bias.projection, 0.4);
        assert_eq!(low_bias.sublimation, 0.8);
        assert_eq!(low_bias.denial, 0.3);
    }

    #[test]
    fn test_attachment_grid_corners() {
        assert_eq!(attachment_style(1.0, 0.1), AttachmentStyle::Secure);
        assert_eq!(attachment_style(-1.0, 0.7), AttachmentStyle::Avoidant);
        assert_eq!(attachment_style(-0.2, 0.4), AttachmentStyle::Anxious);
        assert_eq!(attachment_style(0.2, 0.6), AttachmentStyle::Disorganized);
    }

    #[test]
    fn test_driver_from_tests() {
        let iat = IatResult {
            self_positive_time: 300.0,
            self_negative_time: 900.0,
            other_positive_time: 500.0,
            other_negative_time: 500.0,
            self_positive_errors: 0,
            self_negative_errors: 3,
        };
        let result = DriverResult::from_tests(&iat, &projective(0.2));

        assert_eq!(result.attachment_style, AttachmentStyle::Secure);
        assert!(result.self_esteem > 0.5);
        assert_eq!(result.core_schemas.mistrust, 0.2);
        assert_eq!(result.core_schemas.defectiveness, 0.3);
    }
}
