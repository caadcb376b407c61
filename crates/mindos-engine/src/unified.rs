//! Unified diagnosis: the extended classifier over all layers plus the
//! risk/strength analysis and clinical risk level.
//!
//! The extended cascade keeps the same first-match-wins discipline as
//! the basic one, with the specificity ordering: trauma combinations
//! before compensated profiles before single-axis checks before general
//! fallbacks.

use serde::{Deserialize, Serialize};

use mindos_core::{OsType, TraitScores};
use mindos_layers::{
    AttachmentStyle, DriverResult, HardwareResult, KernelResult, LogsResult, TraumaLevel,
};

use crate::advice::unified_recommendations;

/// Extended-mode classification over the trait scores and all four
/// layer results. First match wins.
pub fn determine_unified_os_type(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    application: &TraitScores,
    logs: &LogsResult,
) -> OsType {
    // Trauma combined with low inhibition or high impulsivity
    if logs.trauma_level >= TraumaLevel::Moderate
        && (application.impulse_control < -2.0 || kernel.inhibition < 50.0)
    {
        return OsType::AdhdTrauma;
    }

    // Strong working memory compensating for weak inhibition
    if kernel.working_memory > 70.0 && kernel.inhibition < 60.0 && application.planning > 0.0 {
        return OsType::HighIqAdhd;
    }

    // Sensory sensitivity dominating the picture
    if hardware.sensory_sensitivity > 1.5 {
        return OsType::SensoryProcessing;
    }

    // Non-secure attachment with heavy adverse experience
    if driver.attachment_style != AttachmentStyle::Secure && logs.ace_score >= 4 {
        return OsType::AttachmentDisordered;
    }

    // Both executive composites low
    if kernel.working_memory < 50.0 && kernel.inhibition < 50.0 {
        return OsType::ExecutiveDysfunction;
    }

    // General ADHD
    if application.impulse_control < -1.0 || kernel.inhibition < 60.0 {
        return OsType::Adhd;
    }

    OsType::Balanced
}

/// Clinical risk bands derived from the additive risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicalRisk {
    Low,
    Moderate,
    High,
    Severe,
}

/// Additive clinical risk scoring over adverse history, self-esteem,
/// executive function, and autonomic state. Severe >= 5 points,
/// High >= 3, Moderate >= 1.
pub fn clinical_risk(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    logs: &LogsResult,
) -> ClinicalRisk {
    let mut risk_score = 0u32;

    // Adverse experience
    if logs.ace_score >= 6 {
        risk_score += 3;
    } else if logs.ace_score >= 4 {
        risk_score += 2;
    } else if logs.ace_score >= 2 {
        risk_score += 1;
    }

    // Self-esteem
    if driver.self_esteem < -1.5 {
        risk_score += 2;
    } else if driver.self_esteem < -0.5 {
        risk_score += 1;
    }

    // Executive function
    if kernel.inhibition < 30.0 && kernel.working_memory < 40.0 {
        risk_score += 2;
    } else if kernel.inhibition < 50.0 || kernel.working_memory < 50.0 {
        risk_score += 1;
    }

    // Autonomic dysregulation in either direction
    if hardware.polyvagal_state > 1.5 || hardware.polyvagal_state < -1.5 {
        risk_score += 1;
    }

    match risk_score {
        0 => ClinicalRisk::Low,
        1..=2 => ClinicalRisk::Moderate,
        3..=4 => ClinicalRisk::High,
        _ => ClinicalRisk::Severe,
    }
}

/// Risk factors: independent predicates, all matches collected.
pub fn identify_risk_factors(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    logs: &LogsResult,
) -> Vec<String> {
    let mut risks = Vec::new();

    if logs.ace_score >= 4 {
        risks.push("High level of traumatic experience".to_string());
    }
    if driver.self_esteem < -1.0 {
        risks.push("Low self-esteem".to_string());
    }
    if kernel.inhibition < 40.0 {
        risks.push("Reduced inhibitory control".to_string());
    }
    if hardware.polyvagal_state > 1.5 {
        risks.push("Hyperaroused autonomic state".to_string());
    }
    if driver.attachment_style == AttachmentStyle::Disorganized {
        risks.push("Disorganized attachment style".to_string());
    }
    if logs.resilience < 40.0 {
        risks.push("Low resilience".to_string());
    }

    risks
}

/// Strengths: independent predicates, all matches collected.
pub fn identify_strengths(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    application: &TraitScores,
    logs: &LogsResult,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if kernel.working_memory > 70.0 {
        strengths.push("Strong working memory".to_string());
    }
    if application.empathy > 1.0 {
        strengths.push("High empathy".to_string());
    }
    if logs.resilience > 70.0 {
        strengths.push("High resilience".to_string());
    }
    if driver.attachment_style == AttachmentStyle::Secure {
        strengths.push("Secure attachment style".to_string());
    }
    if hardware.chronotype > 0.5 {
        strengths.push("Regular daily rhythm".to_string());
    }
    if application.planning > 1.0 {
        strengths.push("Strong planning ability".to_string());
    }

    strengths
}

fn primary_characteristics(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    application: &TraitScores,
    logs: &LogsResult,
) -> Vec<String> {
    let mut characteristics = Vec::new();

    if kernel.inhibition < 50.0 {
        characteristics.push("Reduced inhibitory control".to_string());
    }
    if application.impulse_control < -1.0 {
        characteristics.push("Impulsivity".to_string());
    }
    if logs.ace_score >= 4 {
        characteristics.push("Traumatic experience".to_string());
    }
    if driver.self_esteem < -0.5 {
        characteristics.push("Low self-esteem".to_string());
    }
    if hardware.sensory_sensitivity > 1.0 {
        characteristics.push("Sensory sensitivity".to_string());
    }

    characteristics
}

/// The complete unified diagnosis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedDiagnosis {
    pub hardware: HardwareResult,
    pub kernel: KernelResult,
    pub driver: DriverResult,
    pub application: TraitScores,
    pub logs: LogsResult,

    pub os_type: OsType,
    pub primary_characteristics: Vec<String>,
    pub risk_factors: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub clinical_risk: ClinicalRisk,
}

impl UnifiedDiagnosis {
    /// Assemble the unified report from all layer results.
    pub fn generate(
        hardware: HardwareResult,
        kernel: KernelResult,
        driver: DriverResult,
        application: TraitScores,
        logs: LogsResult,
    ) -> Self {
        let os_type = determine_unified_os_type(&hardware, &kernel, &driver, &application, &logs);
        let primary_characteristics =
            primary_characteristics(&hardware, &kernel, &driver, &application, &logs);
        let risk_factors = identify_risk_factors(&hardware, &kernel, &driver, &logs);
        let strengths = identify_strengths(&hardware, &kernel, &driver, &application, &logs);
        let clinical_risk = clinical_risk(&hardware, &kernel, &driver, &logs);
        let recommendations =
            unified_recommendations(&hardware, &kernel, &driver, &application, &logs, os_type);

        Self {
            hardware,
            kernel,
            driver,
            application,
            logs,
            os_type,
            primary_characteristics,
            risk_factors,
            strengths,
            recommendations,
            clinical_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindos_layers::{CoreSchemas, DefenseMechanisms, LifeNarrative};

    fn hardware(sensory: f64, polyvagal: f64) -> HardwareResult {
        HardwareResult {
            sensory_sensitivity: sensory,
            polyvagal_state: polyvagal,
            chronotype: 0.0,
            recovery_time: 3.0,
        }
    }

    fn kernel(working_memory: f64, inhibition: f64) -> KernelResult {
        KernelResult {
            working_memory,
            inhibition,
            shifting: (working_memory + inhibition) / 2.0,
            selective_attention: inhibition * 0.8,
            sustained_attention: working_memory * 0.9,
            visual_dominance: 0.0,
        }
    }

    fn driver(self_esteem: f64, attachment_style: AttachmentStyle) -> DriverResult {
        DriverResult {
            defense_mechanisms: DefenseMechanisms {
                repression: 0.3,
                projection: 0.4,
                sublimation: 0.4,
                denial: 0.3,
            },
            attachment_style,
            core_schemas: CoreSchemas {
                abandonment: 0.3,
                mistrust: 0.2,
                defectiveness: 0.3,
                failure: 0.3,
            },
            self_esteem,
        }
    }

    fn logs(ace_score: u8, resilience: f64) -> LogsResult {
        LogsResult {
            ace_score,
            trauma_level: TraumaLevel::from_ace_score(ace_score),
            self_efficacy: 0.0,
            resilience,
            life_narrative: LifeNarrative::default(),
        }
    }

    #[test]
    fn test_trauma_combination_beats_general_adhd() {
        // Low inhibition plus moderate trauma: both the trauma rule and
        // the general ADHD rule match; specificity order picks trauma.
        let os_type = determine_unified_os_type(
            &hardware(0.0, 0.0),
            &kernel(60.0, 40.0),
            &driver(0.0, AttachmentStyle::Secure),
            &TraitScores::zero(),
            &logs(2, 60.0),
        );
        assert_eq!(os_type, OsType::AdhdTrauma);
    }

    #[test]
    fn test_compensated_profile() {
        let os_type = determine_unified_os_type(
            &hardware(0.0, 0.0),
            &kernel(85.0, 55.0),
            &driver(0.0, AttachmentStyle::Secure),
            &TraitScores {
                planning: 1.5,
                ..TraitScores::zero()
            },
            &logs(0, 70.0),
        );
        assert_eq!(os_type, OsType::HighIqAdhd);
    }

    #[test]
    fn test_sensory_before_general_fallbacks() {
        let os_type = determine_unified_os_type(
            &hardware(1.8, 0.0),
            &kernel(65.0, 55.0),
            &driver(0.0, AttachmentStyle::Secure),
            &TraitScores::zero(),
            &logs(0, 70.0),
        );
        assert_eq!(os_type, OsType::SensoryProcessing);
    }

    #[test]
    fn test_attachment_rule() {
        let os_type = determine_unified_os_type(
            &hardware(0.0, 0.0),
            &kernel(65.0, 70.0),
            &driver(-0.8, AttachmentStyle::Anxious),
            &TraitScores::zero(),
            &logs(4, 45.0),
        );
        assert_eq!(os_type, OsType::AttachmentDisordered);
    }

    #[test]
    fn test_executive_dysfunction() {
        let os_type = determine_unified_os_type(
            &hardware(0.0, 0.0),
            &kernel(45.0, 48.0),
            &driver(0.0, AttachmentStyle::Secure),
            &TraitScores::zero(),
            &logs(0, 70.0),
        );
        assert_eq!(os_type, OsType::ExecutiveDysfunction);
    }

    #[test]
    fn test_balanced_fallback() {
        let os_type = determine_unified_os_type(
            &hardware(0.0, 0.0),
            &kernel(65.0, 70.0),
            &driver(1.0, AttachmentStyle::Secure),
            &TraitScores::zero(),
            &logs(0, 70.0),
        );
        assert_eq!(os_type, OsType::Balanced);
    }

    #[test]
    fn test_clinical_risk_bands() {
        // ace 6 (+3), self-esteem -1.8 (+2), inhibition 25 & wm 35 (+2),
        // polyvagal 1.8 (+1): 8 points = severe
        let risk = clinical_risk(
            &hardware(0.0, 1.8),
            &kernel(35.0, 25.0),
            &driver(-1.8, AttachmentStyle::Disorganized),
            &logs(6, 20.0),
        );
        assert_eq!(risk, ClinicalRisk::Severe);

        let low = clinical_risk(
            &hardware(0.0, 0.0),
            &kernel(65.0, 70.0),
            &driver(0.5, AttachmentStyle::Secure),
            &logs(0, 80.0),
        );
        assert_eq!(low, ClinicalRisk::Low);

        // One point only: moderate
        let moderate = clinical_risk(
            &hardware(0.0, 0.0),
            &kernel(65.0, 45.0),
            &driver(0.5, AttachmentStyle::Secure),
            &logs(0, 80.0),
        );
        assert_eq!(moderate, ClinicalRisk::Moderate);
    }

    #[test]
    fn test_unified_report_assembly() {
        let report = UnifiedDiagnosis::generate(
            hardware(1.2, 1.8),
            kernel(45.0, 35.0),
            driver(-1.2, AttachmentStyle::Disorganized),
            TraitScores {
                impulse_control: -2.5,
                ..TraitScores::zero()
            },
            logs(5, 30.0),
        );

        assert_eq!(report.os_type, OsType::AdhdTrauma);
        assert!(report.risk_factors.contains(&"Low resilience".to_string()));
        assert!(report
            .primary_characteristics
            .contains(&"Impulsivity".to_string()));
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.clinical_risk, ClinicalRisk::Severe);
    }
}
