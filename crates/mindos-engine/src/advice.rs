//! Advice generation: independent predicates over scores and labels.
//!
//! Unlike the classifier cascade, every predicate here is evaluated and
//! every match contributes its entry, in declaration order. An empty
//! list is a valid outcome, not an error.

use mindos_core::{OsType, TraitScores};
use mindos_layers::{AttachmentStyle, DriverResult, HardwareResult, KernelResult, LogsResult};

/// Basic-mode recommendations from the trait scores and label.
pub fn recommendations(scores: &TraitScores, os_type: OsType) -> Vec<String> {
    let mut recommendations = Vec::new();

    if scores.impulse_control < -2.0 {
        recommendations.push(
            "Impulsivity runs high. Try building a habit of waiting three minutes \
             before important decisions."
                .to_string(),
        );
    }

    if scores.planning < -2.0 {
        recommendations.push(
            "To strengthen planning, practice breaking large tasks into small, \
             concrete steps."
                .to_string(),
        );
    }

    if scores.boundary_setting < -1.0 {
        recommendations.push(
            "Practice boundary setting. Saying no is an essential part of self-care."
                .to_string(),
        );
    }

    if scores.money_sense < -1.0 {
        recommendations.push(
            "For money management, set a budget so the amount you are free to spend \
             is explicit."
                .to_string(),
        );
    }

    if os_type.is_adhd_family() {
        recommendations.push(
            "With ADHD traits, environmental adjustments such as reducing \
             notifications and creating a distraction-free space are effective."
                .to_string(),
        );
    }

    recommendations
}

/// Unified-mode recommendations over all layers, the trait scores, and
/// the extended classification label.
pub fn unified_recommendations(
    hardware: &HardwareResult,
    kernel: &KernelResult,
    driver: &DriverResult,
    _application: &TraitScores,
    logs: &LogsResult,
    os_type: OsType,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if logs.ace_score >= 4 {
        recommendations
            .push("Consider consulting a trauma-informed care professional.".to_string());
    }

    if kernel.inhibition < 50.0 {
        recommendations.push(
            "To improve inhibitory control, try mindfulness or meditation practice."
                .to_string(),
        );
    }

    if kernel.working_memory < 50.0 {
        recommendations.push(
            "To train working memory, keep up cognitive exercises such as n-back tasks."
                .to_string(),
        );
    }

    if hardware.sensory_sensitivity > 1.0 {
        recommendations.push(
            "With sensory sensitivity, environmental adjustments (managing light, \
             sound, and tactile stimulation) matter."
                .to_string(),
        );
    }

    if hardware.polyvagal_state > 1.0 {
        recommendations.push(
            "To ease a hyperaroused state, practice deep breathing and grounding \
             techniques."
                .to_string(),
        );
    }

    if driver.attachment_style != AttachmentStyle::Secure {
        recommendations.push(
            "To work on attachment patterns, practice building relationships that \
             feel safe."
                .to_string(),
        );
    }

    if driver.self_esteem < -0.5 {
        recommendations.push(
            "To build self-esteem, accumulate small successes and practice \
             self-acceptance."
                .to_string(),
        );
    }

    if logs.resilience < 50.0 {
        recommendations.push(
            "To strengthen resilience, reflect on hardships you have overcome and \
             name the strengths you used."
                .to_string(),
        );
    }

    if os_type.is_adhd_family() {
        recommendations.push(
            "For ADHD traits, environmental adjustments (reducing notifications, \
             creating a focused space, splitting tasks into small pieces) are \
             effective."
                .to_string(),
        );
    }

    recommendations
}
