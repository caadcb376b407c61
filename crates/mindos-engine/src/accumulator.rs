//! Trait score accumulator: folds answered scenes into the score vector.
//!
//! Accumulation is permissive by design. An event whose episode, scene,
//! or choice id no longer resolves against the catalog contributes
//! nothing; a weight key naming no known axis is dropped. Both paths
//! emit a debug trace and continue - stale content references are not a
//! caller error in this context.

use mindos_core::{Catalog, InteractionEvent, TraitAxis, TraitScores};

use crate::biometrics::biometric_multiplier;

/// Fold an ordered event sequence into a trait score vector.
///
/// Equivalent to applying [`apply_event`] per event in order; batch and
/// incremental accumulation agree, and accumulating two sub-sequences
/// independently then summing component-wise gives the same vector.
pub fn accumulate(catalog: &Catalog, events: &[InteractionEvent]) -> TraitScores {
    let mut scores = TraitScores::zero();
    for event in events {
        apply_event(catalog, &mut scores, event);
    }
    scores
}

/// Apply a single answered scene to the running score vector.
pub fn apply_event(catalog: &Catalog, scores: &mut TraitScores, event: &InteractionEvent) {
    let Some(choice) = catalog.resolve(&event.episode_id, &event.scene_id, &event.choice_id)
    else {
        tracing::debug!(
            episode = %event.episode_id,
            scene = %event.scene_id,
            choice = %event.choice_id,
            "skipping event with unresolved reference"
        );
        return;
    };

    // Base contribution: every recognized axis gets its raw weight.
    for (key, &weight) in &choice.scores {
        match TraitAxis::from_key(key) {
            Some(axis) => scores.add(axis, weight as f64),
            None => tracing::debug!(key = %key, "dropping unrecognized axis key"),
        }
    }

    // Biometric re-weighting: negative weights only. A weight w with
    // modifier m ends up contributing w * m in total.
    let multiplier = biometric_multiplier(&event.biometric_data, choice);
    for (key, &weight) in &choice.scores {
        if weight < 0 {
            if let Some(axis) = TraitAxis::from_key(key) {
                scores.add(axis, weight as f64 * (multiplier - 1.0));
            }
        }
    }
}
