//! Static scenario content: episodes, scenes, and weighted choices.
//!
//! The catalog is loaded once from a JSON document and passed explicitly
//! to the engine; there is no process-wide content singleton. Lookups are
//! by string id and return `Option` — a stale reference resolves to
//! `None` and the caller skips it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// One selectable answer, carrying signed integer weights per trait axis.
///
/// Axes absent from the map contribute nothing. Keys that name no known
/// axis are preserved here (content is opaque data) and dropped at
/// accumulation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub text: String,

    /// Trait-axis key → signed weight
    #[serde(default)]
    pub scores: BTreeMap<String, i32>,

    /// How instinct-aligned this choice is; used only by the masking-gap
    /// variant, absent from ordinary scenario content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instinct_weight: Option<i32>,
}

impl Choice {
    /// Does any axis in this choice carry a negative weight?
    pub fn has_negative_weight(&self) -> bool {
        self.scores.values().any(|&w| w < 0)
    }

    /// Does any axis in this choice carry a positive weight?
    pub fn has_positive_weight(&self) -> bool {
        self.scores.values().any(|&w| w > 0)
    }
}

/// An ordered set of choices presented as one decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Scene {
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

/// An ordered set of scenes with descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub scenes: Vec<Scene>,
}

impl Episode {
    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == scene_id)
    }
}

/// The full scenario catalog, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub episodes: Vec<Episode>,
}

impl Catalog {
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Parse a catalog from a JSON array of episodes and check id
    /// uniqueness at the episode level.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let episodes: Vec<Episode> = serde_json::from_str(json)?;

        let mut seen = std::collections::HashSet::new();
        for ep in &episodes {
            if !seen.insert(ep.id.as_str()) {
                return Err(Error::DuplicateEpisode { id: ep.id.clone() });
            }
            if ep.scenes.is_empty() {
                return Err(Error::Catalog(format!("episode {} has no scenes", ep.id)));
            }
        }

        Ok(Self { episodes })
    }

    pub fn episode(&self, episode_id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.id == episode_id)
    }

    /// Resolve an (episode, scene, choice) reference to its choice.
    pub fn resolve(&self, episode_id: &str, scene_id: &str, choice_id: &str) -> Option<&Choice> {
        self.episode(episode_id)?
            .scene(scene_id)?
            .choice(choice_id)
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
