//! # MindOS-Core
//!
//! Core types for the MindOS self-assessment diagnosis engine: the
//! scenario catalog, per-scene interaction events with their biometric
//! records, the eight-axis trait score vector, and the OS-type
//! classification labels.
//!
//! Everything here is plain data plus pure functions. The engine crate
//! folds events into scores; this crate defines what those scores and
//! labels are.

pub mod catalog;
pub mod error;
pub mod ostype;
pub mod scores;
pub mod types;

pub use catalog::{Catalog, Choice, Episode, Scene};
pub use error::{Error, Result};
pub use ostype::OsType;
pub use scores::{TraitAxis, TraitScores};
pub use types::{BiometricData, InteractionEvent};
