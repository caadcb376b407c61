//! # MindOS-Layers
//!
//! The four layer sub-scorers of the unified diagnosis, named after the
//! operating-system metaphor the assessment uses:
//!
//! 1. **Hardware** - sensory processing and autonomic regulation
//! 2. **Kernel** - executive function and attention control
//! 3. **Driver** - defense mechanisms and attachment style
//! 4. **Logs** - life history, adverse experiences, and resilience
//!
//! Each sub-scorer is a pure function from one structured raw-test
//! result to one bounded layer result. The four are independent and
//! order-insensitive; the unified classifier in the engine crate is
//! their only consumer.

pub mod driver;
pub mod hardware;
pub mod kernel;
pub mod logs;

pub use driver::{
    AttachmentStyle, CoreSchemas, DefenseMechanisms, DriverResult, IatResult, ProjectiveTestResult,
};
pub use hardware::{HardwareResult, SensoryTestResult, StressTestResult};
pub use kernel::{GoNoGoResult, KernelResult, NBackResult};
pub use logs::{
    AceQuestionnaire, LifeEvent, LifeEventKind, LifeNarrative, LogsResult, TraumaLevel,
};
