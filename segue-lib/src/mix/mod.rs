//! Randomized mix sequencing: configuration, segment selection and the run state machine.

pub mod config;
pub mod orchestrator;
pub mod selector;
pub mod session;

pub use config::{MixConfig, Span};
pub use orchestrator::{MixEvent, MixOrchestrator, MixReport, MixState, Phase, SegmentStatus};
pub use selector::SegmentSelector;
pub use session::MixSession;
