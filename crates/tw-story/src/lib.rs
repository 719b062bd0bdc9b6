//! Story sessions for Taleweave.
//!
//! Drives a [`tw_core::World`] with a [`NarrativeModel`]: prompts that teach
//! the model the update protocol, bundled example worlds, a turn-based
//! session, and a timestamped transcript.

pub mod config;
pub mod error;
pub mod model;
pub mod prompts;
pub mod session;
pub mod transcript;
pub mod worlds;

pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use model::{NarrativeModel, ScriptedModel};
pub use session::{StorySession, Turn};
pub use transcript::{Transcript, TranscriptEntry};
