//! Error types for story sessions.

use thiserror::Error;
use tw_core::CoreError;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while running a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// No bundled world has this id.
    #[error("unknown world: {0} (available: {1})")]
    UnknownWorld(String, String),

    /// The narrative model could not produce a response.
    #[error("narrative model failed: {0}")]
    Model(String),

    /// A scripted model ran out of canned responses.
    #[error("the script has no more responses")]
    ScriptExhausted,

    /// The transcript could not be serialized.
    #[error("transcript export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// World construction or mutation error.
    #[error("{0}")]
    Core(#[from] CoreError),
}
