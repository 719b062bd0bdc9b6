//! Transcript entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tw_core::UpdateReport;

/// A single entry in the session transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TranscriptEntry {
    /// The model narrated the scene the player arrived in.
    Scene {
        /// The player's location at the time.
        location: String,
        /// The narration.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// A player input and what it did to the world.
    Turn {
        /// What the player typed.
        input: String,
        /// The model's predicted outcomes, narration removed.
        outcomes: String,
        /// The model's narration of the outcomes.
        narration: Option<String>,
        /// Changes applied to the world.
        applied: Vec<String>,
        /// Clauses the world refused or could not read.
        failures: Vec<String>,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// The model failed; the world was left as it was.
    ModelFailure {
        /// The input being processed, if any.
        input: Option<String>,
        /// The error message.
        error: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl TranscriptEntry {
    /// A turn entry summarizing an applied update.
    pub fn turn(input: &str, outcomes: String, report: &UpdateReport) -> Self {
        Self::Turn {
            input: input.to_string(),
            outcomes,
            narration: report.narration.clone(),
            applied: report.applied.iter().map(ToString::to_string).collect(),
            failures: report.failures.iter().map(ToString::to_string).collect(),
            timestamp: Utc::now(),
        }
    }

    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Scene { timestamp, .. }
            | Self::Turn { timestamp, .. }
            | Self::ModelFailure { timestamp, .. } => *timestamp,
        }
    }
}
