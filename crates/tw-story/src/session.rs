//! Story session management.
//!
//! `StorySession` owns a world and a narrative model. Each turn renders the
//! world, asks the model what the player's input changes, and applies the
//! answer through the update protocol. Arriving somewhere new triggers a scene
//! narration.

use chrono::Utc;
use tracing::{info, warn};
use tw_core::update::strip_narration;
use tw_core::{UpdateReport, World};

use crate::config::StoryConfig;
use crate::error::StoryResult;
use crate::model::NarrativeModel;
use crate::prompts;
use crate::transcript::{Transcript, TranscriptEntry};

/// What one player input did.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The model's predicted outcomes, narration removed.
    pub outcomes: String,
    /// The model's narration of those outcomes.
    pub narration: Option<String>,
    /// What applying the outcomes changed in the world.
    pub report: UpdateReport,
}

/// An interactive story session.
pub struct StorySession<M> {
    world: World,
    model: M,
    config: StoryConfig,
    transcript: Transcript,
    narrated_at: Option<String>,
}

impl<M: NarrativeModel> StorySession<M> {
    /// Start a session on a built world.
    pub fn new(world: World, model: M, config: StoryConfig) -> Self {
        let transcript = Transcript::with_capacity(config.max_transcript);
        Self {
            world,
            model,
            config,
            transcript,
            narrated_at: None,
        }
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Get the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The world as the player sees it.
    pub fn state(&self) -> String {
        self.world.render(self.config.detail)
    }

    /// Narrate the scene if the player is somewhere not yet narrated.
    ///
    /// Returns `None` when narration is disabled or the player has not moved
    /// since the last narration. A model failure is recorded and returned;
    /// the next call retries.
    pub fn narrate_if_moved(&mut self) -> StoryResult<Option<String>> {
        if !self.config.narrate_on_move {
            return Ok(None);
        }
        let here = self.world.player().location().to_string();
        if self.narrated_at.as_deref() == Some(here.as_str()) {
            return Ok(None);
        }

        let prompt = prompts::narrate_scene(&self.world.render(true));
        let text = match self.model.complete(&prompt) {
            Ok(text) => text.trim().to_string(),
            Err(error) => {
                self.record_failure(None, &error.to_string());
                return Err(error);
            }
        };
        info!(location = %here, "scene narrated");
        self.transcript.append(TranscriptEntry::Scene {
            location: here.clone(),
            text: text.clone(),
            timestamp: Utc::now(),
        });
        self.narrated_at = Some(here);
        Ok(Some(text))
    }

    /// Play one player input.
    ///
    /// The world only changes through the model's update text; a model
    /// failure leaves it untouched.
    pub fn turn(&mut self, input: &str) -> StoryResult<Turn> {
        let input = input.trim();
        let prompt = prompts::world_update(&self.state(), input);
        let response = match self.model.complete(&prompt) {
            Ok(response) => response,
            Err(error) => {
                self.record_failure(Some(input), &error.to_string());
                return Err(error);
            }
        };

        let outcomes = strip_narration(&response);
        let report = self.world.parse_updates(&response);
        info!(
            input,
            applied = report.applied.len(),
            failed = report.failures.len(),
            "turn played"
        );
        self.transcript
            .append(TranscriptEntry::turn(input, outcomes.clone(), &report));

        Ok(Turn {
            outcomes,
            narration: report.narration.clone(),
            report,
        })
    }

    /// End the session, keeping the world.
    pub fn into_world(self) -> World {
        self.world
    }

    fn record_failure(&mut self, input: Option<&str>, error: &str) {
        warn!(error, "narrative model failed");
        self.transcript.append(TranscriptEntry::ModelFailure {
            input: input.map(str::to_string),
            error: error.to_string(),
            timestamp: Utc::now(),
        });
    }
}
