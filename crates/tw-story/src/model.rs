//! The boundary to whatever produces narration and update text.

use std::collections::VecDeque;

use crate::error::{StoryError, StoryResult};

/// Something that answers prompts with text.
///
/// Implementations may call a remote language model, ask a human operator,
/// or replay a script. A failure aborts the current turn but leaves the
/// world untouched.
pub trait NarrativeModel {
    /// Answer a prompt.
    fn complete(&mut self, prompt: &str) -> StoryResult<String>;
}

/// Separator between responses in a script file.
pub const SCRIPT_SEPARATOR: &str = "---";

/// A model that replays canned responses in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModel {
    responses: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedModel {
    /// Create a model from responses in the order they should be returned.
    pub fn new<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Parse a script: responses separated by lines holding only `---`.
    pub fn from_script(script: &str) -> Self {
        let mut responses = Vec::new();
        let mut current = String::new();
        for line in script.lines() {
            if line.trim() == SCRIPT_SEPARATOR {
                responses.push(std::mem::take(&mut current));
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }
        responses.push(current);
        Self::new(
            responses
                .into_iter()
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        )
    }

    /// Responses not yet returned.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }

    /// Every prompt received so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl NarrativeModel for ScriptedModel {
    fn complete(&mut self, prompt: &str) -> StoryResult<String> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or(StoryError::ScriptExhausted)
    }
}
