//! Configuration for a story session.

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// Include the per-component descriptions in world-update prompts.
    pub detail: bool,
    /// Ask the model for a scene narration whenever the player arrives somewhere new.
    pub narrate_on_move: bool,
    /// Maximum number of transcript entries kept; older entries are dropped first.
    pub max_transcript: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            detail: true,
            narrate_on_move: true,
            max_transcript: 500,
        }
    }
}

impl StoryConfig {
    /// Set whether update prompts carry component descriptions.
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    /// Set whether arriving at a new location triggers a narration.
    pub fn with_narration(mut self, narrate_on_move: bool) -> Self {
        self.narrate_on_move = narrate_on_move;
        self
    }

    /// Set the transcript length (at least 1).
    pub fn with_max_transcript(mut self, max: usize) -> Self {
        self.max_transcript = max.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoryConfig::default();
        assert!(cfg.detail);
        assert!(cfg.narrate_on_move);
        assert_eq!(cfg.max_transcript, 500);
    }

    #[test]
    fn builder_methods() {
        let cfg = StoryConfig::default()
            .with_detail(false)
            .with_narration(false)
            .with_max_transcript(20);
        assert!(!cfg.detail);
        assert!(!cfg.narrate_on_move);
        assert_eq!(cfg.max_transcript, 20);
    }

    #[test]
    fn transcript_length_at_least_one() {
        let cfg = StoryConfig::default().with_max_transcript(0);
        assert_eq!(cfg.max_transcript, 1);
    }
}
