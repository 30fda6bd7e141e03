//! Configuration for an activity editor.

/// Speaker name used for chat messages when none is configured.
pub const DEFAULT_SPEAKER: &str = "Downtime";

/// Configuration for an [`ActivityEditor`](crate::ActivityEditor) and the
/// roll source built for it.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Speaker attached to chat messages.
    pub speaker: String,
    /// Whether a successful roll posts a chat message.
    pub chat_on_roll: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            speaker: DEFAULT_SPEAKER.to_string(),
            chat_on_roll: true,
        }
    }
}

impl EditorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the chat speaker (blank names fall back to the default).
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        let speaker = speaker.into();
        self.speaker = if speaker.trim().is_empty() {
            DEFAULT_SPEAKER.to_string()
        } else {
            speaker
        };
        self
    }

    /// Turn roll chat messages on or off.
    pub fn with_chat_on_roll(mut self, enabled: bool) -> Self {
        self.chat_on_roll = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.speaker, "Downtime");
        assert!(cfg.chat_on_roll);
    }

    #[test]
    fn builder_methods() {
        let cfg = EditorConfig::default()
            .with_seed(123)
            .with_speaker("Narrator")
            .with_chat_on_roll(false);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.speaker, "Narrator");
        assert!(!cfg.chat_on_roll);
    }

    #[test]
    fn blank_speaker_falls_back() {
        let cfg = EditorConfig::default().with_speaker("   ");
        assert_eq!(cfg.speaker, DEFAULT_SPEAKER);
    }
}
