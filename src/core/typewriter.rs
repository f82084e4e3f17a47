use crate::constants::{
    DELETE_DELAY_MS, PAUSE_AT_FULL_MS, TYPEWRITER_START_DELAY_MS, TYPE_DELAY_MS,
};
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeMode {
    Typing,
    Deleting,
    PausedAtFull,
}

/// Phrases and pacing for the hero typewriter.
#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub pause_delay: Duration,
    pub start_delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Web Developer🌐".to_string(),
                "Problem Solver❓".to_string(),
                "Tech Enthusiast🖥️".to_string(),
            ],
            type_delay: Duration::from_millis(TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DELETE_DELAY_MS),
            pause_delay: Duration::from_millis(PAUSE_AT_FULL_MS),
            start_delay: Duration::from_millis(TYPEWRITER_START_DELAY_MS),
        }
    }
}

/// Result of one transition: what to render and when to call `advance` again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub next_delay: Duration,
}

/// Character-by-character phrase cycler.
///
/// `char_index` counts Unicode scalar values, so multi-byte glyphs are revealed
/// whole and the rendered prefix is always valid UTF-8.
#[derive(Clone, Debug)]
pub struct TypewriterState {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    mode: TypeMode,
    type_delay: Duration,
    delete_delay: Duration,
    pause_delay: Duration,
}

impl TypewriterState {
    pub fn new(config: &TypewriterConfig) -> Result<Self, TypewriterError> {
        if config.phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_index: 0,
            mode: TypeMode::Typing,
            type_delay: config.type_delay,
            delete_delay: config.delete_delay,
            pause_delay: config.pause_delay,
        })
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn mode(&self) -> TypeMode {
        self.mode
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// The prefix of the current phrase that should be on screen.
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_index) {
            Some((byte_end, _)) => &phrase[..byte_end],
            None => phrase,
        }
    }

    pub fn advance(&mut self) -> Step {
        let next_delay = match self.mode {
            TypeMode::Typing => self.type_step(),
            TypeMode::PausedAtFull => {
                self.mode = TypeMode::Deleting;
                self.delete_step()
            }
            TypeMode::Deleting => self.delete_step(),
        };
        Step {
            text: self.visible_text().to_string(),
            next_delay,
        }
    }

    fn type_step(&mut self) -> Duration {
        let len = self.current_len();
        // an empty phrase counts as already typed
        if self.char_index < len {
            self.char_index += 1;
        }
        if self.char_index == len {
            self.mode = TypeMode::PausedAtFull;
            return self.pause_delay;
        }
        self.type_delay
    }

    fn delete_step(&mut self) -> Duration {
        self.char_index = self.char_index.saturating_sub(1);
        if self.char_index == 0 {
            self.mode = TypeMode::Typing;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }
        self.delete_delay
    }
}
