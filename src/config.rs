//! Quiz settings and quiz definitions loaded from TOML or JSON.
//!
//! A definition file carries an optional `[settings]` table and a list of
//! questions:
//!
//! ```toml
//! [settings]
//! seconds_per_question = 20
//!
//! [[questions]]
//! text = "What is the square root of 64?"
//! kind = "multiple-choice"
//! answers = [
//!     { text = "8", is_correct = true },
//!     { text = "6" },
//! ]
//! ```

use crate::core::{QuestionSet, DEFAULT_SECONDS_PER_QUESTION, MAX_SECONDS_PER_QUESTION};
use crate::validation::{validate_question_set, QuestionIssue};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or checking quiz configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Timing knobs for a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Countdown each freshly presented question starts with, 1 to 30.
    pub seconds_per_question: u32,
    /// Real-time length of one countdown step. Anything other than 1000
    /// means a countdown "second" is no longer a wall-clock second.
    pub tick_interval_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            tick_interval_ms: 1000,
        }
    }
}

impl QuizConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SECONDS_PER_QUESTION).contains(&self.seconds_per_question) {
            return Err(ConfigError::Invalid(format!(
                "seconds_per_question must be between 1 and {MAX_SECONDS_PER_QUESTION}, got {}",
                self.seconds_per_question
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

/// Settings plus the question set they apply to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(default)]
    pub settings: QuizConfig,
    pub questions: QuestionSet,
}

impl QuizDefinition {
    /// The built-in question set with default settings.
    pub fn builtin() -> Self {
        Self {
            settings: QuizConfig::default(),
            questions: QuestionSet::builtin(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let definition: Self = toml::from_str(source)?;
        definition.settings.validate()?;
        Ok(definition)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let definition: Self = serde_json::from_str(source)?;
        definition.settings.validate()?;
        Ok(definition)
    }

    /// Load a definition from disk. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let definition = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_toml_str(&source)?
        };

        info!(
            path = %path.display(),
            questions = definition.questions.len(),
            "loaded quiz definition"
        );
        Ok(definition)
    }

    /// Report every problem with the question set. Loading never rejects a
    /// definition for these.
    pub fn validate_questions(&self) -> Validation<(), NonEmptyVec<QuestionIssue>> {
        validate_question_set(&self.questions)
    }
}
