use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON corpus; the built-in sample corpus is used when unset
    #[serde(default)]
    pub corpus: Option<PathBuf>,
    #[serde(default)]
    pub trigger: TriggerConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: None,
            trigger: TriggerConfig::default(),
            matcher: MatcherConfig::default(),
            interaction: InteractionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ============================================================================
// Trigger Config
// ============================================================================

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Transcript must start with a trigger phrase, otherwise nothing is searched
    #[default]
    Prefix,
    /// Trigger may appear anywhere; without one the whole transcript is searched
    Anywhere,
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerMode::Prefix => write!(f, "prefix"),
            TriggerMode::Anywhere => write!(f, "anywhere"),
        }
    }
}

impl std::str::FromStr for TriggerMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" | "strict" => Ok(TriggerMode::Prefix),
            "anywhere" | "permissive" => Ok(TriggerMode::Anywhere),
            other => Err(format!("unknown trigger mode '{}'", other)),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TriggerConfig {
    /// Phrases that mark the rest of the transcript as a question, checked in order
    #[serde(default = "default_trigger_phrases")]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub mode: TriggerMode,
    /// Tolerate small transcription errors in prefix triggers
    #[serde(default)]
    pub fuzzy: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            phrases: default_trigger_phrases(),
            mode: TriggerMode::default(),
            fuzzy: false,
        }
    }
}

fn default_trigger_phrases() -> Vec<String> {
    vec![
        "can you tell me".to_string(),
        "have you worked".to_string(),
        "what is".to_string(),
    ]
}

// ============================================================================
// Matcher Config
// ============================================================================

#[derive(Debug, Deserialize, Clone)]
pub struct MatcherConfig {
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    /// Keywords shorter than this (in chars) are dropped
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    #[serde(default = "default_threshold")]
    pub keyword_threshold: f64,
    #[serde(default = "default_threshold")]
    pub fuzzy_threshold: f64,
    /// Exact tier also scans answer text
    #[serde(default)]
    pub search_answers: bool,
    /// Strip leading/trailing punctuation from tokens before comparing.
    /// Off by default: tokens are compared verbatim.
    #[serde(default = "default_trim_punctuation")]
    pub trim_punctuation: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
            min_token_length: default_min_token_length(),
            keyword_threshold: default_threshold(),
            fuzzy_threshold: default_threshold(),
            search_answers: false,
            trim_punctuation: default_trim_punctuation(),
        }
    }
}

fn default_stopwords() -> Vec<String> {
    [
        "a", "about", "an", "and", "are", "can", "could", "did", "do", "does", "for", "have",
        "how", "in", "is", "it", "me", "my", "of", "on", "or", "tell", "that", "the", "this",
        "to", "was", "were", "what", "when", "where", "which", "who", "why", "with", "would",
        "you", "your",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_min_token_length() -> usize {
    3
}

fn default_threshold() -> f64 {
    0.5
}

fn default_trim_punctuation() -> bool {
    false
}

// ============================================================================
// Interaction Config
// ============================================================================

#[derive(Debug, Deserialize, Clone)]
pub struct InteractionConfig {
    /// Keep listening after a final transcript has been handled
    #[serde(default = "default_continuous")]
    pub continuous: bool,

    /// Spoken phrases that stop listening instead of being searched
    #[serde(default = "default_stop_phrases")]
    pub stop_phrases: Vec<String>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            continuous: default_continuous(),
            stop_phrases: default_stop_phrases(),
        }
    }
}

fn default_continuous() -> bool {
    true
}

fn default_stop_phrases() -> Vec<String> {
    vec!["stop listening".to_string()]
}

// ============================================================================
// Logging Config
// ============================================================================

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load `path`, or `config.toml` from the working directory if it exists,
    /// falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load and validate a config file, reporting any problem
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text)?;

        // Relative corpus paths are resolved against the config file's directory
        if let (Some(corpus), Some(dir)) = (config.corpus.as_mut(), path.parent()) {
            if corpus.is_relative() && !dir.as_os_str().is_empty() {
                *corpus = dir.join(&*corpus);
            }
        }

        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("keyword_threshold", self.keyword_threshold),
            ("fuzzy_threshold", self.fuzzy_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.min_token_length == 0 {
            return Err(Error::InvalidConfig(
                "min_token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
