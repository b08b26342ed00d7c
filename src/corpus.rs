//! Question/answer corpus - loaded once at startup, read-only afterwards

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Sample corpus compiled into the binary, used when no corpus file is configured
const BUILTIN_CORPUS: &str = include_str!("../data/qa.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl AsRef<QaRecord> for QaRecord {
    fn as_ref(&self) -> &QaRecord {
        self
    }
}

/// Ordered, immutable list of QA records.
///
/// Cloning is cheap; all clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Arc<[QaRecord]>,
}

impl Corpus {
    pub fn new(records: Vec<QaRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Parse a JSON array of `{question, answer}` objects
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<QaRecord> = serde_json::from_str(text)?;
        Ok(Self::new(records))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json(&text)?;
        tracing::info!("Loaded {} QA records from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CORPUS)
    }

    /// Load from `path` if given, otherwise use the built-in sample
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let corpus = Self::builtin()?;
                tracing::info!("Using built-in corpus ({} records)", corpus.len());
                Ok(corpus)
            }
        }
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QaRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct answers
    pub fn answer_count(&self) -> usize {
        let answers: std::collections::HashSet<&str> =
            self.records.iter().map(|r| r.answer.as_str()).collect();
        answers.len()
    }
}
