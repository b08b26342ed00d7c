use std::collections::HashSet;

use super::fold_case;

/// Splits text into lowercase whitespace tokens
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    trim_punctuation: bool,
}

impl Tokenizer {
    pub fn new(trim_punctuation: bool) -> Self {
        Self { trim_punctuation }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        fold_case(text)
            .split_whitespace()
            .map(|t| {
                if self.trim_punctuation {
                    t.trim_matches(|c: char| c.is_ascii_punctuation())
                } else {
                    t
                }
            })
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Query tokens that carry meaning: no stopwords, nothing too short, no repeats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    tokens: Vec<String>,
}

impl KeywordSet {
    pub fn build(
        query: &str,
        tokenizer: &Tokenizer,
        stopwords: &HashSet<String>,
        min_token_length: usize,
    ) -> Self {
        let mut seen = HashSet::new();
        let tokens = tokenizer
            .tokenize(query)
            .into_iter()
            .filter(|t| t.chars().count() >= min_token_length)
            .filter(|t| !stopwords.contains(t))
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `matched / len`, or `None` for an empty set
    pub fn ratio(&self, matched: usize) -> Option<f64> {
        if self.tokens.is_empty() {
            return None;
        }
        Some(matched as f64 / self.tokens.len() as f64)
    }
}
