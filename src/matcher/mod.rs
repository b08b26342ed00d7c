//! Three-tier question matching
//!
//! A query is tried against the corpus with progressively looser strategies,
//! stopping at the first one that finds anything:
//!
//! 1. Exact - the query is a substring of the question
//! 2. Keyword - enough query keywords appear verbatim in the question
//! 3. Prefix - enough query keywords start some question word, ranked by score
//!
//! Whatever tier answers, results are deduplicated by answer text. Empty
//! queries, queries made only of stopwords, and empty corpora all give an
//! empty result.

mod dedup;
mod exact;
mod keyword;
mod keywords;
mod prefix;

pub use dedup::dedup_by_answer;
pub use keywords::{KeywordSet, Tokenizer};

use std::collections::HashSet;
use std::fmt;

use crate::config::MatcherConfig;
use crate::corpus::{Corpus, QaRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Exact,
    Keyword,
    Prefix,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::Keyword => write!(f, "keyword"),
            MatchTier::Prefix => write!(f, "prefix"),
        }
    }
}

/// A matched record with its corpus position and tier score in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub index: usize,
    pub record: QaRecord,
    pub score: f64,
}

impl Match {
    fn new(index: usize, record: &QaRecord, score: f64) -> Self {
        Self {
            index,
            record: record.clone(),
            score,
        }
    }
}

impl AsRef<QaRecord> for Match {
    fn as_ref(&self) -> &QaRecord {
        &self.record
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    /// Tier that produced the matches, `None` when nothing matched
    pub tier: Option<MatchTier>,
    pub matches: Vec<Match>,
}

impl MatchResult {
    fn from_tier(tier: MatchTier, matches: Vec<Match>) -> Self {
        Self {
            tier: Some(tier),
            matches: dedup_by_answer(matches),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn records(&self) -> impl Iterator<Item = &QaRecord> {
        self.matches.iter().map(|m| &m.record)
    }

    pub fn into_records(self) -> Vec<QaRecord> {
        self.matches.into_iter().map(|m| m.record).collect()
    }
}

pub struct Matcher {
    stopwords: HashSet<String>,
    min_token_length: usize,
    keyword_threshold: f64,
    fuzzy_threshold: f64,
    search_answers: bool,
    tokenizer: Tokenizer,
}

impl Matcher {
    pub fn new(config: &MatcherConfig) -> Self {
        Self {
            stopwords: config
                .stopwords
                .iter()
                .map(|s| fold_case(s.trim()))
                .collect(),
            min_token_length: config.min_token_length,
            keyword_threshold: config.keyword_threshold,
            fuzzy_threshold: config.fuzzy_threshold,
            search_answers: config.search_answers,
            tokenizer: Tokenizer::new(config.trim_punctuation),
        }
    }

    pub fn search_answers(&self) -> bool {
        self.search_answers
    }

    pub fn set_search_answers(&mut self, enabled: bool) {
        self.search_answers = enabled;
    }

    pub fn keywords(&self, query: &str) -> KeywordSet {
        KeywordSet::build(query, &self.tokenizer, &self.stopwords, self.min_token_length)
    }

    /// Run the tiers in order and return the first non-empty result
    #[hotpath::measure]
    pub fn find(&self, query: &str, corpus: &Corpus) -> MatchResult {
        let query = fold_case(query.trim());
        if query.is_empty() || corpus.is_empty() {
            return MatchResult::default();
        }
        let records = corpus.records();

        let hits = exact::find(&query, records, self.search_answers);
        if !hits.is_empty() {
            tracing::debug!("exact tier: {} hits for {:?}", hits.len(), query);
            return MatchResult::from_tier(MatchTier::Exact, hits);
        }

        let keywords = self.keywords(&query);
        if keywords.is_empty() {
            tracing::debug!("no keywords left in {:?}", query);
            return MatchResult::default();
        }

        let hits = keyword::find(&keywords, records, &self.tokenizer, self.keyword_threshold);
        if !hits.is_empty() {
            tracing::debug!("keyword tier: {} hits for {:?}", hits.len(), keywords.tokens());
            return MatchResult::from_tier(MatchTier::Keyword, hits);
        }

        let hits = prefix::find(&keywords, records, &self.tokenizer, self.fuzzy_threshold);
        if !hits.is_empty() {
            tracing::debug!("prefix tier: {} hits for {:?}", hits.len(), keywords.tokens());
            return MatchResult::from_tier(MatchTier::Prefix, hits);
        }

        tracing::debug!("no match for {:?}", query);
        MatchResult::default()
    }
}

/// Lowercase char by char.
///
/// Unlike `str::to_lowercase` this ignores context (Greek final sigma), so a
/// substring of a string still folds to a substring of the folded string.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// One-shot matching with a throwaway [`Matcher`]
pub fn match_query(query: &str, corpus: &Corpus, config: &MatcherConfig) -> MatchResult {
    Matcher::new(config).find(query, corpus)
}
