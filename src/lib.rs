//! Interview Q&A finder
//!
//! Matches a spoken (transcribed) question against a fixed corpus of
//! question/answer pairs and returns the most relevant answers.
//!
//! # Modules
//!
//! - `matcher`: three-tier matching (exact, keyword, prefix) and deduplication
//! - `trigger`: strips trigger phrases like "can you tell me" from transcripts
//! - `corpus`: QA records and the JSON corpus loader
//! - `session`: controller state and the command/event loop
//! - `config`: TOML configuration
//!
//! # Example
//!
//! ```
//! use qafind::{match_query, Corpus, MatcherConfig, QaRecord};
//!
//! let corpus = Corpus::new(vec![
//!     QaRecord::new("what is your experience with databases", "5 years"),
//!     QaRecord::new("what is your favorite language", "Go"),
//! ]);
//! let result = match_query("experience with databases", &corpus, &MatcherConfig::default());
//! assert_eq!(result.into_records()[0].answer, "5 years");
//! ```

pub mod command;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod matcher;
pub mod render;
pub mod repl;
pub mod session;
pub mod stats;
pub mod trigger;

pub use config::{Config, MatcherConfig, TriggerMode};
pub use corpus::{Corpus, QaRecord};
pub use error::{Error, Result};
pub use matcher::{dedup_by_answer, fold_case, match_query, Match, MatchResult, MatchTier, Matcher};
pub use session::{Session, SessionCommand, SessionEvent};
pub use trigger::TriggerDetector;
