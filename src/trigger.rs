//! Trigger phrase detection - turns a transcript into a search query

use crate::config::{TriggerConfig, TriggerMode};
use crate::fuzzy::leading_phrase_match;
use crate::matcher::fold_case;

pub struct TriggerDetector {
    phrases: Vec<String>,
    /// Phrase words, kept for fuzzy prefix matching
    words: Vec<Vec<String>>,
    mode: TriggerMode,
    fuzzy: bool,
}

impl TriggerDetector {
    pub fn new(phrases: &[String], mode: TriggerMode) -> Self {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|p| fold_case(p.trim()))
            .filter(|p| !p.is_empty())
            .collect();
        let words = phrases
            .iter()
            .map(|p| p.split_whitespace().map(String::from).collect())
            .collect();
        Self {
            phrases,
            words,
            mode,
            fuzzy: false,
        }
    }

    pub fn from_config(config: &TriggerConfig) -> Self {
        Self::new(&config.phrases, config.mode).with_fuzzy(config.fuzzy)
    }

    /// Allow small transcription errors in prefix triggers
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.mode = mode;
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Extract the query from a transcript.
    ///
    /// Returns `None` only in prefix mode when no trigger starts the transcript,
    /// which is always the case with an empty phrase list.
    pub fn strip(&self, transcript: &str) -> Option<String> {
        let text = fold_case(transcript.trim());
        match self.mode {
            TriggerMode::Prefix => {
                if let Some(trigger) = self.phrases.iter().find(|p| text.starts_with(p.as_str())) {
                    return Some(remove_first(&text, trigger));
                }
                if self.fuzzy {
                    if let Some(query) = self.strip_fuzzy(&text) {
                        return Some(query);
                    }
                }
                tracing::debug!("No trigger phrase at start of {:?}", text);
                None
            }
            TriggerMode::Anywhere => {
                match self.phrases.iter().find(|p| text.contains(p.as_str())) {
                    Some(trigger) => Some(remove_first(&text, trigger)),
                    None => Some(text),
                }
            }
        }
    }

    fn strip_fuzzy(&self, text: &str) -> Option<String> {
        let spoken: Vec<&str> = text.split_whitespace().collect();
        self.words.iter().find_map(|phrase| {
            let consumed = leading_phrase_match(phrase, &spoken)?;
            tracing::debug!("Fuzzy trigger {:?} matched", phrase.join(" "));
            Some(spoken[consumed..].join(" "))
        })
    }
}

fn remove_first(text: &str, trigger: &str) -> String {
    text.replacen(trigger, "", 1).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases() -> Vec<String> {
        vec![
            "can you tell me".to_string(),
            "have you worked".to_string(),
            "what is".to_string(),
        ]
    }

    #[test]
    fn test_prefix_strips_trigger() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Prefix);
        assert_eq!(
            detector.strip("can you tell me about your experience with databases"),
            Some("about your experience with databases".to_string())
        );
        assert_eq!(
            detector.strip("What is your favorite language"),
            Some("your favorite language".to_string())
        );
    }

    #[test]
    fn test_prefix_requires_trigger_at_start() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Prefix);
        assert_eq!(detector.strip("so what is your favorite language"), None);
        assert_eq!(detector.strip("favorite language"), None);
    }

    #[test]
    fn test_anywhere_strips_inner_trigger() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Anywhere);
        assert_eq!(
            detector.strip("so what is your favorite language"),
            Some("so  your favorite language".to_string())
        );
    }

    #[test]
    fn test_anywhere_falls_back_to_whole_text() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Anywhere);
        assert_eq!(
            detector.strip("  Favorite Language "),
            Some("favorite language".to_string())
        );
    }

    #[test]
    fn test_first_listed_trigger_wins() {
        let phrases = vec!["what".to_string(), "what is".to_string()];
        let detector = TriggerDetector::new(&phrases, TriggerMode::Prefix);
        assert_eq!(detector.strip("what is rust"), Some("is rust".to_string()));
    }

    #[test]
    fn test_trigger_only_gives_empty_query() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Prefix);
        assert_eq!(detector.strip("what is"), Some(String::new()));
    }

    #[test]
    fn test_no_phrases_in_prefix_mode_never_searches() {
        let detector = TriggerDetector::new(&[], TriggerMode::Prefix);
        assert_eq!(detector.strip("Rust"), None);

        let blank = vec!["  ".to_string()];
        let detector = TriggerDetector::new(&blank, TriggerMode::Prefix).with_fuzzy(true);
        assert!(detector.phrases().is_empty());
        assert_eq!(detector.strip("rust"), None);
    }

    #[test]
    fn test_no_phrases_in_anywhere_mode_searches_everything() {
        let detector = TriggerDetector::new(&[], TriggerMode::Anywhere);
        assert_eq!(detector.strip(" Rust "), Some("rust".to_string()));
    }

    #[test]
    fn test_fuzzy_prefix() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Prefix).with_fuzzy(true);
        assert_eq!(
            detector.strip("can you tel me about databases"),
            Some("about databases".to_string())
        );
        assert_eq!(detector.strip("could we talk about databases"), None);
    }

    #[test]
    fn test_fuzzy_off_by_default() {
        let detector = TriggerDetector::new(&phrases(), TriggerMode::Prefix);
        assert_eq!(detector.strip("can you tel me about databases"), None);
    }
}
