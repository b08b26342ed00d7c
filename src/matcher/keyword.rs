use std::collections::HashSet;

use crate::corpus::QaRecord;

use super::keywords::{KeywordSet, Tokenizer};
use super::Match;

/// Records whose question contains at least `threshold` of the keywords verbatim
pub fn find(
    keywords: &KeywordSet,
    records: &[QaRecord],
    tokenizer: &Tokenizer,
    threshold: f64,
) -> Vec<Match> {
    if keywords.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let question: HashSet<String> = tokenizer.tokenize(&record.question).into_iter().collect();
            let matched = keywords
                .tokens()
                .iter()
                .filter(|k| question.contains(*k))
                .count();
            let ratio = keywords.ratio(matched)?;
            (ratio >= threshold).then(|| Match::new(index, record, ratio))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(query: &str) -> KeywordSet {
        KeywordSet::build(query, &Tokenizer::default(), &HashSet::new(), 3)
    }

    fn records() -> Vec<QaRecord> {
        vec![
            QaRecord::new("Have you worked with cloud infrastructure?", "AWS"),
            QaRecord::new("Have you worked in an agile team", "Scrum"),
            QaRecord::new("Which cloud do you prefer?", "AWS"),
        ]
    }

    #[test]
    fn test_threshold_half() {
        // "cloud" and "team": each record matching one of two keywords is at 0.5
        let hits = find(&keywords("cloud team"), &records(), &Tokenizer::default(), 0.5);
        assert_eq!(hits.iter().map(|m| m.index).collect::<Vec<_>>(), [0, 1, 2]);
        assert!(hits.iter().all(|m| m.score == 0.5));
    }

    #[test]
    fn test_below_threshold_dropped() {
        // one of three keywords matched is under 0.5
        let hits = find(
            &keywords("cloud budget planning"),
            &records(),
            &Tokenizer::default(),
            0.5,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_verbatim_not_prefix() {
        let hits = find(&keywords("infra"), &records(), &Tokenizer::default(), 0.5);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let hits = find(&KeywordSet::default(), &records(), &Tokenizer::default(), 0.5);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_question_punctuation_is_part_of_the_token() {
        let hits = find(&keywords("infrastructure"), &records(), &Tokenizer::default(), 1.0);
        assert!(hits.is_empty());

        let hits = find(&keywords("infrastructure?"), &records(), &Tokenizer::default(), 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn test_punctuation_trimming_opt_in() {
        let tokenizer = Tokenizer::new(true);
        let keywords = KeywordSet::build("infrastructure", &tokenizer, &HashSet::new(), 3);
        let hits = find(&keywords, &records(), &tokenizer, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 0);
    }
}
