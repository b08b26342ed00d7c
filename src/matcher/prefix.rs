use crate::corpus::QaRecord;

use super::keywords::{KeywordSet, Tokenizer};
use super::Match;

/// Records where at least `threshold` of the keywords prefix some question word.
///
/// Sorted by score, highest first; equal scores keep corpus order.
pub fn find(
    keywords: &KeywordSet,
    records: &[QaRecord],
    tokenizer: &Tokenizer,
    threshold: f64,
) -> Vec<Match> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<Match> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let question = tokenizer.tokenize(&record.question);
            let matched = keywords
                .tokens()
                .iter()
                .filter(|k| question.iter().any(|word| word.starts_with(k.as_str())))
                .count();
            let score = keywords.ratio(matched)?;
            (score >= threshold).then(|| Match::new(index, record, score))
        })
        .collect();

    // sort_by is stable
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keywords(query: &str) -> KeywordSet {
        KeywordSet::build(query, &Tokenizer::default(), &HashSet::new(), 3)
    }

    fn records() -> Vec<QaRecord> {
        vec![
            QaRecord::new("Describe your testing strategy", "Unit tests"),
            QaRecord::new("Describe a deployment you automated", "CI"),
            QaRecord::new("How do you approach automated testing?", "Pyramid"),
        ]
    }

    #[test]
    fn test_prefix_scores_and_order() {
        let hits = find(&keywords("test autom"), &records(), &Tokenizer::default(), 0.5);
        let order: Vec<usize> = hits.iter().map(|m| m.index).collect();
        // record 2 matches both keywords, 0 and 1 one each and keep corpus order
        assert_eq!(order, [2, 0, 1]);
        assert_eq!(hits[0].score, 1.0);
        assert_eq!(hits[1].score, 0.5);
        assert_eq!(hits[2].score, 0.5);
    }

    #[test]
    fn test_substring_is_not_prefix() {
        // "mated" is inside "automated" but does not start any word
        let hits = find(&keywords("mated"), &records(), &Tokenizer::default(), 0.5);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_threshold_filters() {
        let hits = find(&keywords("test autom"), &records(), &Tokenizer::default(), 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 2);
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let hits = find(&KeywordSet::default(), &records(), &Tokenizer::default(), 0.5);
        assert!(hits.is_empty());
    }
}
