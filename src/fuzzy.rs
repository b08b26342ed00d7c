//! Edit-distance helpers for spoken input
//!
//! Speech transcripts drift a letter or two from what was said ("tel" for
//! "tell"), so trigger and stop phrases are compared word by word with a
//! small Levenshtein budget.

/// True when `actual` is within `max(1, len/3)` edits of `expected`
pub fn fuzzy_match(expected: &str, actual: &str) -> bool {
    if expected == actual {
        return true;
    }
    let budget = (expected.chars().count() / 3).max(1);
    levenshtein(expected, actual) <= budget
}

/// Match a phrase against the leading words of `words`.
///
/// Returns how many words were consumed, or `None` if any word is too far off.
pub fn leading_phrase_match(phrase: &[String], words: &[&str]) -> Option<usize> {
    if phrase.is_empty() || words.len() < phrase.len() {
        return None;
    }
    let all_match = phrase
        .iter()
        .zip(words)
        .all(|(expected, spoken)| fuzzy_match(expected, &clean_for_matching(spoken)));
    all_match.then_some(phrase.len())
}

/// Levenshtein distance over chars, two-row table
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Lowercase and keep only letters and whitespace
pub fn clean_for_matching(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}
