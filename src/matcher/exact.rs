use crate::corpus::QaRecord;

use super::{fold_case, Match};

/// Records whose question (or answer, if enabled) contains `query`.
///
/// `query` must already be folded with [`fold_case`] and non-empty.
pub fn find(query: &str, records: &[QaRecord], search_answers: bool) -> Vec<Match> {
    debug_assert!(!query.is_empty());
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            fold_case(&record.question).contains(query)
                || (search_answers && fold_case(&record.answer).contains(query))
        })
        .map(|(index, record)| Match::new(index, record, 1.0))
        .collect()
}
