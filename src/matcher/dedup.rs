use std::collections::HashSet;

use crate::corpus::QaRecord;

/// Keep the first item for each distinct answer, in input order
pub fn dedup_by_answer<T, I>(items: I) -> Vec<T>
where
    T: AsRef<QaRecord>,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.as_ref().answer.clone()))
        .collect()
}
