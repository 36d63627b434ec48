//! Frequency counting.
use std::collections::BTreeMap;

/// Count occurrences of each value, returning `(value, count)` pairs in
/// ascending value order.
pub fn count_frequencies<I>(values: I) -> Vec<(i64, usize)>
where
    I: IntoIterator<Item = i64>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
