//! Generic counting, grouping, and descending-sort helpers.
//!
//! Key order matters: `count_by` and `group_by` keep keys in first-seen
//! order, and `order_by_desc` is a stable sort, so equal counts surface in
//! encounter order rather than an arbitrary hash order.

use indexmap::IndexMap;

/// Counts items by a string key, keys kept in first-seen order.
pub fn count_by<T, F>(items: &[T], key: F) -> IndexMap<String, usize>
where
    F: Fn(&T) -> String,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Groups items by a string key; members keep their input order within each
/// group, and groups appear in first-seen key order.
pub fn group_by<'a, T, F>(items: &'a [T], key: F) -> IndexMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> String,
{
    let mut groups: IndexMap<String, Vec<&'a T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Stable sort by the extracted value, descending.
///
/// Equal values keep their relative input order. With string values this
/// means plain reverse-lexicographic ordering; with numeric values, ties
/// stay in encounter order.
pub fn order_by_desc<T, V, F>(mut items: Vec<T>, value: F) -> Vec<T>
where
    V: Ord,
    F: Fn(&T) -> V,
{
    items.sort_by(|a, b| value(b).cmp(&value(a)));
    items
}
