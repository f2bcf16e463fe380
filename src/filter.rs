//! Per-field allow-list filtering over enriched messages.
//!
//! A message is visible iff, for every filterable field, its value is in
//! that field's allowed set (AND across fields, OR within a field). The
//! state resets to all-selected whenever a new report replaces the data.

use indexmap::{IndexMap, IndexSet};

use crate::process::{count_and_sort, ProcessedMessages};
use crate::types::{ExtendedMessage, FilterKey};

/// Allowed values per filterable field.
///
/// Lifecycle: built all-selected from a processed report, optionally
/// narrowed per field, reset (or rebuilt) when the report changes.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    allowed: IndexMap<FilterKey, IndexSet<String>>,
}

impl FilterState {
    /// Builds the all-selected state: every value observed in the report is
    /// allowed for its field. An empty report yields empty allow-lists.
    #[must_use]
    pub fn all_selected(processed: &ProcessedMessages) -> Self {
        let allowed = FilterKey::ALL
            .iter()
            .map(|&key| {
                let values: IndexSet<String> = processed
                    .values
                    .get(&key)
                    .map(|table| table.iter().map(|(value, _)| value.clone()).collect())
                    .unwrap_or_default();
                (key, values)
            })
            .collect();
        Self { allowed }
    }

    /// Discards any narrowing and re-derives the allow-lists from `processed`.
    pub fn reset(&mut self, processed: &ProcessedMessages) {
        *self = Self::all_selected(processed);
    }

    /// Replaces the allow-list for one field.
    pub fn set<I>(&mut self, key: FilterKey, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.allowed.insert(key, values.into_iter().collect());
    }

    #[must_use]
    pub fn allowed(&self, key: FilterKey) -> Option<&IndexSet<String>> {
        self.allowed.get(&key)
    }

    /// True iff the message's value for every field is currently allowed.
    #[must_use]
    pub fn passes(&self, message: &ExtendedMessage) -> bool {
        FilterKey::ALL.iter().all(|&key| {
            self.allowed
                .get(&key)
                .is_some_and(|values| values.contains(message.value(key)))
        })
    }
}

/// Applies the filter and re-aggregates the visible subset, so every view
/// of the result reflects only what passed.
#[must_use]
pub fn apply_filters(processed: &ProcessedMessages, filters: &FilterState) -> ProcessedMessages {
    let messages: Vec<ExtendedMessage> = processed
        .messages
        .iter()
        .filter(|m| filters.passes(m))
        .cloned()
        .collect();
    let values = FilterKey::ALL
        .iter()
        .map(|&key| {
            let table = count_and_sort(&messages, |m: &ExtendedMessage| m.value(key).to_string());
            (key, table)
        })
        .collect();
    ProcessedMessages { messages, values }
}
