//! Enrichment and aggregation: the pipeline behind every view.
//!
//! `extend_messages` derives the display fields for each raw message;
//! `process_messages` layers the per-field count tables on top. Both are
//! pure and are rerun from scratch whenever a new report is loaded.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::paths::{common_prefix, derive_module, derive_package, remove_prefix};
use crate::tally::{count_by, group_by, order_by_desc};
use crate::types::{ExtendedMessage, FilterKey, Message, FIXABLE, NOT_FIXABLE};

static TRAILING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+$").unwrap());

/// Enriched messages plus one sorted count table per filterable field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessedMessages {
    pub messages: Vec<ExtendedMessage>,
    pub values: IndexMap<FilterKey, Vec<(String, usize)>>,
}

impl ProcessedMessages {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

/// Derives the display fields for every message.
///
/// The shared filename prefix is computed once across the distinct
/// filenames of the whole report; each record is then enriched
/// independently, in input order.
#[must_use]
pub fn extend_messages(messages: &[Message]) -> Vec<ExtendedMessage> {
    let filenames: IndexSet<&str> = messages.iter().map(|m| m.filename.as_str()).collect();
    let prefix = common_prefix(filenames.iter().copied());

    messages
        .iter()
        .map(|message| {
            let short_filename = remove_prefix(&message.filename, &prefix).to_string();
            let module_name = derive_module(&short_filename);
            let package_name = derive_package(&module_name);
            ExtendedMessage {
                code_class: TRAILING_DIGITS.replace(&message.code, "").into_owned(),
                short_filename,
                fixable: if message.fix.is_some() { FIXABLE } else { NOT_FIXABLE }.to_string(),
                package_name,
                module_name,
                raw: message.clone(),
            }
        })
        .collect()
}

/// Counts items per key, sorted by descending count.
///
/// Counts are numeric, so ties keep first-seen order.
pub fn count_and_sort<T, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> String,
{
    let pairs: Vec<(String, usize)> = count_by(items, key).into_iter().collect();
    order_by_desc(pairs, |pair| pair.1)
}

/// Groups items per key, groups sorted by descending size.
pub fn group_and_sort<'a, T, F>(items: &'a [T], key: F) -> Vec<(String, Vec<&'a T>)>
where
    F: Fn(&T) -> String,
{
    let pairs: Vec<(String, Vec<&'a T>)> = group_by(items, key).into_iter().collect();
    order_by_desc(pairs, |pair| pair.1.len())
}

/// Full pipeline for one report: enrich, then build the per-field count
/// tables that drive the summary view and filter initialization.
#[must_use]
pub fn process_messages(messages: &[Message]) -> ProcessedMessages {
    let extended = extend_messages(messages);
    let values = FilterKey::ALL
        .iter()
        .map(|&key| {
            let table = count_and_sort(&extended, |m: &ExtendedMessage| m.value(key).to_string());
            (key, table)
        })
        .collect();
    ProcessedMessages {
        messages: extended,
        values,
    }
}
