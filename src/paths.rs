//! Filename-derivation helpers used during enrichment.
//!
//! The package derivation deliberately keeps its literal regex-replace
//! semantics: short module paths can produce degenerate outputs such as a
//! trailing dot (`pkg.sub.__init__` -> `pkg.sub.`). Downstream grouping
//! treats those as ordinary values, so they are not "cleaned up" here.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^.]+$").unwrap());

/// Longest character-level prefix shared by every value.
///
/// Not path-segment aware: `a/bar.py` and `a/baz.py` share `a/ba`, and the
/// partial segment is kept. An empty iterator yields `""`.
#[must_use]
pub fn common_prefix<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut prefix = first.to_string();
    for value in iter {
        let shared: usize = prefix
            .chars()
            .zip(value.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

/// Strips `prefix` from the front of `value` iff both are non-empty and
/// `value` actually starts with it; otherwise returns `value` unchanged.
#[must_use]
pub fn remove_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    if !prefix.is_empty() && !value.is_empty() {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest;
        }
    }
    value
}

/// Turns a shortened path into a dotted module name: one trailing `.py` is
/// dropped, every `/` becomes `.`. Other extensions pass through untouched.
#[must_use]
pub fn derive_module(filename: &str) -> String {
    let trimmed = filename.strip_suffix(".py").unwrap_or(filename);
    trimmed.replace('/', ".")
}

/// Derives the package of a dotted module name: every literal `.__init__`
/// collapses to a bare `.`, then the final dot-separated segment is stripped.
#[must_use]
pub fn derive_package(module: &str) -> String {
    let collapsed = module.replace(".__init__", ".");
    TRAILING_SEGMENT.replace(&collapsed, "").into_owned()
}
