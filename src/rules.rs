//! Bundled rule metadata: code -> name, explanation, fix availability.
//!
//! The table is distilled from `ruff rule --all` output the same way at
//! build time: message formats and linter names are dropped, and fix
//! availability is encoded as absent (never), 1 (sometimes), or 2 (always).
//! Initialized once, read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// How reliably a rule's violations can be fixed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixability {
    NotFixable,
    Sometimes,
    Always,
}

impl Fixability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Fixability::NotFixable => "Fix is not available",
            Fixability::Sometimes => "Fix is sometimes available",
            Fixability::Always => "Fix is always available",
        }
    }
}

/// Documentation for one ruff rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleExplanation {
    pub code: String,
    pub name: String,
    pub explanation: String,
    #[serde(default)]
    pub preview: bool,
    /// 1 = fix sometimes available, 2 = always; absent = no fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<u8>,
}

impl RuleExplanation {
    #[must_use]
    pub fn fixability(&self) -> Fixability {
        match self.fix {
            Some(2) => Fixability::Always,
            Some(_) => Fixability::Sometimes,
            None => Fixability::NotFixable,
        }
    }

    /// Upstream documentation page for this rule.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("https://docs.astral.sh/ruff/rules/{}/", self.name)
    }
}

static RULE_MAP: Lazy<HashMap<String, RuleExplanation>> = Lazy::new(|| {
    // A broken bundled dataset degrades to an empty table rather than a panic.
    let rules: Vec<RuleExplanation> =
        serde_json::from_str(include_str!("../assets/rules.json")).unwrap_or_default();
    rules.into_iter().map(|r| (r.code.clone(), r)).collect()
});

/// Looks up metadata for a rule code. Unknown codes are not an error; they
/// degrade to "no explanation available" at the call site.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static RuleExplanation> {
    RULE_MAP.get(code)
}

/// Number of rules in the bundled table.
#[must_use]
pub fn count() -> usize {
    RULE_MAP.len()
}
