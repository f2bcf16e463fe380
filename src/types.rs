// src/types.rs
use serde::{Deserialize, Serialize};

/// Fixability labels attached to every enriched message.
pub const FIXABLE: &str = "Fixable";
pub const NOT_FIXABLE: &str = "Not fixable";

/// A row/column position inside a source file, 1-based as ruff reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub row: usize,
    #[serde(default)]
    pub column: usize,
}

/// One edit belonging to an automatic fix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edit {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub end_location: Location,
}

/// An available automatic or suggested correction for a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    #[serde(default)]
    pub applicability: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub edits: Vec<Edit>,
}

/// One raw finding from a `ruff check --output-format json` report.
///
/// `code` is the only field the loader insists on; everything else defaults
/// when absent so partial reports still flow through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fix: Option<Fix>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub end_location: Location,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub noqa_row: usize,
    #[serde(default)]
    pub cell: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A raw message plus the display fields derived during enrichment.
///
/// Derived fields are pure functions of the message and the report-wide
/// filename set; they are computed in one batch per load and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedMessage {
    #[serde(flatten)]
    pub raw: Message,
    /// Rule code with trailing digits stripped, e.g. `E501` -> `E`.
    pub code_class: String,
    /// Filename with the report-wide common prefix removed.
    pub short_filename: String,
    /// `"Fixable"` or `"Not fixable"`.
    pub fixable: String,
    pub package_name: String,
    pub module_name: String,
}

impl ExtendedMessage {
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.raw.fix.is_some()
    }

    /// The value of one filterable field on this message.
    #[must_use]
    pub fn value(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Code => &self.raw.code,
            FilterKey::CodeClass => &self.code_class,
            FilterKey::Fixable => &self.fixable,
            FilterKey::PackageName => &self.package_name,
            FilterKey::ModuleName => &self.module_name,
        }
    }
}

/// The five fields a report can be filtered and faceted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Code,
    CodeClass,
    Fixable,
    PackageName,
    ModuleName,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Code,
        FilterKey::CodeClass,
        FilterKey::Fixable,
        FilterKey::PackageName,
        FilterKey::ModuleName,
    ];

    /// Human-readable label used in table headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Code => "Code",
            FilterKey::CodeClass => "Code Class",
            FilterKey::Fixable => "Fixability",
            FilterKey::PackageName => "Package Name",
            FilterKey::ModuleName => "Module Name",
        }
    }

    /// Token accepted on the command line, e.g. `--filter code=E501`.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            FilterKey::Code => "code",
            FilterKey::CodeClass => "code_class",
            FilterKey::Fixable => "fixable",
            FilterKey::PackageName => "package_name",
            FilterKey::ModuleName => "module_name",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.token() == token)
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::parse(s).ok_or_else(|| {
            let known: Vec<&str> = FilterKey::ALL.iter().map(|k| k.token()).collect();
            format!(
                "unknown filter key '{s}' (expected one of: {})",
                known.join(", ")
            )
        })
    }
}
