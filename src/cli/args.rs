use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::FilterKey;

#[derive(Parser, Debug)]
#[command(
    name = "ruffsight",
    version,
    about = "Summarize and explore ruff JSON reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a ruff JSON report
    #[arg(long, short, global = true, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Read the report from stdin instead of a file
    #[arg(long, global = true)]
    pub stdin: bool,

    /// Narrow one field to an allow-list, e.g. --filter code=E501,F401 (repeatable)
    #[arg(long, global = true, value_name = "KEY=V1,V2")]
    pub filter: Vec<FilterSpec>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total message count plus a popularity table per filterable field (the default)
    Summary,
    /// Files ranked by number of issues
    Files,
    /// Every message for one file, by its shortened filename
    File {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Rule documentation plus per-rule occurrence stats
    Rule {
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// One `--filter` argument: a filterable field and its allow-list.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub key: FilterKey,
    pub values: Vec<String>,
}

impl FromStr for FilterSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, values) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=V1,V2 but got '{s}'"))?;
        let key = FilterKey::from_str(key)?;
        let values: Vec<String> = values
            .split(',')
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return Err(format!("filter '{s}' names no values"));
        }
        Ok(FilterSpec { key, values })
    }
}
