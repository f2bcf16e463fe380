// src/cli/handlers.rs
use serde::Serialize;

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::{Result, RuffsightError};
use crate::filter::{apply_filters, FilterState};
use crate::loader;
use crate::process::{count_and_sort, process_messages, ProcessedMessages};
use crate::reporting;
use crate::rules;
use crate::types::{ExtendedMessage, Message};

/// Entry point for every subcommand: load, enrich, filter, dispatch.
///
/// # Errors
/// Returns error if no input was given, the report is invalid, or output
/// serialization fails.
pub fn handle(cli: &Cli) -> Result<()> {
    let config = Config::load();
    if cli.no_color || !config.preferences.color {
        colored::control::set_override(false);
    }
    let format = resolve_format(cli, &config);
    let max_rows = config.preferences.max_rows;

    let messages = load_input(cli)?;
    let processed = process_messages(&messages);
    let mut filters = FilterState::all_selected(&processed);
    for spec in &cli.filter {
        filters.set(spec.key, spec.values.iter().cloned());
    }
    let filtered = apply_filters(&processed, &filters);

    match &cli.command {
        None | Some(Commands::Summary) => handle_summary(&filtered, format, max_rows),
        Some(Commands::Files) => handle_files(&filtered, format, max_rows),
        Some(Commands::File { path }) => handle_file(&filtered, path, format, max_rows),
        Some(Commands::Rule { code }) => handle_rule(&filtered, code, format, max_rows),
    }
}

fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.unwrap_or_else(|| {
        if config.preferences.format == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Terminal
        }
    })
}

fn load_input(cli: &Cli) -> Result<Vec<Message>> {
    if cli.stdin {
        return loader::from_stdin();
    }
    match &cli.report {
        Some(path) => loader::from_file(path),
        None => Err(RuffsightError::NoInput),
    }
}

fn handle_summary(filtered: &ProcessedMessages, format: OutputFormat, max_rows: usize) -> Result<()> {
    match format {
        OutputFormat::Json => reporting::print_json(filtered),
        OutputFormat::Terminal => {
            reporting::print_summary(filtered, max_rows);
            Ok(())
        }
    }
}

fn handle_files(filtered: &ProcessedMessages, format: OutputFormat, max_rows: usize) -> Result<()> {
    let rows = reporting::file_rows(&filtered.messages);
    match format {
        OutputFormat::Json => reporting::print_json(&rows),
        OutputFormat::Terminal => {
            reporting::print_files(&rows, max_rows);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    messages: Vec<&'a ExtendedMessage>,
    codes: Vec<(String, usize)>,
}

fn handle_file(
    filtered: &ProcessedMessages,
    path: &str,
    format: OutputFormat,
    max_rows: usize,
) -> Result<()> {
    let messages: Vec<&ExtendedMessage> = filtered
        .messages
        .iter()
        .filter(|m| m.short_filename == path)
        .collect();
    match format {
        OutputFormat::Json => {
            let codes = count_and_sort(&messages, |m: &&ExtendedMessage| m.raw.code.clone());
            reporting::print_json(&FileReport {
                file: path,
                messages,
                codes,
            })
        }
        OutputFormat::Terminal => {
            reporting::print_file_report(path, &messages, max_rows);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct RuleReport<'a> {
    code: &'a str,
    rule: Option<&'a rules::RuleExplanation>,
    occurrences: usize,
    files: usize,
    by_message: Vec<(String, usize)>,
    by_file: Vec<(String, usize)>,
}

fn handle_rule(
    filtered: &ProcessedMessages,
    code: &str,
    format: OutputFormat,
    max_rows: usize,
) -> Result<()> {
    let messages: Vec<&ExtendedMessage> = filtered
        .messages
        .iter()
        .filter(|m| m.raw.code == code)
        .collect();
    let rule = rules::lookup(code);
    match format {
        OutputFormat::Json => {
            let by_message =
                count_and_sort(&messages, |m: &&ExtendedMessage| m.raw.message.clone());
            let by_file =
                count_and_sort(&messages, |m: &&ExtendedMessage| m.short_filename.clone());
            reporting::print_json(&RuleReport {
                code,
                rule,
                occurrences: messages.len(),
                files: by_file.len(),
                by_message,
                by_file,
            })
        }
        OutputFormat::Terminal => {
            reporting::print_rule_report(code, rule, &messages, max_rows);
            Ok(())
        }
    }
}
