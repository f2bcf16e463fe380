//! Console output for the summary, files, file, and rule views.
//!
//! Rendering consumes the aggregation helpers and never feeds back into
//! them; everything here is write-only presentation.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::process::{count_and_sort, group_and_sort, ProcessedMessages};
use crate::rules::RuleExplanation;
use crate::types::{ExtendedMessage, FilterKey};

/// One row of the files view.
#[derive(Debug, Clone, Serialize)]
pub struct FileRow {
    pub file: String,
    pub issues: usize,
    pub fixable: usize,
}

/// Files ranked by issue count, with per-file fixable counts.
#[must_use]
pub fn file_rows(messages: &[ExtendedMessage]) -> Vec<FileRow> {
    group_and_sort(messages, |m: &ExtendedMessage| m.short_filename.clone())
        .into_iter()
        .map(|(file, group)| FileRow {
            issues: group.len(),
            fixable: group.iter().filter(|m| m.is_fixable()).count(),
            file,
        })
        .collect()
}

/// Prints the standard "nothing to show" line for an empty view.
pub fn print_no_data() {
    println!(
        "{}",
        "No data. Load a report with at least one message.".yellow()
    );
}

/// Prints one count table with a percent-of-total column.
///
/// `max_rows` of 0 means unlimited; otherwise the tail is elided with a
/// count of what was hidden.
pub fn print_popularity(header: &str, rows: &[(String, usize)], max_rows: usize) {
    let total: usize = rows.iter().map(|(_, count)| count).sum();
    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0)
        .max(header.len());

    // Pad before coloring: escape codes would otherwise count toward width.
    println!(
        "{} {} {}",
        format!("{header:<key_width$}").bold(),
        format!("{:>7}", "Count").bold(),
        format!("{:>10}", "% of total").bold(),
    );
    let shown = if max_rows > 0 {
        rows.len().min(max_rows)
    } else {
        rows.len()
    };
    for (key, count) in &rows[..shown] {
        // Total is at least one whenever a row exists; the guard covers
        // callers handing in inconsistent tables.
        let percent = if total > 0 {
            format!("{:.2}%", (*count as f64 / total as f64) * 100.0)
        } else {
            "-".to_string()
        };
        println!("{key:<key_width$} {count:>7} {percent:>10}");
    }
    if shown < rows.len() {
        let hidden = rows.len() - shown;
        println!("{}", format!("... and {hidden} more").dimmed());
    }
}

/// Prints the summary view: total count plus one popularity table per
/// filterable field.
pub fn print_summary(processed: &ProcessedMessages, max_rows: usize) {
    if processed.is_empty() {
        print_no_data();
        return;
    }
    let count = processed.len();
    println!(
        "{}",
        format!("Total {count} {}", pluralize("message", count)).bold()
    );
    for key in FilterKey::ALL {
        println!();
        if let Some(rows) = processed.values.get(&key) {
            print_popularity(key.label(), rows, max_rows);
        }
    }
}

/// Prints the files view.
pub fn print_files(rows: &[FileRow], max_rows: usize) {
    if rows.is_empty() {
        print_no_data();
        return;
    }
    let file_width = rows
        .iter()
        .map(|row| row.file.len())
        .max()
        .unwrap_or(0)
        .max("File".len());
    println!(
        "{} {} {}",
        format!("{:<file_width$}", "File").bold(),
        format!("{:>7}", "Issues").bold(),
        format!("{:>8}", "Fixable").bold(),
    );
    let shown = if max_rows > 0 {
        rows.len().min(max_rows)
    } else {
        rows.len()
    };
    for row in &rows[..shown] {
        println!(
            "{:<file_width$} {:>7} {:>8}",
            row.file, row.issues, row.fixable
        );
    }
    if shown < rows.len() {
        let hidden = rows.len() - shown;
        println!("{}", format!("... and {hidden} more").dimmed());
    }
}

/// Prints every message of one file, then its by-code counts.
pub fn print_file_report(file: &str, messages: &[&ExtendedMessage], max_rows: usize) {
    if messages.is_empty() {
        print_no_data();
        return;
    }
    let codes = count_and_sort(messages, |m: &&ExtendedMessage| m.raw.code.clone());
    println!("{}", file.bold());
    println!(
        "{} {}, {} {}",
        messages.len(),
        pluralize("message", messages.len()),
        codes.len(),
        pluralize("rule", codes.len())
    );
    println!();
    for message in messages {
        let badge = if message.is_fixable() {
            format!(" [{}]", "Fixable".green())
        } else {
            String::new()
        };
        println!(
            "{:>5}  {}  {}{badge}",
            message.raw.location.row,
            message.raw.code.yellow(),
            message.raw.message
        );
    }
    println!();
    print_popularity("Code", &codes, max_rows);
}

/// Prints the rule view: metadata header, occurrence stats, explanation,
/// then by-message and by-file counts.
pub fn print_rule_report(
    code: &str,
    rule: Option<&RuleExplanation>,
    messages: &[&ExtendedMessage],
    max_rows: usize,
) {
    match rule {
        Some(rule) => {
            println!("{}", format!("{code} - {}", rule.name).bold());
            println!("{}", rule.docs_url().dimmed());
            println!("{}", rule.fixability().label().dimmed());
        }
        None => println!("{}", code.bold()),
    }

    let files: Vec<(String, usize)> =
        count_and_sort(messages, |m: &&ExtendedMessage| m.short_filename.clone());
    println!(
        "{} {} in {} {}",
        messages.len(),
        pluralize("occurrence", messages.len()),
        files.len(),
        pluralize("file", files.len())
    );

    println!();
    match rule {
        Some(rule) if !rule.explanation.is_empty() => println!("{}", rule.explanation),
        _ => println!(
            "{}",
            "We don't have an explanation for this rule...".yellow()
        ),
    }

    if messages.is_empty() {
        return;
    }
    let by_message = count_and_sort(messages, |m: &&ExtendedMessage| m.raw.message.clone());
    println!();
    print_popularity("Message", &by_message, max_rows);
    println!();
    print_popularity("Filename", &files, max_rows);
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
