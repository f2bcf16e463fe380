// tests/unit_process.rs
use ruffsight_core::process::{
    count_and_sort, extend_messages, group_and_sort, process_messages,
};
use ruffsight_core::types::{FilterKey, Fix, Message, FIXABLE, NOT_FIXABLE};

fn msg(code: &str, filename: &str, fix: Option<Fix>) -> Message {
    Message {
        code: code.to_string(),
        filename: filename.to_string(),
        fix,
        ..Message::default()
    }
}

#[test]
fn test_end_to_end_enrichment() {
    let messages = vec![
        msg("E501", "a/b/c.py", None),
        msg("E502", "a/b/d.py", Some(Fix::default())),
    ];
    let extended = extend_messages(&messages);
    assert_eq!(extended.len(), 2);

    assert_eq!(extended[0].short_filename, "c.py");
    assert_eq!(extended[1].short_filename, "d.py");
    assert_eq!(extended[0].module_name, "c");
    assert_eq!(extended[1].module_name, "d");
    assert_eq!(extended[0].code_class, "E");
    assert_eq!(extended[1].code_class, "E");
    assert_eq!(extended[0].fixable, NOT_FIXABLE);
    assert_eq!(extended[1].fixable, FIXABLE);
}

#[test]
fn test_enrichment_preserves_order_and_length() {
    let messages: Vec<Message> = (0..20)
        .map(|i| msg(&format!("E{i:03}"), &format!("src/f{i}.py"), None))
        .collect();
    let extended = extend_messages(&messages);
    assert_eq!(extended.len(), messages.len());
    for (raw, ext) in messages.iter().zip(&extended) {
        assert_eq!(ext.raw, *raw);
    }
}

#[test]
fn test_enrichment_empty_input() {
    assert!(extend_messages(&[]).is_empty());
}

#[test]
fn test_enrichment_single_file_prefix_is_whole_name() {
    // With one distinct filename the common prefix is the filename itself,
    // so the short filename collapses to empty.
    let messages = vec![msg("F401", "src/a.py", None), msg("E501", "src/a.py", None)];
    let extended = extend_messages(&messages);
    assert_eq!(extended[0].short_filename, "");
    assert_eq!(extended[0].module_name, "");
}

#[test]
fn test_code_class_strips_trailing_digits_only() {
    let messages = vec![
        msg("PLR0913", "a/x.py", None),
        msg("B006", "a/y.py", None),
        msg("RUF100", "a/z.py", None),
    ];
    let extended = extend_messages(&messages);
    assert_eq!(extended[0].code_class, "PLR");
    assert_eq!(extended[1].code_class, "B");
    assert_eq!(extended[2].code_class, "RUF");
}

#[test]
fn test_package_derivation_through_pipeline() {
    let messages = vec![
        msg("F401", "repo/pkg/sub/mod.py", None),
        msg("F401", "repo/pkg/other.py", None),
    ];
    let extended = extend_messages(&messages);
    // Common prefix is "repo/pkg/" followed by nothing shared.
    assert_eq!(extended[0].module_name, "sub.mod");
    assert_eq!(extended[0].package_name, "sub");
    assert_eq!(extended[1].module_name, "other");
    assert_eq!(extended[1].package_name, "other");
}

#[test]
fn test_count_and_sort_basic() {
    let messages = vec![
        msg("E501", "a/x.py", None),
        msg("E501", "a/y.py", None),
        msg("F401", "a/z.py", None),
    ];
    let extended = extend_messages(&messages);
    let counts = count_and_sort(&extended, |m| m.raw.code.clone());
    assert_eq!(counts, [("E501".to_string(), 2), ("F401".to_string(), 1)]);
}

#[test]
fn test_count_and_sort_ties_keep_encounter_order() {
    let messages = vec![
        msg("W291", "a/x.py", None),
        msg("E501", "a/y.py", None),
        msg("F401", "a/z.py", None),
    ];
    let extended = extend_messages(&messages);
    let counts = count_and_sort(&extended, |m| m.raw.code.clone());
    let keys: Vec<&str> = counts.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["W291", "E501", "F401"]);
}

#[test]
fn test_group_and_sort_conserves_members() {
    let messages = vec![
        msg("E501", "a/x.py", None),
        msg("F401", "a/x.py", None),
        msg("E501", "a/y.py", None),
    ];
    let extended = extend_messages(&messages);
    let groups = group_and_sort(&extended, |m| m.short_filename.clone());
    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, extended.len());
    // Largest group first.
    assert_eq!(groups[0].0, "x.py");
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn test_process_messages_builds_all_value_tables() {
    let messages = vec![
        msg("E501", "a/b/c.py", None),
        msg("E502", "a/b/d.py", Some(Fix::default())),
    ];
    let processed = process_messages(&messages);
    assert_eq!(processed.len(), 2);
    for key in FilterKey::ALL {
        assert!(processed.values.contains_key(&key), "missing table for {key}");
    }
    let fixable = &processed.values[&FilterKey::Fixable];
    assert_eq!(fixable.len(), 2);
    let total: usize = fixable.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_process_messages_empty_report() {
    let processed = process_messages(&[]);
    assert!(processed.is_empty());
    for key in FilterKey::ALL {
        assert!(processed.values[&key].is_empty());
    }
}
