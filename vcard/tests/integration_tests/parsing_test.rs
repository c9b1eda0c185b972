// tests/integration_tests/parsing_test.rs
use super::common::{FRIEND, JANE};
use anyhow::Result;
use vcard::{ParseErrorKind, parse};

#[test]
fn test_scenario_categories() -> Result<()> {
    let text = format!("{JANE}{FRIEND}");
    let records = parse(&text)?;

    assert_eq!(records.len(), 2);
    assert!(records[0].has_category("Work"));
    assert!(records[0].has_category("Friends"));
    assert!(!records[1].has_category("Work"));
    Ok(())
}

#[test]
fn test_round_trip_single_record() -> Result<()> {
    let text = "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Jane Doe\nEMAIL;TYPE=work:jane@example.com\nCATEGORIES:Work\nEND:VCARD";
    let records = parse(text)?;
    assert_eq!(records[0].to_vcf(), text);
    Ok(())
}

#[test]
fn test_folded_categories() -> Result<()> {
    let text = "BEGIN:VCARD\nFN:Long\nCATEGORIES:Alpha,Beta,Gam\n ma,Delta\nEND:VCARD\n";
    let records = parse(text)?;
    let labels: Vec<&str> = records[0].categories().iter().map(String::as_str).collect();
    assert_eq!(labels, vec!["Alpha", "Beta", "Delta", "Gamma"]);
    Ok(())
}

#[test]
fn test_repeated_labels_form_a_set() -> Result<()> {
    let records = parse("BEGIN:VCARD\nCATEGORIES:Work,Work,Friends,Work\nEND:VCARD\n")?;
    assert_eq!(records[0].categories().len(), 2);
    Ok(())
}

#[test]
fn test_unbalanced_markers() {
    let err = parse("BEGIN:VCARD\nFN:Open\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedRecord);

    let err = parse("FN:Stray\nEND:VCARD\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnmatchedEnd);
    assert_eq!(err.line, 2);
}
