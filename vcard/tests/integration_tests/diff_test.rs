// tests/integration_tests/diff_test.rs
use super::common::{FRIEND, JANE};
use anyhow::Result;
use vcard::{VCardRecord, diff, parse};

fn names(records: &[&VCardRecord]) -> Vec<String> {
    records.iter().map(|record| record.display_name()).collect()
}

#[test]
fn test_scenario_diff() -> Result<()> {
    let text = format!("{JANE}{FRIEND}");
    let records = parse(&text)?;

    let result = diff(&records, "Work", "Friends");
    assert!(result.is_empty(), "Jane has both Work and Friends");

    let result = diff(&records, "Friends", "Work");
    assert_eq!(names(&result), vec!["Sam"]);
    Ok(())
}

#[test]
fn test_diff_membership_cases() -> Result<()> {
    let records = parse(
        "BEGIN:VCARD\nFN:AB\nCATEGORIES:A,B\nEND:VCARD\n\
         BEGIN:VCARD\nFN:A\nCATEGORIES:A\nEND:VCARD\n\
         BEGIN:VCARD\nFN:B\nCATEGORIES:B\nEND:VCARD\n\
         BEGIN:VCARD\nFN:Empty\nEND:VCARD\n",
    )?;

    assert_eq!(names(&diff(&records, "A", "B")), vec!["A"]);
    Ok(())
}

#[test]
fn test_diff_emits_original_text() -> Result<()> {
    let text = "BEGIN:VCARD\nFN:Folded\nCATEGORIES:Work,\n Clients\nNOTE:kept as is\nEND:VCARD";
    let records = parse(text)?;
    let result = diff(&records, "Clients", "Friends");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].to_vcf(), text);
    Ok(())
}
