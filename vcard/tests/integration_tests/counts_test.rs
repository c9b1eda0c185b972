// tests/integration_tests/counts_test.rs
use super::common::{FRIEND, JANE, setup_test_directory};
use anyhow::Result;
use vcard::{CaseMode, counts, load_records, parse};

#[test]
fn test_scenario_counts() -> Result<()> {
    let text = format!("{JANE}{FRIEND}");
    let records = parse(&text)?;
    let table = counts(&records);

    assert_eq!(table.get("Friends"), Some(2));
    assert_eq!(table.get("Work"), Some(1));
    assert_eq!(table.to_string(), "Friends: 2\nWork: 1\n");
    Ok(())
}

#[test]
fn test_counts_across_directory() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let records = load_records(&[temp_dir.path().to_path_buf()], CaseMode::Exact)?;
    let table = counts(&records);

    assert_eq!(records.len(), 4);
    assert_eq!(
        table.to_string(),
        "Family: 1\nFriends: 2\nWork: 2\n",
        "Folded CATEGORIES should be unfolded before counting"
    );
    Ok(())
}

#[test]
fn test_counts_ignore_case() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let records = load_records(&[temp_dir.path().to_path_buf()], CaseMode::Insensitive)?;
    let table = counts(&records);

    assert_eq!(table.get("work"), Some(2));
    assert_eq!(table.get("Work"), None);
    Ok(())
}
