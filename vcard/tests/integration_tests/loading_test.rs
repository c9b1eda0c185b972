// tests/integration_tests/loading_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use vcard::{CaseMode, VCardError, expand_inputs, load_records};

#[test]
fn test_directory_expansion_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = expand_inputs(&[temp_dir.path().to_path_buf()])?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["folded.vcf", "plain.vcf", "friends.vcf", "work.vcf"]);
    Ok(())
}

#[test]
fn test_same_file_twice_duplicates_records() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let work = temp_dir.path().join("work.vcf");
    let records = load_records(&[work.clone(), work], CaseMode::Exact)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
    Ok(())
}

#[test]
fn test_one_bad_file_fails_the_load() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let broken = create_test_file(temp_dir.path(), "broken.vcf", "BEGIN:VCARD\nBEGIN:VCARD\n")?;
    let inputs = vec![temp_dir.path().join("work.vcf"), broken.clone()];

    let err = load_records(&inputs, CaseMode::Exact).unwrap_err();
    assert!(matches!(err, VCardError::Malformed { ref path, .. } if *path == broken));
    assert!(format!("{:#}", anyhow::Error::from(err)).contains("line 2"));
    Ok(())
}
