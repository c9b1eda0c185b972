// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const JANE: &str = "BEGIN:VCARD\nFN:Jane\nCATEGORIES:Work,Friends\nEND:VCARD\n";
pub const FRIEND: &str = "BEGIN:VCARD\nFN:Sam\nCATEGORIES:Friends\nEND:VCARD\n";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// Two contact files plus a folded one and one without categories.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "work.vcf", JANE)?;
    create_test_file(temp_dir.path(), "friends.vcf", FRIEND)?;
    create_test_file(
        temp_dir.path(),
        "archive/folded.vcf",
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Folded Fran\r\nCATEGORIES:Family,Wo\r\n rk\r\nEND:VCARD\r\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "archive/plain.vcf",
        "BEGIN:VCARD\nVERSION:4.0\nFN:No Tags\nEND:VCARD\n",
    )?;
    create_test_file(temp_dir.path(), "archive/readme.txt", "not a vcard")?;

    Ok(temp_dir)
}
