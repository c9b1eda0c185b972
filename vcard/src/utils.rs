// src/utils.rs
use std::path::Path;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

#[must_use]
pub fn is_vcf_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vcf"))
}

#[must_use]
pub fn has_glob_meta(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Splits a category argument such as `"Work, Friends;Family"` into labels.
#[must_use]
pub fn split_label_list(arg: &str) -> Vec<String> {
    arg.split([',', ';'])
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}
