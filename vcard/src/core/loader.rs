// src/core/loader.rs
use glob::MatchOptions;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::parser::parse_with;
use crate::error::VCardError;
use crate::models::{CaseMode, VCardRecord};
use crate::utils::{has_glob_meta, is_hidden, is_vcf_file};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Turns command-line inputs into the ordered list of files to read.
///
/// * An existing directory contributes every `.vcf` file beneath it, hidden
///   entries skipped, in file-name order.
/// * An input that does not exist but contains glob characters is expanded
///   as a pattern, matches sorted.
/// * Anything else is taken as a file path; a missing file surfaces later
///   as [`VCardError::Io`].
///
/// # Errors
///
/// This function may return an error if:
/// * A directory cannot be traversed
/// * A pattern is invalid or matches nothing
#[inline]
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, VCardError> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(collect_directory(input)?);
        } else if !input.exists() && has_glob_meta(&input.to_string_lossy()) {
            files.extend(expand_pattern(input)?);
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}

fn collect_directory(dir: &Path) -> Result<Vec<PathBuf>, VCardError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(|source| VCardError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_vcf_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "Collected vCard files");
    Ok(files)
}

fn expand_pattern(input: &Path) -> Result<Vec<PathBuf>, VCardError> {
    let pattern = input.to_string_lossy().into_owned();
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options).map_err(|source| VCardError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| VCardError::Io {
            path: err.path().to_path_buf(),
            source: err.into(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(VCardError::NoMatches { pattern });
    }
    files.sort();
    Ok(files)
}

/// Decodes raw file contents. A UTF-8 BOM is dropped; UTF-16 is accepted
/// when it carries a BOM. Returns `None` for anything else that is not
/// valid UTF-8.
#[must_use]
pub fn decode(bytes: Vec<u8>) -> Option<String> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8(rest.to_vec()).ok();
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    String::from_utf8(bytes).ok()
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Option<String> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return None;
    }
    let units: Vec<u16> = chunks
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

/// Reads one vCard file fully into memory.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The contents are not valid UTF-8 (or BOM-marked UTF-16)
#[inline]
pub fn read_vcf(path: &Path) -> Result<String, VCardError> {
    let bytes = fs::read(path).map_err(|source| VCardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(bytes).ok_or_else(|| VCardError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Expands `inputs`, then reads and parses every file, concatenating the
/// records in input order. Nothing is returned unless every file parses.
///
/// # Errors
///
/// This function may return an error if:
/// * An input cannot be expanded (see [`expand_inputs`])
/// * A file cannot be read or decoded
/// * A file contains unbalanced or nested `BEGIN:VCARD` / `END:VCARD` markers
#[inline]
pub fn load_records(inputs: &[PathBuf], case: CaseMode) -> Result<Vec<VCardRecord>, VCardError> {
    let files = expand_inputs(inputs)?;
    let mut records = Vec::new();

    for path in &files {
        let text = read_vcf(path)?;
        let parsed = parse_with(&text, case).map_err(|source| VCardError::Malformed {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), count = parsed.len(), "Loaded vCards");
        records.extend(parsed);
    }

    tracing::info!(files = files.len(), records = records.len(), "Loaded input");
    Ok(records)
}
