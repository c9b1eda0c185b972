// src/core/parser/properties.rs
//! Content-line helpers: splitting a property into name and value, and the
//! text-value escaping rules used by CATEGORIES, FN and N.

use std::collections::BTreeSet;

use crate::models::CaseMode;

/// A borrowed view of one unfolded content line, `[group.]NAME[;params]:value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyLine<'a> {
    pub group: Option<&'a str>,
    pub name: &'a str,
    /// Raw parameter text after the first `;`, if any.
    pub params: Option<&'a str>,
    pub value: &'a str,
}

impl<'a> PropertyLine<'a> {
    /// Splits a content line at the first colon outside a quoted parameter
    /// value. Returns `None` for lines without a colon.
    #[must_use]
    pub fn split(line: &'a str) -> Option<Self> {
        let colon = value_separator(line)?;
        let (head, rest) = line.split_at(colon);
        let value = rest.get(1..).unwrap_or_default();

        let (qualified, params) = head
            .split_once(';')
            .map_or((head, None), |(name, params)| (name, Some(params)));
        let (group, name) = qualified
            .rsplit_once('.')
            .map_or((None, qualified), |(group, name)| (Some(group), name));

        Some(Self {
            group,
            name: name.trim(),
            params,
            value,
        })
    }

    /// Case-insensitive property name comparison.
    #[inline]
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

fn value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (index, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(index),
            _ => {}
        }
    }
    None
}

/// Splits `value` on every `separator` not preceded by a backslash.
/// Escape sequences are left in place in the returned pieces.
#[must_use]
pub fn split_unescaped(value: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            current.push(c);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

/// Resolves `\n`, `\,`, `\;` and `\\`. Unknown escapes are kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Labels of one CATEGORIES value: split on unescaped commas, unescaped,
/// trimmed, empties dropped.
#[must_use]
pub fn category_labels(value: &str) -> Vec<String> {
    split_unescaped(value, ',')
        .iter()
        .map(|raw| unescape_text(raw))
        .filter_map(|label| {
            let trimmed = label.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .collect()
}

/// Property names that carry category labels. `CATEGORY` is a common
/// misspelling some exporters write.
const CATEGORY_PROPERTIES: [&str; 2] = ["CATEGORIES", "CATEGORY"];

/// Union of the labels of every CATEGORIES (or CATEGORY) property among
/// `properties`.
#[must_use]
pub fn collect_categories(properties: &[String], case: CaseMode) -> BTreeSet<String> {
    properties
        .iter()
        .filter_map(|line| PropertyLine::split(line))
        .filter(|property| CATEGORY_PROPERTIES.iter().any(|name| property.is(name)))
        .flat_map(|property| category_labels(property.value))
        .map(|label| case.normalize(&label))
        .collect()
}
