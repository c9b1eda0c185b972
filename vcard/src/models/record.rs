// src/models/record.rs
use std::collections::BTreeSet;
use std::fmt;

use crate::core::parser::properties::{PropertyLine, split_unescaped, unescape_text};

/// One `BEGIN:VCARD` .. `END:VCARD` block.
///
/// Keeps the physical lines exactly as read (markers and folded
/// continuation lines included) so the record can be written back out
/// unchanged, next to the unfolded property lines used for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardRecord {
    lines: Vec<String>,
    properties: Vec<String>,
    categories: BTreeSet<String>,
    start_line: usize,
}

impl VCardRecord {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        lines: Vec<String>,
        properties: Vec<String>,
        categories: BTreeSet<String>,
        start_line: usize,
    ) -> Self {
        Self {
            lines,
            properties,
            categories,
            start_line,
        }
    }

    /// Physical lines of the record, markers included.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Unfolded content lines between the markers.
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    #[inline]
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    /// Line of the `BEGIN:VCARD` marker within its file (1-based).
    #[inline]
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// The record's original line block, without a trailing newline.
    #[inline]
    #[must_use]
    pub fn to_vcf(&self) -> String {
        self.lines.join("\n")
    }

    /// The `FN` value, or the `N` value rendered as "Given Family" when
    /// there is no `FN`. Empty when neither is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(formatted) = self.property_values("FN").next() {
            return unescape_text(formatted).trim().to_owned();
        }

        self.property_values("N")
            .next()
            .map(|value| {
                let parts: Vec<String> = split_unescaped(value, ';')
                    .iter()
                    .map(|part| unescape_text(part).trim().to_owned())
                    .collect();
                let family = parts.first().map_or("", String::as_str);
                let given = parts.get(1).map_or("", String::as_str);
                [given, family]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Every non-empty `TEL` value, in record order.
    #[must_use]
    pub fn telephone_numbers(&self) -> Vec<String> {
        self.property_values("TEL")
            .map(str::trim)
            .filter(|number| !number.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn property_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.properties
            .iter()
            .filter_map(|line| PropertyLine::split(line))
            .filter(move |property| property.is(name))
            .map(|property| property.value)
    }
}

impl fmt::Display for VCardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_vcf())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::parser::parse;

    #[test]
    fn test_display_name_prefers_fn() {
        let records = parse("BEGIN:VCARD\nN:Doe;John;;;\nFN:Johnny Doe\nEND:VCARD\n").unwrap();
        assert_eq!(records[0].display_name(), "Johnny Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_n() {
        let records = parse("BEGIN:VCARD\nN:Doe;John;;;\nEND:VCARD\n").unwrap();
        assert_eq!(records[0].display_name(), "John Doe");

        let records = parse("BEGIN:VCARD\nN:Prince;;;;\nEND:VCARD\n").unwrap();
        assert_eq!(records[0].display_name(), "Prince");
    }

    #[test]
    fn test_display_name_empty_without_name_properties() {
        let records = parse("BEGIN:VCARD\nTEL:123\nEND:VCARD\n").unwrap();
        assert_eq!(records[0].display_name(), "");
    }

    #[test]
    fn test_telephone_numbers_ignore_parameters() {
        let records = parse(
            "BEGIN:VCARD\nTEL;TYPE=cell:+1 555 0100\nitem1.TEL:0200\nTEL:\nEND:VCARD\n",
        )
        .unwrap();
        assert_eq!(records[0].telephone_numbers(), vec!["+1 555 0100", "0200"]);
    }

    #[test]
    fn test_to_vcf_keeps_original_lines() {
        let text = "BEGIN:VCARD\nFN:Jane\nNOTE:long\n  note\nEND:VCARD";
        let records = parse(text).unwrap();
        assert_eq!(records[0].to_vcf(), text);
        assert_eq!(records[0].to_string(), text);
        assert_eq!(records[0].start_line(), 1);
    }
}
