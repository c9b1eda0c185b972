// src/core/parser.rs
//! Splits vCard text into records with an explicit line state machine.
//!
//! ```text
//! Scanning --BEGIN:VCARD--> InRecord --END:VCARD--> Scanning (emit record)
//! ```
//!
//! Lines outside a record are skipped. A nested `BEGIN:VCARD`, a stray
//! `END:VCARD` and end of input inside a record are errors.

pub mod properties;

use std::borrow::Cow;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::models::{CaseMode, VCardRecord};
use properties::collect_categories;

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Parses a vCard document, matching category labels exactly.
///
/// # Errors
///
/// Returns a [`ParseError`] when the `BEGIN:VCARD` / `END:VCARD` markers are
/// unbalanced or nested.
#[inline]
pub fn parse(input: &str) -> ParseResult<Vec<VCardRecord>> {
    parse_with(input, CaseMode::Exact)
}

/// Parses a vCard document, normalizing category labels with `case`.
///
/// # Errors
///
/// Returns a [`ParseError`] when the `BEGIN:VCARD` / `END:VCARD` markers are
/// unbalanced or nested.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_with(input: &str, case: CaseMode) -> ParseResult<Vec<VCardRecord>> {
    tracing::debug!("Parsing vCard document");

    let text = normalize_line_endings(input);
    let mut records = Vec::new();
    let mut state = State::Scanning;

    for (index, line) in text.lines().enumerate() {
        let line_num = index.saturating_add(1);
        state = match (state, LineKind::classify(line)) {
            (State::Scanning, LineKind::Begin) => {
                State::InRecord(RecordAccumulator::open(line, line_num))
            }
            (State::Scanning, LineKind::End) => {
                return Err(ParseError::new(ParseErrorKind::UnmatchedEnd, line_num));
            }
            (State::Scanning, LineKind::Continuation | LineKind::Content) => State::Scanning,
            (State::InRecord(_), LineKind::Begin) => {
                return Err(ParseError::new(ParseErrorKind::NestedBegin, line_num));
            }
            (State::InRecord(accumulator), LineKind::End) => {
                let record = accumulator.close(line, case);
                tracing::trace!(
                    start_line = record.start_line(),
                    categories = record.categories().len(),
                    "Parsed vCard"
                );
                records.push(record);
                State::Scanning
            }
            (State::InRecord(mut accumulator), LineKind::Continuation) => {
                accumulator.continue_line(line);
                State::InRecord(accumulator)
            }
            (State::InRecord(mut accumulator), LineKind::Content) => {
                accumulator.push_line(line);
                State::InRecord(accumulator)
            }
        };
    }

    if let State::InRecord(accumulator) = state {
        tracing::debug!(start_line = accumulator.start_line, "vCard left open");
        return Err(ParseError::new(
            ParseErrorKind::UnterminatedRecord,
            accumulator.start_line,
        ));
    }

    tracing::debug!(count = records.len(), "Parsed vCards");
    Ok(records)
}

enum State {
    Scanning,
    InRecord(RecordAccumulator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Begin,
    End,
    /// Starts with a space or tab: folded onto the previous line.
    Continuation,
    Content,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with([' ', '\t']) {
            return Self::Continuation;
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case(BEGIN_MARKER) {
            Self::Begin
        } else if trimmed.eq_ignore_ascii_case(END_MARKER) {
            Self::End
        } else {
            Self::Content
        }
    }
}

/// Lines of the record currently being read.
struct RecordAccumulator {
    start_line: usize,
    /// Physical lines, verbatim.
    lines: Vec<String>,
    /// Unfolded content lines.
    properties: Vec<String>,
}

impl RecordAccumulator {
    fn open(begin_line: &str, start_line: usize) -> Self {
        Self {
            start_line,
            lines: vec![begin_line.to_owned()],
            properties: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
        self.properties.push(line.to_owned());
    }

    fn continue_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
        let unfolded = line.strip_prefix([' ', '\t']).unwrap_or(line);
        match self.properties.last_mut() {
            Some(previous) => previous.push_str(unfolded),
            None => self.properties.push(unfolded.to_owned()),
        }
    }

    fn close(mut self, end_line: &str, case: CaseMode) -> VCardRecord {
        self.lines.push(end_line.to_owned());
        let categories = collect_categories(&self.properties, case);
        VCardRecord::new(self.lines, self.properties, categories, self.start_line)
    }
}

fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
