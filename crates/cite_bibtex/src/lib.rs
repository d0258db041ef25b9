/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! cite_bibtex - BibTeX import and export for the citation engine.
//!
//! The reader covers the common `@type{key, field = value, ...}` subset of
//! BibTeX and is deliberately forgiving: an entry or field it cannot make
//! sense of is skipped and reading continues with the next one. Callers that
//! need to know what was dropped use [`parse_bibtex_report`].
//!
//! ```
//! let refs = cite_bibtex::parse_bibtex(
//!     "@article{smith20,\n author = {Smith, John},\n title = {A Study},\n year = {2020}\n}",
//! );
//! assert_eq!(refs[0].id, "smith20");
//! assert_eq!(refs[0].title.as_deref(), Some("A Study"));
//! ```

mod names;
mod parser;
mod types;
mod writer;

use cite_core::{DateParts, Reference};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

pub use names::{format_person, parse_authors, parse_person};
pub use types::{bibtex_type, reference_type};
pub use writer::format_bibtex;

/// Why an entry was left out of the parse result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("`@{0}` is a directive, not an entry")]
    Directive(String),
    #[error("entry has no citation key")]
    MissingKey,
    #[error("entry is never closed")]
    Unterminated,
    #[error("expected `@type{{` after `@`")]
    MalformedHeader,
}

/// An entry the reader skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// The entry type, when the header could be read.
    pub kind: Option<String>,
    /// 1-based line of the `@` that starts the entry.
    pub line: usize,
    pub reason: SkipReason,
}

/// References read from a BibTeX document, plus what was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub references: Vec<Reference>,
    pub skipped: Vec<SkippedEntry>,
}

/// Parse BibTeX text into references, skipping anything malformed.
pub fn parse_bibtex(text: &str) -> Vec<Reference> {
    parse_bibtex_report(text).references
}

/// Parse BibTeX text, reporting skipped entries alongside the references.
pub fn parse_bibtex_report(text: &str) -> ParseReport {
    let scan = parser::scan(text);
    ParseReport {
        references: scan.entries.into_iter().map(to_reference).collect(),
        skipped: scan.skipped,
    }
}

fn to_reference(entry: parser::RawEntry) -> Reference {
    let mut fields: HashMap<String, String> = HashMap::new();
    for (name, value) in entry.fields {
        if !value.is_empty() {
            fields.insert(name, value);
        }
    }
    let mut take = |name: &str| fields.remove(name);

    let year = take("year").and_then(|y| parse_year(&y));
    let month = take("month").and_then(|m| parse_month(&m));
    let journal = take("journal");
    let booktitle = take("booktitle");

    let reference = Reference {
        id: entry.key,
        ref_type: reference_type(&entry.kind),
        title: take("title"),
        container_title: journal.or(booktitle),
        author: take("author").map(|a| parse_authors(&a)).unwrap_or_default(),
        issued: year.map(|year| DateParts {
            year: Some(year),
            month,
            day: None,
        }),
        volume: take("volume"),
        issue: take("number"),
        page: take("pages"),
        edition: take("edition"),
        publisher: take("publisher"),
        publisher_place: take("address"),
        doi: take("doi"),
        url: take("url"),
        ..Default::default()
    };
    if !fields.is_empty() {
        let mut ignored: Vec<_> = fields.keys().map(String::as_str).collect();
        ignored.sort_unstable();
        debug!(key = %reference.id, ?ignored, "unmapped BibTeX fields");
    }
    reference
}

/// The leading decimal digits of a year field; anything else means no date.
fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    let digits: &str = &value[..value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len())];
    digits.parse().ok()
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A month given as 1-12 or as an English name or abbreviation.
fn parse_month(value: &str) -> Option<u8> {
    let value = value.trim().to_ascii_lowercase();
    if let Ok(n) = value.parse::<u8>() {
        return (1..=12).contains(&n).then_some(n);
    }
    let prefix = value.get(..3)?;
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u8 + 1)
}
