/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The BibTeX scanner.
//!
//! Entries are located by their `@` and consumed as one balanced `{...}`
//! block, so braces nested inside field values never end an entry early.
//! Inside an entry the body is split on top-level commas: the first chunk is
//! the citation key, the rest are `name = value` fields.

use tracing::debug;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, eof, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{SkipReason, SkippedEntry};

type PResult<O> = Result<O, ErrMode<ContextError>>;

/// An entry as written, before any mapping to the reference model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry {
    /// The entry type, lowercased.
    pub kind: String,
    pub key: String,
    /// Field names (lowercased) and unquoted values, in document order.
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub entries: Vec<RawEntry>,
    pub skipped: Vec<SkippedEntry>,
}

const DIRECTIVES: [&str; 3] = ["comment", "preamble", "string"];

/// Scan a whole document.
pub(crate) fn scan(text: &str) -> Scan {
    let cleaned = strip_comments(text);
    let mut scan = Scan::default();
    let mut input: &str = &cleaned;
    let mut lines = LineCounter::new(&cleaned);

    while let Some(at) = input.find('@') {
        input = &input[at..];
        let start = input;
        let line = lines.line_at(cleaned.len() - start.len());

        let kind = match entry_type.parse_next(&mut input) {
            Ok(kind) => kind.to_ascii_lowercase(),
            Err(_) => {
                scan.skip(None, line, SkipReason::MalformedHeader);
                input = &start[1..];
                continue;
            }
        };
        let body = match preceded(multispace0, braced).parse_next(&mut input) {
            Ok(body) => body,
            Err(_) => {
                scan.skip(Some(kind), line, SkipReason::Unterminated);
                input = &start[1..];
                continue;
            }
        };

        if DIRECTIVES.contains(&kind.as_str()) {
            scan.skip(Some(kind.clone()), line, SkipReason::Directive(kind));
            continue;
        }
        match entry_body(&kind, body) {
            Some(entry) => scan.entries.push(entry),
            None => scan.skip(Some(kind), line, SkipReason::MissingKey),
        }
    }
    scan
}

impl Scan {
    fn skip(&mut self, kind: Option<String>, line: usize, reason: SkipReason) {
        debug!(line, kind = kind.as_deref().unwrap_or(""), %reason, "skipping BibTeX entry");
        self.skipped.push(SkippedEntry { kind, line, reason });
    }
}

/// Line numbers for byte offsets that only move forward.
struct LineCounter<'s> {
    text: &'s str,
    offset: usize,
    line: usize,
}

impl<'s> LineCounter<'s> {
    fn new(text: &'s str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
        }
    }

    /// 1-based line of `offset`; offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        if offset > self.offset {
            self.line += self.text[self.offset..offset].matches('\n').count();
            self.offset = offset;
        }
        self.line
    }
}

/// Blank out lines whose first non-blank character is `%`.
fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim_start().starts_with('%') {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.' | '+')
}

/// `@type`, returning the type name.
fn entry_type<'s>(input: &mut &'s str) -> PResult<&'s str> {
    preceded(('@', multispace0), take_while(1.., |c: char| c.is_ascii_alphanumeric()))
        .parse_next(input)
}

/// Text with balanced braces. A backslash is an ordinary character.
fn balanced<'s>(input: &mut &'s str) -> PResult<&'s str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_while(1.., |c: char| c != '{' && c != '}').void(),
            delimited('{', balanced, '}').void(),
        )),
    )
    .take()
    .parse_next(input)
}

/// A `{...}` group, returning its inner text. The input is left untouched
/// when the group is never closed.
fn braced<'s>(input: &mut &'s str) -> PResult<&'s str> {
    let start = *input;
    delimited('{', balanced, '}')
        .parse_next(input)
        .inspect_err(|_| *input = start)
}

/// A `"..."` string, returning its inner text. Braces inside it must
/// balance and may hold quotes.
fn quoted<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited(
        '"',
        repeat::<_, _, (), _, _>(
            0..,
            alt((
                take_while(1.., |c: char| !matches!(c, '"' | '{' | '}')).void(),
                braced.void(),
            )),
        )
        .take(),
        '"',
    )
    .parse_next(input)
}

/// One comma-separated part of an entry body.
fn chunk<'s>(input: &mut &'s str) -> PResult<&'s str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_while(1.., |c: char| !matches!(c, '{' | '}' | '"' | ',')).void(),
            braced.void(),
            quoted.void(),
        )),
    )
    .take()
    .parse_next(input)
}

/// Split on commas that sit outside braces and quotes. An unclosed quote
/// ends the split; the rest of the body becomes the last part.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut rest = body;
    let parsed: PResult<Vec<&str>> = separated(0.., chunk, ',').parse_next(&mut rest);
    let mut chunks = parsed.unwrap_or_default();
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// Key and fields of one entry; `None` when there is no usable key.
fn entry_body(kind: &str, body: &str) -> Option<RawEntry> {
    let mut chunks = split_top_level(body).into_iter();
    let key = chunks.next().unwrap_or("").trim();
    if key.is_empty() || key.contains('=') || key.contains(char::is_whitespace) {
        return None;
    }

    let mut fields = Vec::new();
    for chunk in chunks {
        let mut chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        match field.parse_next(&mut chunk) {
            Ok((name, value)) => fields.push((name.to_ascii_lowercase(), value)),
            Err(_) => debug!(key, field = chunk, "skipping malformed BibTeX field"),
        }
    }
    Some(RawEntry {
        kind: kind.to_string(),
        key: key.to_string(),
        fields,
    })
}

/// `name = value`; the value is everything after `=`, unquoted.
fn field<'s>(input: &mut &'s str) -> PResult<(&'s str, String)> {
    let name = take_while(1.., is_ident).parse_next(input)?;
    (multispace0, '=', multispace0).parse_next(input)?;
    let value = std::mem::take(input);
    Ok((name, normalize(unquote(value))))
}

/// Strip exactly one outer layer of `{...}` or `"..."` when it spans the
/// whole value.
pub(crate) fn unquote(value: &str) -> &str {
    let v = value.trim();
    let mut input = v;
    match terminated(alt((braced, quoted)), eof).parse_next(&mut input) {
        Ok(inner) => inner.trim(),
        Err(_) => v,
    }
}

/// Collapse runs of whitespace, including newlines, to single spaces.
fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
