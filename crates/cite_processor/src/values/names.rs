/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Person name rendering.

use cite_core::{PersonName, Reference};

use super::{UNKNOWN_AUTHOR, UNKNOWN_AUTHOR_SHORT};

/// Up to this many authors are listed in author-date bibliographies.
const APA_MAX_AUTHORS: usize = 3;
/// Up to this many authors are listed in numeric bibliographies.
const VANCOUVER_MAX_AUTHORS: usize = 6;

/// The display name of a person: family, literal, given, then a fallback
/// label. Never empty.
pub fn display_name(name: &PersonName) -> &str {
    name.family_or_literal().unwrap_or(UNKNOWN_AUTHOR_SHORT)
}

/// The first author's surname for in-text citations.
pub fn surname(reference: &Reference) -> &str {
    reference
        .first_author()
        .map(display_name)
        .unwrap_or(UNKNOWN_AUTHOR_SHORT)
}

/// Initials of the given names, one per whitespace-separated token, each
/// followed by `marker` and separated by `separator`.
///
/// ```
/// use cite_processor::values::initials;
///
/// assert_eq!(initials("John Ronald", ".", " "), "J. R.");
/// assert_eq!(initials("John Ronald", "", ""), "JR");
/// ```
pub fn initials(given: &str, marker: &str, separator: &str) -> String {
    given
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .map(|c| format!("{}{}", c.to_uppercase(), marker))
        .collect::<Vec<_>>()
        .join(separator)
}

/// The display name followed by initials of the given names. Names with
/// only a given part render bare.
fn with_initials(name: &PersonName, marker: &str, separator: &str, join: &str) -> String {
    let family = display_name(name);
    let has_surname = name.family_name().or_else(|| name.literal_name()).is_some();
    match name.given_name().map(|g| initials(g, marker, separator)) {
        Some(given) if has_surname && !given.is_empty() => format!("{}{}{}", family, join, given),
        _ => family.to_string(),
    }
}

/// `Family, I. I.`
fn apa_name(name: &PersonName) -> String {
    with_initials(name, ".", " ", ", ")
}

/// `Family II`
fn vancouver_name(name: &PersonName) -> String {
    with_initials(name, "", "", " ")
}

/// Author list for author-date bibliographies.
///
/// One author renders alone, two are joined with `&`, three are
/// comma-joined, and longer lists keep the first three followed by
/// `et al.`.
pub fn format_authors_apa(authors: &[PersonName]) -> String {
    let names: Vec<String> = authors.iter().map(apa_name).collect();
    match names.as_slice() {
        [] => UNKNOWN_AUTHOR.to_string(),
        [one] => one.clone(),
        [first, second] => format!("{} & {}", first, second),
        _ if names.len() <= APA_MAX_AUTHORS => names.join(", "),
        _ => format!("{}, et al.", names[..APA_MAX_AUTHORS].join(", ")),
    }
}

/// Author list for numeric bibliographies: comma-joined, at most six names
/// followed by `et al`.
pub fn format_authors_vancouver(authors: &[PersonName]) -> String {
    if authors.is_empty() {
        return UNKNOWN_AUTHOR.to_string();
    }
    let mut names: Vec<String> = authors
        .iter()
        .take(VANCOUVER_MAX_AUTHORS)
        .map(vancouver_name)
        .collect();
    if authors.len() > VANCOUVER_MAX_AUTHORS {
        names.push("et al".to_string());
    }
    names.join(", ")
}
