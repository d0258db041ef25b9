/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Numeric styles (Vancouver, IEEE).

use cite_core::{non_blank, CitationLocation, Reference};

use crate::values::{format_authors_vancouver, format_year, title};

/// `[n]`, then ` (locator)` when given. An unset number leaves the brackets
/// empty.
pub(super) fn in_text(reference: &Reference, location: &CitationLocation) -> String {
    let number = reference
        .citation_number
        .map(|n| n.to_string())
        .unwrap_or_default();
    let mut text = format!("[{}]", number);
    if let Some(locator) = location.locator() {
        text.push_str(&format!(" ({})", locator));
    }
    location.wrap(text)
}

/// `Authors. Title. Container. Year;Volume(Issue):Pages. URL-or-DOI.`
pub(super) fn bibliography_entry(reference: &Reference) -> String {
    let mut parts = vec![
        format_authors_vancouver(&reference.author),
        title(reference).to_string(),
    ];

    let mut tail = String::new();
    if let Some(container) = reference.container_title() {
        tail.push_str(container);
        tail.push_str(". ");
    }
    tail.push_str(&format_year(reference));
    if let Some(volume) = non_blank(&reference.volume) {
        tail.push(';');
        tail.push_str(volume);
    }
    if let Some(issue) = non_blank(&reference.issue) {
        tail.push_str(&format!("({})", issue));
    }
    if let Some(page) = non_blank(&reference.page) {
        tail.push(':');
        tail.push_str(page);
    }
    parts.push(tail);

    if let Some(link) = reference.url_or_doi() {
        parts.push(link);
    }
    format!("{}.", parts.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cite_core::{DateParts, PersonName, ReferenceType};

    fn article() -> Reference {
        Reference {
            author: vec![PersonName::new("Smith", "John David")],
            title: Some("A Study of X".into()),
            container_title: Some("J Med".into()),
            issued: Some(DateParts::year(2020)),
            volume: Some("12".into()),
            issue: Some("3".into()),
            page: Some("45-67".into()),
            doi: Some("10.1000/xyz".into()),
            citation_number: Some(3),
            ..Reference::new("smith", ReferenceType::ArticleJournal)
        }
    }

    #[test]
    fn test_in_text() {
        let r = article();
        assert_eq!(in_text(&r, &CitationLocation::default()), "[3]");
        assert_eq!(in_text(&r, &CitationLocation::at("12-15")), "[3] (12-15)");
        let loc = CitationLocation::at("4").with_prefix("see").with_suffix("for more");
        assert_eq!(in_text(&r, &loc), "see [3] (4) for more");
    }

    #[test]
    fn test_in_text_without_number() {
        let r = Reference::new("x", ReferenceType::Book);
        assert_eq!(in_text(&r, &CitationLocation::default()), "[]");
    }

    #[test]
    fn test_full_entry() {
        assert_eq!(
            bibliography_entry(&article()),
            "Smith JD. A Study of X. J Med. 2020;12(3):45-67. https://doi.org/10.1000/xyz."
        );
    }

    #[test]
    fn test_sparse_entry() {
        let r = Reference::new("x", ReferenceType::Book);
        assert_eq!(
            bibliography_entry(&r),
            "Autor desconocido. [Sin título]. s. f.."
        );
    }
}
