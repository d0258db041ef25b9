/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author-date styles (APA, MLA, Chicago, Harvard, ACS, ISO 690, Turabian).
//! They share one APA-like template.

use cite_core::{non_blank, CitationLocation, Reference};

use crate::values::{format_authors_apa, format_year, locator_label, surname, title};

/// `(Surname, Year)`, with `, p. 4` or `, pp. 4-6` when a locator is given.
pub(super) fn in_text(reference: &Reference, location: &CitationLocation) -> String {
    let mut core = format!("{}, {}", surname(reference), format_year(reference));
    if let Some(locator) = location.locator() {
        core.push_str(&format!(", {} {}", locator_label(locator), locator));
    }
    location.wrap(format!("({})", core))
}

/// `Authors (Year). Title. Container, Volume(Issue), Pages. URL-or-DOI`
pub(super) fn bibliography_entry(reference: &Reference) -> String {
    let mut parts = vec![
        format_authors_apa(&reference.author),
        format!("({}).", format_year(reference)),
        format!("{}.", title(reference)),
    ];

    let page = non_blank(&reference.page);
    if let Some(container) = reference.container_title() {
        let mut source = container.to_string();
        // An issue number only makes sense after a volume.
        if let Some(volume) = non_blank(&reference.volume) {
            source.push_str(&format!(", {}", volume));
            if let Some(issue) = non_blank(&reference.issue) {
                source.push_str(&format!("({})", issue));
            }
        }
        if let Some(page) = page {
            source.push_str(&format!(", {}", page));
        }
        source.push('.');
        parts.push(source);
    } else if let Some(page) = page {
        parts.push(format!("{}.", page));
    }

    if let Some(link) = reference.url_or_doi() {
        parts.push(link);
    }
    parts.join(" ")
}
