/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use cite_core::{non_blank, Reference, ReferenceType};
use tracing::debug;

use crate::names::format_person;
use crate::types::bibtex_type;

/// Serialize references as BibTeX, one entry per reference.
///
/// Values are written in braces. A value whose braces do not balance has
/// them removed, so the output always reads back.
pub fn format_bibtex(refs: &[Reference]) -> String {
    refs.iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_entry(reference: &Reference) -> String {
    let key = match reference.id.trim() {
        "" => "ref",
        id => id,
    };
    let lines: Vec<String> = fields(reference)
        .into_iter()
        .filter_map(|(name, value)| {
            let value = clean(key, name, &value);
            (!value.is_empty()).then(|| format!("  {} = {{{}}}", name, value))
        })
        .collect();
    format!(
        "@{}{{{},\n{}\n}}",
        bibtex_type(reference.ref_type),
        key,
        lines.join(",\n")
    )
}

fn fields(reference: &Reference) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    let mut push = |name: &'static str, value: Option<&str>| {
        if let Some(value) = value {
            fields.push((name, value.to_string()));
        }
    };

    let authors: Vec<String> = reference.author.iter().filter_map(format_person).collect();
    if !authors.is_empty() {
        push("author", Some(&authors.join(" and ")));
    }
    push("title", reference.title());

    let container = match reference.ref_type {
        ReferenceType::Chapter | ReferenceType::ConferencePaper => "booktitle",
        _ => "journal",
    };
    push(container, reference.container_title());

    let issued = reference.issued.filter(|d| d.has_year());
    let year = issued.and_then(|d| d.year).map(|y| y.to_string());
    push("year", year.as_deref());
    let month = issued.and_then(|d| d.month).map(|m| m.to_string());
    push("month", month.as_deref());

    push("volume", non_blank(&reference.volume));
    push("number", non_blank(&reference.issue));
    push("pages", non_blank(&reference.page));
    push("edition", non_blank(&reference.edition));
    push("publisher", non_blank(&reference.publisher));
    push("address", non_blank(&reference.publisher_place));
    push("doi", non_blank(&reference.doi));
    push("url", non_blank(&reference.url));
    fields
}

fn clean(key: &str, field: &str, value: &str) -> String {
    let value = value.replace(['\r', '\n'], " ");
    let value = value.trim();
    if balanced(value) {
        value.to_string()
    } else {
        debug!(key, field, "dropping unbalanced braces from BibTeX value");
        value.replace(['{', '}'], "")
    }
}

fn balanced(value: &str) -> bool {
    let mut depth = 0i32;
    for c in value.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}
