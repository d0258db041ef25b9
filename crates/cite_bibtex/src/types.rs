/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use cite_core::ReferenceType;

/// Map a BibTeX entry type (any case) to a reference type.
pub fn reference_type(bibtex: &str) -> ReferenceType {
    match bibtex.to_ascii_lowercase().as_str() {
        "article" => ReferenceType::ArticleJournal,
        "inproceedings" | "conference" => ReferenceType::ConferencePaper,
        "book" => ReferenceType::Book,
        "inbook" | "incollection" => ReferenceType::Chapter,
        "phdthesis" | "mastersthesis" | "thesis" => ReferenceType::Thesis,
        "techreport" => ReferenceType::Report,
        _ => ReferenceType::Other,
    }
}

/// The BibTeX entry type written for a reference type.
pub fn bibtex_type(ref_type: ReferenceType) -> &'static str {
    match ref_type {
        ReferenceType::ArticleJournal => "article",
        ReferenceType::Book => "book",
        ReferenceType::ConferencePaper => "inproceedings",
        ReferenceType::Chapter => "incollection",
        ReferenceType::Thesis => "phdthesis",
        ReferenceType::Report => "techreport",
        _ => "misc",
    }
}
