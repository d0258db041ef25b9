/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use cite_core::{DateParts, PersonName, Reference, ReferencePatch, ReferenceType};
use cite_processor::ReferenceManager;

// --- Helper Functions for Test Data Construction ---

/// A patch for a book with one author.
pub fn book_patch(family: &str, given: &str, year: i32, title: &str) -> ReferencePatch {
    ReferencePatch {
        ref_type: Some(ReferenceType::Book),
        title: Some(title.to_string()),
        author: Some(vec![PersonName::new(family, given)]),
        issued: Some(DateParts::year(year)),
        ..Default::default()
    }
}

/// A journal article with every field the formatters render.
pub fn make_article(id: &str) -> Reference {
    Reference {
        title: Some("A Study of X".to_string()),
        container_title: Some("Journal of X".to_string()),
        author: vec![PersonName::new("Smith", "John")],
        issued: Some(DateParts::year(2020)),
        volume: Some("12".to_string()),
        issue: Some("3".to_string()),
        page: Some("45-67".to_string()),
        doi: Some("10.1000/xyz".to_string()),
        ..Reference::new(id, ReferenceType::ArticleJournal)
    }
}

/// A manager holding three books, numbered 1 to 3.
pub fn make_manager() -> ReferenceManager {
    let mut manager = ReferenceManager::new();
    manager.add_reference(
        book_patch("Kuhn", "Thomas", 1962, "The Structure of Scientific Revolutions"),
        Some("kuhn1962"),
    );
    manager.add_reference(
        book_patch("Hawking", "Stephen", 1988, "A Brief History of Time"),
        Some("hawking1988"),
    );
    manager.add_reference(book_patch("Sagan", "Carl", 1980, "Cosmos"), Some("sagan1980"));
    manager
}
