/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value extraction shared by the style strategies.
//!
//! Each helper turns one part of a [`Reference`](cite_core::Reference) into
//! display text and never fails: missing data degrades to the placeholder
//! constants below.

pub mod date;
pub mod names;


use cite_core::Reference;

pub use date::format_year;
pub use names::{display_name, format_authors_apa, format_authors_vancouver, initials, surname};

/// Stands in for a missing surname in in-text citations.
pub const UNKNOWN_AUTHOR_SHORT: &str = "Autor";
/// Stands in for a missing author list in bibliography entries.
pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";
pub const UNTITLED: &str = "[Sin título]";
/// The no-date marker.
pub const NO_DATE: &str = "s. f.";

/// The title, or the untitled placeholder.
pub fn title(reference: &Reference) -> &str {
    reference.title().unwrap_or(UNTITLED)
}

/// `"pp."` for a page range, `"p."` otherwise.
pub fn locator_label(locator: &str) -> &'static str {
    if locator.contains(['-', '\u{2013}']) {
        "pp."
    } else {
        "p."
    }
}
