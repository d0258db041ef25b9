/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The formatter contract.
//!
//! Formatting never fails. A reference with missing fields renders with
//! placeholder text so that one incomplete record cannot abort a whole
//! bibliography.

use cite_core::{CitationLocation, Reference, StyleId};

use crate::styles::strategy;

/// Renders in-text citations and bibliography entries.
pub trait CitationFormatter {
    /// The marker for one citation of `reference` in running text.
    fn format_in_text(
        &self,
        reference: &Reference,
        location: &CitationLocation,
        style: StyleId,
    ) -> String;

    /// The reference-list line for `reference`.
    fn format_bibliography_entry(&self, reference: &Reference, style: StyleId) -> String;
}

impl<F: CitationFormatter + ?Sized> CitationFormatter for &F {
    fn format_in_text(
        &self,
        reference: &Reference,
        location: &CitationLocation,
        style: StyleId,
    ) -> String {
        (**self).format_in_text(reference, location, style)
    }

    fn format_bibliography_entry(&self, reference: &Reference, style: StyleId) -> String {
        (**self).format_bibliography_entry(reference, style)
    }
}

impl<F: CitationFormatter + ?Sized> CitationFormatter for Box<F> {
    fn format_in_text(
        &self,
        reference: &Reference,
        location: &CitationLocation,
        style: StyleId,
    ) -> String {
        (**self).format_in_text(reference, location, style)
    }

    fn format_bibliography_entry(&self, reference: &Reference, style: StyleId) -> String {
        (**self).format_bibliography_entry(reference, style)
    }
}

/// The built-in formatter, dispatching on the style family.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormatter;

impl CitationFormatter for StandardFormatter {
    fn format_in_text(
        &self,
        reference: &Reference,
        location: &CitationLocation,
        style: StyleId,
    ) -> String {
        (strategy(style).in_text)(reference, location)
    }

    fn format_bibliography_entry(&self, reference: &Reference, style: StyleId) -> String {
        (strategy(style).bibliography_entry)(reference)
    }
}

/// Format an in-text citation with the [`StandardFormatter`].
///
/// ```
/// use cite_core::{CitationLocation, DateParts, PersonName, Reference, ReferenceType, StyleId};
/// use cite_processor::format_in_text;
///
/// let r = Reference {
///     author: vec![PersonName::new("Kuhn", "Thomas")],
///     issued: Some(DateParts::year(1962)),
///     ..Reference::new("kuhn1962", ReferenceType::Book)
/// };
/// assert_eq!(format_in_text(&r, &CitationLocation::default(), StyleId::Apa), "(Kuhn, 1962)");
/// ```
pub fn format_in_text(reference: &Reference, location: &CitationLocation, style: StyleId) -> String {
    StandardFormatter.format_in_text(reference, location, style)
}

/// Format a bibliography entry with the [`StandardFormatter`].
pub fn format_bibliography_entry(reference: &Reference, style: StyleId) -> String {
    StandardFormatter.format_bibliography_entry(reference, style)
}
