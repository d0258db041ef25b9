/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Punctuation cleanup layered over any formatter.
//!
//! Templates join fields with fixed punctuation, so a title that already
//! ends in a period or question mark produces doubled marks such as
//! `"Vol.."` or `"Why?."`. [`tidy_punctuation`] repairs those artifacts
//! and [`Tidy`] applies it to every string a wrapped formatter returns.

use std::sync::LazyLock;

use cite_core::{CitationLocation, Reference, StyleId};
use regex::Regex;

use crate::format::CitationFormatter;

static SPACE_BEFORE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\.").unwrap());
static PERIOD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());
static MARK_THEN_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([?!])\.").unwrap());
static PERIOD_SPACE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+\)").unwrap());
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Collapse doubled periods and stray spaces in rendered text.
///
/// ```
/// use cite_processor::render::tidy_punctuation;
///
/// assert_eq!(tidy_punctuation("Vol.. 2 ."), "Vol. 2.");
/// assert_eq!(tidy_punctuation("Why?. Because"), "Why? Because");
/// ```
pub fn tidy_punctuation(text: &str) -> String {
    let text = SPACE_BEFORE_PERIOD.replace_all(text, ".");
    let text = PERIOD_RUN.replace_all(&text, ".");
    let text = MARK_THEN_PERIOD.replace_all(&text, "$1");
    let text = PERIOD_SPACE_PAREN.replace_all(&text, ".)");
    let text = SPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// A formatter whose output passes through [`tidy_punctuation`].
#[derive(Debug, Clone, Default)]
pub struct Tidy<F> {
    inner: F,
}

impl<F: CitationFormatter> Tidy<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: CitationFormatter> CitationFormatter for Tidy<F> {
    fn format_in_text(
        &self,
        reference: &Reference,
        location: &CitationLocation,
        style: StyleId,
    ) -> String {
        tidy_punctuation(&self.inner.format_in_text(reference, location, style))
    }

    fn format_bibliography_entry(&self, reference: &Reference, style: StyleId) -> String {
        tidy_punctuation(&self.inner.format_bibliography_entry(reference, style))
    }
}
