/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-family rendering strategies.
//!
//! Every [`StyleId`] belongs to a [`StyleFamily`], and each family owns one
//! [`StyleStrategy`]: a pair of plain functions for the in-text marker and
//! the bibliography entry. Dispatch is a table lookup per call.

mod author_date;
mod numeric;

use cite_core::{CitationLocation, Reference, StyleFamily, StyleId};

/// The two rendering functions of one style family.
#[derive(Debug, Clone, Copy)]
pub struct StyleStrategy {
    pub family: StyleFamily,
    pub in_text: fn(&Reference, &CitationLocation) -> String,
    pub bibliography_entry: fn(&Reference) -> String,
}

const NUMERIC: StyleStrategy = StyleStrategy {
    family: StyleFamily::Numeric,
    in_text: numeric::in_text,
    bibliography_entry: numeric::bibliography_entry,
};

const AUTHOR_DATE: StyleStrategy = StyleStrategy {
    family: StyleFamily::AuthorDate,
    in_text: author_date::in_text,
    bibliography_entry: author_date::bibliography_entry,
};

/// The strategy used to render `style`.
pub fn strategy(style: StyleId) -> &'static StyleStrategy {
    match style.family() {
        StyleFamily::Numeric => &NUMERIC,
        StyleFamily::AuthorDate => &AUTHOR_DATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_a_strategy() {
        for style in StyleId::ALL {
            assert_eq!(strategy(*style).family, style.family());
        }
    }
}
