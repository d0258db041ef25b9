/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The registry of supported citation styles.
//!
//! Styles fall into two behavioral families. Numeric styles cite by the
//! reference's sequential citation number (`[3]`); author-date styles cite by
//! first-author surname and year (`(Smith, 2020)`). The formatter selects its
//! strategy from the family, so adding a style only means listing it here.

use crate::error::Error;
use crate::str_enum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

str_enum! {
    /// A supported citation style.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "lowercase")]
    pub enum StyleId {
        /// APA 7th edition.
        #[default]
        Apa = "apa",
        Mla = "mla",
        Chicago = "chicago",
        Harvard = "harvard",
        /// Numeric, Vancouver (ICMJE) conventions.
        Vancouver = "vancouver",
        /// Numeric, IEEE conventions.
        Ieee = "ieee",
        /// American Chemical Society.
        Acs = "acs",
        Iso690 = "iso690",
        Turabian = "turabian",
    }
}

/// The behavioral family a style belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Cites by citation number: `[n]`.
    Numeric,
    /// Cites by surname and year: `(Surname, Year)`.
    AuthorDate,
}

impl StyleId {
    pub fn family(&self) -> StyleFamily {
        match self {
            StyleId::Vancouver | StyleId::Ieee => StyleFamily::Numeric,
            StyleId::Apa
            | StyleId::Mla
            | StyleId::Chicago
            | StyleId::Harvard
            | StyleId::Acs
            | StyleId::Iso690
            | StyleId::Turabian => StyleFamily::AuthorDate,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.family() == StyleFamily::Numeric
    }
}

impl FromStr for StyleId {
    type Err = Error;

    /// Parse a style id, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleId::ALL
            .iter()
            .copied()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families() {
        let numeric: Vec<_> = StyleId::ALL.iter().filter(|s| s.is_numeric()).collect();
        assert_eq!(numeric, vec![&StyleId::Vancouver, &StyleId::Ieee]);
        assert_eq!(StyleId::ALL.len(), 9);
    }

    #[test]
    fn test_parse_style_id() {
        assert_eq!("apa".parse::<StyleId>().unwrap(), StyleId::Apa);
        assert_eq!(" IEEE ".parse::<StyleId>().unwrap(), StyleId::Ieee);
        assert_eq!("iso690".parse::<StyleId>().unwrap(), StyleId::Iso690);
        assert!(matches!(
            "bluebook".parse::<StyleId>(),
            Err(Error::UnknownStyle(s)) if s == "bluebook"
        ));
        assert_eq!(
            "bluebook".parse::<StyleId>().unwrap_or_default(),
            StyleId::Apa
        );
    }

    #[test]
    fn test_serde_uses_style_ids() {
        let json = serde_json::to_string(&StyleId::Iso690).unwrap();
        assert_eq!(json, "\"iso690\"");
        let style: StyleId = serde_json::from_str("\"turabian\"").unwrap();
        assert_eq!(style, StyleId::Turabian);
        assert_eq!(StyleId::Vancouver.to_string(), "vancouver");
    }
}
