/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-occurrence citation data.
//!
//! A [`CitationLocation`] belongs to one in-text occurrence of a reference,
//! never to the reference itself: the same reference can be cited on page 12
//! in one paragraph and on pages 40-41 in the next.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::reference::non_blank;

/// Position of a citation relative to earlier citations of the same reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    First,
    Subsequent,
    Ibid,
}

/// Prefix, suffix and locator attached to one in-text citation,
/// e.g. "cf. Smith (2010, p. 23)".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CitationLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// A page or page range such as "23" or "141-146".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl CitationLocation {
    /// A location carrying only a locator.
    pub fn at(locator: &str) -> Self {
        Self {
            locator: Some(locator.to_string()),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        non_blank(&self.prefix)
    }

    pub fn suffix(&self) -> Option<&str> {
        non_blank(&self.suffix)
    }

    pub fn locator(&self) -> Option<&str> {
        non_blank(&self.locator)
    }

    /// Wrap an already rendered citation in this location's prefix and
    /// suffix, each separated by one space.
    pub fn wrap(&self, core: String) -> String {
        let mut text = core;
        if let Some(prefix) = self.prefix() {
            text = format!("{} {}", prefix, text);
        }
        if let Some(suffix) = self.suffix() {
            text = format!("{} {}", text, suffix);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_parts_are_absent() {
        let loc = CitationLocation {
            prefix: Some("  ".to_string()),
            suffix: Some(String::new()),
            locator: Some(" 12 ".to_string()),
            position: None,
        };
        assert_eq!(loc.prefix(), None);
        assert_eq!(loc.suffix(), None);
        assert_eq!(loc.locator(), Some("12"));
    }

    #[test]
    fn test_wrap() {
        let loc = CitationLocation::default()
            .with_prefix("see")
            .with_suffix("for details");
        assert_eq!(loc.wrap("[1]".to_string()), "see [1] for details");
        assert_eq!(CitationLocation::default().wrap("[1]".to_string()), "[1]");
    }

    #[test]
    fn test_deserialize_from_host_attrs() {
        let loc: CitationLocation =
            serde_json::from_str(r#"{"prefix": "cf.", "locator": "23", "position": "ibid"}"#)
                .unwrap();
        assert_eq!(loc.prefix(), Some("cf."));
        assert_eq!(loc.position, Some(Position::Ibid));
    }
}
