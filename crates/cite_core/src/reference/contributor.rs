/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::non_blank;

/// A person or organization name, compatible with the CSL name model.
///
/// At least one of the parts should be populated. Organizations use
/// `literal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl PersonName {
    /// A structured name.
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            given: Some(given.to_string()),
            literal: None,
        }
    }

    /// A literal name, such as an organization.
    pub fn literal(name: &str) -> Self {
        Self {
            literal: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// A name with only a family part.
    pub fn family_only(family: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            ..Default::default()
        }
    }

    pub fn family_name(&self) -> Option<&str> {
        non_blank(&self.family)
    }

    pub fn given_name(&self) -> Option<&str> {
        non_blank(&self.given)
    }

    pub fn literal_name(&self) -> Option<&str> {
        non_blank(&self.literal)
    }

    /// The family name, else the literal, else the given name.
    pub fn family_or_literal(&self) -> Option<&str> {
        self.family_name()
            .or_else(|| self.literal_name())
            .or_else(|| self.given_name())
    }

    /// True when no part carries any text.
    pub fn is_empty(&self) -> bool {
        self.family_or_literal().is_none()
    }
}
