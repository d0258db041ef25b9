/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A reference is a bibliographic item, such as a book, article, or web page.
//! It is the basic unit of bibliographic data.
//!
//! The model is deliberately flat and maps field-for-field onto CSL-JSON:
//!
//! ## Contributors
//!
//! Authors are an ordered list of [`PersonName`]s, each carrying a family
//! name, a given name, or a literal (institutional) name.
//!
//! ## Dates
//!
//! Dates are [`DateParts`]: an optional year with month and day that only
//! mean something when the year is present.
//!
//! ## Citation numbers
//!
//! Numeric styles cite by `citation_number`. The number is allocated by the
//! reference manager and is never part of the interchange formats.

pub mod contributor;
pub mod date;
pub mod patch;
pub mod types;


#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use self::contributor::PersonName;
pub use self::date::DateParts;
pub use self::patch::ReferencePatch;
pub use self::types::ReferenceType;

/// A reference identifier, unique within one reference manager.
pub type RefID = String;

/// The Reference model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: RefID,
    #[serde(rename = "type", default)]
    pub ref_type: ReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Journal, book or proceedings name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<PersonName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateParts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_place: Option<String>,
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<DateParts>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Sequential number used by numeric styles. Always positive when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_number: Option<u32>,
}

impl Reference {
    /// Create an empty reference of the given type.
    pub fn new(id: &str, ref_type: ReferenceType) -> Self {
        Self {
            id: id.to_string(),
            ref_type,
            ..Default::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    pub fn container_title(&self) -> Option<&str> {
        non_blank(&self.container_title)
    }

    /// The issued year, if any.
    pub fn year(&self) -> Option<i32> {
        self.issued.as_ref().and_then(|d| d.year)
    }

    /// The first author, if any.
    pub fn first_author(&self) -> Option<&PersonName> {
        self.author.first()
    }

    /// The DOI as a resolvable URL, falling back to the plain URL.
    pub fn url_or_doi(&self) -> Option<String> {
        if let Some(doi) = non_blank(&self.doi) {
            if doi.starts_with("http://") || doi.starts_with("https://") {
                return Some(doi.to_string());
            }
            return Some(format!("https://doi.org/{}", doi));
        }
        non_blank(&self.url).map(str::to_string)
    }
}

/// Returns the trimmed content of an optional string, treating blank
/// strings as absent.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Generate a short random reference id such as `ref-3f9a0c1b`.
pub fn generate_id(prefix: &str) -> RefID {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &uuid[..8])
}
