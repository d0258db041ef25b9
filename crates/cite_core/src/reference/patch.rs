/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Partial updates to a [`Reference`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DateParts, PersonName, Reference, ReferenceType};
use crate::merge_options;

/// Every field of a [`Reference`] except its id, each optional.
///
/// Applying a patch replaces the fields it carries and keeps the rest.
/// The id is not part of a patch, so it cannot change once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReferencePatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<ReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<PersonName>>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_number: Option<u32>,
}

impl ReferencePatch {
    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == ReferencePatch::default()
    }

    /// Merge this patch over `target`. The target's id is never touched.
    pub fn apply(self, target: &mut Reference) {
        if let Some(ref_type) = self.ref_type {
            target.ref_type = ref_type;
        }
        if let Some(author) = self.author {
            target.author = author;
        }
        if let Some(tags) = self.tags {
            target.tags = tags;
        }
        merge_options!(
            target,
            self,
            title,
            container_title,
            issued,
            volume,
            issue,
            page,
            edition,
            publisher,
            publisher_place,
            doi,
            url,
            accessed,
            note,
            citation_number,
        );
    }
}

impl From<Reference> for ReferencePatch {
    /// Every populated field of the reference; empty author and tag lists
    /// count as absent.
    fn from(reference: Reference) -> Self {
        Self {
            ref_type: Some(reference.ref_type),
            title: reference.title,
            container_title: reference.container_title,
            author: (!reference.author.is_empty()).then_some(reference.author),
            issued: reference.issued,
            volume: reference.volume,
            issue: reference.issue,
            page: reference.page,
            edition: reference.edition,
            publisher: reference.publisher,
            publisher_place: reference.publisher_place,
            doi: reference.doi,
            url: reference.url,
            accessed: reference.accessed,
            tags: (!reference.tags.is_empty()).then_some(reference.tags),
            note: reference.note,
            citation_number: reference.citation_number,
        }
    }
}
