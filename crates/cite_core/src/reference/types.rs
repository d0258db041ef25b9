/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::Error;
use crate::str_enum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

str_enum! {
    /// The kind of work a reference describes. The string values are the
    /// CSL-style type ids used on the wire.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "kebab-case")]
    pub enum ReferenceType {
        #[default]
        ArticleJournal = "article-journal",
        Book = "book",
        Chapter = "chapter",
        Thesis = "thesis",
        Report = "report",
        Webpage = "webpage",
        #[serde(alias = "paper-conference")]
        ConferencePaper = "conference-paper",
        Dataset = "dataset",
        Other = "other",
    }
}

impl ReferenceType {
    /// Map a CSL type id, defaulting to `article-journal` for absent or
    /// unrecognized values.
    pub fn from_csl(raw: Option<&str>) -> Self {
        raw.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for ReferenceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("paper-conference") {
            return Ok(ReferenceType::ConferencePaper);
        }
        ReferenceType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownReferenceType(s.to_string()))
    }
}
