/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A date broken into parts, compatible with CSL `date-parts`.
///
/// A missing year means "no date"; month and day are only meaningful when
/// the year is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DateParts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
}

impl DateParts {
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    pub fn year_month(year: i32, month: u8) -> Self {
        Self {
            year: Some(year),
            month: valid_month(month),
            day: None,
        }
    }

    pub fn ymd(year: i32, month: u8, day: u8) -> Self {
        let month = valid_month(month);
        Self {
            year: Some(year),
            month,
            day: month.and(valid_day(day)),
        }
    }

    /// True when there is a year to render.
    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }
}

/// Keeps a month only when it falls in 1..=12.
pub fn valid_month(month: u8) -> Option<u8> {
    (1..=12).contains(&month).then_some(month)
}

/// Keeps a day only when it falls in 1..=31.
pub fn valid_day(day: u8) -> Option<u8> {
    (1..=31).contains(&day).then_some(day)
}
