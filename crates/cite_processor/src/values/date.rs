/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use cite_core::Reference;

use super::NO_DATE;

/// The issued year, or the no-date marker.
pub fn format_year(reference: &Reference) -> String {
    match reference.year() {
        Some(year) => year.to_string(),
        None => NO_DATE.to_string(),
    }
}
