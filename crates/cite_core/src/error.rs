/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors raised by the text-level entry points of the core crate.
///
/// The data operations themselves never fail; these only surface when a
/// caller hands over an identifier or a document that cannot be read at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown citation style: {0}")]
    UnknownStyle(String),

    #[error("unknown reference type: {0}")]
    UnknownReferenceType(String),

    #[error("invalid CSL-JSON: {0}")]
    Json(#[from] serde_json::Error),
}
