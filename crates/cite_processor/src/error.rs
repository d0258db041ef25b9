/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors from loading and saving bibliographies and configuration.
///
/// Formatting and manager operations never fail; only the file and text
/// entry points return this type.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("unsupported bibliography format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] cite_core::Error),
}

impl From<serde_yaml::Error> for ProcessorError {
    fn from(e: serde_yaml::Error) -> Self {
        ProcessorError::ParseError("YAML".to_string(), e.to_string())
    }
}
