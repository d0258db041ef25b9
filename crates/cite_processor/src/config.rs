/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use cite_core::StyleId;
use serde::{Deserialize, Serialize};

use crate::format::{CitationFormatter, StandardFormatter};
use crate::render::Tidy;
use crate::ProcessorError;

/// Engine settings, usually read from a YAML file.
///
/// ```yaml
/// style: vancouver
/// id-prefix: "cite-"
/// tidy-punctuation: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// The style a new reference manager starts with.
    pub style: StyleId,
    /// Prefix of generated reference ids.
    pub id_prefix: String,
    /// Run formatter output through the punctuation tidy pass.
    pub tidy_punctuation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: StyleId::default(),
            id_prefix: default_id_prefix(),
            tidy_punctuation: true,
        }
    }
}

fn default_id_prefix() -> String {
    "ref-".to_string()
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, ProcessorError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProcessorError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// The formatter these settings describe.
    pub fn formatter(&self) -> Box<dyn CitationFormatter> {
        if self.tidy_punctuation {
            Box::new(Tidy::new(StandardFormatter))
        } else {
            Box::new(StandardFormatter)
        }
    }
}
