/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use cite_core::{from_csl_json_str, to_csl_json_string, Reference};

use crate::ProcessorError;

/// Interchange formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    BibTeX,
    CslJson,
}

impl Format {
    /// `.bib` is BibTeX and `.json` is CSL-JSON.
    pub fn from_path(path: &Path) -> Result<Self, ProcessorError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "bib" | "bibtex" => Ok(Format::BibTeX),
            "json" => Ok(Format::CslJson),
            _ => Err(ProcessorError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a bibliography from a file given its path.
/// Supports BibTeX and CSL-JSON.
pub fn load_bibliography(path: &Path) -> Result<Vec<Reference>, ProcessorError> {
    let format = Format::from_path(path)?;
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    match format {
        Format::BibTeX => Ok(cite_bibtex::parse_bibtex(&text)),
        Format::CslJson => from_csl_json_str(&text)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
    }
}

/// Write references to a file, in the format its extension names.
pub fn save_bibliography(path: &Path, refs: &[Reference]) -> Result<(), ProcessorError> {
    let text = match Format::from_path(path)? {
        Format::BibTeX => cite_bibtex::format_bibtex(refs),
        Format::CslJson => to_csl_json_string(refs)?,
    };
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/refs.bib")).unwrap(), Format::BibTeX);
        assert_eq!(Format::from_path(Path::new("refs.JSON")).unwrap(), Format::CslJson);
        assert!(matches!(
            Format::from_path(Path::new("refs.yaml")),
            Err(ProcessorError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(&PathBuf::from("refs")).is_err());
    }
}
