/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation formatting and reference management.
//!
//! This crate turns [`Reference`]s into in-text citations and bibliography
//! entries for the supported citation styles, and provides the
//! [`ReferenceManager`] that a host document keeps its references in.
//!
//! # Example
//!
//! ```rust
//! use cite_core::{CitationLocation, DateParts, PersonName, ReferencePatch, StyleId};
//! use cite_processor::{Config, ReferenceManager};
//!
//! let config = Config::default();
//! let mut manager = ReferenceManager::with_config(&config);
//! let reference = manager.add_reference(
//!     ReferencePatch {
//!         title: Some("A Study of X".to_string()),
//!         author: Some(vec![PersonName::new("Smith", "John")]),
//!         issued: Some(DateParts::year(2020)),
//!         ..Default::default()
//!     },
//!     None,
//! );
//!
//! let formatter = config.formatter();
//! let cite = manager.cite(&formatter, &reference.id, &CitationLocation::default());
//! assert_eq!(cite.as_deref(), Some("(Smith, 2020)"));
//! assert_eq!(manager.bibliography(&formatter), ["Smith, J. (2020). A Study of X."]);
//!
//! manager.set_style(StyleId::Vancouver);
//! let cite = manager.cite(&formatter, &reference.id, &CitationLocation::at("12-15"));
//! assert_eq!(cite.as_deref(), Some("[1] (12-15)"));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod manager;
pub mod render;
pub mod styles;
pub mod values;

pub use config::Config;
pub use error::ProcessorError;
pub use format::{
    format_bibliography_entry, format_in_text, CitationFormatter, StandardFormatter,
};
pub use manager::ReferenceManager;
pub use render::Tidy;

pub use cite_core::{CitationLocation, Reference, StyleId};
