/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for the citation engine.
//!
//! This crate holds the types shared by every other part of the engine:
//! the [`Reference`] record and its sub-structures, the per-occurrence
//! [`CitationLocation`], the registry of supported citation styles
//! ([`StyleId`]) and the CSL-JSON interchange codec.
//!
//! Everything here is plain data plus pure functions. The only stateful
//! component of the engine (the reference manager) lives in
//! `cite_processor`.

pub mod citation;
pub mod csl_json;
pub mod error;
pub mod macros;
pub mod reference;
pub mod style;

pub use citation::{CitationLocation, Position};
pub use csl_json::{
    from_csl_json, from_csl_json_str, to_csl_json, to_csl_json_string, CslItem,
};
pub use error::Error;
pub use reference::{
    generate_id, non_blank, DateParts, PersonName, RefID, Reference, ReferencePatch,
    ReferenceType,
};
pub use style::{StyleFamily, StyleId};
