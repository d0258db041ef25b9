/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The reference manager: one per open document.
//!
//! The manager owns every [`Reference`] it stores, the current style and a
//! monotonic citation-number counter. Numbers start at 1 and are never
//! handed out twice, not even after the reference holding one is removed or
//! the catalog is cleared.
//!
//! No operation fails. Operations on unknown ids answer `None` or `false`.
//! The manager does no locking; callers sharing one across threads must
//! serialize access themselves.

use cite_core::{
    from_csl_json_str, generate_id, to_csl_json_string, CitationLocation, RefID, Reference,
    ReferencePatch, StyleId,
};
use indexmap::IndexMap;
use tracing::debug;

use crate::config::Config;
use crate::format::CitationFormatter;
use crate::ProcessorError;

#[derive(Debug, Clone)]
pub struct ReferenceManager {
    references: IndexMap<RefID, Reference>,
    next_number: u64,
    style: StyleId,
    id_prefix: String,
}

impl Default for ReferenceManager {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl ReferenceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            references: IndexMap::new(),
            next_number: 1,
            style: config.style,
            id_prefix: config.id_prefix.clone(),
        }
    }

    pub fn style(&self) -> StyleId {
        self.style
    }

    /// Select the style. Re-rendering is up to the caller.
    pub fn set_style(&mut self, style: StyleId) {
        self.style = style;
    }

    /// Add a reference, or merge into the one already stored under `id`.
    ///
    /// A blank or missing id is replaced by a generated one. A new reference
    /// without a citation number (0 counts as none) gets the next unused
    /// number; a merge keeps the stored number.
    pub fn add_reference(&mut self, mut input: ReferencePatch, id: Option<&str>) -> Reference {
        if input.citation_number == Some(0) {
            input.citation_number = None;
        }
        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => self.fresh_id(),
        };

        if let Some(existing) = self.references.get_mut(&id) {
            input.citation_number = None;
            input.apply(existing);
            return existing.clone();
        }

        let mut reference = Reference {
            id: id.clone(),
            ..Default::default()
        };
        input.apply(&mut reference);
        match reference.citation_number {
            Some(n) => self.reserve(n),
            None => reference.citation_number = self.allocate(),
        }
        self.references.insert(id, reference.clone());
        reference
    }

    /// Add a whole reference, keeping its id when it has one.
    pub fn import_reference(&mut self, reference: Reference) -> Reference {
        let id = reference.id.clone();
        self.add_reference(ReferencePatch::from(reference), Some(&id))
    }

    pub fn import_references(&mut self, refs: Vec<Reference>) -> Vec<Reference> {
        refs.into_iter()
            .map(|r| self.import_reference(r))
            .collect()
    }

    /// Import every entry of a BibTeX document.
    pub fn import_bibtex(&mut self, text: &str) -> Vec<Reference> {
        self.import_references(cite_bibtex::parse_bibtex(text))
    }

    /// Import every item of a CSL-JSON document.
    pub fn import_csl_json(&mut self, text: &str) -> Result<Vec<Reference>, ProcessorError> {
        Ok(self.import_references(from_csl_json_str(text)?))
    }

    /// Merge `patch` into the reference stored under `id`.
    pub fn update_reference(&mut self, id: &str, mut patch: ReferencePatch) -> Option<Reference> {
        if patch.citation_number == Some(0) {
            patch.citation_number = None;
        }
        if let Some(n) = patch.citation_number {
            if self.references.contains_key(id) {
                self.reserve(n);
            }
        }
        let reference = self.references.get_mut(id)?;
        patch.apply(reference);
        Some(reference.clone())
    }

    pub fn get_reference(&self, id: &str) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.references.contains_key(id)
    }

    /// All references by ascending citation number, ties in insertion order.
    pub fn list_references(&self) -> Vec<&Reference> {
        let mut refs: Vec<&Reference> = self.references.values().collect();
        refs.sort_by_key(|r| (r.citation_number.is_none(), r.citation_number));
        refs
    }

    /// Remove a reference; `false` when the id is unknown.
    pub fn remove_reference(&mut self, id: &str) -> bool {
        self.references.shift_remove(id).is_some()
    }

    /// Remove every reference. Numbers already handed out stay used.
    pub fn clear(&mut self) {
        self.references.clear();
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Render an in-text citation of `id` in the current style.
    pub fn cite<F: CitationFormatter + ?Sized>(
        &self,
        formatter: &F,
        id: &str,
        location: &CitationLocation,
    ) -> Option<String> {
        let reference = self.get_reference(id)?;
        Some(formatter.format_in_text(reference, location, self.style))
    }

    /// Render the bibliography in the current style, in list order.
    pub fn bibliography<F: CitationFormatter + ?Sized>(&self, formatter: &F) -> Vec<String> {
        self.list_references()
            .into_iter()
            .map(|r| formatter.format_bibliography_entry(r, self.style))
            .collect()
    }

    pub fn export_bibtex(&self) -> String {
        cite_bibtex::format_bibtex(&self.owned_list())
    }

    pub fn export_csl_json(&self) -> Result<String, ProcessorError> {
        Ok(to_csl_json_string(&self.owned_list())?)
    }

    fn owned_list(&self) -> Vec<Reference> {
        self.list_references().into_iter().cloned().collect()
    }

    fn fresh_id(&self) -> RefID {
        loop {
            let id = generate_id(&self.id_prefix);
            if !self.references.contains_key(&id) {
                debug!(%id, "generated reference id");
                return id;
            }
        }
    }

    /// The next unused citation number, or `None` once every `u32` has been handed out.
    fn allocate(&mut self) -> Option<u32> {
        let Ok(n) = u32::try_from(self.next_number) else {
            debug!("citation numbers exhausted");
            return None;
        };
        self.next_number += 1;
        debug!(number = n, "allocated citation number");
        Some(n)
    }

    /// Keep later allocations clear of an explicitly supplied number.
    fn reserve(&mut self, n: u32) {
        self.next_number = self.next_number.max(u64::from(n) + 1);
    }
}
