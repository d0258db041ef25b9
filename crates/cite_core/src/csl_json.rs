/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conversion between [`Reference`]s and CSL-JSON items.
//!
//! The mapping is field-for-field. Two things do not survive the trip:
//! the citation number, which CSL-JSON cannot represent, and a blank id,
//! which is replaced by a generated one on the way in. Tags travel in the
//! `custom` object, which CSL-JSON reserves for application data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::error::Error;
use crate::reference::date::{valid_day, valid_month};
use crate::reference::{generate_id, DateParts, PersonName, Reference, ReferenceType};

/// A value that could be either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::String(s) => write!(f, "{}", s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A CSL name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CslName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

/// A CSL date. Only the first `date-parts` row is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CslDate {
    #[serde(rename = "date-parts", default, skip_serializing_if = "Option::is_none")]
    pub date_parts: Option<Vec<Vec<Value>>>,
}

/// Application data carried in the CSL `custom` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CslCustom {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A CSL-JSON item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CslItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StringOrNumber>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<CslName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<CslDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<CslDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<StringOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_place: Option<String>,
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CslCustom>,
}

/// Convert references to CSL-JSON items.
pub fn to_csl_json(refs: &[Reference]) -> Vec<CslItem> {
    refs.iter().map(to_csl_item).collect()
}

fn to_csl_item(reference: &Reference) -> CslItem {
    let author = (!reference.author.is_empty()).then(|| {
        reference
            .author
            .iter()
            .map(|a| CslName {
                given: a.given.clone(),
                family: a.family.clone(),
                literal: a.literal.clone(),
            })
            .collect()
    });
    let custom = (!reference.tags.is_empty()).then(|| CslCustom {
        tags: reference.tags.iter().cloned().collect(),
    });

    CslItem {
        id: (!reference.id.is_empty()).then(|| StringOrNumber::String(reference.id.clone())),
        item_type: Some(reference.ref_type.as_str().to_string()),
        title: reference.title.clone(),
        container_title: reference.container_title.clone(),
        author,
        issued: reference.issued.as_ref().and_then(to_csl_date),
        accessed: reference.accessed.as_ref().and_then(to_csl_date),
        volume: reference.volume.clone().map(StringOrNumber::String),
        issue: reference.issue.clone().map(StringOrNumber::String),
        page: reference.page.clone().map(StringOrNumber::String),
        edition: reference.edition.clone().map(StringOrNumber::String),
        publisher: reference.publisher.clone(),
        publisher_place: reference.publisher_place.clone(),
        doi: reference.doi.clone(),
        url: reference.url.clone(),
        note: reference.note.clone(),
        custom,
    }
}

/// `[[year, month|null, day|null]]`, or nothing when there is no year.
fn to_csl_date(date: &DateParts) -> Option<CslDate> {
    let year = date.year?;
    let part = |v: Option<u8>| v.map(Value::from).unwrap_or(Value::Null);
    Some(CslDate {
        date_parts: Some(vec![vec![
            Value::from(year),
            part(date.month),
            part(date.day),
        ]]),
    })
}

/// Convert CSL-JSON items to references.
///
/// Blank ids are replaced by generated ones, absent or unknown types become
/// `article-journal`, and a date without a usable year is dropped.
pub fn from_csl_json(items: impl IntoIterator<Item = CslItem>) -> Vec<Reference> {
    items.into_iter().map(from_csl_item).collect()
}

fn from_csl_item(item: CslItem) -> Reference {
    let id = item
        .id
        .map(|id| id.to_string().trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| generate_id("ref-"));

    let author = item
        .author
        .unwrap_or_default()
        .into_iter()
        .map(|n| PersonName {
            given: n.given,
            family: n.family,
            literal: n.literal,
        })
        .collect();

    Reference {
        id,
        ref_type: ReferenceType::from_csl(item.item_type.as_deref()),
        title: item.title,
        container_title: item.container_title,
        author,
        issued: item.issued.as_ref().and_then(from_csl_date),
        volume: item.volume.map(|v| v.to_string()),
        issue: item.issue.map(|v| v.to_string()),
        page: item.page.map(|v| v.to_string()),
        edition: item.edition.map(|v| v.to_string()),
        publisher: item.publisher,
        publisher_place: item.publisher_place,
        doi: item.doi,
        url: item.url,
        accessed: item.accessed.as_ref().and_then(from_csl_date),
        tags: item.custom.map(|c| c.tags.into_iter().collect()).unwrap_or_default(),
        note: item.note,
        citation_number: None,
    }
}

fn from_csl_date(date: &CslDate) -> Option<DateParts> {
    let first = date.date_parts.as_ref()?.first()?;
    let year = first.first().and_then(date_part)?;
    let year = i32::try_from(year).ok()?;
    let small = |index: usize| {
        first
            .get(index)
            .and_then(date_part)
            .and_then(|v| u8::try_from(v).ok())
    };
    Some(DateParts {
        year: Some(year),
        month: small(1).and_then(valid_month),
        day: small(2).and_then(valid_day),
    })
}

/// A date part given as a JSON integer or a numeric string.
fn date_part(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read references from CSL-JSON text.
///
/// Accepts an array of items, a single item, or an object mapping ids to
/// items. Items that do not deserialize are skipped; only text that is not
/// JSON at all is an error.
pub fn from_csl_json_str(text: &str) -> Result<Vec<Reference>, Error> {
    let value: Value = serde_json::from_str(text)?;
    let items: Vec<CslItem> = match value {
        Value::Array(values) => values.into_iter().filter_map(item_from_value).collect(),
        Value::Object(map) if looks_like_item(&map) => {
            item_from_value(Value::Object(map)).into_iter().collect()
        }
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| {
                let mut item = item_from_value(value)?;
                if item.id.is_none() {
                    item.id = Some(StringOrNumber::String(key));
                }
                Some(item)
            })
            .collect(),
        other => {
            warn!(kind = json_kind(&other), "CSL-JSON document holds no items");
            Vec::new()
        }
    };
    Ok(from_csl_json(items))
}

fn looks_like_item(map: &serde_json::Map<String, Value>) -> bool {
    ["id", "type", "title"].iter().any(|k| map.contains_key(*k))
}

fn item_from_value(value: Value) -> Option<CslItem> {
    match serde_json::from_value::<CslItem>(value) {
        Ok(item) => Some(item),
        Err(e) => {
            debug!(error = %e, "skipping malformed CSL-JSON item");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Write references as a pretty-printed CSL-JSON array.
pub fn to_csl_json_string(refs: &[Reference]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&to_csl_json(refs))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_date_parts() {
        let mut reference = Reference::new("a", ReferenceType::Book);
        reference.issued = Some(DateParts::year_month(2020, 5));
        let items = to_csl_json(&[reference]);
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["issued"]["date-parts"], serde_json::json!([[2020, 5, null]]));
    }

    #[test]
    fn test_issued_omitted_without_year() {
        let mut reference = Reference::new("a", ReferenceType::Book);
        reference.issued = Some(DateParts {
            year: None,
            month: Some(3),
            day: None,
        });
        let json = serde_json::to_value(&to_csl_json(&[reference])[0]).unwrap();
        assert!(json.get("issued").is_none());
    }

    #[test]
    fn test_invalid_year_drops_issued() {
        let items: Vec<CslItem> = serde_json::from_str(
            r#"[
                {"id": "a", "issued": {"date-parts": [["circa"]]}},
                {"id": "b", "issued": {"date-parts": []}},
                {"id": "c", "issued": {"date-parts": [["1999", 2, 40]]}}
            ]"#,
        )
        .unwrap();
        let refs = from_csl_json(items);
        assert_eq!(refs[0].issued, None);
        assert_eq!(refs[1].issued, None);
        assert_eq!(
            refs[2].issued,
            Some(DateParts {
                year: Some(1999),
                month: Some(2),
                day: None
            })
        );
    }

    #[test]
    fn test_blank_id_and_unknown_type() {
        let items: Vec<CslItem> =
            serde_json::from_str(r#"[{"id": "  ", "type": "song", "title": "T"}]"#).unwrap();
        let refs = from_csl_json(items);
        assert!(refs[0].id.starts_with("ref-"));
        assert_eq!(refs[0].ref_type, ReferenceType::ArticleJournal);
    }

    #[test]
    fn test_numeric_fields_and_ids() {
        let refs = from_csl_json_str(
            r#"[{"id": 42, "type": "paper-conference", "volume": 3, "page": "10-12"}]"#,
        )
        .unwrap();
        assert_eq!(refs[0].id, "42");
        assert_eq!(refs[0].ref_type, ReferenceType::ConferencePaper);
        assert_eq!(refs[0].volume.as_deref(), Some("3"));
        assert_eq!(refs[0].page.as_deref(), Some("10-12"));
    }

    #[test]
    fn test_document_shapes() {
        let single = from_csl_json_str(r#"{"id": "one", "title": "Only"}"#).unwrap();
        assert_eq!(single.len(), 1);

        let keyed =
            from_csl_json_str(r#"{"kuhn": {"type": "book"}, "popper": {"type": "book"}}"#)
                .unwrap();
        let ids: Vec<_> = keyed.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"kuhn") && ids.contains(&"popper"));

        assert!(from_csl_json_str("42").unwrap().is_empty());
        assert!(matches!(from_csl_json_str("{nope"), Err(Error::Json(_))));
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let refs = from_csl_json_str(
            r#"[{"id": "good"}, {"id": "bad", "author": "not a list"}, {"id": "also-good"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "also-good"]);
    }

    #[test]
    fn test_tags_travel_in_custom() {
        let mut reference = Reference::new("a", ReferenceType::Dataset);
        reference.tags.insert("raw".to_string());
        let text = to_csl_json_string(&[reference.clone()]).unwrap();
        assert!(text.contains("\"custom\""));
        let back = from_csl_json_str(&text).unwrap();
        assert_eq!(back[0], reference);
    }
}
