/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;

use cite_bibtex::{format_bibtex, parse_bibtex, parse_bibtex_report, SkipReason};
use cite_core::{DateParts, PersonName, Reference, ReferenceType};
use common::{article, LIBRARY};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;

#[test]
fn test_minimal_article() {
    let refs = parse_bibtex(
        "@article{smith20,\n author = {Smith, John},\n title = {A Study},\n year = {2020}\n}",
    );
    assert_eq!(refs.len(), 1);
    let r = &refs[0];
    assert_eq!(r.id, "smith20");
    assert_eq!(r.ref_type, ReferenceType::ArticleJournal);
    assert_eq!(r.title.as_deref(), Some("A Study"));
    assert_eq!(r.author, vec![PersonName::new("Smith", "John")]);
    assert_eq!(r.issued, Some(DateParts::year(2020)));
}

#[test]
fn test_library_fields() {
    let report = parse_bibtex_report(LIBRARY);
    let ids: Vec<_> = report.references.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["smith20", "lee19", "who21", "bare"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].reason,
        SkipReason::Directive("string".to_string())
    );

    let smith = &report.references[0];
    assert_eq!(smith.title.as_deref(), Some("A Study of {DNA} Repair"));
    assert_eq!(smith.container_title.as_deref(), Some("Journal of X"));
    assert_eq!(smith.issued, Some(DateParts::year_month(2020, 3)));
    assert_eq!(smith.issue.as_deref(), Some("3"));
    assert_eq!(smith.page.as_deref(), Some("12--15"));
    assert_eq!(smith.doi.as_deref(), Some("10.1000/xyz"));
    assert_eq!(smith.author.len(), 2);

    let lee = &report.references[1];
    assert_eq!(lee.ref_type, ReferenceType::ConferencePaper);
    assert_eq!(lee.container_title.as_deref(), Some("Proceedings of Things"));
    assert_eq!(lee.year(), Some(2019));

    let who = &report.references[2];
    assert_eq!(who.author, vec![PersonName::literal("World Health Organization")]);
    assert_eq!(who.publisher_place.as_deref(), Some("Geneva"));
    assert_eq!(who.edition.as_deref(), Some("2"));

    let bare = &report.references[3];
    assert_eq!(bare.ref_type, ReferenceType::Other);
    assert_eq!(bare.title, None);
}

#[test]
fn test_missing_or_bad_year_omits_issued() {
    let refs = parse_bibtex("@book{a, year = {n.d.}}\n@book{b, title = {T}}");
    assert_eq!(refs.len(), 2);
    assert!(refs.iter().all(|r| r.issued.is_none()));
}

#[test]
fn test_garbage_yields_nothing() {
    assert!(parse_bibtex("").is_empty());
    assert!(parse_bibtex("just some prose with no entries").is_empty());
    assert!(parse_bibtex("@@@{{{").is_empty());
}

#[test]
fn test_written_library_reads_back() {
    let refs = parse_bibtex(LIBRARY);
    let again = parse_bibtex(&format_bibtex(&refs));
    assert_eq!(refs, again);
}

#[test]
fn test_multiword_family_keeps_identity() {
    let r = Reference {
        author: vec![PersonName::family_only("van Dyke"), PersonName::new("Smith", "John")],
        ..Reference::new("vd", ReferenceType::Book)
    };
    let back = parse_bibtex(&format_bibtex(std::slice::from_ref(&r)));
    assert_eq!(back[0].author, r.author);
}

#[test]
fn test_title_with_trailing_backslash() {
    let r = Reference {
        title: Some("Paths like C:\\".to_string()),
        ..Reference::new("win", ReferenceType::Report)
    };
    let report = parse_bibtex_report(&format_bibtex(std::slice::from_ref(&r)));
    assert!(report.skipped.is_empty());
    assert_eq!(report.references[0].title, r.title);
}

#[test]
fn test_format_joins_entries_with_blank_line() {
    let out = format_bibtex(&[
        article("a", "Smith", "John", 2020, "One"),
        article("b", "Doe", "Jane", 2021, "Two"),
    ]);
    assert!(out.contains("}\n\n@article{b,"));
}

fn word() -> impl Strategy<Value = String> {
    "[B-Z][a-z]{1,8}"
}

/// Words with backslashes, some wrapped in braces.
fn phrase() -> impl Strategy<Value = String> {
    let token = ("[A-Za-z\\\\][a-z0-9\\\\]{0,8}", any::<bool>()).prop_map(|(word, wrap)| {
        if wrap {
            format!("{{{}}}", word)
        } else {
            word
        }
    });
    vec(token, 1..6).prop_map(|words| words.join(" "))
}

fn person() -> impl Strategy<Value = PersonName> {
    prop_oneof![
        (word(), vec(word(), 1..3))
            .prop_map(|(family, given)| PersonName::new(&family, &given.join(" "))),
        vec(word(), 1..3).prop_map(|family| PersonName::family_only(&family.join(" "))),
        word().prop_map(|given| PersonName {
            given: Some(given),
            ..Default::default()
        }),
        phrase().prop_map(|name| PersonName::literal(&name)),
    ]
}

fn reference() -> impl Strategy<Value = Reference> {
    (
        "[a-z][a-z0-9_-]{0,12}",
        select(ReferenceType::ALL.to_vec()),
        option::of(phrase()),
        option::of(phrase()),
        vec(person(), 0..5),
        option::of(1000i32..2100),
    )
        .prop_map(|(id, ref_type, title, container_title, author, year)| Reference {
            id,
            ref_type,
            title,
            container_title,
            author,
            issued: year.map(DateParts::year),
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn prop_core_fields_survive(r in reference()) {
        let back = parse_bibtex(&format_bibtex(std::slice::from_ref(&r)));
        prop_assert_eq!(back.len(), 1);
        let back = &back[0];
        prop_assert_eq!(&back.id, &r.id);
        prop_assert_eq!(&back.title, &r.title);
        prop_assert_eq!(&back.container_title, &r.container_title);
        prop_assert_eq!(&back.author, &r.author);
        prop_assert_eq!(back.year(), r.year());
    }
}
