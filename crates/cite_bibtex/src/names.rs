/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Person names in BibTeX `author` fields.

use cite_core::PersonName;

use crate::parser::unquote;

/// Split an `author` field on ` and ` (any case) and parse each name.
/// An `and` inside braces belongs to the name.
pub fn parse_authors(value: &str) -> Vec<PersonName> {
    split_names(value)
        .iter()
        .filter_map(|token| parse_person(token))
        .collect()
}

fn split_names(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut depth = 0i32;
    for word in value.split_whitespace() {
        if depth == 0 && word.eq_ignore_ascii_case("and") {
            names.push(current.join(" "));
            current.clear();
            continue;
        }
        for c in word.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }
        current.push(word);
    }
    names.push(current.join(" "));
    names.retain(|n| !n.is_empty());
    names
}

/// Parse one name.
///
/// `Family, Given` when there is a comma; otherwise the last word is the
/// family name and the rest is the given name. A name wrapped in braces is
/// a literal, such as an organization.
pub fn parse_person(token: &str) -> Option<PersonName> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if token.starts_with('{') && token.ends_with('}') {
        let inner = unquote(token);
        if inner != token {
            return Some(PersonName::literal(inner));
        }
    }

    if let Some((family, given)) = token.split_once(',') {
        let part = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        return Some(PersonName {
            family: part(family),
            given: part(given),
            literal: None,
        });
    }

    let words: Vec<&str> = token.split_whitespace().collect();
    match words.split_last() {
        Some((family, [])) => Some(PersonName::family_only(family)),
        Some((family, given)) => Some(PersonName::new(family, &given.join(" "))),
        None => None,
    }
}

/// Serialize one name so that [`parse_person`] reads it back unchanged.
///
/// `Family, Given` when both parts exist. A literal is wrapped in braces.
/// A lone family name with several words gets a trailing comma and a lone
/// given name a leading one, so neither is split into given and family.
pub fn format_person(name: &PersonName) -> Option<String> {
    match (name.family_name(), name.given_name()) {
        (Some(family), Some(given)) => Some(format!("{}, {}", family, given)),
        _ if name.literal_name().is_some() => {
            name.literal_name().map(|literal| format!("{{{}}}", literal))
        }
        (Some(family), None) if family.contains(char::is_whitespace) => {
            Some(format!("{},", family))
        }
        (Some(family), None) => Some(family.to_string()),
        (None, Some(given)) => Some(format!(", {}", given)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_form() {
        assert_eq!(
            parse_person("Smith, John"),
            Some(PersonName::new("Smith", "John"))
        );
        assert_eq!(
            parse_person("van Dyke, Jan Peter"),
            Some(PersonName::new("van Dyke", "Jan Peter"))
        );
        assert_eq!(parse_person("Smith,"), Some(PersonName::family_only("Smith")));
    }

    #[test]
    fn test_given_first_form() {
        assert_eq!(
            parse_person("John Ronald Smith"),
            Some(PersonName::new("Smith", "John Ronald"))
        );
        assert_eq!(parse_person("Plato"), Some(PersonName::family_only("Plato")));
        assert_eq!(parse_person("   "), None);
    }

    #[test]
    fn test_literal_in_braces() {
        assert_eq!(
            parse_person("{World Health Organization}"),
            Some(PersonName::literal("World Health Organization"))
        );
    }

    #[test]
    fn test_split_on_and() {
        let names = parse_authors("Smith, John AND Doe, Jane and {Barnes and Noble}");
        assert_eq!(
            names,
            vec![
                PersonName::new("Smith", "John"),
                PersonName::new("Doe", "Jane"),
                PersonName::literal("Barnes and Noble"),
            ]
        );
        assert!(parse_authors("").is_empty());
        assert_eq!(parse_authors("Alexander Anderson").len(), 1);
    }

    #[test]
    fn test_format_person() {
        assert_eq!(
            format_person(&PersonName::new("Smith", "John")).as_deref(),
            Some("Smith, John")
        );
        assert_eq!(
            format_person(&PersonName::literal("WHO")).as_deref(),
            Some("{WHO}")
        );
        assert_eq!(
            format_person(&PersonName::family_only("Plato")).as_deref(),
            Some("Plato")
        );
        assert_eq!(format_person(&PersonName::default()), None);
    }

    #[test]
    fn test_lone_parts_read_back() {
        let names = [
            PersonName::family_only("van Dyke"),
            PersonName::family_only("Plato"),
            PersonName {
                given: Some("Cher".into()),
                ..Default::default()
            },
        ];
        for name in names {
            let written = format_person(&name).unwrap();
            assert_eq!(parse_person(&written), Some(name), "{written}");
        }
        assert_eq!(
            format_person(&PersonName::family_only("van Dyke")).as_deref(),
            Some("van Dyke,")
        );
    }
}
