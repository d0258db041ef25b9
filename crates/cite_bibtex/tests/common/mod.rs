/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use cite_core::{DateParts, PersonName, Reference, ReferenceType};

/// A small BibTeX document covering the entry types the reader maps.
pub const LIBRARY: &str = r#"% exported from a reference manager
@article{smith20,
  author = {Smith, John and Doe, Jane},
  title = {A Study of {DNA} Repair},
  journal = {Journal of X},
  year = {2020},
  month = mar,
  volume = {12},
  number = {3},
  pages = {12--15},
  doi = {10.1000/xyz}
}

@string{jx = "Journal of X"}

@inproceedings{lee19,
  author = "Lee, Ann",
  title = "Fast Things",
  booktitle = {Proceedings of Things},
  year = 2019
}

@book{who21,
  author = {{World Health Organization}},
  title = {Annual Report},
  publisher = {WHO Press},
  address = {Geneva},
  edition = {2},
  year = {2021}
}

@misc{bare}
"#;

pub fn article(id: &str, family: &str, given: &str, year: i32, title: &str) -> Reference {
    Reference {
        author: vec![PersonName::new(family, given)],
        issued: Some(DateParts::year(year)),
        title: Some(title.to_string()),
        ..Reference::new(id, ReferenceType::ArticleJournal)
    }
}
