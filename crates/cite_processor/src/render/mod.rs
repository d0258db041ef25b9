/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Post-processing of rendered citation text.

pub mod tidy;

pub use tidy::{tidy_punctuation, Tidy};
