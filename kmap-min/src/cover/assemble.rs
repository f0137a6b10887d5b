// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::group::Group;
use itertools::Itertools;

/// Joins the terms of `cover` into a sum-of-products string.
///
/// An empty cover reads as `1`, and so does any cover holding the tautological group.
pub fn assemble(cover: &[Group]) -> String {
    if cover.is_empty() || cover.iter().any(|group| group.term().is_tautology()) {
        return "1".to_owned();
    }
    cover.iter().map(Group::term).join(" + ")
}
