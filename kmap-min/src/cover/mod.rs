// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod assemble;
mod select;

pub use assemble::*;
pub use select::*;
