// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

//! Bundled `Printer` implementations. Anything fancier (ANSI colors,
//! JSON, box/grid layouts) is an external collaborator per spec §1 and
//! lives outside this crate (see `demos/bracket_printer.rs`).

pub mod plain;
