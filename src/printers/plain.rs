// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;

use crate::print_options::PrintOptions;
use crate::printer::Printer;

/// The built-in plain-text sink (spec §4.6): buffer is a growable
/// `String`, annotations are no-ops.
pub struct PlainTextPrinter;

impl<A> Printer<String, A, String> for PlainTextPrinter {
    fn empty_buffer(&self) -> String {
        String::new()
    }

    fn write_text(&self, _len: i64, text: &str, mut buf: String) -> String {
        buf.push_str(text);
        buf
    }

    fn write_indent(&self, _width: i64, spaces: &str, mut buf: String) -> String {
        buf.push_str(spaces);
        buf
    }

    fn write_break(&self, mut buf: String) -> String {
        buf.push('\n');
        buf
    }

    fn enter_annotation(&self, _ann: &A, _outer: &[A], buf: String) -> String {
        buf
    }

    fn leave_annotation(&self, _ann: &A, _remaining: &[A], buf: String) -> String {
        buf
    }

    fn flush_buffer(&self, buf: String) -> String {
        buf
    }
}

// Built the same way the teacher interns its leaf `Doc`s
// (`once_cell::unsync::Lazy` thread-locals) except at process scope,
// since `PrintOptions` carries no `Rc` and is freely `Sync`. See
// SPEC_FULL.md §10.3 and DESIGN.md.
pub(crate) static TWO_SPACE: Lazy<PrintOptions> =
    Lazy::new(|| PrintOptions::new(80, 1.0, "  ", 2));
pub(crate) static FOUR_SPACE: Lazy<PrintOptions> =
    Lazy::new(|| PrintOptions::new(120, 1.0, "    ", 4));
pub(crate) static TABS: Lazy<PrintOptions> = Lazy::new(|| PrintOptions::new(120, 1.0, "\t", 4));
