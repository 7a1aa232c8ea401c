// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

//! A worked "external collaborator" printer (spec §1, §6.2): an
//! ANSI-styled sink built entirely on top of the public `Printer`
//! trait, with no changes to the core. Run with:
//!
//! ```text
//! cargo run --example bracket_printer
//! ```

use flexdoc::{Doc, PrintOptions, Printer};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Green,
}

impl Color {
    fn sgr(&self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
        }
    }
}

/// Wraps annotated regions in ANSI color codes, restoring the
/// enclosing color (if any) on exit rather than always resetting to
/// plain, so nested annotations of different colors compose.
struct AnsiPrinter;

const RESET: &str = "\x1b[0m";

impl Printer<String, Color, String> for AnsiPrinter {
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

    fn enter_annotation(&self, ann: &Color, _outer: &[Color], mut buf: String) -> String {
        buf.push_str(ann.sgr());
        buf
    }

    fn leave_annotation(&self, _ann: &Color, remaining: &[Color], mut buf: String) -> String {
        buf.push_str(RESET);
        if let Some(outer) = remaining.first() {
            buf.push_str(outer.sgr());
        }
        buf
    }

    fn flush_buffer(&self, buf: String) -> String {
        buf
    }
}

fn main() {
    let doc: Doc<Color> = Doc::text("warning:")
        .annotate(Color::Red)
        .append_space(Doc::text("disk usage at"))
        .append_space(Doc::text("92%").annotate(Color::Green))
        .flex_group();

    let options = PrintOptions::new(80, 1.0, "  ", 2);
    println!("{}", doc.render_with(&AnsiPrinter, &options));
}
