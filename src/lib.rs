// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

//! `flexdoc` — a pretty-printer engine: a declarative, composable
//! description of a document (a tree of layout primitives), rendered
//! to a string-like output by a single-pass, bounded-lookahead layout
//! algorithm that chooses between compact and expanded alternatives
//! based on whether content fits a target page width.
//!
//! The core consists of the document algebra (`Doc`), the layout
//! interpreter (`print`), the flex-group speculation mechanism, and
//! the pluggable `Printer` sink abstraction. Higher-level layouts,
//! ANSI-styled printers, and CLI wrappers are external collaborators;
//! see `demos/bracket_printer.rs` for a worked example of the latter.

pub mod buffer;
pub mod combinators;
pub mod doc;
pub mod layout;
pub mod position;
pub mod print_options;
pub mod printer;
pub mod printers;

mod tests;

pub use buffer::Buffer;
pub use doc::Doc;
pub use layout::print;
pub use position::Position;
pub use print_options::PrintOptions;
pub use printer::Printer;
pub use printers::plain::PlainTextPrinter;

impl<A: Clone + 'static> Doc<A> {
    /// Render with the built-in plain-text printer.
    pub fn render(self, options: &PrintOptions) -> String {
        self.render_with(&PlainTextPrinter, options)
    }

    /// Render with an arbitrary printer sink.
    pub fn render_with<B, R>(self, printer: &impl Printer<B, A, R>, options: &PrintOptions) -> R
    where
        B: Clone,
    {
        print(printer, options, self)
    }
}

/// A value that knows how to turn itself into a `Doc<A>`.
pub trait ToDoc<A> {
    fn to_doc(&self) -> Doc<A>;
}

/// Convert an iterator of items to a `Doc` by rendering each item with
/// `ToDoc` and interspersing `separator` between them.
///
/// Returns `Doc::empty()` if the iterator is empty.
///
/// # Example
/// ```rust
/// use flexdoc::*;
///
/// struct Item(&'static str);
///
/// impl ToDoc<()> for Item {
///     fn to_doc(&self) -> Doc<()> {
///         Doc::text(self.0)
///     }
/// }
///
/// let xs = [Item("a"), Item("b"), Item("c")];
/// let doc = to_list(xs.iter(), Doc::text(","));
/// assert_eq!(doc.render(&PrintOptions::two_space()), "a,b,c");
/// ```
pub fn to_list<'a, A, T>(docs: impl IntoIterator<Item = &'a T>, separator: Doc<A>) -> Doc<A>
where
    A: Clone + 'static,
    T: ToDoc<A> + 'a,
{
    let mut iter = docs.into_iter();
    match iter.next() {
        None => Doc::empty(),
        Some(first) => {
            let mut output = first.to_doc();
            for next in iter {
                output = output.append(separator.clone()).append(next.to_doc());
            }
            output
        }
    }
}
