// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

//! Derived combinators built on top of the primitives in `doc`: the
//! spec's "Public combinators" component. Nothing here inspects a
//! `DocRepr` directly; everything is expressed via `Doc`'s own public
//! constructors, the way the teacher's `hsep`/`vsep`/`sep`/`block` etc.
//! sit on top of its own primitive `concat`/`nest`/`group`.

use crate::doc::Doc;

impl<A: 'static> Doc<A> {
    /// `space_break = flex_alt(space, line_break)`: a space while
    /// flexed, a hard break otherwise.
    pub fn space_break() -> Doc<A> {
        Doc::flex_alt(Doc::space(), Doc::line_break())
    }

    /// `soft_break = flex_alt(empty, line_break)`: nothing while
    /// flexed, a hard break otherwise.
    pub fn soft_break() -> Doc<A> {
        Doc::flex_alt(Doc::empty(), Doc::line_break())
    }

    /// Pin subsequent lines of `self` to the current output column.
    ///
    /// `align_current_column(d) = with_position(|p| align(p.column -
    /// p.indent, d))`.
    pub fn align_current_column(self) -> Doc<A> {
        Doc::with_position(move |p| self.clone().align(p.column - p.indent))
    }

    /// Append with a hard line break between; skipped if either side
    /// is empty.
    pub fn append_break(self, other: Doc<A>) -> Doc<A> {
        fold_sep(self, other, Doc::line_break())
    }

    /// Append with a space between; skipped if either side is empty.
    pub fn append_space(self, other: Doc<A>) -> Doc<A> {
        fold_sep(self, other, Doc::space())
    }

    /// Append with a flex group of `space_break ++ other` between;
    /// skipped if either side is empty.
    pub fn append_flex(self, other: Doc<A>) -> Doc<A> {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        self.append(Doc::space_break().append(other).flex_group())
    }

    /// Fold a slice of documents into one, joined by `append_break`.
    pub fn lines(docs: impl IntoIterator<Item = Doc<A>>) -> Doc<A> {
        fold_with(docs, Doc::append_break)
    }

    /// Fold a slice of documents into one, joined by `append_space`.
    pub fn words(docs: impl IntoIterator<Item = Doc<A>>) -> Doc<A> {
        fold_with(docs, Doc::append_space)
    }

    /// Fold a slice of documents into one, joined by `append_flex`,
    /// i.e. compact-if-it-fits word wrapping.
    pub fn paragraph(docs: impl IntoIterator<Item = Doc<A>>) -> Doc<A> {
        fold_with(docs, Doc::append_flex)
    }

    /// Trim `s`, split on runs of whitespace/newlines, and lay the
    /// words out as a `paragraph`.
    pub fn text_paragraph<S: AsRef<str>>(s: S) -> Doc<A> {
        let words = s
            .as_ref()
            .split_whitespace()
            .map(Doc::text)
            .collect::<Vec<_>>();
        Doc::paragraph(words)
    }

    /// `enclose(open, close, self) = open ++ self ++ close`.
    pub fn enclose(self, open: Doc<A>, close: Doc<A>) -> Doc<A> {
        open.append(self).append(close)
    }

    /// Like `enclose`, but yields `default` outright when `self` is
    /// empty instead of wrapping an empty body in the brackets.
    pub fn enclose_empty_alt(self, open: Doc<A>, close: Doc<A>, default: Doc<A>) -> Doc<A> {
        if self.is_empty() {
            default
        } else {
            self.enclose(open, close)
        }
    }

    /// Surround with parentheses.
    pub fn parens(self) -> Doc<A> {
        self.enclose(Doc::text("("), Doc::text(")"))
    }

    /// Surround with angle brackets.
    pub fn angles(self) -> Doc<A> {
        self.enclose(Doc::text("<"), Doc::text(">"))
    }

    /// Surround with square brackets.
    pub fn brackets(self) -> Doc<A> {
        self.enclose(Doc::text("["), Doc::text("]"))
    }

    /// Surround with curly braces.
    pub fn braces(self) -> Doc<A> {
        self.enclose(Doc::text("{"), Doc::text("}"))
    }

    /// `self.indent()`, read as "indent by one unit" -- a hanging
    /// indent with no leading alignment shift of its own.
    pub fn hang(self) -> Doc<A> {
        self.indent()
    }
}

/// Right fold applying `f` pairwise; returns `Doc::empty()` for an
/// empty iterator, otherwise the left fold of `f` over the rest.
pub(crate) fn fold_with<A, F>(docs: impl IntoIterator<Item = Doc<A>>, f: F) -> Doc<A>
where
    F: Fn(Doc<A>, Doc<A>) -> Doc<A>,
{
    let mut iter = docs.into_iter();
    match iter.next() {
        None => Doc::empty(),
        Some(first) => iter.fold(first, f),
    }
}

fn fold_sep<A: 'static>(a: Doc<A>, b: Doc<A>, sep: Doc<A>) -> Doc<A> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    a.append(sep).append(b)
}
