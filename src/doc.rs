// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

use crate::position::Position;

/// An immutable document tree, generic over an annotation type `A`.
///
/// Cheap to clone: internally an `Rc`, exactly as in the teacher's
/// `Doc` (`Rc<DocInner>`).
pub struct Doc<A>(pub(crate) Rc<DocRepr<A>>);

impl<A> Clone for Doc<A> {
    fn clone(&self) -> Self {
        Doc(Rc::clone(&self.0))
    }
}

type PositionFn<A> = Rc<dyn Fn(Position) -> Doc<A>>;

pub(crate) enum DocRepr<A> {
    Empty,
    Text(i64, String),
    Break,
    Append(Doc<A>, Doc<A>),
    Indent(Doc<A>),
    Align(i64, Doc<A>),
    FlexGroup(Doc<A>),
    FlexAlt(Doc<A>, Doc<A>),
    Annotate(A, Doc<A>),
    WithPosition(PositionFn<A>),
}

impl<A> DocRepr<A> {
    fn doc(self) -> Doc<A> {
        Doc(Rc::new(self))
    }
}

impl<A> Doc<A> {
    // -------------------------------------------
    // Core constructors
    // -------------------------------------------

    /// The empty document: the identity element under `append`.
    pub fn empty() -> Doc<A> {
        DocRepr::Empty.doc()
    }

    /// A leaf of literal text. Must not contain line breaks (caller
    /// contract, see spec §1 Non-goals / §9 Open Question).
    ///
    /// `text("")` collapses to `Doc::empty()`.
    pub fn text<S: Into<String>>(s: S) -> Doc<A> {
        let s = s.into();
        if s.is_empty() {
            Doc::empty()
        } else {
            let len = s.chars().count() as i64;
            DocRepr::Text(len, s).doc()
        }
    }

    /// An unconditional line break.
    pub fn line_break() -> Doc<A> {
        DocRepr::Break.doc()
    }

    /// A single ASCII space, as a `Doc`.
    pub fn space() -> Doc<A> {
        Doc::text(" ")
    }

    /// Concatenate two documents with no separator.
    ///
    /// `append(empty, x) = append(x, empty) = x`.
    pub fn append(self, other: Doc<A>) -> Doc<A> {
        match (&*self.0, &*other.0) {
            (DocRepr::Empty, _) => other,
            (_, DocRepr::Empty) => self,
            _ => DocRepr::Append(self, other).doc(),
        }
    }

    /// Increase the indentation level within `self` by one indent unit.
    ///
    /// `indent(empty) = empty`.
    pub fn indent(self) -> Doc<A> {
        match &*self.0 {
            DocRepr::Empty => self,
            _ => DocRepr::Indent(self).doc(),
        }
    }

    /// Shift the indentation level within `self` by exactly `width`
    /// spaces. Widths `<= 0` are a no-op (the document is returned
    /// unchanged, not wrapped).
    ///
    /// `align(w, empty) = empty` for any `w`.
    pub fn align(self, width: i64) -> Doc<A> {
        match &*self.0 {
            DocRepr::Empty => self,
            _ if width <= 0 => self,
            _ => DocRepr::Align(width, self).doc(),
        }
    }

    /// Mark `self` as a candidate for compact (single-line) layout.
    ///
    /// Idempotent: `flex_group(flex_group(x)) = flex_group(x)`.
    pub fn flex_group(self) -> Doc<A> {
        match &*self.0 {
            DocRepr::Empty => self,
            DocRepr::FlexGroup(_) => self,
            _ => DocRepr::FlexGroup(self).doc(),
        }
    }

    /// Two alternative documents: `flex` is rendered while inside a
    /// committed flex group, `default` otherwise.
    pub fn flex_alt(flex: Doc<A>, default: Doc<A>) -> Doc<A> {
        DocRepr::FlexAlt(flex, default).doc()
    }

    /// Attach an annotation value to `self`.
    ///
    /// `annotate(a, empty) = empty`.
    pub fn annotate(self, ann: A) -> Doc<A> {
        match &*self.0 {
            DocRepr::Empty => self,
            _ => DocRepr::Annotate(ann, self).doc(),
        }
    }

    /// Defer construction of a document until the current render
    /// position is known.
    pub fn with_position<F>(k: F) -> Doc<A>
    where
        F: Fn(Position) -> Doc<A> + 'static,
    {
        DocRepr::WithPosition(Rc::new(k)).doc()
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(&*self.0, DocRepr::Empty)
    }
}
