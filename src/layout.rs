// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

//! The layout interpreter: an explicit-stack iterative evaluator that
//! walks a `Doc<A>` and drives a `Printer` sink.
//!
//! The command stack is a shared-tail, `Rc`-linked list, exactly the
//! `Cons`/`cons()` construction the teacher uses in `Doc::best`'s
//! `fits` lookahead (`examples/cgswords-pretty-simple/src/lib.rs`,
//! the `best` method). There, a cheap `Rc::clone` of a list node is
//! already how the teacher snapshots "what's left to look at"; here
//! the same trick lets a flex-group abort replace the live stack with
//! an earlier-captured one in O(1) instead of needing to rebuild or
//! truncate an array-backed stack.

use std::rc::Rc;

use crate::buffer::Buffer;
use crate::doc::{Doc, DocRepr};
use crate::position::Position;
use crate::print_options::PrintOptions;
use crate::printer::Printer;

enum AnnNode<A> {
    Nil,
    Cons(A, AnnStack<A>),
}

/// Persistent (shared-tail) annotation stack, innermost first. Clone
/// is an `Rc::clone`, which is exactly what makes it free to stash a
/// whole copy of "annotations open right now" into a flex-group
/// snapshot.
type AnnStack<A> = Rc<AnnNode<A>>;

fn ann_nil<A>() -> AnnStack<A> {
    Rc::new(AnnNode::Nil)
}

fn ann_push<A>(ann: A, rest: AnnStack<A>) -> AnnStack<A> {
    Rc::new(AnnNode::Cons(ann, rest))
}

fn ann_to_vec<A: Clone>(stack: &AnnStack<A>) -> Vec<A> {
    let mut out = Vec::new();
    let mut cur = Rc::clone(stack);
    loop {
        match &*cur {
            AnnNode::Nil => break,
            AnnNode::Cons(ann, rest) => {
                out.push(ann.clone());
                cur = Rc::clone(rest);
            }
        }
    }
    out
}

enum DocCmd<A> {
    Doc(Doc<A>),
    Dedent(String, i64),
    LeaveAnnotation(A, AnnStack<A>),
    LeaveFlexGroup,
}

impl<A: Clone> Clone for DocCmd<A> {
    fn clone(&self) -> Self {
        match self {
            DocCmd::Doc(d) => DocCmd::Doc(d.clone()),
            DocCmd::Dedent(s, i) => DocCmd::Dedent(s.clone(), *i),
            DocCmd::LeaveAnnotation(a, outer) => {
                DocCmd::LeaveAnnotation(a.clone(), Rc::clone(outer))
            }
            DocCmd::LeaveFlexGroup => DocCmd::LeaveFlexGroup,
        }
    }
}

enum StackNode<A> {
    Nil,
    Cons(DocCmd<A>, Stack<A>),
}

type Stack<A> = Rc<StackNode<A>>;

fn stack_nil<A>() -> Stack<A> {
    Rc::new(StackNode::Nil)
}

fn stack_push<A>(cmd: DocCmd<A>, rest: Stack<A>) -> Stack<A> {
    Rc::new(StackNode::Cons(cmd, rest))
}

/// The interpreter's saved state at the entry of the one active flex
/// group, including the continuation it should resume from on abort.
struct FlexGroupState<B, A> {
    position: Position,
    buffer: Buffer<B>,
    annotations: AnnStack<A>,
    indent: i64,
    indent_spaces: String,
    needs_indent: bool,
    continuation: Stack<A>,
}

struct DocState<B, A> {
    position: Position,
    buffer: Buffer<B>,
    annotations: AnnStack<A>,
    /// Pending indentation, applied lazily the next time text is
    /// written on a fresh line (spec §4.3).
    indent: i64,
    indent_spaces: String,
    /// Set by `Break`, cleared once a subsequent `Text` has either
    /// written its indentation prefix or observed there was none to
    /// write. A line that hasn't been started by a break -- including
    /// the very first line of the whole document -- never sets this,
    /// so wrapping the document's opening text in `Indent` does not
    /// indent it; only lines that actually begin after a break inside
    /// the indented scope do (spec §8.2 S3).
    needs_indent: bool,
    flex_group: Option<Box<FlexGroupState<B, A>>>,
}

/// Run the layout interpreter over `doc` with `printer`, returning the
/// printer's flushed result. Deterministic; no side effects beyond
/// whatever `printer`'s callbacks perform.
pub fn print<B, A, R>(printer: &impl Printer<B, A, R>, options: &PrintOptions, doc: Doc<A>) -> R
where
    B: Clone,
    A: Clone,
{
    let position = Position::new(options.page_width, options.ribbon_ratio);
    let mut state = DocState {
        position,
        buffer: Buffer::new(printer.empty_buffer()),
        annotations: ann_nil(),
        indent: 0,
        indent_spaces: String::new(),
        needs_indent: false,
        flex_group: None,
    };

    let mut stack: Stack<A> = stack_push(DocCmd::Doc(doc), stack_nil());

    loop {
        let (cmd, rest) = match &*stack {
            StackNode::Nil => break,
            StackNode::Cons(cmd, rest) => (cmd.clone(), Rc::clone(rest)),
        };

        stack = match cmd {
            DocCmd::Doc(d) => step_doc(printer, options, &mut state, d, rest),

            DocCmd::Dedent(spaces, indent) => {
                state.indent_spaces = spaces;
                state.indent = indent;
                rest
            }

            DocCmd::LeaveAnnotation(ann, outer) => {
                let remaining = ann_to_vec(&outer);
                state.annotations = outer;
                state
                    .buffer
                    .modify(|b| printer.leave_annotation(&ann, &remaining, b));
                rest
            }

            DocCmd::LeaveFlexGroup => {
                state.flex_group = None;
                state.buffer.commit();
                rest
            }
        };
    }

    printer.flush_buffer(state.buffer.get().clone())
}

fn step_doc<B, A, R>(
    printer: &impl Printer<B, A, R>,
    options: &PrintOptions,
    state: &mut DocState<B, A>,
    doc: Doc<A>,
    rest: Stack<A>,
) -> Stack<A>
where
    B: Clone,
    A: Clone,
{
    match &*doc.0 {
        DocRepr::Empty => rest,

        DocRepr::Text(len, s) => step_text(printer, options, state, *len, s, rest),

        DocRepr::Break => {
            if state.flex_group.is_some() {
                abort_flex_group(state)
            } else {
                state.buffer.modify(|b| printer.write_break(b));
                state.position.line += 1;
                state.position.column = 0;
                state.position.indent = state.indent;
                state.position.recompute_ribbon(options.ribbon_ratio);
                state.needs_indent = true;
                rest
            }
        }

        DocRepr::Append(a, b) => {
            let a = a.clone();
            let b = b.clone();
            let rest = stack_push(DocCmd::Doc(b), rest);
            stack_push(DocCmd::Doc(a), rest)
        }

        DocRepr::Indent(inner) => {
            let inner = inner.clone();
            if state.flex_group.is_some() {
                stack_push(DocCmd::Doc(inner), rest)
            } else {
                let saved_spaces = state.indent_spaces.clone();
                let saved_indent = state.indent;
                state.indent += options.indent_width;
                state.indent_spaces.push_str(&options.indent_unit);
                let rest = stack_push(DocCmd::Dedent(saved_spaces, saved_indent), rest);
                stack_push(DocCmd::Doc(inner), rest)
            }
        }

        DocRepr::Align(width, inner) => {
            let width = *width;
            let inner = inner.clone();
            if state.flex_group.is_some() {
                stack_push(DocCmd::Doc(inner), rest)
            } else {
                let saved_spaces = state.indent_spaces.clone();
                let saved_indent = state.indent;
                state.indent += width;
                state.indent_spaces.push_str(&" ".repeat(width as usize));
                let rest = stack_push(DocCmd::Dedent(saved_spaces, saved_indent), rest);
                stack_push(DocCmd::Doc(inner), rest)
            }
        }

        DocRepr::FlexGroup(inner) => {
            let inner = inner.clone();
            if state.flex_group.is_some() || state.position.ribbon_width == 0 {
                stack_push(DocCmd::Doc(inner), rest)
            } else {
                let continuation = stack_push(DocCmd::Doc(inner.clone()), Rc::clone(&rest));
                let snapshot = FlexGroupState {
                    position: state.position,
                    buffer: state.buffer.clone(),
                    annotations: Rc::clone(&state.annotations),
                    indent: state.indent,
                    indent_spaces: state.indent_spaces.clone(),
                    needs_indent: state.needs_indent,
                    continuation,
                };
                state.buffer.branch();
                state.flex_group = Some(Box::new(snapshot));
                let rest = stack_push(DocCmd::LeaveFlexGroup, rest);
                stack_push(DocCmd::Doc(inner), rest)
            }
        }

        DocRepr::FlexAlt(flex, default) => {
            if state.flex_group.is_some() {
                stack_push(DocCmd::Doc(flex.clone()), rest)
            } else {
                stack_push(DocCmd::Doc(default.clone()), rest)
            }
        }

        DocRepr::Annotate(ann, inner) => {
            let ann = ann.clone();
            let inner = inner.clone();
            let outer = Rc::clone(&state.annotations);
            let outer_vec = ann_to_vec(&outer);
            state
                .buffer
                .modify(|b| printer.enter_annotation(&ann, &outer_vec, b));
            state.annotations = ann_push(ann.clone(), Rc::clone(&outer));
            let rest = stack_push(DocCmd::LeaveAnnotation(ann, outer), rest);
            stack_push(DocCmd::Doc(inner), rest)
        }

        DocRepr::WithPosition(k) => {
            let k = Rc::clone(k);
            let pos = if state.position.column == 0 && state.needs_indent && state.indent > 0 {
                let mut virt = state.position;
                virt.column = state.indent;
                virt.indent = state.indent;
                virt.recompute_ribbon(options.ribbon_ratio);
                virt
            } else {
                state.position
            };
            let next = k(pos);
            stack_push(DocCmd::Doc(next), rest)
        }
    }
}

fn step_text<B, A, R>(
    printer: &impl Printer<B, A, R>,
    options: &PrintOptions,
    state: &mut DocState<B, A>,
    len: i64,
    s: &str,
    rest: Stack<A>,
) -> Stack<A>
where
    B: Clone,
    A: Clone,
{
    if state.position.column == 0 && state.needs_indent {
        if state.indent > 0 {
            state
                .buffer
                .modify(|b| printer.write_indent(state.indent, &state.indent_spaces, b));
            state.position.column = state.indent;
            state.position.indent = state.indent;
            state.position.recompute_ribbon(options.ribbon_ratio);
        }
        state.needs_indent = false;
    }

    let next_column = state.position.column + len;
    if state.flex_group.is_some() && next_column > state.position.indent + state.position.ribbon_width
    {
        return abort_flex_group(state);
    }

    state.buffer.modify(|b| printer.write_text(len, s, b));
    state.position.column = next_column;
    rest
}

/// Discard the active flex-group speculation: restore every saved
/// field from the snapshot (including the buffer, which drops
/// whatever the speculative slot accumulated) and resume from the
/// saved continuation rather than `rest`.
fn abort_flex_group<B, A>(state: &mut DocState<B, A>) -> Stack<A>
where
    B: Clone,
{
    let snapshot = state
        .flex_group
        .take()
        .expect("abort_flex_group called with no active flex group");
    state.position = snapshot.position;
    state.buffer = snapshot.buffer;
    state.annotations = snapshot.annotations;
    state.indent = snapshot.indent;
    state.indent_spaces = snapshot.indent_spaces;
    state.needs_indent = snapshot.needs_indent;
    snapshot.continuation
}
