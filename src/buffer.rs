// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

/// A two-slot output accumulator: a committed side, and an optional
/// speculative fork used while a flex group is being attempted.
///
/// Writes go to the speculative slot when one is present, otherwise to
/// the committed slot. `Buffer` itself never rolls back a speculation;
/// the interpreter does that by discarding an entire `Buffer` value in
/// favor of an earlier snapshot (see `crate::layout`).
#[derive(Clone)]
pub struct Buffer<B> {
    // Always `Some` between calls; `Option` only exists so `modify`
    // can move the value out, feed it through `f`, and move it back.
    committed: Option<B>,
    speculative: Option<B>,
}

impl<B: Clone> Buffer<B> {
    pub fn new(empty: B) -> Buffer<B> {
        Buffer {
            committed: Some(empty),
            speculative: None,
        }
    }

    /// Apply `f` to the active slot (speculative if branched, else
    /// committed).
    pub fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(B) -> B,
    {
        if let Some(b) = self.speculative.take() {
            self.speculative = Some(f(b));
        } else {
            let b = self.committed.take().expect("committed slot always present");
            self.committed = Some(f(b));
        }
    }

    /// Begin speculation: fork the active slot's current value into a
    /// fresh speculative slot.
    pub fn branch(&mut self) {
        self.speculative = Some(self.get().clone());
    }

    /// Accept the speculative slot as committed, dropping the fork.
    pub fn commit(&mut self) {
        if let Some(b) = self.speculative.take() {
            self.committed = Some(b);
        }
    }

    /// The active slot's current value.
    pub fn get(&self) -> &B {
        self.speculative
            .as_ref()
            .or(self.committed.as_ref())
            .expect("committed slot always present")
    }
}
