// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

/// A snapshot of where the interpreter is on the page.
///
/// `indent` is the indentation level at which the *current* line's
/// content began, which may lag behind a pending indent that hasn't
/// been written yet (see `DocState::pending_indent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: i64,
    pub column: i64,
    pub indent: i64,
    pub page_width: i64,
    pub ribbon_width: i64,
}

impl Position {
    pub(crate) fn new(page_width: i64, ribbon_ratio: f64) -> Position {
        let mut pos = Position {
            line: 0,
            column: 0,
            indent: 0,
            page_width,
            ribbon_width: 0,
        };
        pos.ribbon_width = ribbon_width_for(page_width, 0, ribbon_ratio);
        pos
    }

    pub(crate) fn recompute_ribbon(&mut self, ribbon_ratio: f64) {
        self.ribbon_width = ribbon_width_for(self.page_width, self.indent, ribbon_ratio);
    }
}

/// `ribbonWidth = ceil(ribbonRatio * available)`, `available = pageWidth -
/// indent` clamped to `[0, pageWidth]`; `ribbonRatio` clamped to `[0,1]`.
pub(crate) fn ribbon_width_for(page_width: i64, indent: i64, ribbon_ratio: f64) -> i64 {
    let ratio = ribbon_ratio.clamp(0.0, 1.0);
    let available = (page_width - indent).clamp(0, page_width);
    (ratio * available as f64).ceil() as i64
}
