// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

/// Configuration for `print`/`Doc::render`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Target max columns per line (soft target).
    pub page_width: i64,
    /// In `[0,1]`; fraction of `page_width - indent` usable before
    /// overflow triggers a flex-group abort.
    pub ribbon_ratio: f64,
    /// String prepended per indent level.
    pub indent_unit: String,
    /// Assumed column width of one `indent_unit`.
    pub indent_width: i64,
}

impl PrintOptions {
    /// `ribbon_ratio` is clamped to `[0,1]` eagerly, per spec §7.
    pub fn new(
        page_width: i64,
        ribbon_ratio: f64,
        indent_unit: impl Into<String>,
        indent_width: i64,
    ) -> PrintOptions {
        PrintOptions {
            page_width,
            ribbon_ratio: ribbon_ratio.clamp(0.0, 1.0),
            indent_unit: indent_unit.into(),
            indent_width,
        }
    }

    /// Two-space indentation, page width 80, full ribbon.
    pub fn two_space() -> PrintOptions {
        crate::printers::plain::TWO_SPACE.clone()
    }

    /// Four-space indentation, page width 120, full ribbon.
    pub fn four_space() -> PrintOptions {
        crate::printers::plain::FOUR_SPACE.clone()
    }

    /// Tab indentation (width 4), page width 120, full ribbon.
    pub fn tabs() -> PrintOptions {
        crate::printers::plain::TABS.clone()
    }
}
