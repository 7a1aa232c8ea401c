// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

use insta::assert_snapshot;

use crate::*;

#[test]
fn column() {
    let doc: Doc<()> = Doc::text("prefix").append_space(Doc::with_position(|p| {
        Doc::text("col=").append(Doc::text(format!("{}", p.column)))
    }));
    let doc = Doc::lines([0i64, 4, 8].into_iter().map(|n| doc.clone().align(n)));
    let rendered = doc.render(&PrintOptions::new(40, 1.0, "  ", 2));
    assert_snapshot!(rendered, @"prefix col=7\n    prefix col=11\n        prefix col=15");
}

#[test]
fn nesting() {
    let doc: Doc<()> = Doc::text("prefix").append_space(Doc::with_position(|p| {
        Doc::text("Nested:")
            .append_space(Doc::text(format!("{}", p.indent)))
            .brackets()
    }));
    let doc = Doc::lines([0i64, 4, 8].into_iter().map(|n| doc.clone().align(n)));
    let rendered = doc.render(&PrintOptions::new(40, 1.0, "  ", 2));
    assert_snapshot!(
        rendered,
        @"prefix [Nested: 0]\n    prefix [Nested: 4]\n        prefix [Nested: 8]"
    );
}
