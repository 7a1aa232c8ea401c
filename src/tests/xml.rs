// Copyright 2025 Cameron Swords
// SPDX-License-Identifier: Apache-2.0

use crate::*;

// -------------------------------------------------------------------------------------------------
// XML AST a la Wadler
// -------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XML {
    Element {
        name: String,
        attrs: Vec<Attribute>,
        body: Vec<XML>,
    },
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl XML {
    pub fn text<S: Into<String>>(s: S) -> Self {
        XML::Text(s.into())
    }

    pub fn element<N: Into<String>>(name: N, attrs: Vec<Attribute>, body: Vec<XML>) -> Self {
        XML::Element {
            name: name.into(),
            attrs,
            body,
        }
    }

    /// Convenience: `XML::elem("a", vec![("href","/")], vec![XML::text("home")])`.
    pub fn elem(name: &str, attrs: Vec<(&str, &str)>, body: Vec<XML>) -> Self {
        let attrs = attrs
            .into_iter()
            .map(|(n, v)| Attribute::new(n, v))
            .collect();
        XML::Element {
            name: name.into(),
            attrs,
            body,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// XML to Doc
// -------------------------------------------------------------------------------------------------

/// Render an `XML` tree to a `Doc`.
///
/// An element with only text children (directly) is laid out inline
/// with no separator, since the caller's text already carries whatever
/// whitespace it wants. An element with only element children is
/// wrapped in a single `flex_group`: either every child sits on one
/// line separated by spaces, or (if that doesn't fit) the whole group
/// aborts and every child lands on its own indented line. There is no
/// per-child fallback -- the flex-group contract is all-or-nothing for
/// whatever sits inside it.
pub fn xml_doc_pretty(x: &XML) -> Doc<()> {
    match x {
        XML::Text(s) => Doc::text(escape_text(s)),

        XML::Element { name, attrs, body } => {
            let open_head = Doc::text("<")
                .append(Doc::text(name.clone()))
                .append(attrs_doc(attrs));

            if body.is_empty() {
                return open_head.append_space(Doc::text("/>"));
            }

            let open = open_head.append(Doc::text(">"));
            let close = Doc::text("</")
                .append(Doc::text(name.clone()))
                .append(Doc::text(">"));

            if body.iter().any(|child| matches!(child, XML::Text(_))) {
                let inline = body
                    .iter()
                    .map(xml_doc_pretty)
                    .fold(Doc::empty(), Doc::append);
                return open.append(inline).append(close);
            }

            let mut children = body.iter().map(xml_doc_pretty);
            let kids = match children.next() {
                None => Doc::empty(),
                Some(first) => children.fold(first, |a, b| a.append(Doc::space_break()).append(b)),
            };

            open.append(Doc::soft_break())
                .append(kids.indent())
                .append(Doc::soft_break())
                .append(close)
                .flex_group()
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Attributes
// -------------------------------------------------------------------------------------------------

fn attrs_doc(attrs: &[Attribute]) -> Doc<()> {
    if attrs.is_empty() {
        return Doc::empty();
    }
    let parts = attrs.iter().map(|a| {
        Doc::text(a.name.clone())
            .append(Doc::text("=\""))
            .append(Doc::text(escape_attr(&a.value)))
            .append(Doc::text("\""))
    });
    Doc::text(" ").append(Doc::words(parts))
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn render(d: Doc<()>, page_width: i64) -> String {
        d.render(&PrintOptions::new(page_width, 1.0, "    ", 4))
    }

    #[test]
    fn t1_simple_text() {
        let xml = XML::elem("p", vec![], vec![XML::text("Hello")]);
        assert_eq!(render(xml_doc_pretty(&xml), 120), "<p>Hello</p>");
        assert_eq!(render(xml_doc_pretty(&xml), 20), "<p>Hello</p>");
    }

    #[test]
    fn t2_attrs_and_nested() {
        let xml = XML::elem(
            "a",
            vec![("href", "/docs")],
            vec![XML::elem("b", vec![], vec![XML::text("click")])],
        );
        assert_eq!(
            render(xml_doc_pretty(&xml), 120),
            "<a href=\"/docs\"><b>click</b></a>"
        );
        assert_eq!(
            render(xml_doc_pretty(&xml), 12),
            "<a href=\"/docs\">\n    <b>click</b>\n</a>"
        );
    }

    #[test]
    fn t3_self_closing() {
        let xml = XML::element(
            "img".to_string(),
            vec![Attribute::new("src", "logo.png")],
            vec![],
        );
        let expected = "<img src=\"logo.png\" />";
        assert_eq!(render(xml_doc_pretty(&xml), 120), expected);
        assert_eq!(render(xml_doc_pretty(&xml), 10), expected);
    }

    #[test]
    fn t4_escaping() {
        let xml = XML::elem(
            "msg",
            vec![("title", r#"He said "hi" & left <quickly>"#)],
            vec![XML::text("5 < 7 & 9 > 3")],
        );
        let expected =
            "<msg title=\"He said &quot;hi&quot; &amp; left <quickly>\">5 &lt; 7 &amp; 9 &gt; 3</msg>";
        assert_eq!(render(xml_doc_pretty(&xml), 120), expected);
        assert_eq!(render(xml_doc_pretty(&xml), 40), expected);
    }

    #[test]
    fn t5_mixed_inline() {
        let xml = XML::elem(
            "p",
            vec![],
            vec![
                XML::text("Hello "),
                XML::elem("em", vec![], vec![XML::text("world")]),
                XML::text("!"),
            ],
        );
        let expected = "<p>Hello <em>world</em>!</p>";
        assert_eq!(render(xml_doc_pretty(&xml), 120), expected);
        assert_eq!(render(xml_doc_pretty(&xml), 8), expected);
    }

    #[test]
    fn t6_block_children_break() {
        let li = |s| XML::elem("li", vec![], vec![XML::text(s)]);
        let xml = XML::elem("ul", vec![], vec![li("one"), li("two"), li("three")]);
        let flat = "<ul><li>one</li> <li>two</li> <li>three</li></ul>";
        assert_eq!(render(xml_doc_pretty(&xml), 120), flat);
        assert_eq!(render(xml_doc_pretty(&xml), 60), flat);
        assert_eq!(
            render(xml_doc_pretty(&xml), 6),
            "<ul>\n    <li>one</li>\n    <li>two</li>\n    <li>three</li>\n</ul>"
        );
    }

    #[test]
    fn t7_block_children_break() {
        let li = |s| XML::elem("li", vec![], vec![XML::text(s)]);
        let xml = XML::elem(
            "ul",
            vec![],
            vec![li("one"), li("two"), li("three"), li("four"), li("five")],
        );
        let flat =
            "<ul><li>one</li> <li>two</li> <li>three</li> <li>four</li> <li>five</li></ul>";
        assert_eq!(render(xml_doc_pretty(&xml), 120), flat);
        assert_eq!(render(xml_doc_pretty(&xml), 90), flat);
        assert_eq!(
            render(xml_doc_pretty(&xml), 6),
            "<ul>\n    <li>one</li>\n    <li>two</li>\n    <li>three</li>\n    <li>four</li>\n    <li>five</li>\n</ul>"
        );
    }
}
