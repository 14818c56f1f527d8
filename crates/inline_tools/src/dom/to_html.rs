// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serialization of the document tree to HTML.
//!
//! The root container itself is not rendered; the output is the block's
//! inner markup, which is what the host editor re-reads into its own
//! document model.

use crate::dom::{Dom, NodeId, NodeKind};

impl Dom {
    /// Inner HTML of the whole document.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for &child in self.children(self.root()) {
            serialize(self, child, &mut html);
        }
        html
    }

    /// Markup of a single node, including the node itself.
    pub fn node_html(&self, id: NodeId) -> String {
        let mut html = String::new();
        serialize(self, id, &mut html);
        html
    }
}

fn serialize(dom: &Dom, id: NodeId, out: &mut String) {
    match dom.kind(id) {
        NodeKind::Text(text) => {
            out.push_str(&html_escape::encode_text(text));
        }
        NodeKind::Element(data) => {
            out.push('<');
            out.push_str(&data.tag);
            if !data.classes.is_empty() {
                out.push_str(&format!(
                    " class=\"{}\"",
                    html_escape::encode_double_quoted_attribute(
                        &data.classes.join(" ")
                    )
                ));
            }
            if !data.styles.is_empty() {
                let style: Vec<String> = data
                    .styles
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect();
                out.push_str(&format!(
                    " style=\"{}\"",
                    html_escape::encode_double_quoted_attribute(
                        &style.join("; ")
                    )
                ));
            }
            for (name, value) in &data.attrs {
                out.push_str(&format!(
                    " {name}=\"{}\"",
                    html_escape::encode_double_quoted_attribute(value)
                ));
            }
            out.push('>');
            for &child in dom.children(id) {
                serialize(dom, child, out);
            }
            out.push_str(&format!("</{}>", data.tag));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Dom, ElementData};

    #[test]
    fn empty_document_produces_empty_html() {
        let dom = Dom::new();
        assert_eq!(dom.to_html(), "");
    }

    #[test]
    fn plain_text_round_trips() {
        let mut dom = Dom::new();
        let text = dom.create_text("hello world");
        dom.append_child(dom.root(), text).expect("append");
        assert_eq!(dom.to_html(), "hello world");
    }

    #[test]
    fn special_characters_are_escaped() {
        let mut dom = Dom::new();
        let text = dom.create_text("<script>alert('xss')</script>");
        dom.append_child(dom.root(), text).expect("append");
        let html = dom.to_html();
        assert!(!html.contains("<script>"), "should escape HTML: {html}");
        assert!(html.contains("&lt;"), "expected &lt; in: {html}");
    }

    #[test]
    fn bold_element_renders_its_tag() {
        let mut dom = Dom::new();
        let bold = dom.create_element(ElementData::new("b"));
        let inner = dom.create_text("bold");
        dom.append_child(dom.root(), bold).expect("append");
        dom.append_child(bold, inner).expect("append");
        assert_eq!(dom.to_html(), "<b>bold</b>");
    }

    #[test]
    fn colored_span_renders_class_and_style() {
        let mut dom = Dom::new();
        let span = dom.create_element(
            ElementData::new("span")
                .with_class("colored-text")
                .with_style("color", "#FF0000"),
        );
        let inner = dom.create_text("Hello");
        dom.append_child(dom.root(), span).expect("append");
        dom.append_child(span, inner).expect("append");
        assert_eq!(
            dom.to_html(),
            "<span class=\"colored-text\" style=\"color: #FF0000\">Hello</span>"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut dom = Dom::new();
        let mut data = ElementData::new("span");
        data.attrs.push(("title".to_string(), "a\"b".to_string()));
        let span = dom.create_element(data);
        dom.append_child(dom.root(), span).expect("append");
        let html = dom.to_html();
        assert!(
            html.contains("title=\"a&quot;b\""),
            "expected escaped quote in: {html}"
        );
    }

    #[test]
    fn nested_markup_serializes_in_document_order() {
        let mut dom = Dom::new();
        let root = dom.root();
        let a = dom.create_text("a");
        let bold = dom.create_element(ElementData::new("b"));
        let italic = dom.create_element(ElementData::new("i"));
        let inner = dom.create_text("x");
        let z = dom.create_text("z");
        dom.append_child(root, a).expect("append");
        dom.append_child(root, bold).expect("append");
        dom.append_child(bold, italic).expect("append");
        dom.append_child(italic, inner).expect("append");
        dom.append_child(root, z).expect("append");
        assert_eq!(dom.to_html(), "a<b><i>x</i></b>z");
    }
}
