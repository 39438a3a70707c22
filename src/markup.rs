//! Minimal markup tree handed to the hosting render pipeline.
//!
//! This is the crate's only wire format: an owned tree of elements and text
//! nodes with ordered attributes, serialized to HTML on demand. Structural
//! equality is derived so rendered output can be compared without going
//! through strings first.

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link", "input", "source"];

/// A node in the markup tree: either a nested element or escaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One markup element with ordered attributes and children.
///
/// Attribute order is insertion order, so serialization is deterministic.
/// Builder methods consume and return `self` to keep construction terse:
///
/// ```
/// use mobility_gallery::markup::Element;
///
/// let el = Element::new("p").class("caption").text("hello");
/// assert_eq!(el.to_html(), r#"<p class="caption">hello</p>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. A repeated name overwrites the earlier value in place
    /// so the serialized output never carries duplicate attributes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| n.as_str() == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
        self
    }

    /// Add class tokens, appending to any classes already present.
    pub fn class(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| n.as_str() == "class") {
            existing.1.push(' ');
            existing.1.push_str(&value);
            self
        } else {
            self.attrs.push(("class".to_string(), value));
            self
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Serialize the subtree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => escape_into(out, text, false),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escape text for HTML output; `quote` additionally escapes `"` for
/// attribute-value position.
fn escape_into(out: &mut String, text: &str, quote: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_serialize_in_order() {
        let el = Element::new("section")
            .class("grid")
            .child(Element::new("article").text("one"))
            .child(Element::new("article").text("two"));
        assert_eq!(
            el.to_html(),
            r#"<section class="grid"><article>one</article><article>two</article></section>"#
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("p")
            .attr("title", r#"a "quoted" & <tagged> value"#)
            .text("5 < 6 & 7 > 2");
        assert_eq!(
            el.to_html(),
            r#"<p title="a &quot;quoted&quot; &amp; &lt;tagged&gt; value">5 &lt; 6 &amp; 7 &gt; 2</p>"#
        );
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "x.jpg").attr("alt", "x");
        assert_eq!(el.to_html(), r#"<img src="x.jpg" alt="x">"#);
    }

    #[test]
    fn class_appends_and_attr_overwrites() {
        let el = Element::new("div").class("frame").class("vertical");
        assert_eq!(el.to_html(), r#"<div class="frame vertical"></div>"#);

        let el = Element::new("img").attr("loading", "lazy").attr("loading", "eager");
        assert_eq!(el.to_html(), r#"<img loading="eager">"#);
    }

    #[test]
    fn identical_trees_compare_equal() {
        let a = Element::new("div").class("frame").text("x");
        let b = Element::new("div").class("frame").text("x");
        assert_eq!(a, b);
        assert_ne!(a, Element::new("div").class("frame").text("y"));
    }
}
