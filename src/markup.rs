// ABOUTME: Minimal typed HTML node tree used to build the exported bundle
// ABOUTME: Escaping happens in the serializer, so callers never escape by hand

/// Escape the five HTML-reserved characters for text and attribute contexts.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// Angle brackets only occur inside JSON string literals, where `<` and
/// `>` decode back to the same characters.
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            c => out.push(c),
        }
    }
    out
}

const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "input"];

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Escaped on output
    Text(String),
    /// Emitted verbatim; only for generator-owned CSS and script bodies
    Raw(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn style(self, value: impl Into<String>) -> Self {
        self.attr("style", value)
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(elements.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Raw(content.into()));
        self
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_to(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Raw(raw) => out.push_str(raw),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}
