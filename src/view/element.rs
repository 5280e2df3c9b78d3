//! Element tree and HTML serialization

use std::borrow::Cow;

/// Escape HTML special characters.
///
/// Borrows when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\'']) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

/// A node in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),
    /// A text node
    Text(Cow<'static, str>),
    /// Children without a wrapper element
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(text.into())
    }

    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.write_html(&mut output);
        output
    }

    fn write_html(&self, output: &mut String) {
        match self {
            Node::Element(el) => {
                output.push('<');
                output.push_str(&el.tag);

                for (name, value) in &el.attrs {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&html_escape(value));
                    output.push('"');
                }

                output.push('>');
                for child in &el.children {
                    child.write_html(output);
                }
                output.push_str("</");
                output.push_str(&el.tag);
                output.push('>');
            }
            Node::Text(text) => output.push_str(&html_escape(text)),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(output);
                }
            }
        }
    }

    /// Concatenated text content, unescaped
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.write_text(&mut output);
        output
    }

    fn write_text(&self, output: &mut String) {
        match self {
            Node::Element(el) => el.children.iter().for_each(|c| c.write_text(output)),
            Node::Text(text) => output.push_str(text),
            Node::Fragment(children) => children.iter().for_each(|c| c.write_text(output)),
        }
    }

    /// First element (depth-first) matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Node::Element(el) => {
                if predicate(el) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find(predicate))
            }
            Node::Text(_) => None,
            Node::Fragment(children) => children.iter().find_map(|c| c.find(predicate)),
        }
    }

    /// First element carrying `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.find(&|el| el.has_class(class))
    }

    /// First element whose `name` attribute equals `value`
    pub fn find_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(&|el| el.attr_value(name) == Some(value))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&'static str> for Node {
    fn from(text: &'static str) -> Self {
        Node::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(Cow::Owned(text))
    }
}

/// An element in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a child node
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Whether the `class` attribute lists `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text content of the children
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
