//! DOM node structure for HTML to Markdown conversion.
//!
//! Any HTML parser can convert its output to this structure: a node is
//! either a text leaf or an element with a tag name, attributes and ordered
//! children. The converter only ever reads it.

use indexmap::IndexMap;

/// The two kinds of node the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
}

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text leaf, content as it appeared in the source
    Text(String),
    /// Tagged element
    Element(Element),
}

/// An element: lowercase tag name, attributes in source order, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag: tag_name.to_ascii_lowercase(),
            ..Default::default()
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag: tag_name.to_ascii_lowercase(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type() == NodeType::Text
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name (lowercase), `None` for text nodes
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Get an attribute value by name. Names are matched exactly.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attributes.get(name).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Tokens of the `class` attribute
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Child nodes; always empty for text nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().iter().filter(|n| n.is_element())
    }

    /// Add a child node. Text nodes cannot have children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(|child| child.text_content())
                .collect(),
        }
    }

    /// Reconstruct outer HTML (for diagnostics)
    pub fn outer_html(&self) -> String {
        match self {
            Node::Text(text) => escape_html_text(text),
            Node::Element(element) => {
                let tag = &element.tag;
                let attrs = attributes_string(&element.attributes);
                let open = if attrs.is_empty() {
                    format!("<{}>", tag)
                } else {
                    format!("<{} {}>", tag, attrs)
                };

                if is_void_element(tag) {
                    open
                } else {
                    format!("{}{}</{}>", open, self.inner_html(), tag)
                }
            }
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children()
            .iter()
            .map(|child| child.outer_html())
            .collect()
    }
}

/// Get attributes as a string for HTML output
fn attributes_string(attributes: &IndexMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(name, value)| {
            if value.is_empty() {
                name.clone()
            } else {
                format!("{}=\"{}\"", name, escape_html_attr(value))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_void_element(tag: &str) -> bool {
    const VOID_ELEMENTS: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ];
    VOID_ELEMENTS.contains(&tag)
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    escape_html_text(s).replace('"', "&quot;")
}

fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A reference to a node with parent context.
/// This allows navigation up the tree without storing parent pointers.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent: Option<&'a NodeRef<'a>>,
}

impl<'a> NodeRef<'a> {
    /// Create a new NodeRef without parent context
    pub fn new(node: &'a Node) -> Self {
        Self { node, parent: None }
    }

    /// Reference to `child`, which must be one of this node's children
    pub fn child(&'a self, child: &'a Node) -> NodeRef<'a> {
        NodeRef {
            node: child,
            parent: Some(self),
        }
    }

    pub fn parent(&self) -> Option<&'a Node> {
        self.parent.map(|p| p.node)
    }

    /// Enclosing nodes, innermost first
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Node> + 'a {
        std::iter::successors(self.parent, |p| p.parent).map(|p| p.node)
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.tag_name()
    }
}
