//! HTML parsing support.
//!
//! This module parses HTML strings and converts them to the Node structure
//! used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into its top-level nodes.
///
/// Comments, doctypes and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use domdown::{parse_html, Converter};
///
/// let nodes = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let mut converter = Converter::new();
/// let markdown = converter.convert_nodes(&nodes).unwrap();
/// assert_eq!(markdown, "# Hello _World_");
/// ```
pub fn parse_html(html: &str) -> Vec<Node> {
    let document = Html::parse_fragment(html);
    convert_children(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);

    for child in convert_children(element) {
        node.add_child(child);
    }

    node
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => nodes.push(Node::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    nodes.push(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    nodes
}
