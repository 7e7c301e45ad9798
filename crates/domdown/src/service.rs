//! Converter - the main entry point for node tree to Markdown conversion.

use domdown_core::MarkdownDocument;

use crate::node::{Node, NodeRef};
use crate::options::ConvertOptions;
use crate::{DomdownError, MarkupError, Result};

/// Converts node trees to Markdown and collects markup problems on the way.
///
/// One instance can run any number of conversions one after another; the
/// error list keeps growing until it is drained with
/// [`Converter::take_errors`] or [`Converter::clear_errors`].
#[derive(Debug, Default)]
pub struct Converter {
    options: ConvertOptions,
    errors: Vec<MarkupError>,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    /// Convert a block-level subtree to a Markdown document
    pub fn convert(&mut self, node: &Node) -> Result<String> {
        log::debug!("converting <{}> to markdown", node.tag_name().unwrap_or("#text"));
        let mut document = MarkdownDocument::new();
        self.walk_block(NodeRef::new(node), &mut document)?;
        Ok(self.finish(document))
    }

    /// Convert a sequence of sibling subtrees to one Markdown document
    pub fn convert_nodes(&mut self, nodes: &[Node]) -> Result<String> {
        log::debug!("converting {} top-level nodes to markdown", nodes.len());
        let mut document = MarkdownDocument::new();
        self.walk_block_children(None, nodes, &mut document)?;
        Ok(self.finish(document))
    }

    /// Parse an HTML fragment and convert it to Markdown
    #[cfg(feature = "html")]
    pub fn convert_html(&mut self, html: &str) -> Result<String> {
        let nodes = crate::html::parse_html(html);
        self.convert_nodes(&nodes)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Markup problems recorded so far, in document order
    pub fn errors(&self) -> &[MarkupError] {
        &self.errors
    }

    /// Drain the recorded markup problems
    pub fn take_errors(&mut self) -> Vec<MarkupError> {
        std::mem::take(&mut self.errors)
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Record a markup problem, or fail with it in fail-fast mode
    pub(crate) fn report(&mut self, message: String, node: &Node) -> Result<()> {
        log::warn!("{}", message);
        let error = MarkupError {
            message,
            node: node.clone(),
        };
        if self.options.throw_on_error {
            return Err(DomdownError::Markup(error));
        }
        self.errors.push(error);
        Ok(())
    }

    fn finish(&self, mut document: MarkdownDocument) -> String {
        let markdown = document.to_markdown();
        log::debug!(
            "produced {} bytes of markdown, {} markup errors recorded",
            markdown.len(),
            self.errors.len()
        );
        markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_p(text: &str) -> Node {
        Node::element("p").with_child(Node::text(text))
    }

    fn unknown(tag: &str, text: &str) -> Node {
        Node::element(tag).with_child(Node::text(text))
    }

    #[test]
    fn test_simple_paragraph() {
        let mut converter = Converter::new();
        let result = converter.convert(&make_p("Hello World")).unwrap();
        assert_eq!(result, "Hello World");
        assert!(converter.errors().is_empty());
    }

    #[test]
    fn test_convert_nodes() {
        let mut converter = Converter::new();
        let nodes = vec![
            Node::text("lead "),
            Node::element("em").with_child(Node::text("in")),
            make_p("Body"),
            Node::text(" tail"),
        ];
        let result = converter.convert_nodes(&nodes).unwrap();
        assert_eq!(result, "lead _in_\n\nBody\n\ntail");
    }

    #[test]
    fn test_errors_accumulate_until_drained() {
        let mut converter = Converter::new();
        converter.convert(&unknown("section", "one")).unwrap();
        converter.convert(&unknown("aside", "two")).unwrap();
        assert_eq!(converter.errors().len(), 2);

        let errors = converter.take_errors();
        assert_eq!(errors[0].node.tag_name(), Some("section"));
        assert_eq!(errors[1].node.tag_name(), Some("aside"));
        assert!(converter.errors().is_empty());

        converter.convert(&unknown("nav", "three")).unwrap();
        converter.clear_errors();
        assert!(converter.errors().is_empty());
    }

    #[test]
    fn test_throw_on_error() {
        let options = ConvertOptions {
            throw_on_error: true,
        };
        let mut converter = Converter::with_options(options);
        let err = converter.convert(&unknown("section", "text")).unwrap_err();
        match err {
            DomdownError::Markup(error) => {
                assert_eq!(error.node.tag_name(), Some("section"));
                assert_eq!(error.to_string(), "Unexpected HTML tag \"section\": <section>text</section>");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(converter.errors().is_empty());
    }

    #[test]
    fn test_options_mut() {
        let mut converter = Converter::new();
        assert!(!converter.options().throw_on_error);
        converter.options_mut().throw_on_error = true;
        assert!(converter.convert(&unknown("section", "x")).is_err());
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html() {
        let mut converter = Converter::new();
        let result = converter
            .convert_html("<h1>Title</h1><p>Hello <strong>World</strong></p>")
            .unwrap();
        assert_eq!(result, "# Title\n\nHello **World**");
    }
}
