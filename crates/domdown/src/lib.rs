//! # domdown
//!
//! Convert HTML element trees to Markdown.
//!
//! ## Design
//!
//! The converter accepts an already parsed tree of [`Node`]s, so any HTML
//! parser (or a browser automation layer) can feed it. It understands a
//! fixed set of tags; anything else is recorded as a [`MarkupError`] and its
//! content is still converted, or, with
//! [`ConvertOptions::throw_on_error`], aborts the conversion.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use domdown::{Converter, Node};
//!
//! let mut converter = Converter::new();
//!
//! let p = Node::element("p")
//!     .with_child(Node::text("Hello "))
//!     .with_child(Node::element("strong").with_child(Node::text("World")));
//!
//! let markdown = converter.convert(&p).unwrap();
//! assert_eq!(markdown, "Hello **World**");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use domdown::Converter;
//!
//! let mut converter = Converter::new();
//! let markdown = converter.convert_html("<ul><li>A</li><li>B</li></ul>").unwrap();
//! assert_eq!(markdown, "* A\n* B");
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
pub mod scan;
mod service;
mod tag;

pub use convert::inline_text;
pub use domdown_core::MarkdownError;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Element, Node, NodeRef, NodeType};
pub use options::ConvertOptions;
pub use service::Converter;
pub use tag::Tag;

/// An unrecognized tag or a missing required attribute.
///
/// `node` is a snapshot of the offending subtree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}: {}", .node.outer_html())]
pub struct MarkupError {
    pub message: String,
    pub node: Node,
}

/// Error type for domdown operations
#[derive(Debug, thiserror::Error)]
pub enum DomdownError {
    /// A block could not be built: empty header text, malformed table,
    /// empty code block
    #[error(transparent)]
    Markdown(#[from] MarkdownError),

    /// Markup problem raised in fail-fast mode
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

pub type Result<T> = std::result::Result<T, DomdownError>;
