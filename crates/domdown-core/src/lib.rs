//! domdown-core - Markdown serialization primitives
//!
//! This crate provides the building blocks used by `domdown` to assemble a
//! Markdown document. It knows nothing about HTML: callers hand it already
//! rendered fragments and it owns the block-level syntax rules.
//!
//! # Architecture
//!
//! ```text
//! inline fragments ──join_inline_markdown──▶ ┌──────────────────┐
//!                                            │                  │
//! MarkdownList ─────────────────────────────▶│ MarkdownDocument │ ──▶ Markdown String
//!                                            │                  │
//! headers / tables / code ──────────────────▶└──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use domdown_core::{ItemList, MarkdownDocument, MarkdownList};
//!
//! let mut document = MarkdownDocument::new();
//! document.add_header(1, "Colors").unwrap();
//!
//! let mut colors = ItemList::new();
//! colors.add("Red", None);
//! colors.add("Green", None);
//! document.add_list(&MarkdownList::Unordered(colors));
//!
//! assert_eq!(document.to_markdown(), "# Colors\n\n* Red\n* Green");
//! ```

mod document;
mod list;
mod text;

pub use document::{code_fence, MarkdownDocument, BLOCK_SEPARATOR};
pub use list::{DefinitionList, ItemList, ListItem, MarkdownList};
pub use text::{clean_inline_text, escape_markdown, join_inline_markdown, join_inline_text};

/// Error type for Markdown block construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
