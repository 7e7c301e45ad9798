//! Markdown document accumulator
//!
//! A document is a sequence of finished blocks plus one open block that
//! collects inline Markdown until something closes it.

use crate::list::MarkdownList;
use crate::{MarkdownError, Result};

/// Separator placed between finished blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

const MIN_FENCE_LEN: usize = 3;

/// Append-only Markdown document builder.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    blocks: Vec<String>,
    current: String,
}

impl MarkdownDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append inline Markdown to the open block without closing it.
    pub fn add_inline_markdown(&mut self, markdown: &str) {
        self.current.push_str(markdown);
    }

    /// Add an ATX header block (`# text`).
    pub fn add_header(&mut self, level: usize, text: &str) -> Result<()> {
        if !(1..=6).contains(&level) {
            return Err(MarkdownError::InvalidArgument(format!(
                "Header level must be an integer number in range 1..6, got {}",
                level
            )));
        }
        if text.trim().is_empty() {
            return Err(MarkdownError::InvalidArgument(
                "Header text cannot be empty".to_string(),
            ));
        }

        self.push_block(format!("{} {}", "#".repeat(level), text));
        Ok(())
    }

    /// Add a paragraph block.
    pub fn add_paragraph(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(MarkdownError::InvalidArgument(
                "Paragraph text cannot be empty".to_string(),
            ));
        }

        self.push_block(text.to_string());
        Ok(())
    }

    /// Add a pipe table. The first row is the header row.
    ///
    /// Cell contents are written as given; `|` inside a cell is not escaped.
    pub fn add_table<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<()> {
        if rows.len() < 2 {
            return Err(MarkdownError::InvalidArgument(format!(
                "Table must have a header row and at least one data row, got {} rows",
                rows.len()
            )));
        }
        let columns = rows[0].len();
        if columns == 0 {
            return Err(MarkdownError::InvalidArgument(
                "Table header row cannot be empty".to_string(),
            ));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(MarkdownError::InvalidArgument(format!(
                "Table row {} has {} columns, expected {}",
                index,
                row.len(),
                columns
            )));
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(table_row(&rows[0]));
        lines.push(format!("|{}", "---|".repeat(columns)));
        lines.extend(rows[1..].iter().map(|row| table_row(row)));

        self.push_block(lines.join("\n"));
        Ok(())
    }

    /// Add a rendered list block. An empty list adds nothing.
    pub fn add_list(&mut self, list: &MarkdownList) {
        self.push_block(list.to_markdown());
    }

    /// Add a fenced code block.
    ///
    /// The fence is always longer than any backtick run inside `code`.
    pub fn add_code(&mut self, language: &str, code: &str) -> Result<()> {
        if code.is_empty() {
            return Err(MarkdownError::InvalidArgument(
                "Code cannot be empty".to_string(),
            ));
        }

        let fence = code_fence(code);
        self.push_block(format!("{}{}\n{}\n{}", fence, language, code, fence));
        Ok(())
    }

    /// Close the open block. Closing an empty block does nothing.
    pub fn finish_block(&mut self) {
        if !self.current.is_empty() {
            self.blocks.push(std::mem::take(&mut self.current));
        }
    }

    /// Close the open block and join all blocks into the final document.
    pub fn to_markdown(&mut self) -> String {
        self.finish_block();
        self.blocks.join(BLOCK_SEPARATOR)
    }

    /// Finished blocks so far, not including the open one.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    fn push_block(&mut self, block: String) {
        self.finish_block();
        self.current = block;
        self.finish_block();
    }
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push_str(cell.as_ref());
        line.push('|');
    }
    line
}

/// Backtick fence safe to wrap `code`: one longer than its longest
/// backtick run, and never shorter than three.
pub fn code_fence(code: &str) -> String {
    let max_consecutive_backticks = code
        .chars()
        .fold((0, 0), |(max, current), c| {
            if c == '`' {
                (max.max(current + 1), current + 1)
            } else {
                (max, 0)
            }
        })
        .0;

    "`".repeat((max_consecutive_backticks + 1).max(MIN_FENCE_LEN))
}
