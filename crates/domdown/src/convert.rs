//! Convert a node tree to Markdown
//!
//! The block walk flattens containers into a stream of Markdown blocks and
//! hands runs of inline siblings to the inline walk, which renders them to a
//! single inline string.

use domdown_core::{
    clean_inline_text, join_inline_markdown, join_inline_text, DefinitionList, ItemList,
    MarkdownDocument, MarkdownList,
};

use crate::node::{Node, NodeRef};
use crate::scan;
use crate::service::Converter;
use crate::tag::Tag;
use crate::Result;

const LANGUAGE_PREFIX: &str = "language-";

impl Converter {
    /// Render one node as inline Markdown
    pub fn inline_markdown(&mut self, node: &Node) -> Result<String> {
        self.nodes_inline_markdown(std::iter::once(node))
    }

    /// Render the children of a block element as one inline string
    pub fn block_inline_markdown(&mut self, block: &Node) -> Result<String> {
        self.nodes_inline_markdown(block.children())
    }

    /// Render a run of sibling nodes as one inline string
    pub fn nodes_inline_markdown<'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n Node>,
    ) -> Result<String> {
        let mut chunks = Vec::new();
        for node in nodes {
            self.walk_inline(node, &mut chunks)?;
        }
        Ok(join_inline_markdown(&chunks))
    }

    pub(crate) fn walk_block(
        &mut self,
        node: NodeRef<'_>,
        document: &mut MarkdownDocument,
    ) -> Result<()> {
        let Node::Element(element) = node.node else {
            return self.add_inline_run(&[node.node], document);
        };

        let tag = Tag::parse(&element.tag);
        if tag.is_inline() {
            return self.add_inline_run(&[node.node], document);
        }
        log::trace!("block <{}>", element.tag);

        match tag {
            Tag::Container => self.walk_container(&node, document)?,

            Tag::Heading(level) => {
                let text = self.block_inline_markdown(node.node)?;
                document.add_header(level, &text)?;
            }

            Tag::Table => {
                let rows = self.table_contents(node.node)?;
                document.add_table(&rows)?;
            }

            Tag::UnorderedList | Tag::OrderedList | Tag::DefinitionList => {
                let list = self.markdown_list(node.node)?;
                document.add_list(&list);
            }

            Tag::Pre => {
                let language = preformatted_language(&node);
                let code = preformatted_code(node.node);
                document.add_code(&language, &code)?;
            }

            _ => {
                self.report(format!("Unexpected HTML tag \"{}\"", element.tag), node.node)?;
                self.walk_container(&node, document)?;
            }
        }

        Ok(())
    }

    /// Walk children at block level, grouping inline siblings into runs.
    pub(crate) fn walk_block_children(
        &mut self,
        parent: Option<&NodeRef<'_>>,
        children: &[Node],
        document: &mut MarkdownDocument,
    ) -> Result<()> {
        let mut run: Vec<&Node> = Vec::new();

        for child in children {
            if is_inline_content(child) {
                run.push(child);
                continue;
            }

            self.add_inline_run(&run, document)?;
            run.clear();

            let child = match parent {
                Some(parent) => parent.child(child),
                None => NodeRef::new(child),
            };
            self.walk_block(child, document)?;
        }

        self.add_inline_run(&run, document)
    }

    fn walk_container(
        &mut self,
        node: &NodeRef<'_>,
        document: &mut MarkdownDocument,
    ) -> Result<()> {
        document.finish_block();
        self.walk_block_children(Some(node), node.node.children(), document)?;
        document.finish_block();
        Ok(())
    }

    fn add_inline_run(&mut self, run: &[&Node], document: &mut MarkdownDocument) -> Result<()> {
        if run.is_empty() {
            return Ok(());
        }
        let markdown = self.nodes_inline_markdown(run.iter().copied())?;
        document.add_inline_markdown(&markdown);
        Ok(())
    }

    fn walk_inline(&mut self, node: &Node, chunks: &mut Vec<String>) -> Result<()> {
        let element = match node {
            Node::Text(text) => {
                chunks.push(clean_inline_text(text));
                return Ok(());
            }
            Node::Element(element) => element,
        };

        let tag = Tag::parse(&element.tag);
        if let Some((open, close)) = tag.wrapper() {
            let text = inline_text(node);
            if !text.is_empty() {
                chunks.push(format!("{}{}{}", open, text, close));
            }
            return Ok(());
        }

        match tag {
            Tag::Image => {
                if let Some(markdown) = self.image_markdown(node)? {
                    chunks.push(markdown);
                }
            }
            Tag::Link => {
                if let Some(markdown) = self.link_markdown(node)? {
                    chunks.push(markdown);
                }
            }
            Tag::Span => {
                for child in node.children() {
                    self.walk_inline(child, chunks)?;
                }
            }
            _ => {
                self.report(
                    format!("Unexpected inline HTML tag \"{}\"", element.tag),
                    node,
                )?;
                for child in node.children() {
                    self.walk_inline(child, chunks)?;
                }
            }
        }

        Ok(())
    }

    fn image_markdown(&mut self, node: &Node) -> Result<Option<String>> {
        let Some(src) = non_empty_attr(node, "src") else {
            self.report("Image has no \"src\" attribute".to_string(), node)?;
            return Ok(None);
        };
        let alt = node.attr("alt").unwrap_or("");

        Ok(Some(match non_empty_attr(node, "title") {
            Some(title) => format!("![{}]({} \"{}\")", alt, src, title),
            None => format!("![{}]({})", alt, src),
        }))
    }

    fn link_markdown(&mut self, node: &Node) -> Result<Option<String>> {
        let Some(href) = non_empty_attr(node, "href") else {
            self.report("Hyperlink has no \"href\" attribute".to_string(), node)?;
            return Ok(None);
        };
        let text = inline_text(node);

        Ok(Some(match non_empty_attr(node, "title") {
            Some(title) => format!("[{}]({} \"{}\")", text, href, title),
            None => format!("[{}]({})", text, href),
        }))
    }

    fn markdown_list(&mut self, list: &Node) -> Result<MarkdownList> {
        let tag = list.tag_name().map(Tag::parse);

        if tag == Some(Tag::DefinitionList) {
            let mut definitions = DefinitionList::new();
            for entry in scan::definitions(list) {
                let term = self.block_inline_markdown(entry.term)?;
                let descriptions = entry
                    .definitions
                    .iter()
                    .map(|dd| self.block_inline_markdown(dd))
                    .collect::<Result<Vec<_>>>()?;
                definitions.add(term, descriptions);
            }
            return Ok(MarkdownList::Definition(definitions));
        }

        let mut items = ItemList::new();
        for li in scan::list_items(list) {
            let (own, nested) = scan::split_list_item(li);
            let label = self.nodes_inline_markdown(own)?;
            let nested = nested.map(|n| self.markdown_list(n)).transpose()?;
            items.add(label, nested);
        }

        Ok(if tag == Some(Tag::OrderedList) {
            MarkdownList::Ordered(items)
        } else {
            MarkdownList::Unordered(items)
        })
    }

    fn table_contents(&mut self, table: &Node) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();
        for tr in scan::table_rows(table) {
            let row = scan::table_cells(tr)
                .map(|cell| self.block_inline_markdown(cell))
                .collect::<Result<Vec<_>>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}

/// Flatten a subtree to plain text, dropping all markup
pub fn inline_text(node: &Node) -> String {
    let mut chunks = Vec::new();
    collect_text(node, &mut chunks);
    join_inline_text(&chunks)
}

fn collect_text(node: &Node, chunks: &mut Vec<String>) {
    match node {
        Node::Text(text) => chunks.push(clean_inline_text(text)),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, chunks);
            }
        }
    }
}

fn is_inline_content(node: &Node) -> bool {
    match node.tag_name() {
        None => true,
        Some(tag) => Tag::parse(tag).is_inline(),
    }
}

fn non_empty_attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.attr(name).filter(|value| !value.is_empty())
}

fn language_from_class(node: &Node) -> Option<&str> {
    node.class_list()
        .find_map(|class| class.strip_prefix(LANGUAGE_PREFIX))
        .filter(|language| !language.is_empty())
}

/// Language of a `<pre>` block from `language-*` classes on the block,
/// on its only child element, or on enclosing `<div>`s.
fn preformatted_language(pre: &NodeRef<'_>) -> String {
    if let Some(language) = language_from_class(pre.node) {
        return language.to_string();
    }
    if let [only @ Node::Element(_)] = pre.node.children() {
        if let Some(language) = language_from_class(only) {
            return language.to_string();
        }
    }
    pre.ancestors()
        .take_while(|ancestor| ancestor.tag_name() == Some("div"))
        .find_map(language_from_class)
        .unwrap_or_default()
        .to_string()
}

/// Literal text of a `<pre>` block, with `<br>` as a newline and one
/// leading and one trailing newline removed.
fn preformatted_code(pre: &Node) -> String {
    let mut code = String::new();
    collect_code(pre, &mut code);

    let code = code.strip_prefix('\n').unwrap_or(&code);
    let code = code.strip_suffix('\n').unwrap_or(code);
    code.to_string()
}

fn collect_code(node: &Node, code: &mut String) {
    match node {
        Node::Text(text) => code.push_str(text),
        Node::Element(element) if Tag::parse(&element.tag) == Tag::LineBreak => code.push('\n'),
        Node::Element(element) => {
            for child in &element.children {
                collect_code(child, code);
            }
        }
    }
}
