//! Markdown list models and their rendering.

const INDENT: &str = "    ";

/// A list ready to be rendered as one Markdown block.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkdownList {
    /// `* item` lines
    Unordered(ItemList),
    /// `1. item` lines, numbered from 1 within each list
    Ordered(ItemList),
    /// Term lines followed by `:   definition` lines
    Definition(DefinitionList),
}

/// Items of an ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemList {
    items: Vec<ListItem>,
}

/// A rendered inline label with an optional nested list below it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub label: String,
    pub nested: Option<Box<MarkdownList>>,
}

/// Terms paired with their groups of definitions.
///
/// `terms[i]` is described by `definitions[i]`; the two vectors only grow
/// together through [`DefinitionList::add`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionList {
    terms: Vec<String>,
    definitions: Vec<Vec<String>>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, optionally owning a nested list.
    pub fn add(&mut self, label: impl Into<String>, nested: Option<MarkdownList>) {
        self.items.push(ListItem {
            label: label.into(),
            nested: nested.map(Box::new),
        });
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DefinitionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term together with all of its definitions.
    pub fn add(&mut self, term: impl Into<String>, definitions: Vec<String>) {
        self.terms.push(term.into());
        self.definitions.push(definitions);
    }

    /// Iterate `(term, definitions)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.terms
            .iter()
            .zip(self.definitions.iter())
            .map(|(term, definitions)| (term.as_str(), definitions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl MarkdownList {
    pub fn is_empty(&self) -> bool {
        match self {
            MarkdownList::Unordered(items) | MarkdownList::Ordered(items) => items.is_empty(),
            MarkdownList::Definition(definitions) => definitions.is_empty(),
        }
    }

    /// Render the list as newline-separated lines.
    pub fn to_markdown(&self) -> String {
        let mut lines = Vec::new();
        self.push_lines(&mut lines, 0);
        lines.join("\n")
    }

    fn push_lines(&self, lines: &mut Vec<String>, depth: usize) {
        let indent = INDENT.repeat(depth);

        match self {
            MarkdownList::Unordered(list) | MarkdownList::Ordered(list) => {
                let ordered = matches!(self, MarkdownList::Ordered(_));
                for (i, item) in list.items.iter().enumerate() {
                    if ordered {
                        lines.push(format!("{}{}. {}", indent, i + 1, item.label));
                    } else {
                        lines.push(format!("{}* {}", indent, item.label));
                    }
                    if let Some(nested) = &item.nested {
                        nested.push_lines(lines, depth + 1);
                    }
                }
            }
            MarkdownList::Definition(list) => {
                for (term, definitions) in list.entries() {
                    lines.push(format!("{}{}", indent, term));
                    for definition in definitions {
                        lines.push(format!("{}:   {}", indent, definition));
                    }
                }
            }
        }
    }
}
