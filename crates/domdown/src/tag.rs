//! The fixed table of tags the converter understands.

/// Behavior class of an element tag.
///
/// Tags sharing a rendering (`strong`/`b`, `em`/`i`, ...) share a variant.
/// Anything not listed is [`Tag::Other`] and gets reported by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `strong`, `b`
    Strong,
    /// `em`, `i`
    Emphasis,
    /// `u`, `ins`
    Insert,
    /// `s`, `del`
    Delete,
    Superscript,
    Subscript,
    /// `tt`, `code`
    Code,
    Span,
    Image,
    Link,
    /// `div`, `article`, `p`
    Container,
    /// `h1` .. `h6`
    Heading(usize),
    Table,
    /// `thead`, `tbody`, `tfoot`
    TableSection,
    TableRow,
    /// `td`, `th`
    TableCell,
    UnorderedList,
    OrderedList,
    DefinitionList,
    ListItem,
    /// `dt`
    Term,
    /// `dd`
    Definition,
    Pre,
    LineBreak,
    Other,
}

impl Tag {
    /// Classify a tag name (case-insensitive)
    pub fn parse(name: &str) -> Tag {
        match name.to_ascii_lowercase().as_str() {
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "u" | "ins" => Tag::Insert,
            "s" | "del" => Tag::Delete,
            "sup" => Tag::Superscript,
            "sub" => Tag::Subscript,
            "tt" | "code" => Tag::Code,
            "span" => Tag::Span,
            "img" => Tag::Image,
            "a" => Tag::Link,
            "div" | "article" | "p" => Tag::Container,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "table" => Tag::Table,
            "thead" | "tbody" | "tfoot" => Tag::TableSection,
            "tr" => Tag::TableRow,
            "td" | "th" => Tag::TableCell,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "dl" => Tag::DefinitionList,
            "li" => Tag::ListItem,
            "dt" => Tag::Term,
            "dd" => Tag::Definition,
            "pre" => Tag::Pre,
            "br" => Tag::LineBreak,
            _ => Tag::Other,
        }
    }

    /// Inline tags are rendered by the inline walk in any context.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Tag::Strong
                | Tag::Emphasis
                | Tag::Insert
                | Tag::Delete
                | Tag::Superscript
                | Tag::Subscript
                | Tag::Code
                | Tag::Span
                | Tag::Image
                | Tag::Link
        )
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            Tag::UnorderedList | Tag::OrderedList | Tag::DefinitionList
        )
    }

    /// Opening and closing Markdown for tags that wrap their text.
    pub fn wrapper(self) -> Option<(&'static str, &'static str)> {
        match self {
            Tag::Strong => Some(("**", "**")),
            Tag::Emphasis => Some(("_", "_")),
            Tag::Insert => Some(("<ins>", "</ins>")),
            Tag::Delete => Some(("<del>", "</del>")),
            Tag::Superscript => Some(("<sup>", "</sup>")),
            Tag::Subscript => Some(("<sub>", "</sub>")),
            Tag::Code => Some(("`", "`")),
            _ => None,
        }
    }
}
