//! Child scanning helpers for lists, definition lists and tables.

use crate::node::Node;
use crate::tag::Tag;

/// A `<dt>` with the `<dd>` elements that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionEntry<'a> {
    pub term: &'a Node,
    pub definitions: Vec<&'a Node>,
}

fn tag_of(node: &Node) -> Option<Tag> {
    node.tag_name().map(Tag::parse)
}

/// `<li>` children of a list; everything else is skipped
pub fn list_items(list: &Node) -> impl Iterator<Item = &Node> {
    list.children()
        .iter()
        .filter(|child| tag_of(child) == Some(Tag::ListItem))
}

/// Group the children of a `<dl>` into terms and their definitions.
///
/// A `<dd>` before the first `<dt>` has no term and is dropped.
pub fn definitions(list: &Node) -> Vec<DefinitionEntry<'_>> {
    let mut entries: Vec<DefinitionEntry<'_>> = Vec::new();

    for child in list.element_children() {
        match tag_of(child) {
            Some(Tag::Term) => entries.push(DefinitionEntry {
                term: child,
                definitions: Vec::new(),
            }),
            Some(Tag::Definition) => {
                if let Some(entry) = entries.last_mut() {
                    entry.definitions.push(child);
                }
            }
            _ => {}
        }
    }

    entries
}

/// `<tr>` rows of a table in document order, looking through
/// `<thead>`, `<tbody>` and `<tfoot>`.
pub fn table_rows(table: &Node) -> Vec<&Node> {
    let mut rows = Vec::new();
    collect_rows(table, &mut rows);
    rows
}

fn collect_rows<'a>(node: &'a Node, rows: &mut Vec<&'a Node>) {
    match tag_of(node) {
        Some(Tag::Table) | Some(Tag::TableSection) => {
            for child in node.children() {
                collect_rows(child, rows);
            }
        }
        Some(Tag::TableRow) => rows.push(node),
        _ => {}
    }
}

/// `<td>` and `<th>` cells of a row
pub fn table_cells(row: &Node) -> impl Iterator<Item = &Node> {
    row.children()
        .iter()
        .filter(|child| tag_of(child) == Some(Tag::TableCell))
}

/// Split the children of an `<li>` at its first nested list.
///
/// Returns the item's own content and the nested list element, if any.
/// Children after the nested list are not part of either.
pub fn split_list_item(item: &Node) -> (&[Node], Option<&Node>) {
    let children = item.children();
    match children
        .iter()
        .position(|child| tag_of(child).is_some_and(Tag::is_list))
    {
        Some(index) => (&children[..index], Some(&children[index])),
        None => (children, None),
    }
}
