//! S-expression serialization of DOM trees.
//!
//! # Format
//!
//! An element becomes `(:tag [attrs] children...)`:
//!
//! ```text
//! sxml          := "(" tag [ " " attr-section ] { " " child }* ")"
//! tag           := ":" tagname
//! attr-section  := "(@" { " " "(" key " " quoted-string ")" }+ ")"
//! child         := sxml | quoted-string
//! quoted-string := '"' escaped-text '"'
//! ```
//!
//! Text is trimmed and dropped when blank. Comments, doctypes, processing
//! instructions and nested documents produce nothing, and their subtrees are
//! not visited.
//!
//! Only `"` is escaped (as `\"`). Backslashes pass through untouched, so a
//! value ending in `\` yields `\"` before the closing quote.

use std::borrow::Cow;

use html2sxml_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

/// Serialize the node `id` and its subtree.
///
/// Returns the empty string for nodes that have no sxml form: blank text,
/// non-element non-text nodes, and ids not present in `tree`. Callers
/// building a child list skip these.
///
/// Elements are walked with an explicit stack, so nesting depth is bounded
/// only by memory.
#[must_use]
pub fn to_sxml(tree: &DomTree, id: NodeId) -> String {
    let Some(node) = tree.get(id) else {
        return String::new();
    };

    match &node.node_type {
        NodeType::Text(data) => text_to_sxml(data),
        NodeType::Element(data) => element_to_sxml(tree, id, data),
        _ => String::new(),
    }
}

/// Escape every `"` in `s` as `\"`. Nothing else is altered.
#[must_use]
pub fn escape_quotes(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', "\\\""))
    } else {
        Cow::Borrowed(s)
    }
}

fn text_to_sxml(data: &str) -> String {
    let text = data.trim();
    if text.is_empty() {
        return String::new();
    }
    quoted(text)
}

/// An element whose children are still being visited.
struct OpenElement {
    id: NodeId,
    /// Tag token, attribute section, then finished child fragments.
    parts: Vec<String>,
    next_child: usize,
}

impl OpenElement {
    fn new(id: NodeId, data: &ElementData) -> Self {
        let mut parts = vec![format!(":{}", data.tag_name)];
        if !data.attrs.is_empty() {
            parts.push(attribute_section(&data.attrs));
        }
        Self {
            id,
            parts,
            next_child: 0,
        }
    }

    fn push(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.parts.push(fragment);
        }
    }

    fn close(self) -> String {
        format!("({})", self.parts.join(" "))
    }
}

/// Post-order walk: a child element is opened on top of its parent and
/// closed into the parent's parts once its own children are done.
fn element_to_sxml(tree: &DomTree, id: NodeId, data: &ElementData) -> String {
    let mut stack = vec![OpenElement::new(id, data)];

    while let Some(mut open) = stack.pop() {
        if let Some(&child) = tree.children(open.id).get(open.next_child) {
            open.next_child += 1;
            let child_element = match tree.get(child).map(|node| &node.node_type) {
                Some(NodeType::Element(child_data)) => Some(OpenElement::new(child, child_data)),
                Some(NodeType::Text(text)) => {
                    open.push(text_to_sxml(text));
                    None
                }
                _ => None,
            };
            stack.push(open);
            stack.extend(child_element);
            continue;
        }

        let fragment = open.close();
        match stack.last_mut() {
            Some(parent) => parent.push(fragment),
            None => return fragment,
        }
    }

    String::new()
}

/// `(@ (key "value") ...)`, keys verbatim.
fn attribute_section(attrs: &[Attribute]) -> String {
    let pairs: Vec<String> = attrs
        .iter()
        .map(|attr| format!("({} {})", attr.name, quoted(&attr.value)))
        .collect();
    format!("(@ {})", pairs.join(" "))
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}
