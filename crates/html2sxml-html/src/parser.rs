use html2sxml_common::warning::warn_once;
use html2sxml_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::ParseError;

/// Parse an HTML byte stream into a [`DomTree`].
///
/// The bytes are decoded as UTF-8; invalid sequences become U+FFFD and a
/// warning is printed. The parser's own recoverable errors are not reported.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the decoder feeding the parser fails.
pub fn parse(input: &[u8]) -> Result<DomTree, ParseError> {
    if std::str::from_utf8(input).is_err() {
        warn_once(
            "HTML Parser",
            "input is not valid UTF-8; invalid bytes were replaced with U+FFFD",
        );
    }

    let mut reader = input;
    let rcdom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut reader)?;

    Ok(build_tree(&rcdom))
}

/// Copy the parser's reference-counted tree into an arena tree.
///
/// Walks with an explicit stack of `(node, parent)` pairs. Children are pushed
/// in reverse so each parent receives its children in document order.
fn build_tree(rcdom: &RcDom) -> DomTree {
    let mut tree = DomTree::new();
    let mut stack: Vec<(Handle, NodeId)> = child_handles(&rcdom.document)
        .into_iter()
        .rev()
        .map(|child| (child, NodeId::ROOT))
        .collect();

    while let Some((handle, parent)) = stack.pop() {
        let id = tree.alloc(convert_node(&handle.data));
        tree.append_child(parent, id);
        stack.extend(
            child_handles(&handle)
                .into_iter()
                .rev()
                .map(|child| (child, id)),
        );
    }

    tree
}

/// Children of `handle` in document order.
///
/// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#the-template-element)
/// The parser places template children in the element's "template contents"
/// fragment; they are appended here so they serialize in place.
fn child_handles(handle: &Handle) -> Vec<Handle> {
    let mut children = handle.children.borrow().clone();
    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
        && let Some(contents) = template_contents.borrow().as_ref()
    {
        children.extend(contents.children.borrow().iter().cloned());
    }
    children
}

fn convert_node(data: &NodeData) -> NodeType {
    match data {
        NodeData::Document => NodeType::Document,
        NodeData::Doctype { .. } => NodeType::Doctype,
        NodeData::Text { contents } => NodeType::Text(contents.borrow().to_string()),
        NodeData::Comment { .. } => NodeType::Comment,
        NodeData::Element { name, attrs, .. } => NodeType::Element(ElementData {
            tag_name: name.local.to_string(),
            attrs: attrs
                .borrow()
                .iter()
                .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
        }),
        NodeData::ProcessingInstruction { .. } => NodeType::ProcessingInstruction,
    }
}
