//! Integration tests for sxml serialization.

use html2sxml_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};
use html2sxml_sxml::to_sxml;

/// Helper to parse HTML and serialize the first element called `tag`
fn sxml_of(html: &str, tag: &str) -> String {
    let tree = html2sxml_html::parse(html.as_bytes()).unwrap();
    let id = tree
        .preorder(NodeId::ROOT)
        .find(|&id| tree.as_element(id).is_some_and(|e| e.tag_name == tag))
        .unwrap_or_else(|| panic!("no <{tag}> in {html}"));
    to_sxml(&tree, id)
}

/// Helper to parse HTML and serialize from the root element
fn document_sxml(html: &str) -> String {
    let tree = html2sxml_html::parse(html.as_bytes()).unwrap();
    let root = tree.first_element(NodeId::ROOT).unwrap();
    to_sxml(&tree, root)
}

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    tree.alloc(NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: attrs.iter().map(|&(k, v)| Attribute::new(k, v)).collect(),
    }))
}

fn alloc_text(tree: &mut DomTree, text: &str) -> NodeId {
    tree.alloc(NodeType::Text(text.to_string()))
}

// ========== From parsed HTML ==========

#[test]
fn test_empty_element() {
    assert_eq!(sxml_of("<div></div>", "div"), "(:div)");
}

#[test]
fn test_attribute_and_text() {
    assert_eq!(sxml_of(r#"<a href="x">hi</a>"#, "a"), r#"(:a (@ (href "x")) "hi")"#);
}

#[test]
fn test_nested_list() {
    assert_eq!(
        sxml_of("<ul><li>a</li><li>b</li></ul>", "ul"),
        r#"(:ul (:li "a") (:li "b"))"#
    );
}

#[test]
fn test_whitespace_between_elements_is_dropped() {
    assert_eq!(
        sxml_of("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>", "ul"),
        r#"(:ul (:li "a") (:li "b"))"#
    );
}

#[test]
fn test_quotes_in_text_are_escaped() {
    assert_eq!(sxml_of(r#"<p>say "hi"</p>"#, "p"), r#"(:p "say \"hi\"")"#);
}

#[test]
fn test_quotes_in_attribute_values_are_escaped() {
    assert_eq!(
        sxml_of(r#"<img alt='a "quoted" word'>"#, "img"),
        r#"(:img (@ (alt "a \"quoted\" word")))"#
    );
}

#[test]
fn test_attribute_order_is_source_order() {
    assert_eq!(
        sxml_of(r#"<input type="text" name="q" value="">"#, "input"),
        r#"(:input (@ (type "text") (name "q") (value "")))"#
    );
}

#[test]
fn test_mixed_content_order() {
    assert_eq!(
        sxml_of("<p>Hello, <b>bold</b> world</p>", "p"),
        r#"(:p "Hello," (:b "bold") "world")"#
    );
}

#[test]
fn test_comments_are_omitted() {
    assert_eq!(
        sxml_of("<div><!-- hidden -->shown<!-- also hidden --></div>", "div"),
        r#"(:div "shown")"#
    );
}

#[test]
fn test_full_document() {
    assert_eq!(
        document_sxml("<!DOCTYPE html><html><head><title>T</title></head><body><p>x</p></body></html>"),
        r#"(:html (:head (:title "T")) (:body (:p "x")))"#
    );
}

#[test]
fn test_fragment_gets_implied_structure() {
    assert_eq!(
        document_sxml(r#"<a href="x">hi</a>"#),
        r#"(:html (:head) (:body (:a (@ (href "x")) "hi")))"#
    );
}

#[test]
fn test_template_contents_are_serialized() {
    assert_eq!(
        sxml_of("<template><b>t</b></template>", "template"),
        r#"(:template (:b "t"))"#
    );
}

// ========== Hand-built trees ==========

#[test]
fn test_non_element_nodes_and_their_children_are_omitted() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div", &[]);
    tree.append_child(NodeId::ROOT, div);

    let comment = tree.alloc(NodeType::Comment);
    tree.append_child(div, comment);
    let hidden = alloc_element(&mut tree, "hidden", &[]);
    tree.append_child(comment, hidden);

    let doctype = tree.alloc(NodeType::Doctype);
    tree.append_child(div, doctype);

    let pi = tree.alloc(NodeType::ProcessingInstruction);
    tree.append_child(div, pi);

    let document = tree.alloc(NodeType::Document);
    tree.append_child(div, document);
    let inner = alloc_element(&mut tree, "inner", &[]);
    tree.append_child(document, inner);

    let kept = alloc_text(&mut tree, "kept");
    tree.append_child(div, kept);

    assert_eq!(to_sxml(&tree, div), r#"(:div "kept")"#);
}

#[test]
fn test_duplicate_attribute_keys_are_not_deduplicated() {
    let mut tree = DomTree::new();
    let el = alloc_element(&mut tree, "x", &[("Key", "1"), ("Key", "2")]);
    tree.append_child(NodeId::ROOT, el);

    assert_eq!(to_sxml(&tree, el), r#"(:x (@ (Key "1") (Key "2")))"#);
}

#[test]
fn test_backslash_is_not_escaped() {
    let mut tree = DomTree::new();
    let pre = alloc_element(&mut tree, "pre", &[("data-path", r"C:\dir")]);
    tree.append_child(NodeId::ROOT, pre);
    let text = alloc_text(&mut tree, r#"a\"b"#);
    tree.append_child(pre, text);

    assert_eq!(
        to_sxml(&tree, pre),
        r#"(:pre (@ (data-path "C:\dir")) "a\\"b")"#
    );
}

#[test]
fn test_text_node_alone() {
    let mut tree = DomTree::new();
    let text = alloc_text(&mut tree, "  say \"hi\"  ");
    tree.append_child(NodeId::ROOT, text);

    assert_eq!(to_sxml(&tree, text), r#""say \"hi\"""#);
}

#[test]
fn test_output_is_deterministic() {
    let html = r#"<div id="a" class="b"><p>one</p><p>two "2"</p></div>"#;
    assert_eq!(sxml_of(html, "div"), sxml_of(html, "div"));
}

#[test]
fn test_very_deep_nesting_does_not_overflow() {
    let depth = 200_000;
    let mut tree = DomTree::new();
    let root = alloc_element(&mut tree, "div", &[]);
    tree.append_child(NodeId::ROOT, root);
    let mut parent = root;
    for _ in 1..depth {
        let div = alloc_element(&mut tree, "div", &[]);
        tree.append_child(parent, div);
        parent = div;
    }
    let text = alloc_text(&mut tree, "x");
    tree.append_child(parent, text);

    let sxml = to_sxml(&tree, root);
    let expected = format!("{}\"x\"{}", "(:div ".repeat(depth), ")".repeat(depth));
    assert_eq!(sxml, expected);
}

#[test]
fn test_deeply_nested_html_serializes() {
    let depth = 5_000;
    let html = format!("{}deep", "<div>".repeat(depth));
    let sxml = sxml_of(&html, "div");
    assert!(sxml.starts_with("(:div (:div"));
    assert!(sxml.ends_with(&format!("\"deep\"{}", ")".repeat(depth))));
}
