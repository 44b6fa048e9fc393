//! HTML-to-sxml conversion pipeline.
//!
//! # Scope
//!
//! This crate ties the stages together:
//! - **Tree Acquisition** - parse bytes into a DOM ([`html2sxml_html`])
//! - **Root Location** - the first element in tree order
//! - **Serialization** - render that element as sxml ([`html2sxml_sxml`])

pub use html2sxml_dom as dom;
pub use html2sxml_html as html;
pub use html2sxml_sxml as sxml;

use html2sxml_dom::DomTree;
use html2sxml_html::ParseError;
use html2sxml_sxml::to_sxml;
use thiserror::Error;

/// Error type for a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The parser could not produce a tree.
    #[error("html parse")]
    Parse(#[from] ParseError),

    /// The tree holds no element to serialize.
    #[error("no html element")]
    NoRootElement,
}

/// Convert an HTML byte stream to a single sxml expression.
///
/// The result has no trailing newline.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if parsing fails and
/// [`ConvertError::NoRootElement`] if the document has no element.
pub fn convert(input: &[u8]) -> Result<String, ConvertError> {
    let parsed = html2sxml_html::parse(input)?;
    convert_tree(&parsed)
}

/// Serialize the first element of an already-built tree.
///
/// # Errors
///
/// Returns [`ConvertError::NoRootElement`] if `tree` has no element.
pub fn convert_tree(tree: &DomTree) -> Result<String, ConvertError> {
    let root = tree
        .first_element(tree.root())
        .ok_or(ConvertError::NoRootElement)?;

    Ok(to_sxml(tree, root))
}
