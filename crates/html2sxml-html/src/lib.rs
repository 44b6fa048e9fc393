//! HTML tree acquisition for html2sxml.
//!
//! # Scope
//!
//! Tokenization and tree construction
//! ([WHATWG § 13.2](https://html.spec.whatwg.org/multipage/parsing.html)) are
//! delegated to `html5ever`. This crate runs that parser over raw bytes and
//! copies the resulting tree into an [`html2sxml_dom::DomTree`].
//!
//! # Differences from the parser's own tree
//!
//! - `<template>` contents are attached as ordinary children of the template
//!   element instead of living in a separate document fragment.
//! - Attribute names keep only their local name.
//! - Comments, doctypes and processing instructions keep no payload.

/// Error type for tree acquisition.
pub mod error;
/// Parser driver and tree conversion.
pub mod parser;

pub use error::ParseError;
pub use parser::parse;
