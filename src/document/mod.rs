//! Parsed XML documents and XPath evaluation.
//!
//! This is the only module that talks to the XML engine (`sxd-document` for
//! parsing, `sxd-xpath` for XPath 1.0 evaluation). Everything above it sees:
//! - [`XmlDocument`]: a parsed tree exposing its root element
//! - [`select_first`] / [`select_all`]: single- and multi-match evaluation
//!   against a node, results in document order
//! - [`Match`]: one result, reporting whether it is an attribute and
//!   extracting the corresponding string
//!
//! Expressions are compiled at evaluation time, so a malformed expression
//! surfaces as a [`DocumentError::Query`] for the document being processed.

mod error;
mod matches;
mod namespaces;
mod xml;


pub use error::DocumentError;
pub use matches::{Match, MatchKind};
pub use xml::{Node, XmlDocument, select_all, select_first};
