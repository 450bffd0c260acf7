//! XML parsing and XPath evaluation.

use super::error::DocumentError;
use super::matches::Match;
use super::namespaces;
use std::io::Read;
use sxd_document::Package;
use sxd_xpath::nodeset::Nodeset;
use sxd_xpath::{Factory, Value, XPath};

const BYTE_ORDER_MARK: char = '\u{feff}';
const IMPLIED_DECLARATION: &str = "<?xml version=\"1.0\"?>";

/// A node of a parsed document, as seen by XPath.
pub type Node<'d> = sxd_xpath::nodeset::Node<'d>;

/// A parsed XML document.
pub struct XmlDocument {
    package: Package,
}

impl XmlDocument {
    /// Parse a document from a string.
    ///
    /// A leading byte order mark is ignored. The parser only accepts a
    /// document type declaration after an XML declaration, so one is implied
    /// when the document opens with `<!DOCTYPE`.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let xml = xml.strip_prefix(BYTE_ORDER_MARK).unwrap_or(xml);
        let body = xml.trim_start();
        let parsed = if body.starts_with("<!DOCTYPE") {
            let skipped = xml.len() - body.len();
            sxd_document::parser::parse(&format!("{}{}", IMPLIED_DECLARATION, body))
                .map_err(|e| (e.location().saturating_sub(IMPLIED_DECLARATION.len()) + skipped, e))
        } else {
            sxd_document::parser::parse(xml).map_err(|e| (e.location(), e))
        };

        let package = parsed.map_err(|(offset, e)| DocumentError::Parse {
            offset,
            message: e.to_string(),
        })?;
        namespaces::normalize(package.as_document());
        Ok(Self { package })
    }

    /// Read a whole stream and parse it.
    pub fn load<R: Read + ?Sized>(input: &mut R) -> Result<Self, DocumentError> {
        let mut xml = String::new();
        input.read_to_string(&mut xml).map_err(DocumentError::Read)?;
        Self::parse(&xml)
    }

    /// The document element.
    ///
    /// Falls back to the document node for a tree without an element, which
    /// the parser does not normally produce.
    pub fn root(&self) -> Node<'_> {
        let document = self.package.as_document();
        namespaces::document_element(document)
            .map(Node::Element)
            .unwrap_or_else(|| Node::Root(document.root()))
    }
}

/// Evaluate `expression` against `node` and return the first match in
/// document order, if any.
pub fn select_first<'d>(node: Node<'d>, expression: &str) -> Result<Option<Match<'d>>, DocumentError> {
    let nodes = evaluate(node, expression)?;
    Ok(nodes.document_order_first().map(Match::new))
}

/// Evaluate `expression` against `node` and return every match in document
/// order.
pub fn select_all<'d>(node: Node<'d>, expression: &str) -> Result<Vec<Match<'d>>, DocumentError> {
    let nodes = evaluate(node, expression)?;
    Ok(nodes.document_order().into_iter().map(Match::new).collect())
}

fn compile(expression: &str) -> Result<XPath, DocumentError> {
    Factory::new()
        .build(expression)
        .map_err(|e| DocumentError::query(expression, e.to_string()))?
        .ok_or_else(|| DocumentError::query(expression, "empty expression"))
}

fn evaluate<'d>(node: Node<'d>, expression: &str) -> Result<Nodeset<'d>, DocumentError> {
    let xpath = compile(expression)?;
    let context = namespaces::context_for(node, expression)?;

    match xpath
        .evaluate(&context, node)
        .map_err(|e| DocumentError::query(expression, e.to_string()))?
    {
        Value::Nodeset(nodes) => Ok(nodes),
        other => Err(DocumentError::query(
            expression,
            format!("expression does not select nodes (result: {:?})", other),
        )),
    }
}
