//! Single evaluation results.

use super::xml::Node;
use sxd_document::dom::ChildOfElement;

/// What kind of node a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Attribute,
    Element,
    Text,
    Other,
}

/// One node selected by an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'d> {
    node: Node<'d>,
}

impl<'d> Match<'d> {
    pub fn new(node: Node<'d>) -> Self {
        Self { node }
    }

    /// The matched node itself.
    pub fn node(&self) -> Node<'d> {
        self.node
    }

    pub fn kind(&self) -> MatchKind {
        match self.node {
            Node::Attribute(_) => MatchKind::Attribute,
            Node::Element(_) => MatchKind::Element,
            Node::Text(_) => MatchKind::Text,
            _ => MatchKind::Other,
        }
    }

    pub fn is_attribute(&self) -> bool {
        self.kind() == MatchKind::Attribute
    }

    /// The value of an attribute match; empty for anything else.
    pub fn attribute_value(&self) -> String {
        match self.node {
            Node::Attribute(attribute) => attribute.value().to_string(),
            _ => String::new(),
        }
    }

    /// The text content of a node match.
    ///
    /// For an element this is its first run of character data, skipping
    /// whitespace-only text between child elements. A selected text node
    /// yields its own text. Anything else yields an empty string.
    pub fn child_value(&self) -> String {
        match self.node {
            Node::Element(element) => {
                let mut value = String::new();
                let mut started = false;
                for child in element.children() {
                    match child {
                        ChildOfElement::Text(text) => {
                            if started || !text.text().trim().is_empty() {
                                started = true;
                                value.push_str(text.text());
                            }
                        }
                        _ if started => break,
                        _ => {}
                    }
                }
                value
            }
            Node::Text(text) => text.text().to_string(),
            _ => String::new(),
        }
    }
}
