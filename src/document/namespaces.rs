//! Namespace handling.
//!
//! Names are matched the way they are written in the document. Elements in a
//! default namespace answer to their bare local name, and a `prefix:name`
//! test uses whatever URI the document declares for `prefix`.

use super::error::DocumentError;
use super::xml::Node;
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Document, Element};
use sxd_xpath::Context;

pub(super) fn document_element(document: Document<'_>) -> Option<Element<'_>> {
    document.root().children().into_iter().find_map(|child| match child {
        ChildOfRoot::Element(element) => Some(element),
        _ => None,
    })
}

/// Drop default namespaces from element names and hoist every prefix
/// declaration onto the document element, including the implicit `xml`.
///
/// When one prefix is declared with different URIs, the first declaration
/// in document order wins.
pub(super) fn normalize(document: Document<'_>) {
    let Some(top) = document_element(document) else {
        return;
    };

    let mut pending = vec![top];
    while let Some(element) = pending.pop() {
        let name = element.name();
        if name.namespace_uri().is_some() && element.preferred_prefix().is_none() {
            let local = name.local_part().to_string();
            element.set_name(local.as_str());
        }

        for namespace in element.namespaces_in_scope() {
            if top.namespace_uri_for_prefix(namespace.prefix()).is_none() {
                top.register_prefix(namespace.prefix(), namespace.uri());
            }
        }

        // Reversed so that the stack pops children in document order.
        let children: Vec<_> = element
            .children()
            .into_iter()
            .filter_map(|child| match child {
                ChildOfElement::Element(child) => Some(child),
                _ => None,
            })
            .collect();
        pending.extend(children.into_iter().rev());
    }
}

/// Build an evaluation context binding every prefix `expression` uses.
///
/// A prefix the document never declares is a query error, since the engine
/// cannot evaluate a name test without it.
pub(super) fn context_for<'d>(node: Node<'d>, expression: &str) -> Result<Context<'d>, DocumentError> {
    let mut context = Context::new();
    let top = document_element(node.document());

    for prefix in prefixes(expression) {
        match top.and_then(|top| top.namespace_uri_for_prefix(prefix)) {
            Some(uri) => context.set_namespace(prefix, uri),
            None => {
                return Err(DocumentError::query(
                    expression,
                    format!("undeclared namespace prefix '{}'", prefix),
                ));
            }
        }
    }

    Ok(context)
}

/// Prefixes of qualified names in `expression`, in order of appearance.
///
/// String literals and axis separators (`::`) are skipped.
pub(super) fn prefixes(expression: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = expression.char_indices().collect();
    let mut found = Vec::new();
    let mut quote = None;
    let mut name_start = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                quote = Some(c);
                name_start = None;
            }
            ':' => {
                let axis = (i > 0 && chars[i - 1].1 == ':')
                    || chars.get(i + 1).is_some_and(|&(_, next)| next == ':');
                if let Some(start) = name_start
                    && !axis
                {
                    let prefix = &expression[start..pos];
                    if starts_name(prefix) && !found.contains(&prefix) {
                        found.push(prefix);
                    }
                }
                name_start = None;
            }
            c if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') => {
                name_start.get_or_insert(pos);
            }
            _ => name_start = None,
        }
    }

    found
}

fn starts_name(prefix: &str) -> bool {
    prefix.starts_with(|c: char| c.is_alphabetic() || c == '_')
}
