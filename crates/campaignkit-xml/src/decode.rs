//! XML-to-tree decoding: parsing response fragments into a [`Node`] tree.
//!
//! Decoding is schemaless. Each element becomes either a scalar (no child
//! elements: the trimmed text content) or a map of its children; when two or
//! more siblings share an element name, the entries are promoted into an
//! ordered list.
//!
//! # The one-or-many ambiguity
//!
//! Promotion happens on the *second* occurrence of a name, so a field that
//! happens to hold exactly one entry decodes to a bare map, not a one-element
//! list. Callers cannot tell a list-of-one from a true singleton; this is
//! inherent to the wire format and is preserved here. Use
//! [`Node::as_items`](campaignkit_tree::Node::as_items) to consume such fields
//! uniformly.

use std::collections::HashSet;

use quick_xml::Reader;
use quick_xml::events::Event;

use campaignkit_tree::{Node, NodeMap};

use crate::error::XmlError;
use crate::policy::NamePolicy;

/// Decode an XML document or fragment into a node tree using the default
/// [`NamePolicy`].
///
/// The root element itself is consumed: its children become the resulting map
/// (or, if it has no child elements, its trimmed text becomes a scalar).
///
/// # Errors
///
/// Returns [`XmlError`] if the input is not well-formed XML or ends before the
/// root element is closed. No partial tree is ever returned.
pub fn from_xml(xml: &str) -> Result<Node, XmlError> {
    from_xml_with_policy(xml, &NamePolicy::default())
}

/// Decode an XML document or fragment with an explicit [`NamePolicy`].
///
/// The policy controls which element names are treated as anonymous-scalar
/// tags and unwrapped to the empty-string key.
///
/// # Errors
///
/// Returns [`XmlError`] if the input is not well-formed XML.
pub fn from_xml_with_policy(xml: &str, policy: &NamePolicy) -> Result<Node, XmlError> {
    let mut reader = Reader::from_reader(xml.trim().as_bytes());

    // Skip the declaration, comments, and whitespace to find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => return decode_element(&mut reader, policy),
            Event::Empty(_) => return Ok(Node::Scalar(String::new())),
            Event::Eof => return Err(XmlError::Malformed("no root element")),
            _ => {}
        }
    }
}

/// Decode the children of the current element into a node.
///
/// The reader is positioned just after the element's opening tag; this consumes
/// through the matching end tag. Elements with child elements decode to a map
/// (with list-promotion for repeated names), childless elements to the trimmed
/// text scalar.
fn decode_element(reader: &mut Reader<&[u8]>, policy: &NamePolicy) -> Result<Node, XmlError> {
    let mut result = NodeMap::new();
    // Names already converted to a list in this scope. Promotion is decided
    // once per parent scope, on the first repetition, and is stable thereafter.
    let mut promoted: HashSet<String> = HashSet::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(e.name().as_ref(), policy)?;
                let value = decode_element(reader, policy)?;
                insert_promoting(&mut result, &mut promoted, name, value);
            }
            Event::Empty(e) => {
                let name = element_name(e.name().as_ref(), policy)?;
                insert_promoting(&mut result, &mut promoted, name, Node::Scalar(String::new()));
            }
            Event::Text(e) => {
                let decoded = e.decode().map_err(|err| XmlError::Text(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::Text(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                // CDATA content is literal text; no unescaping.
                let decoded = e.decode().map_err(|err| XmlError::Text(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let name = e.decode().map_err(|err| XmlError::Text(err.to_string()))?;
                if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                } else if let Some(entity) = quick_xml::escape::resolve_xml_entity(&name) {
                    text.push_str(entity);
                } else {
                    // Not one of the predefined entities; keep the reference
                    // verbatim rather than dropping content.
                    text.push('&');
                    text.push_str(&name);
                    text.push(';');
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(XmlError::Malformed("unexpected end of input")),
            _ => {}
        }
    }

    // An element with no child elements is a value, never an empty map.
    if result.is_empty() {
        Ok(Node::Scalar(text.trim().to_owned()))
    } else {
        Ok(Node::Map(result))
    }
}

/// Resolve a raw element name, collapsing anonymous-scalar tags to the empty
/// string so the encoder's positional convention is recovered on decode.
fn element_name(raw: &[u8], policy: &NamePolicy) -> Result<String, XmlError> {
    let name = std::str::from_utf8(raw).map_err(|err| XmlError::Text(err.to_string()))?;
    if policy.is_anonymous_tag(name) {
        Ok(String::new())
    } else {
        Ok(name.to_owned())
    }
}

/// Insert `value` under `name`, promoting to a list on the second occurrence
/// and appending on later ones.
fn insert_promoting(result: &mut NodeMap, promoted: &mut HashSet<String>, name: String, value: Node) {
    if !result.contains(&name) {
        result.push(name, value);
        return;
    }
    if promoted.contains(&name) {
        if let Some(Node::List(items)) = result.get_mut(&name) {
            items.push(value);
        }
    } else if let Some(existing) = result.get_mut(&name) {
        let first = std::mem::replace(existing, Node::Scalar(String::new()));
        *existing = Node::List(vec![first, value]);
        promoted.insert(name);
    }
}
