//! Tree-to-XML encoding: serializing a [`Node`] tree into a request fragment.
//!
//! Output is a fragment, not a document: no declaration, no namespace, one
//! element per line, indented with one tab per nesting level starting at the
//! caller-supplied depth. Indentation is for human readability only; the
//! decoder ignores it.
//!
//! Encoding is total over the node model and never fails. It is not a perfect
//! inverse of decoding: scalar content round-trips exactly, but positional
//! sequences are emitted under policy-derived element names
//! ([`NamePolicy::derive_name`]) and come back un-keyed, and a list-of-one is
//! indistinguishable from a singleton after a round trip.

use campaignkit_tree::Node;

use crate::policy::NamePolicy;

/// Encode a node tree as a tab-indented XML fragment using the default
/// [`NamePolicy`].
///
/// The top-level node is expected to be a map (callers never start from a bare
/// scalar or list); a scalar is still emitted as an escaped text line rather
/// than rejected, since that is an input-validation concern for the caller.
#[must_use]
pub fn to_xml(node: &Node, indent: usize) -> String {
    to_xml_with_policy(node, indent, &NamePolicy::default())
}

/// Encode a node tree with an explicit [`NamePolicy`] for positional members.
#[must_use]
pub fn to_xml_with_policy(node: &Node, indent: usize, policy: &NamePolicy) -> String {
    let mut buf = String::new();
    encode_value(&mut buf, node, indent, policy);
    buf
}

/// Emit the fields of `node` at the given depth.
///
/// A positional sequence (a list, or a map keyed `"0"`, `"1"`, …) has no
/// caller-supplied names, so each element's name is re-derived from its shape
/// via the policy. Everything else emits in insertion order under its own key.
fn encode_value(buf: &mut String, node: &Node, depth: usize, policy: &NamePolicy) {
    // Every list (including the empty one) is positional, so the branches
    // below only ever see non-positional maps and scalars.
    if let Some(items) = node.as_positional() {
        for item in items {
            encode_field(buf, policy.derive_name(item), item, depth, policy);
        }
    } else if let Node::Map(map) = node {
        for (name, value) in map.iter() {
            encode_field(buf, name, value, depth, policy);
        }
    } else if let Node::Scalar(text) = node {
        push_indent(buf, depth);
        buf.push_str(&quick_xml::escape::escape(text.as_str()));
        buf.push('\n');
    }
}

/// Emit one `name`/`value` pair: a single `<name>text</name>` line for scalars,
/// or an open tag, the nested body one level deeper, and a close tag.
fn encode_field(buf: &mut String, name: &str, value: &Node, depth: usize, policy: &NamePolicy) {
    push_indent(buf, depth);
    buf.push('<');
    buf.push_str(name);
    buf.push('>');

    match value {
        Node::Scalar(text) => {
            buf.push_str(&quick_xml::escape::escape(text.as_str()));
        }
        Node::Map(_) | Node::List(_) => {
            buf.push('\n');
            encode_value(buf, value, depth + 1, policy);
            push_indent(buf, depth);
        }
    }

    buf.push_str("</");
    buf.push_str(name);
    buf.push_str(">\n");
}

fn push_indent(buf: &mut String, depth: usize) {
    for _ in 0..depth {
        buf.push('\t');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::from_xml;
    use campaignkit_tree::NodeMap;

    #[test]
    fn test_should_emit_nested_map_with_tab_indentation() {
        let tree = Node::map([(
            "ParentElement",
            Node::map([("Child1", "Value1"), ("Child2", "Value2")]),
        )]);
        assert_eq!(
            to_xml(&tree, 0),
            "<ParentElement>\n\
             \t<Child1>Value1</Child1>\n\
             \t<Child2>Value2</Child2>\n\
             </ParentElement>\n"
        );
    }

    #[test]
    fn test_should_offset_by_starting_indent() {
        let tree = Node::map([("Email", "x@y.z")]);
        assert_eq!(to_xml(&tree, 2), "\t\t<Email>x@y.z</Email>\n");
    }

    #[test]
    fn test_should_derive_positional_names_from_value_shape() {
        let tree = Node::map([(
            "CustomFields",
            Node::list([
                Node::map([("Key", "colour"), ("Value", "teal")]),
                Node::scalar("17"),
                Node::scalar("plain"),
            ]),
        )]);
        let xml = to_xml(&tree, 0);
        assert_eq!(
            xml,
            "<CustomFields>\n\
             \t<SubscriberCustomField>\n\
             \t\t<Key>colour</Key>\n\
             \t\t<Value>teal</Value>\n\
             \t</SubscriberCustomField>\n\
             \t<int>17</int>\n\
             \t<string>plain</string>\n\
             </CustomFields>\n"
        );
    }

    #[test]
    fn test_should_treat_integer_keyed_map_as_positional() {
        // A map keyed 0..n is an ordered sequence masquerading as a map and
        // must encode exactly like the equivalent list.
        let tree = Node::map([("0", Node::map([("Key", "a"), ("Value", "b")]))]);
        assert_eq!(
            to_xml(&tree, 0),
            "<SubscriberCustomField>\n\
             \t<Key>a</Key>\n\
             \t<Value>b</Value>\n\
             </SubscriberCustomField>\n"
        );
    }

    #[test]
    fn test_should_escape_reserved_characters() {
        let tree = Node::map([("Name", "Fish & Chips <Ltd>")]);
        let xml = to_xml(&tree, 0);
        assert_eq!(xml, "<Name>Fish &amp; Chips &lt;Ltd&gt;</Name>\n");
    }

    #[test]
    fn test_should_round_trip_unique_keyed_trees() {
        let tree = Node::map([
            ("ListID", Node::scalar("42")),
            ("Email", Node::scalar("x@y.z")),
            (
                "Detail",
                Node::map([("Name", Node::scalar("A & B")), ("Code", Node::scalar("0"))]),
            ),
        ]);
        let xml = format!("<Root>\n{}</Root>", to_xml(&tree, 1));
        let decoded = from_xml(&xml).expect("decode");
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_should_round_trip_repeated_names_as_list() {
        let tree = Node::map([("Tags", Node::list(["a", "b", "c"]))]);
        let xml = format!("<Root>\n{}</Root>", to_xml(&tree, 1));
        let decoded = from_xml(&xml).expect("decode");

        // The three <string> members come back as a list under the empty key,
        // in original order.
        let anon = decoded.get("Tags").unwrap().get("").unwrap();
        let items: Vec<&str> = anon.as_list().unwrap().iter().filter_map(Node::as_scalar).collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_should_round_trip_reserved_characters_unescaped() {
        let tree = Node::map([("Name", Node::scalar("a<b&c"))]);
        let xml = format!("<Root>{}</Root>", to_xml(&tree, 0));
        let decoded = from_xml(&xml).expect("decode");
        assert_eq!(decoded.get("Name").unwrap().as_scalar(), Some("a<b&c"));
    }

    #[test]
    fn test_should_use_custom_policy_names() {
        let policy = NamePolicy {
            int_tag: "long".to_owned(),
            string_tag: "text".to_owned(),
            struct_tag: "Member".to_owned(),
        };
        let tree = Node::map([("Ids", Node::list(["1", "x"]))]);
        let xml = to_xml_with_policy(&tree, 0, &policy);
        assert_eq!(xml, "<Ids>\n\t<long>1</long>\n\t<text>x</text>\n</Ids>\n");
    }

    #[test]
    fn test_should_emit_nothing_for_empty_sequence() {
        let tree = Node::map([("Empty", Node::list(Vec::<Node>::new()))]);
        assert_eq!(to_xml(&tree, 0), "<Empty>\n</Empty>\n");
    }

    #[test]
    fn test_should_emit_nothing_for_empty_map_body() {
        // An empty map is not positional; it takes the named-field branch and
        // emits no body lines, same as the empty list.
        let tree = Node::map([("Empty", Node::Map(NodeMap::new()))]);
        assert_eq!(to_xml(&tree, 0), "<Empty>\n</Empty>\n");
    }
}
