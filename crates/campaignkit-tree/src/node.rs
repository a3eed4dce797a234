//! The [`Node`] tagged variant and its insertion-ordered [`NodeMap`].

use std::fmt;
use std::slice;

/// A generic tree value: scalar text, an ordered map of named children, or an
/// ordered list of repeated siblings.
///
/// The decoder produces a `List` only when two or more sibling elements share a
/// name, which means a field holding exactly one occurrence is indistinguishable
/// from a true singleton after decoding. That ambiguity is part of the wire
/// contract; use [`Node::as_items`] to treat one-or-many values uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A string value, possibly empty. Text is never coerced to numbers.
    Scalar(String),
    /// An insertion-ordered mapping from field name to child node.
    Map(NodeMap),
    /// Two or more same-named siblings, in document order.
    List(Vec<Node>),
}

impl Node {
    /// Create a scalar node.
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }

    /// Create a map node from `(name, value)` pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Node>,
        I: IntoIterator<Item = (K, V)>,
    {
        Node::Map(entries.into_iter().collect())
    }

    /// Create a list node.
    pub fn list<V: Into<Node>, I: IntoIterator<Item = V>>(items: I) -> Self {
        Node::List(items.into_iter().map(Into::into).collect())
    }

    /// The scalar text, if this node is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The map, if this node is a map.
    #[must_use]
    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The list elements, if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a child by name, if this node is a map.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.as_map().and_then(|m| m.get(name))
    }

    /// View this node as a sequence of items, normalizing the one-or-many
    /// ambiguity: a `List` yields its elements, anything else yields itself as
    /// a single item.
    ///
    /// This is the supported way to consume fields that the decoder may return
    /// either as a singleton or as a list depending on how many occurrences
    /// appeared on the wire.
    #[must_use]
    pub fn as_items(&self) -> &[Node] {
        match self {
            Node::List(items) => items,
            other => slice::from_ref(other),
        }
    }

    /// View this node as a positional sequence, if it is one.
    ///
    /// Returns the elements when the node is a `List`, or when it is a `Map`
    /// whose keys are exactly the decimal indices `"0"`, `"1"`, … in order
    /// (an ordered sequence masquerading as a map, mirroring how decoded lists
    /// may be rebuilt by callers). Returns `None` otherwise, including for the
    /// empty map.
    #[must_use]
    pub fn as_positional(&self) -> Option<Vec<&Node>> {
        match self {
            Node::List(items) => Some(items.iter().collect()),
            Node::Map(map) => {
                if map.is_empty() {
                    return None;
                }
                for (i, (key, _)) in map.iter().enumerate() {
                    if key.parse::<usize>() != Ok(i) {
                        return None;
                    }
                }
                Some(map.values().collect())
            }
            Node::Scalar(_) => None,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Map(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}

/// An insertion-ordered string→[`Node`] map.
///
/// Backed by a `Vec` of pairs: sibling order on the wire is the only ordering
/// guarantee the codec makes, so lookup stays linear and order stays exact.
/// The empty string is a legal key (anonymous-scalar unwrapping produces it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap {
    entries: Vec<(String, Node)>,
}

impl NodeMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry at the end. Does not check for duplicate names; the
    /// decoder handles repetition via list-promotion before insertion.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Node>) {
        self.entries.push((name.into(), value.into()));
    }

    /// The first value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Mutable access to the first value stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Node {
    /// Debug-oriented rendering: scalars verbatim, containers in a compact
    /// brace/bracket form. Not a wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(s) => f.write_str(s),
            Node::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Node::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
