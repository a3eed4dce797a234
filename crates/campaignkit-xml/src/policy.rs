//! Element-name resolution for positionally-indexed values.

use campaignkit_tree::Node;

/// The element names used when a value has no name of its own.
///
/// When the encoder walks a positional sequence (a `List`, or a map keyed
/// `"0"`, `"1"`, …) there is no caller-supplied element name, so the name is
/// re-derived from the value's shape: integer-looking scalars use
/// [`int_tag`](Self::int_tag), other scalars use [`string_tag`](Self::string_tag),
/// and nested structures use [`struct_tag`](Self::struct_tag). The decoder reads
/// the same table in reverse, collapsing the two scalar tags to the empty-string
/// key so positional members come back un-keyed.
///
/// The defaults (`int` / `string` / `SubscriberCustomField`) are the names the
/// Campaign Monitor schema expects. They are a narrow convention for that one
/// remote schema, not a general serialization rule, which is why this is a
/// value you can override rather than a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePolicy {
    /// Element name for an un-keyed integer-looking scalar.
    pub int_tag: String,
    /// Element name for any other un-keyed scalar.
    pub string_tag: String,
    /// Element name for an un-keyed nested structure.
    pub struct_tag: String,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            int_tag: "int".to_owned(),
            string_tag: "string".to_owned(),
            struct_tag: "SubscriberCustomField".to_owned(),
        }
    }
}

impl NamePolicy {
    /// Whether `name` is one of the two anonymous-scalar tags the decoder must
    /// unwrap to the empty-string key.
    #[must_use]
    pub fn is_anonymous_tag(&self, name: &str) -> bool {
        name == self.int_tag || name == self.string_tag
    }

    /// Derive the element name for an un-keyed value from its shape.
    ///
    /// A scalar counts as integer-looking when it is an optional `-` followed
    /// by one or more ASCII digits; everything else is a plain string. Nested
    /// maps and lists take the structure tag.
    #[must_use]
    pub fn derive_name(&self, value: &Node) -> &str {
        match value {
            Node::Scalar(s) if looks_like_int(s) => &self.int_tag,
            Node::Scalar(_) => &self.string_tag,
            Node::Map(_) | Node::List(_) => &self.struct_tag,
        }
    }
}

fn looks_like_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
