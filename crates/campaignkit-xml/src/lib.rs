//! Schemaless XML codec for the Campaign Monitor API wire format.
//!
//! This crate converts between XML fragments and the generic
//! [`Node`](campaignkit_tree::Node) tree in both directions, without any schema:
//!
//! - [`to_xml`] serializes a node tree into a tab-indented XML fragment for
//!   request bodies.
//! - [`from_xml`] parses a response document into a node tree, collapsing
//!   childless elements into scalars and promoting repeated sibling names into
//!   ordered lists.
//!
//! The two directions are symmetric but deliberately not inverse: list-vs-singleton
//! and positional-key information is lost on the wire (see the decoder docs).
//! Element names for positional values follow the configurable [`NamePolicy`].

pub mod decode;
pub mod encode;
pub mod error;
pub mod policy;

pub use decode::{from_xml, from_xml_with_policy};
pub use encode::{to_xml, to_xml_with_policy};
pub use error::XmlError;
pub use policy::NamePolicy;
