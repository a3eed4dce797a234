//! Generic node tree for the Campaign Monitor wire codec.
//!
//! This crate provides the universal in-memory representation exchanged between
//! the XML codec and its callers: a [`Node`] is a string [`Scalar`](Node::Scalar),
//! an insertion-ordered [`Map`](Node::Map) of named children, or a
//! [`List`](Node::List) of repeated siblings. Both directions of the codec
//! (`campaignkit-xml`) and the transport layer (`campaignkit-client`) operate on
//! this one shape; no schema is involved.
//!
//! Values are ephemeral: built per call, consumed by the next stage, discarded.

mod node;

pub use node::{Node, NodeMap};
