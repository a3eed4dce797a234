//! Error type for the XML codec.

/// Errors that can occur while decoding XML into a node tree.
///
/// Encoding has no error path: every [`Node`](campaignkit_tree::Node) is
/// encodable by construction.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The input was not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// Element or text content was not decodable as text.
    #[error("failed to decode XML text: {0}")]
    Text(String),

    /// The document ended before the current element was closed, or contained
    /// no root element at all.
    #[error("malformed XML: {0}")]
    Malformed(&'static str),
}
