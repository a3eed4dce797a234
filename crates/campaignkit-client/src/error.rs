//! Error type for the client crate.

use campaignkit_xml::XmlError;

/// Errors that can occur while dispatching an API call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange itself failed (connect, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not decodable XML.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A GET/POST call was given a nested parameter value. Form transports
    /// flatten only the top level of the parameter map; nested structures are
    /// a caller contract violation on these transports.
    #[error("parameter '{0}' is not a scalar; GET/POST transports take flat key/value parameters")]
    NonScalarParam(String),

    /// The SOAP reply did not contain the expected element.
    #[error("response is missing the '{0}' element")]
    UnexpectedResponse(String),

    /// No API key was configured.
    #[error("API key is not configured")]
    MissingApiKey,

    /// A transport name that is not `soap`, `get`, or `post`.
    #[error("unknown transport '{0}' (expected soap, get, or post)")]
    UnknownTransport(String),

    /// An operation needed an ID that was neither passed nor configured as a
    /// client default.
    #[error("no {0} given and no default configured")]
    MissingId(&'static str),

    /// `User.GetSystemDate` returned something that is not a `Y-m-d H:M:S`
    /// timestamp.
    #[error("could not parse server system date '{0}'")]
    InvalidSystemDate(String),
}
