//! Transport selection and the form-encoded wire format.

use std::fmt;
use std::str::FromStr;

use campaignkit_tree::NodeMap;

use crate::error::ClientError;

/// How a call reaches the service. All three transports return the same
/// decoded view of the reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transport {
    /// SOAP 1.1: the parameter tree is serialized to XML and wrapped in an
    /// envelope. The only transport that supports nested parameters.
    Soap,
    /// HTTP GET with the parameters as a query string. The default.
    #[default]
    Get,
    /// HTTP POST with an `application/x-www-form-urlencoded` body.
    Post,
}

impl Transport {
    /// Lowercase wire name, as used in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Soap => "soap",
            Transport::Get => "get",
            Transport::Post => "post",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "soap" => Ok(Transport::Soap),
            "get" => Ok(Transport::Get),
            "post" => Ok(Transport::Post),
            _ => Err(ClientError::UnknownTransport(s.to_owned())),
        }
    }
}

/// Flatten the top level of a parameter map into `key=value` form encoding,
/// with the API key as the leading pair.
///
/// Only the top level is flattened; this is the GET/POST contract. The SOAP
/// transport goes through the XML encoder instead and never calls this.
///
/// # Errors
///
/// Returns [`ClientError::NonScalarParam`] if any top-level value is not a
/// scalar.
pub fn flatten_top_level(api_key: &str, params: &NodeMap) -> Result<String, ClientError> {
    let mut form = form_urlencoded::Serializer::new(String::new());
    form.append_pair("ApiKey", api_key);
    for (name, value) in params.iter() {
        let text = value
            .as_scalar()
            .ok_or_else(|| ClientError::NonScalarParam(name.to_owned()))?;
        form.append_pair(name, text);
    }
    Ok(form.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaignkit_tree::Node;

    #[test]
    fn test_should_parse_transport_names() {
        assert_eq!("soap".parse::<Transport>().unwrap(), Transport::Soap);
        assert_eq!("GET".parse::<Transport>().unwrap(), Transport::Get);
        assert_eq!("Post".parse::<Transport>().unwrap(), Transport::Post);
        assert!("smtp".parse::<Transport>().is_err());
    }

    #[test]
    fn test_should_lead_with_api_key() {
        let params = NodeMap::from_iter([("ListID", "42"), ("Email", "x@y.z")]);
        let query = flatten_top_level("key123", &params).expect("flatten");
        assert_eq!(query, "ApiKey=key123&ListID=42&Email=x%40y.z");
    }

    #[test]
    fn test_should_url_encode_values() {
        let params = NodeMap::from_iter([("Name", "Fish & Chips")]);
        let query = flatten_top_level("k", &params).expect("flatten");
        assert_eq!(query, "ApiKey=k&Name=Fish+%26+Chips");
    }

    #[test]
    fn test_should_reject_nested_values() {
        let params = NodeMap::from_iter([(
            "CustomFields",
            Node::map([("Key", "a"), ("Value", "b")]),
        )]);
        let err = flatten_top_level("k", &params).unwrap_err();
        assert!(matches!(err, ClientError::NonScalarParam(name) if name == "CustomFields"));
    }

    #[test]
    fn test_should_flatten_empty_params_to_key_only() {
        let query = flatten_top_level("k", &NodeMap::new()).expect("flatten");
        assert_eq!(query, "ApiKey=k");
    }
}
