//! SOAP 1.1 envelope construction and unwrapping.

use campaignkit_tree::{Node, NodeMap};
use campaignkit_xml::{NamePolicy, to_xml_with_policy};

use crate::error::ClientError;

/// Namespace of the remote API; also the `SOAPAction` prefix.
pub const API_NAMESPACE: &str = "http://app.campaignmonitor.com/api/";

/// Build the request envelope for `action`.
///
/// The action element carries the `ApiKey` child first, then the encoded
/// parameter tree at two levels of indentation, matching the layout the
/// service was built against.
pub fn build_envelope(
    action: &str,
    api_key: &str,
    params: &NodeMap,
    policy: &NamePolicy,
) -> String {
    let mut fields = NodeMap::new();
    fields.push("ApiKey", Node::scalar(api_key));
    for (name, value) in params.iter() {
        fields.push(name, value.clone());
    }
    let body = to_xml_with_policy(&Node::Map(fields), 2, policy);

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\n\
         <soap:Body>\n\
         \t<{action} xmlns=\"{API_NAMESPACE}\">\n\
         {body}\
         \t</{action}>\n\
         </soap:Body>\n\
         </soap:Envelope>"
    )
}

/// The quoted `SOAPAction` header value for `action`.
#[must_use]
pub fn soap_action(action: &str) -> String {
    format!("\"{API_NAMESPACE}{action}\"")
}

/// Remove the `<soap:Body>` wrapper from a reply so the action response
/// element sits directly under the envelope root for decoding.
#[must_use]
pub fn strip_soap_body(xml: &str) -> String {
    xml.replace("<soap:Body>", "").replace("</soap:Body>", "")
}

/// Navigate a decoded SOAP reply to the `{action}Result` subtree.
///
/// # Errors
///
/// Returns [`ClientError::UnexpectedResponse`] naming the element that was
/// absent (a SOAP fault, or a reply for a different action).
pub fn extract_result(reply: &Node, action: &str) -> Result<Node, ClientError> {
    let response_tag = format!("{action}Response");
    let result_tag = format!("{action}Result");

    let response = reply
        .get(&response_tag)
        .ok_or(ClientError::UnexpectedResponse(response_tag))?;
    let result = response
        .get(&result_tag)
        .ok_or(ClientError::UnexpectedResponse(result_tag))?;
    Ok(result.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaignkit_xml::from_xml;

    #[test]
    fn test_should_build_envelope_with_api_key_first() {
        let params = NodeMap::from_iter([("ListID", "42"), ("Email", "x@y.z")]);
        let envelope = build_envelope(
            "Subscriber.Add",
            "key123",
            &params,
            &NamePolicy::default(),
        );

        assert!(envelope.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(envelope.contains("xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\""));
        assert!(envelope.contains(
            "\t<Subscriber.Add xmlns=\"http://app.campaignmonitor.com/api/\">\n\
             \t\t<ApiKey>key123</ApiKey>\n\
             \t\t<ListID>42</ListID>\n\
             \t\t<Email>x@y.z</Email>\n\
             \t</Subscriber.Add>"
        ));
        assert!(envelope.ends_with("</soap:Envelope>"));
    }

    #[test]
    fn test_should_escape_parameter_values_in_envelope() {
        let params = NodeMap::from_iter([("Name", "Fish & Chips")]);
        let envelope = build_envelope("Subscriber.Add", "k", &params, &NamePolicy::default());
        assert!(envelope.contains("<Name>Fish &amp; Chips</Name>"));
    }

    #[test]
    fn test_should_quote_soap_action() {
        assert_eq!(
            soap_action("Client.GetLists"),
            "\"http://app.campaignmonitor.com/api/Client.GetLists\""
        );
    }

    #[test]
    fn test_should_strip_body_and_extract_result() {
        let reply = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
            <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
            <soap:Body>\
            <Client.GetListsResponse xmlns=\"http://app.campaignmonitor.com/api/\">\
            <Client.GetListsResult>\
            <List><ListID>1</ListID><Name>A</Name></List>\
            <List><ListID>2</ListID><Name>B</Name></List>\
            </Client.GetListsResult>\
            </Client.GetListsResponse>\
            </soap:Body>\
            </soap:Envelope>";

        let stripped = strip_soap_body(reply);
        assert!(!stripped.contains("soap:Body"));

        let decoded = from_xml(&stripped).expect("decode");
        let result = extract_result(&decoded, "Client.GetLists").expect("result");
        let lists = result.get("List").expect("List").as_list().expect("list");
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1].get("Name").unwrap().as_scalar(), Some("B"));
    }

    #[test]
    fn test_should_report_missing_result_element() {
        let decoded = from_xml(
            "<Envelope><soap:Fault><faultstring>bad key</faultstring></soap:Fault></Envelope>",
        )
        .expect("decode");
        let err = extract_result(&decoded, "Client.GetLists").unwrap_err();
        assert!(
            matches!(err, ClientError::UnexpectedResponse(tag) if tag == "Client.GetListsResponse")
        );
    }
}
