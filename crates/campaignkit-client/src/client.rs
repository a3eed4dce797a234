//! The transport dispatcher.

use reqwest::header::CONTENT_TYPE;

use campaignkit_tree::{Node, NodeMap};
use campaignkit_xml::{NamePolicy, from_xml_with_policy};

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::ClientError;
use crate::transport::{Transport, flatten_top_level};

/// A client for the remote API.
///
/// Construct once with a [`ClientConfig`] and share freely: calls hold no
/// mutable state, so a client can serve concurrent tasks without coordination.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    policy: NamePolicy,
}

impl Client {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if the configuration has no API
    /// key.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            policy: NamePolicy::default(),
        })
    }

    /// Replace the element-name policy used for encoding positional parameters
    /// and unwrapping anonymous scalars on decode.
    #[must_use]
    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invoke a remote action with the given parameter map.
    ///
    /// The transport comes from the configuration. SOAP serializes the full
    /// parameter tree through the XML encoder; GET and POST flatten only the
    /// top level into form pairs. In every case the XML reply is decoded into
    /// a [`Node`], and an empty reply body yields `Ok(None)` without invoking
    /// the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures, non-success HTTP
    /// statuses, undecodable replies, or (on GET/POST) nested parameters.
    pub async fn call(&self, action: &str, params: &NodeMap) -> Result<Option<Node>, ClientError> {
        tracing::debug!(
            action,
            transport = %self.config.transport,
            endpoint = %self.config.endpoint,
            "dispatching API call"
        );
        match self.config.transport {
            Transport::Soap => self.call_soap(action, params).await,
            Transport::Get | Transport::Post => self.call_form(action, params).await,
        }
    }

    async fn call_soap(&self, action: &str, params: &NodeMap) -> Result<Option<Node>, ClientError> {
        let request = envelope::build_envelope(action, &self.config.api_key, params, &self.policy);
        tracing::trace!(body = %request, "SOAP request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", envelope::soap_action(action))
            .body(request)
            .send()
            .await?;

        let Some(text) = self.read_body(response).await? else {
            return Ok(None);
        };

        let stripped = envelope::strip_soap_body(&text);
        let decoded = from_xml_with_policy(&stripped, &self.policy)?;
        match decoded {
            // Normal reply: unwrap down to the action's Result subtree.
            Node::Map(_) => Ok(Some(envelope::extract_result(&decoded, action)?)),
            // A reply that decodes to a bare value is returned as-is.
            other => Ok(Some(other)),
        }
    }

    async fn call_form(&self, action: &str, params: &NodeMap) -> Result<Option<Node>, ClientError> {
        let form = flatten_top_level(&self.config.api_key, params)?;
        let url = format!("{}/{}", self.config.endpoint.trim_end_matches('/'), action);
        tracing::trace!(%url, body = %form, "form request");

        let request = match self.config.transport {
            Transport::Get => self.http.get(format!("{url}?{form}")),
            _ => self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form),
        };

        let Some(text) = self.read_body(request.send().await?).await? else {
            return Ok(None);
        };
        Ok(Some(from_xml_with_policy(&text, &self.policy)?))
    }

    /// Read the reply body, mapping non-success statuses to an error and an
    /// empty body to `None`.
    async fn read_body(&self, response: reqwest::Response) -> Result<Option<String>, ClientError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::debug!(%status, "API call failed");
            return Err(ClientError::Status(status));
        }
        tracing::trace!(body = %text, "response");
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}
