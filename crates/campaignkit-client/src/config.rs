//! Client configuration.

use crate::transport::Transport;

/// The production endpoint for the legacy API.
pub const DEFAULT_ENDPOINT: &str = "http://app.campaignmonitor.com/api/api.asmx";

/// Configuration for a [`Client`](crate::Client).
///
/// The optional IDs are per-client defaults: operation wrappers fall back to
/// them when the corresponding argument is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The account API key, sent with every call.
    pub api_key: String,
    /// Base service URL. GET/POST append `/{action}`; SOAP posts to it as-is.
    pub endpoint: String,
    /// Which transport to use for all calls made by this client.
    pub transport: Transport,
    /// Default client ID for client-scoped operations.
    pub client_id: Option<String>,
    /// Default campaign ID for campaign-scoped operations.
    pub campaign_id: Option<String>,
    /// Default list ID for list-scoped operations.
    pub list_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            transport: Transport::default(),
            client_id: None,
            campaign_id: None,
            list_id: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `CAMPAIGNKIT_*` environment variables.
    ///
    /// Recognized: `CAMPAIGNKIT_API_KEY`, `CAMPAIGNKIT_ENDPOINT`,
    /// `CAMPAIGNKIT_TRANSPORT` (`soap`/`get`/`post`; unknown values keep the
    /// default), `CAMPAIGNKIT_CLIENT_ID`, `CAMPAIGNKIT_CAMPAIGN_ID`,
    /// `CAMPAIGNKIT_LIST_ID`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CAMPAIGNKIT_API_KEY") {
            config.api_key = v;
        }
        if let Ok(v) = std::env::var("CAMPAIGNKIT_ENDPOINT") {
            config.endpoint = v;
        }
        if let Ok(v) = std::env::var("CAMPAIGNKIT_TRANSPORT") {
            if let Ok(t) = v.parse() {
                config.transport = t;
            }
        }
        if let Ok(v) = std::env::var("CAMPAIGNKIT_CLIENT_ID") {
            config.client_id = Some(v);
        }
        if let Ok(v) = std::env::var("CAMPAIGNKIT_CAMPAIGN_ID") {
            config.campaign_id = Some(v);
        }
        if let Ok(v) = std::env::var("CAMPAIGNKIT_LIST_ID") {
            config.list_id = Some(v);
        }

        config
    }
}
