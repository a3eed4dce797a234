//! Client for the legacy Campaign Monitor email-marketing API.
//!
//! The remote service speaks three interchangeable transports — SOAP, HTTP GET,
//! and HTTP POST — and this crate normalizes all of them into one response
//! shape: the schemaless [`Node`] tree from `campaignkit-tree`, produced by the
//! `campaignkit-xml` decoder. Pick the transport per client via
//! [`ClientConfig`]; every call returns the same view of the data regardless.
//!
//! # Layers
//!
//! - [`Client::call`] is the transport dispatcher: it serializes the parameter
//!   map for the chosen transport, performs the HTTP exchange, and decodes the
//!   XML reply (an empty reply body becomes `Ok(None)`).
//! - The `api` modules provide thin wrappers for the catalog of remote
//!   operations (subscribers, clients, campaigns, user), each just building a
//!   parameter map and delegating to `call`.
//!
//! # Example
//!
//! ```no_run
//! use campaignkit_client::{Client, ClientConfig, Transport};
//!
//! # async fn run() -> Result<(), campaignkit_client::ClientError> {
//! let mut config = ClientConfig::new("your-api-key");
//! config.transport = Transport::Soap;
//! let client = Client::new(config)?;
//!
//! if let Some(lists) = client.client_get_lists(Some("12ab34cd")).await? {
//!     for list in lists.get("List").into_iter().flat_map(|n| n.as_items()) {
//!         println!("{:?}", list.get("Name"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod envelope;
mod error;
mod transport;

pub use api::CampaignDraft;
pub use client::Client;
pub use config::ClientConfig;
pub use error::ClientError;
pub use transport::Transport;

pub use campaignkit_tree::{Node, NodeMap};
pub use campaignkit_xml::NamePolicy;
