//! Integration tests for the campaignkit client.
//!
//! These tests talk to the real Campaign Monitor service and require a valid
//! account, so they are marked `#[ignore]` and skipped during normal
//! `cargo test`. Run them with:
//!
//! ```text
//! CAMPAIGNKIT_API_KEY=... CAMPAIGNKIT_CLIENT_ID=... \
//!     cargo test -p campaignkit-integration -- --ignored
//! ```
//!
//! `CAMPAIGNKIT_TRANSPORT` selects the transport under test (default `get`).

use std::sync::Once;

use campaignkit_client::{Client, ClientConfig};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a client from the `CAMPAIGNKIT_*` environment.
///
/// # Panics
///
/// Panics if `CAMPAIGNKIT_API_KEY` is unset, since every ignored test needs it.
#[must_use]
pub fn api_client() -> Client {
    init_tracing();
    let config = ClientConfig::from_env();
    Client::new(config).expect("CAMPAIGNKIT_API_KEY must be set for integration tests")
}

mod test_account;
mod test_subscribers;
