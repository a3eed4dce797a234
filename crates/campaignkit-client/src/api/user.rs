//! Account-level operations.

use campaignkit_tree::{Node, NodeMap};

use crate::client::Client;
use crate::error::ClientError;

impl Client {
    /// `User.GetClients`: all clients under the account the API key belongs to.
    ///
    /// # Errors
    ///
    /// Transport/decode errors.
    pub async fn user_get_clients(&self) -> Result<Option<Node>, ClientError> {
        self.call("User.GetClients", &NodeMap::new()).await
    }

    /// `User.GetSystemDate`: the server's clock as a `Y-m-d H:M:S` scalar.
    ///
    /// # Errors
    ///
    /// Transport/decode errors.
    pub async fn user_get_system_date(&self) -> Result<Option<Node>, ClientError> {
        self.call("User.GetSystemDate", &NodeMap::new()).await
    }
}
