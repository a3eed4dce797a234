//! Client-scoped operations (lists, campaigns, segments).

use campaignkit_tree::{Node, NodeMap};

use crate::client::Client;
use crate::error::ClientError;

use super::pick_id;

impl Client {
    /// `Client.GetLists`: all subscriber lists for a client.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`] when no client
    /// ID is given or configured.
    pub async fn client_get_lists(
        &self,
        client_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.client_simple_action("Client.GetLists", client_id).await
    }

    /// `Client.GetLists` reduced to `(ListID, Name)` pairs, for populating a
    /// selection UI.
    ///
    /// Returns `None` when the reply carries no `List` field. Handles both the
    /// one-list and many-list reply shapes via the one-or-many view.
    ///
    /// # Errors
    ///
    /// As for [`client_get_lists`](Self::client_get_lists).
    pub async fn client_get_lists_dropdown(
        &self,
        client_id: Option<&str>,
    ) -> Result<Option<Vec<(String, String)>>, ClientError> {
        let Some(reply) = self.client_get_lists(client_id).await? else {
            return Ok(None);
        };
        let Some(lists) = reply.get("List") else {
            return Ok(None);
        };

        let mut pairs = Vec::new();
        for list in lists.as_items() {
            let id = list.get("ListID").and_then(Node::as_scalar);
            let name = list.get("Name").and_then(Node::as_scalar);
            if let (Some(id), Some(name)) = (id, name) {
                pairs.push((id.to_owned(), name.to_owned()));
            }
        }
        Ok(Some(pairs))
    }

    /// `Client.GetCampaigns`: all campaigns sent for a client.
    ///
    /// # Errors
    ///
    /// As for [`client_get_lists`](Self::client_get_lists).
    pub async fn client_get_campaigns(
        &self,
        client_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.client_simple_action("Client.GetCampaigns", client_id)
            .await
    }

    /// `Client.GetSegments`: all list segments for a client, in the shape
    /// [`campaign_create`](Self::campaign_create) accepts back.
    ///
    /// # Errors
    ///
    /// As for [`client_get_lists`](Self::client_get_lists).
    pub async fn client_get_segments(
        &self,
        client_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.client_simple_action("Client.GetSegments", client_id)
            .await
    }

    /// Shared body of the `ClientID`-only operations.
    async fn client_simple_action(
        &self,
        action: &str,
        client_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let client_id = pick_id(client_id, &self.config().client_id, "client ID")?;
        let params = NodeMap::from_iter([("ClientID", client_id)]);
        self.call(action, &params).await
    }
}
