//! Subscriber and subscriber-list operations.

use chrono::NaiveDateTime;

use campaignkit_tree::{Node, NodeMap};

use crate::client::Client;
use crate::error::ClientError;

use super::{format_date, pick_id};

impl Client {
    /// `Subscribers.GetActive`: subscribers active since `date` (`None` means
    /// since the epoch, i.e. all of them).
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`] when no list ID
    /// is given or configured.
    pub async fn subscribers_get_active(
        &self,
        date: Option<NaiveDateTime>,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.subscribers_since("Subscribers.GetActive", date, list_id)
            .await
    }

    /// `Subscribers.GetUnsubscribed`: see [`subscribers_get_active`](Self::subscribers_get_active).
    ///
    /// # Errors
    ///
    /// As for [`subscribers_get_active`](Self::subscribers_get_active).
    pub async fn subscribers_get_unsubscribed(
        &self,
        date: Option<NaiveDateTime>,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.subscribers_since("Subscribers.GetUnsubscribed", date, list_id)
            .await
    }

    /// `Subscribers.GetBounced`: see [`subscribers_get_active`](Self::subscribers_get_active).
    ///
    /// # Errors
    ///
    /// As for [`subscribers_get_active`](Self::subscribers_get_active).
    pub async fn subscribers_get_bounced(
        &self,
        date: Option<NaiveDateTime>,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.subscribers_since("Subscribers.GetBounced", date, list_id)
            .await
    }

    /// Shared body of the three date-windowed subscriber queries.
    async fn subscribers_since(
        &self,
        action: &str,
        date: Option<NaiveDateTime>,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let date = format_date(date);
        let params = NodeMap::from_iter([("ListID", list_id), ("Date", date.as_str())]);
        self.call(action, &params).await
    }

    /// `Subscribers.GetSingleSubscriber`: full detail for one email address.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn subscribers_get_single_subscriber(
        &self,
        email: &str,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let params = NodeMap::from_iter([("ListID", list_id), ("EmailAddress", email)]);
        self.call("Subscribers.GetSingleSubscriber", &params).await
    }

    /// `Subscriber.Add` (or `Subscriber.AddAndResubscribe` when `resubscribe`
    /// is set).
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn subscriber_add(
        &self,
        email: &str,
        name: &str,
        list_id: Option<&str>,
        resubscribe: bool,
    ) -> Result<Option<Node>, ClientError> {
        let action = if resubscribe {
            "Subscriber.AddAndResubscribe"
        } else {
            "Subscriber.Add"
        };
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let params =
            NodeMap::from_iter([("ListID", list_id), ("Email", email), ("Name", name)]);
        self.call(action, &params).await
    }

    /// Add a subscriber, and if the add succeeded but the address had
    /// previously unsubscribed, add again with resubscription.
    ///
    /// # Errors
    ///
    /// As for [`subscriber_add`](Self::subscriber_add).
    pub async fn subscriber_add_redundant(
        &self,
        email: &str,
        name: &str,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let added = self.subscriber_add(email, name, list_id, false).await?;
        if code_is_success(added.as_ref())
            && !self.subscribers_get_is_subscribed(email, list_id).await?
        {
            return self.subscriber_add(email, name, list_id, true).await;
        }
        Ok(added)
    }

    /// `Subscriber.AddWithCustomFields` (or the `AndResubscribe` variant).
    ///
    /// Each `(key, value)` pair becomes one custom-field member on the wire.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`]. Only meaningful
    /// over SOAP: the custom fields are nested, which the form transports
    /// reject as [`ClientError::NonScalarParam`].
    pub async fn subscriber_add_with_custom_fields(
        &self,
        email: &str,
        name: &str,
        fields: &[(&str, &str)],
        list_id: Option<&str>,
        resubscribe: bool,
    ) -> Result<Option<Node>, ClientError> {
        let action = if resubscribe {
            "Subscriber.AddAndResubscribeWithCustomFields"
        } else {
            "Subscriber.AddWithCustomFields"
        };
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let mut params = NodeMap::new();
        params.push("ListID", list_id);
        params.push("Email", email);
        params.push("Name", name);
        params.push("CustomFields", custom_fields_node(fields));
        self.call(action, &params).await
    }

    /// Custom-fields variant of
    /// [`subscriber_add_redundant`](Self::subscriber_add_redundant).
    ///
    /// # Errors
    ///
    /// As for [`subscriber_add_with_custom_fields`](Self::subscriber_add_with_custom_fields).
    pub async fn subscriber_add_with_custom_fields_redundant(
        &self,
        email: &str,
        name: &str,
        fields: &[(&str, &str)],
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let added = self
            .subscriber_add_with_custom_fields(email, name, fields, list_id, false)
            .await?;
        if code_is_success(added.as_ref())
            && !self.subscribers_get_is_subscribed(email, list_id).await?
        {
            return self
                .subscriber_add_with_custom_fields(email, name, fields, list_id, true)
                .await;
        }
        Ok(added)
    }

    /// `Subscriber.Unsubscribe`.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn subscriber_unsubscribe(
        &self,
        email: &str,
        list_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let params = NodeMap::from_iter([("ListID", list_id), ("Email", email)]);
        self.call("Subscriber.Unsubscribe", &params).await
    }

    /// `Subscribers.GetIsSubscribed`: whether `email` is currently subscribed.
    ///
    /// The service answers with the literal text `True` or `False`; anything
    /// other than an explicit `False` counts as subscribed, matching the
    /// original client's comparison.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn subscribers_get_is_subscribed(
        &self,
        email: &str,
        list_id: Option<&str>,
    ) -> Result<bool, ClientError> {
        let list_id = pick_id(list_id, &self.config().list_id, "list ID")?;
        let params = NodeMap::from_iter([("ListID", list_id), ("Email", email)]);
        let reply = self.call("Subscribers.GetIsSubscribed", &params).await?;
        Ok(!matches!(
            reply.as_ref().and_then(Node::as_scalar),
            Some("False")
        ))
    }

    /// Check `email` against several lists, returning the IDs of the lists it
    /// is subscribed to (one remote call per list).
    ///
    /// # Errors
    ///
    /// As for [`subscribers_get_is_subscribed`](Self::subscribers_get_is_subscribed).
    pub async fn check_subscriptions(
        &self,
        email: &str,
        list_ids: &[&str],
    ) -> Result<Vec<String>, ClientError> {
        let statuses = self.check_subscriptions_by_list(email, list_ids).await?;
        Ok(statuses
            .into_iter()
            .filter(|(_, subscribed)| *subscribed)
            .map(|(list_id, _)| list_id)
            .collect())
    }

    /// Check `email` against several lists, returning every list ID paired
    /// with its subscription state, in the order the IDs were given (one
    /// remote call per list).
    ///
    /// Unlike [`check_subscriptions`](Self::check_subscriptions), unsubscribed
    /// lists are kept in the result.
    ///
    /// # Errors
    ///
    /// As for [`subscribers_get_is_subscribed`](Self::subscribers_get_is_subscribed).
    pub async fn check_subscriptions_by_list(
        &self,
        email: &str,
        list_ids: &[&str],
    ) -> Result<Vec<(String, bool)>, ClientError> {
        let mut statuses = Vec::with_capacity(list_ids.len());
        for list_id in list_ids {
            let subscribed = self.subscribers_get_is_subscribed(email, Some(list_id)).await?;
            statuses.push(((*list_id).to_owned(), subscribed));
        }
        Ok(statuses)
    }
}

/// Whether a reply carries the success code `0`.
fn code_is_success(reply: Option<&Node>) -> bool {
    reply
        .and_then(|n| n.get("Code"))
        .and_then(Node::as_scalar)
        == Some("0")
}

/// Build the positional custom-fields tree: each member is a `{Key, Value}`
/// map, so the encoder emits it under the structure tag
/// (`SubscriberCustomField` by default).
fn custom_fields_node(fields: &[(&str, &str)]) -> Node {
    Node::List(
        fields
            .iter()
            .map(|(key, value)| Node::map([("Key", *key), ("Value", *value)]))
            .collect(),
    )
}
