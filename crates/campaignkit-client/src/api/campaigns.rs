//! Campaign creation, sending, and reporting.

use chrono::{Duration, NaiveDateTime, Utc};

use campaignkit_tree::{Node, NodeMap};

use crate::client::Client;
use crate::error::ClientError;

use super::{DATE_FORMAT, pick_id};

/// The fields of a new draft campaign for
/// [`Client::campaign_create`](Client::campaign_create).
#[derive(Debug, Clone, Default)]
pub struct CampaignDraft {
    /// Campaign name; must be unique across the client's draft campaigns.
    pub name: String,
    /// Email subject line.
    pub subject: String,
    /// From name shown in recipients' mail clients.
    pub from_name: String,
    /// From address.
    pub from_email: String,
    /// Reply-to address.
    pub reply_to: String,
    /// URL of the HTML content.
    pub html_url: String,
    /// URL of the plain-text content.
    pub text_url: String,
    /// Subscriber lists to send to. Encoded as anonymous members, so they go
    /// out as `<string>` elements.
    pub subscriber_list_ids: Vec<String>,
    /// List segments to send to, in the shape
    /// [`client_get_segments`](Client::client_get_segments) returns.
    pub list_segments: Option<Node>,
    /// Client to create the campaign under; falls back to the configured
    /// default.
    pub client_id: Option<String>,
}

impl Client {
    /// `Campaign.Create`: create a draft campaign.
    ///
    /// Nested values (list IDs, segments) mean this operation requires the
    /// SOAP transport.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`] when no client
    /// ID is available.
    pub async fn campaign_create(&self, draft: &CampaignDraft) -> Result<Option<Node>, ClientError> {
        let client_id = pick_id(
            draft.client_id.as_deref(),
            &self.config().client_id,
            "client ID",
        )?;

        let mut params = NodeMap::new();
        params.push("ClientID", client_id);
        params.push("CampaignName", draft.name.as_str());
        params.push("CampaignSubject", draft.subject.as_str());
        params.push("FromName", draft.from_name.as_str());
        params.push("FromEmail", draft.from_email.as_str());
        params.push("ReplyTo", draft.reply_to.as_str());
        params.push("HtmlUrl", draft.html_url.as_str());
        params.push("TextUrl", draft.text_url.as_str());
        if !draft.subscriber_list_ids.is_empty() {
            params.push(
                "SubscriberListIDs",
                Node::List(
                    draft
                        .subscriber_list_ids
                        .iter()
                        .map(Node::scalar)
                        .collect(),
                ),
            );
        }
        if let Some(segments) = &draft.list_segments {
            params.push("ListSegments", segments.clone());
        }

        self.call("Campaign.Create", &params).await
    }

    /// `Campaign.Send`: schedule a campaign.
    ///
    /// A `send_date` in the past, or `None`, means "immediately": the server's
    /// own clock is fetched and padded by five seconds so the delivery date is
    /// never in the past from the server's point of view.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, [`ClientError::MissingId`], or
    /// [`ClientError::InvalidSystemDate`] if the server clock reply is
    /// unparseable.
    pub async fn campaign_send(
        &self,
        confirmation_email: &str,
        send_date: Option<NaiveDateTime>,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let campaign_id = pick_id(campaign_id, &self.config().campaign_id, "campaign ID")?;

        let send_date = match send_date {
            Some(date) if date > Utc::now().naive_utc() => date.format(DATE_FORMAT).to_string(),
            _ => self.immediate_send_date().await?,
        };

        let params = NodeMap::from_iter([
            ("CampaignID", campaign_id),
            ("ConfirmationEmail", confirmation_email),
            ("SendDate", send_date.as_str()),
        ]);
        self.call("Campaign.Send", &params).await
    }

    /// Server system date plus five seconds, formatted for the wire.
    async fn immediate_send_date(&self) -> Result<String, ClientError> {
        let reply = self.user_get_system_date().await?;
        let text = reply
            .as_ref()
            .and_then(Node::as_scalar)
            .ok_or_else(|| ClientError::UnexpectedResponse("User.GetSystemDateResult".to_owned()))?
            .to_owned();
        let date = NaiveDateTime::parse_from_str(&text, DATE_FORMAT)
            .map_err(|_| ClientError::InvalidSystemDate(text))?;
        Ok((date + Duration::seconds(5)).format(DATE_FORMAT).to_string())
    }

    /// `Campaign.GetSummary`: aggregate results for a campaign.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_summary(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetSummary", campaign_id)
            .await
    }

    /// `Campaign.GetOpens`.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_opens(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetOpens", campaign_id)
            .await
    }

    /// `Campaign.GetBounces`.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_bounces(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetBounces", campaign_id)
            .await
    }

    /// `Campaign.GetSubscriberClicks`.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_subscriber_clicks(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetSubscriberClicks", campaign_id)
            .await
    }

    /// `Campaign.GetUnsubscribes`.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_unsubscribes(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetUnsubscribes", campaign_id)
            .await
    }

    /// `Campaign.GetLists`: the lists a campaign was sent to.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_get_lists(
        &self,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        self.campaign_simple_action("Campaign.GetLists", campaign_id)
            .await
    }

    /// Run any `CampaignID`-only action.
    ///
    /// # Errors
    ///
    /// Transport/decode errors, or [`ClientError::MissingId`].
    pub async fn campaign_simple_action(
        &self,
        action: &str,
        campaign_id: Option<&str>,
    ) -> Result<Option<Node>, ClientError> {
        let campaign_id = pick_id(campaign_id, &self.config().campaign_id, "campaign ID")?;
        let params = NodeMap::from_iter([("CampaignID", campaign_id)]);
        self.call(action, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaignkit_xml::to_xml;

    #[test]
    fn test_should_encode_list_ids_as_string_elements() {
        let ids = Node::List(vec![Node::scalar("12ab"), Node::scalar("34cd")]);
        let tree = Node::map([("SubscriberListIDs", ids)]);
        assert_eq!(
            to_xml(&tree, 0),
            "<SubscriberListIDs>\n\
             \t<string>12ab</string>\n\
             \t<string>34cd</string>\n\
             </SubscriberListIDs>\n"
        );
    }
}
