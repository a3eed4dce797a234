//! Subscriber lifecycle tests against a real list.
//!
//! These mutate the list named by `CAMPAIGNKIT_LIST_ID`; point them at a
//! throwaway list.

#[cfg(test)]
mod tests {
    use campaignkit_tree::Node;

    use crate::api_client;

    const TEST_EMAIL: &str = "campaignkit-it@example.com";

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account and mutates a list"]
    async fn test_should_add_and_unsubscribe() {
        let client = api_client();

        let added = client
            .subscriber_add(TEST_EMAIL, "Integration Test", None, false)
            .await
            .expect("add");
        let code = added
            .as_ref()
            .and_then(|n| n.get("Code"))
            .and_then(Node::as_scalar);
        assert_eq!(code, Some("0"), "add failed: {added:?}");

        assert!(
            client
                .subscribers_get_is_subscribed(TEST_EMAIL, None)
                .await
                .expect("is_subscribed")
        );

        client
            .subscriber_unsubscribe(TEST_EMAIL, None)
            .await
            .expect("unsubscribe");
    }

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account and mutates a list"]
    async fn test_should_add_with_custom_fields_over_soap() {
        let mut config = campaignkit_client::ClientConfig::from_env();
        config.transport = campaignkit_client::Transport::Soap;
        let client = campaignkit_client::Client::new(config).expect("client");

        let added = client
            .subscriber_add_with_custom_fields(
                TEST_EMAIL,
                "Integration Test",
                &[("source", "integration"), ("attempt", "1")],
                None,
                true,
            )
            .await
            .expect("add with custom fields");
        let code = added
            .as_ref()
            .and_then(|n| n.get("Code"))
            .and_then(Node::as_scalar);
        assert_eq!(code, Some("0"), "add failed: {added:?}");
    }

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account and mutates a list"]
    async fn test_should_report_subscription_state_per_list() {
        let client = api_client();
        let list_id = client
            .config()
            .list_id
            .clone()
            .expect("CAMPAIGNKIT_LIST_ID");

        client
            .subscriber_add(TEST_EMAIL, "Integration Test", None, true)
            .await
            .expect("add");

        let statuses = client
            .check_subscriptions_by_list(TEST_EMAIL, &[&list_id])
            .await
            .expect("check by list");
        assert_eq!(statuses, vec![(list_id.clone(), true)]);

        // The filtered form agrees with the per-list one.
        let subscribed = client
            .check_subscriptions(TEST_EMAIL, &[&list_id])
            .await
            .expect("check");
        assert_eq!(subscribed, vec![list_id]);
    }

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account"]
    async fn test_should_report_active_subscribers_uniformly() {
        let client = api_client();
        let reply = client
            .subscribers_get_active(None, None)
            .await
            .expect("get active");

        if let Some(reply) = reply {
            if let Some(subscribers) = reply.get("Subscriber") {
                for s in subscribers.as_items() {
                    assert!(s.get("EmailAddress").is_some() || s.as_scalar().is_some());
                }
            }
        }
    }
}
