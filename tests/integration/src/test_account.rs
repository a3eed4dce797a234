//! Account-level smoke tests.

#[cfg(test)]
mod tests {
    use campaignkit_tree::Node;

    use crate::api_client;

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account"]
    async fn test_should_fetch_system_date() {
        let client = api_client();
        let reply = client.user_get_system_date().await.expect("call");
        let date = reply.as_ref().and_then(Node::as_scalar).expect("scalar date");
        // Y-m-d H:M:S
        assert_eq!(date.len(), 19, "unexpected date shape: {date}");
    }

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account"]
    async fn test_should_list_clients() {
        let client = api_client();
        let reply = client.user_get_clients().await.expect("call");
        let reply = reply.expect("non-empty reply");

        // One client or many; both shapes must be consumable uniformly.
        if let Some(clients) = reply.get("Client") {
            for c in clients.as_items() {
                assert!(c.get("ClientID").is_some(), "client entry without ClientID");
            }
        }
    }

    #[tokio::test]
    #[ignore = "requires a Campaign Monitor account"]
    async fn test_should_list_client_lists_as_dropdown() {
        let client = api_client();
        let pairs = client.client_get_lists_dropdown(None).await.expect("call");
        if let Some(pairs) = pairs {
            for (id, name) in &pairs {
                tracing::info!(%id, %name, "list");
                assert!(!id.is_empty());
            }
        }
    }
}
