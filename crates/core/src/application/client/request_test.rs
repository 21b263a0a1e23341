//! Unit tests for RpcClient request orchestration

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::{ClientError, UNKNOWN_RPC_ERROR};
    use crate::port::transport::mocks::{MockBehavior, MockTransport};
    use crate::port::SequentialIdProvider;
    use crate::rpc_params;
    use serde::Deserialize;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    const API_ADDRESS: &str = "http://127.0.0.1:1234/rpc/v0";

    fn successful_response() -> Value {
        json!({"jsonrpc": "2.0", "result": "fake response result", "id": 1})
    }

    fn error_response() -> Value {
        json!({
            "jsonrpc": "2.0",
            "error": {"code": 1, "message": "get actor: GetActor called on undefined address"}
        })
    }

    fn client_with(transport: &MockTransport, config: ClientConfig) -> RpcClient {
        RpcClient::new(config, Arc::new(transport.clone())).unwrap()
    }

    #[test]
    fn test_new_requires_api_address() {
        let transport = MockTransport::replying(successful_response());

        let err = RpcClient::new(ClientConfig::default(), Arc::new(transport.clone())).unwrap_err();

        assert!(matches!(err, ClientError::Configuration(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_sends_namespaced_envelope() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        assert_ok!(client.request("ChainHead", rpc_params![]).await);

        let call = transport.last_call().unwrap();
        assert_eq!(call.url, API_ADDRESS);
        assert_eq!(
            call.body,
            json!({"jsonrpc": "2.0", "method": "Filecoin.ChainHead", "params": [], "id": 1})
        );
    }

    #[tokio::test]
    async fn test_request_passes_params_in_order() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        client
            .request(
                "FakeJsonRpcMethodWithMultipleParams",
                rpc_params!["t1mbk7q6gm4rjlndfqw6f2vkfgqotres3fgicb2uq", "RIP Kobe."],
            )
            .await
            .unwrap();

        let body = transport.last_call().unwrap().body;
        assert_eq!(body["method"], "Filecoin.FakeJsonRpcMethodWithMultipleParams");
        assert_eq!(
            body["params"],
            json!(["t1mbk7q6gm4rjlndfqw6f2vkfgqotres3fgicb2uq", "RIP Kobe."])
        );
    }

    #[tokio::test]
    async fn test_request_params_are_opaque() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));
        let tipset_key = json!([{"/": "bafy2bzacea"}]);

        client
            .request("StateGetActor", rpc_params!["f01234", tipset_key.clone(), Value::Null, 0])
            .await
            .unwrap();

        let body = transport.last_call().unwrap().body;
        assert_eq!(body["params"], json!(["f01234", tipset_key, null, 0]));
    }

    #[tokio::test]
    async fn test_headers_without_token() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        client.request("ChainHead", rpc_params![]).await.unwrap();

        let headers = transport.last_call().unwrap().headers;
        assert_eq!(headers.get("Content-Type"), Some("text/plain;charset=UTF-8"));
        assert_eq!(headers.get("Accept"), Some("*/*"));
        assert!(!headers.contains("Authorization"));
        assert_eq!(headers.len(), 2);
    }

    #[tokio::test]
    async fn test_headers_with_token() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(
            &transport,
            ClientConfig::new(API_ADDRESS).with_token("eyJhbGciOiJIUzI1NiJ9"),
        );

        client.request("ChainHead", rpc_params![]).await.unwrap();

        let headers = transport.last_call().unwrap().headers;
        assert_eq!(headers.get("authorization"), Some("Bearer eyJhbGciOiJIUzI1NiJ9"));
    }

    #[tokio::test]
    async fn test_empty_token_sends_no_authorization() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS).with_token(""));

        client.request("ChainHead", rpc_params![]).await.unwrap();

        assert!(!transport.last_call().unwrap().headers.contains("Authorization"));
    }

    #[tokio::test]
    async fn test_request_returns_result() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let result = client.request("FakeMethod", rpc_params![]).await.unwrap();

        assert_eq!(result, json!("fake response result"));
    }

    #[tokio::test]
    async fn test_request_null_result_passes_through() {
        let transport = MockTransport::replying(json!({"jsonrpc": "2.0", "result": null, "id": 1}));
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let result = client.request("MpoolClear", rpc_params![true]).await.unwrap();

        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_request_rpc_error_uses_server_message() {
        let transport = MockTransport::replying(error_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let err = assert_err!(client.request("FakeMethod", rpc_params![]).await);

        assert_eq!(err.to_string(), "get actor: GetActor called on undefined address");
        assert_eq!(err.as_rpc().unwrap().code, Some(1));
    }

    #[tokio::test]
    async fn test_request_rpc_error_without_message() {
        let transport = MockTransport::replying(json!({"jsonrpc": "2.0", "id": 1, "error": {"code": 7}}));
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let err = client.request("FakeMethod", rpc_params![]).await.unwrap_err();

        assert_eq!(err.to_string(), UNKNOWN_RPC_ERROR);
    }

    #[tokio::test]
    async fn test_request_transport_failure_is_unaltered() {
        let transport = MockTransport::failing("connect ECONNREFUSED 127.0.0.1:1234");
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let err = client.request("ChainHead", rpc_params![]).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.to_string(), "connect ECONNREFUSED 127.0.0.1:1234");
    }

    #[tokio::test]
    async fn test_request_non_object_reply_is_malformed() {
        let transport = MockTransport::replying(json!("not an envelope"));
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let err = client.request("ChainHead", rpc_params![]).await.unwrap_err();

        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_request_as_decodes_result() {
        #[derive(Debug, Deserialize, PartialEq)]
        #[serde(rename_all = "PascalCase")]
        struct Version {
            version: String,
            #[serde(rename = "APIVersion")]
            api_version: u64,
        }

        let transport = MockTransport::replying(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"Version": "1.25.2+mainnet", "APIVersion": 131840, "BlockDelay": 30}
        }));
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        let version: Version = client.request_as("Version", rpc_params![]).await.unwrap();
        assert_eq!(version.version, "1.25.2+mainnet");
        assert_eq!(version.api_version, 131840);

        transport.set_behavior(MockBehavior::Reply(successful_response()));
        let err = client
            .request_as::<Version>("Version", rpc_params![])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_default_id_is_fixed() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS));

        for _ in 0..3 {
            client.request("ChainHead", rpc_params![]).await.unwrap();
        }

        let ids: Vec<_> = transport.calls().into_iter().map(|c| c.body["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(1), json!(1)]);
    }

    #[tokio::test]
    async fn test_sequential_id_provider() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS))
            .with_id_provider(Arc::new(SequentialIdProvider::new()));

        for _ in 0..3 {
            client.request("ChainHead", rpc_params![]).await.unwrap();
        }

        let ids: Vec<_> = transport.calls().into_iter().map(|c| c.body["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let transport = MockTransport::replying(successful_response());
        let client = Arc::new(client_with(&transport, ClientConfig::new(API_ADDRESS)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move {
                    client
                        .request("ChainGetTipSetByHeight", rpc_params![i, Value::Null])
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), json!("fake response result"));
        }
        assert_eq!(transport.call_count(), 8);
    }

    #[test]
    fn test_debug_hides_token() {
        let transport = MockTransport::replying(successful_response());
        let client = client_with(&transport, ClientConfig::new(API_ADDRESS).with_token("secret"));

        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains(API_ADDRESS));
    }
}
