//! CloudGuard HTTP infrastructure adapter.
//!
//! Implements the [`cloudguard::PostureApi`] trait over reqwest: endpoint
//! resolution, HTTP basic auth, request dispatch, and response/error
//! normalisation all live here. The domain crate sees only the trait.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. Transport
//! details (TLS, connection pooling, header wiring) are handled here; callers
//! never see them.
//!
//! ## Lifecycle
//!
//! [`ApiClient::connect`] performs a mandatory connectivity self-check
//! (`GET /user`) before the client value is ever returned, so a client that
//! exists is a client that has authenticated. After construction the client
//! is read-only; each [`PostureApi::send`] issues exactly one outbound call.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use cloudguard::{ApiError, ConnectionConfig, Method, PostureApi, RequestResult, ResolvedEndpoint};

/// Path probed once at construction to verify endpoint and credentials.
const SELF_TEST_PATH: &str = "/user";

/// A connected, credential-verified CloudGuard API client.
///
/// Owns its [`ConnectionConfig`] and [`ResolvedEndpoint`] by value and is the
/// exclusive owner of the underlying HTTP transport. Created at most once per
/// CLI invocation and passed by reference into one extension execution.
pub struct ApiClient {
    config: ConnectionConfig,
    endpoint: ResolvedEndpoint,
    http: reqwest::Client,
}

impl ApiClient {
    /// Resolves the endpoint for the configured region and tenant flavour,
    /// then connects.
    ///
    /// Fails with [`ApiError::Authentication`] if the self-check completes
    /// with a non-success status, or [`ApiError::Transport`] if no exchange
    /// completes at all.
    pub async fn connect(config: ConnectionConfig) -> Result<Self, ApiError> {
        let endpoint = ResolvedEndpoint::resolve(config.region(), config.infinity_tenant());
        Self::connect_to(config, endpoint).await
    }

    /// Connects against an explicit endpoint.
    ///
    /// The production path is [`ApiClient::connect`]; this entry point exists
    /// for callers that already hold a [`ResolvedEndpoint`] (test harnesses,
    /// non-standard gateways). The self-check is not skippable either way.
    pub async fn connect_to(
        config: ConnectionConfig,
        endpoint: ResolvedEndpoint,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ApiError::Transport {
                message: err.to_string(),
            })?;
        let client = Self {
            config,
            endpoint,
            http,
        };
        match client.send(SELF_TEST_PATH, Method::Get, None).await {
            Ok(_) => {
                tracing::info!(endpoint = %client.endpoint, "API connection verified");
                Ok(client)
            }
            Err(ApiError::RequestFailed { status_code, .. }) => {
                tracing::warn!(
                    endpoint = %client.endpoint,
                    status_code,
                    "connectivity self-check rejected"
                );
                Err(ApiError::Authentication {
                    endpoint: client.endpoint.as_str().to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// The endpoint every request from this client is issued against.
    pub fn endpoint(&self) -> &ResolvedEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl PostureApi for ApiClient {
    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<RequestResult, ApiError> {
        let url = self.endpoint.join(path);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        }
        .basic_auth(self.config.api_key(), Some(self.config.api_secret()))
        .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|err| ApiError::Transport {
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status_code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let text = response.text().await.map_err(|err| ApiError::Transport {
            message: err.to_string(),
        })?;
        let body = serde_json::from_str(&text).map_err(|err| ApiError::ResponseParse {
            message: err.to_string(),
        })?;
        Ok(RequestResult {
            status_code: status.as_u16(),
            body,
            ok: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudguard::Region;
    use httpmock::MockServer;
    use serde_json::json;

    fn test_config() -> ConnectionConfig {
        ConnectionConfig::new(Region::Us, "key", "secret", false).unwrap()
    }

    /// Connects a client against a mock server that accepts the self-check.
    async fn connected_client(server: &MockServer) -> ApiClient {
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/user");
            then.status(200).json_body(json!([]));
        });
        ApiClient::connect_to(
            test_config(),
            ResolvedEndpoint::from_base_url(server.base_url()),
        )
        .await
        .unwrap()
    }

    #[test]
    fn infinity_config_resolves_to_the_portal_host_without_v2() {
        let config = ConnectionConfig::new(Region::Eu, "key", "secret", true).unwrap();
        let endpoint = ResolvedEndpoint::resolve(config.region(), config.infinity_tenant());
        assert_eq!(endpoint.as_str(), "https://api.eu1.cgn.portal.checkpoint.com");
    }

    #[tokio::test]
    async fn connect_verifies_the_user_probe() {
        let server = MockServer::start();
        let probe = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/user");
            then.status(200).json_body(json!([{"name": "admin"}]));
        });

        let client = ApiClient::connect_to(
            test_config(),
            ResolvedEndpoint::from_base_url(server.base_url()),
        )
        .await
        .unwrap();

        probe.assert();
        assert_eq!(client.endpoint().as_str(), server.base_url());
    }

    #[tokio::test]
    async fn rejected_probe_fails_construction_with_authentication() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/user");
            then.status(401).body("unauthorized");
        });

        let result = ApiClient::connect_to(
            test_config(),
            ResolvedEndpoint::from_base_url(server.base_url()),
        )
        .await;

        match result {
            Err(ApiError::Authentication { endpoint }) => {
                assert_eq!(endpoint, server.base_url());
            }
            Ok(_) => panic!("client must not exist without a verified connection"),
            Err(other) => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_construction_with_transport() {
        // Nothing listens on port 1; the exchange never completes.
        let result = ApiClient::connect_to(
            test_config(),
            ResolvedEndpoint::from_base_url("http://127.0.0.1:1"),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }

    #[tokio::test]
    async fn successful_send_returns_status_and_parsed_body() {
        let server = MockServer::start();
        let client = connected_client(&server).await;
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/CloudAccounts");
            then.status(200).json_body(json!({"a": 1}));
        });

        let result = client
            .send("/CloudAccounts", Method::Get, None)
            .await
            .unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, json!({"a": 1}));
        assert!(result.ok);
    }

    #[tokio::test]
    async fn non_success_status_is_a_hard_failure() {
        let server = MockServer::start();
        let client = connected_client(&server).await;
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/Compliance");
            then.status(403).body("forbidden");
        });

        match client.send("/Compliance", Method::Get, None).await {
            Err(ApiError::RequestFailed {
                status_code,
                reason,
            }) => {
                assert_eq!(status_code, 403);
                assert_eq!(reason, "Forbidden");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_parse_failure() {
        let server = MockServer::start();
        let client = connected_client(&server).await;
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/report");
            then.status(200).body("<html>not json</html>");
        });

        let result = client.send("/report", Method::Get, None).await;
        assert!(matches!(result, Err(ApiError::ResponseParse { .. })));
    }

    #[tokio::test]
    async fn empty_delete_body_is_a_parse_failure() {
        // A 204 carries no body; the JSON parse requirement applies to every
        // successful exchange, so this surfaces as ResponseParse.
        let server = MockServer::start();
        let client = connected_client(&server).await;
        server.mock(|when, then| {
            when.method(httpmock::Method::DELETE).path("/CloudAccounts/42");
            then.status(204);
        });

        let result = client.send("/CloudAccounts/42", Method::Delete, None).await;
        assert!(matches!(result, Err(ApiError::ResponseParse { .. })));
    }

    #[tokio::test]
    async fn requests_carry_basic_auth_and_json_content_type() {
        let server = MockServer::start();
        // base64("key:secret")
        let authorized = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/user")
                .header("authorization", "Basic a2V5OnNlY3JldA==")
                .header("content-type", "application/json");
            then.status(200).json_body(json!([]));
        });

        let client = ApiClient::connect_to(
            test_config(),
            ResolvedEndpoint::from_base_url(server.base_url()),
        )
        .await
        .unwrap();
        client.send("/user", Method::Get, None).await.unwrap();

        // Two hits: the construction self-check and the explicit send.
        assert_eq!(authorized.calls(), 2);
    }

    #[tokio::test]
    async fn post_body_is_forwarded_verbatim() {
        let server = MockServer::start();
        let client = connected_client(&server).await;
        let created = server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/CloudAccounts")
                .json_body(json!({"name": "prod", "vendor": "aws"}));
            then.status(201).json_body(json!({"id": "7"}));
        });

        let result = client
            .send(
                "/CloudAccounts",
                Method::Post,
                Some(json!({"name": "prod", "vendor": "aws"})),
            )
            .await
            .unwrap();

        created.assert();
        assert_eq!(result.status_code, 201);
        assert_eq!(result.body, json!({"id": "7"}));
    }
}
