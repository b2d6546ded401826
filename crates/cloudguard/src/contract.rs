//! Port traits implemented by infrastructure crates.
//!
//! [`PostureApi`] is the seam between extensions and the HTTP transport: the
//! `client` crate implements it over reqwest, and tests implement it with
//! canned responses. [`Extension`] is the contract every pluggable operation
//! module satisfies; the registry relies on nothing else.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ApiError;
use crate::types::{ExtensionDescriptor, Method, OperationResult, RequestResult};

/// Credential-bearing request dispatch against one resolved endpoint.
///
/// Implementations are read-only after construction and issue exactly one
/// outbound call per `send` invocation — no retries, no caching.
#[async_trait]
pub trait PostureApi: Send + Sync {
    /// Issues one request against the resolved endpoint.
    ///
    /// `path` is the operation-specific path joined onto the base URL (e.g.
    /// `/user`). A completed exchange with a non-success status is
    /// [`ApiError::RequestFailed`]; a successful exchange whose body is not
    /// JSON is [`ApiError::ResponseParse`].
    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<RequestResult, ApiError>;
}

/// A pluggable operation module.
///
/// Extensions receive the API client by reference for the duration of one
/// `execute` call and must not persist it beyond the call. Whatever the
/// operation, the outcome is reported through [`OperationResult`] — an
/// extension never aborts the process.
#[async_trait]
pub trait Extension: Send + Sync {
    /// Returns the extension's name and human-readable purpose.
    fn describe(&self) -> ExtensionDescriptor;

    /// Performs the operation against the API using the supplied client.
    ///
    /// `input` is the operation's structured input; the fields an extension
    /// understands are part of its description.
    async fn execute(&self, api: &dyn PostureApi, input: Value) -> OperationResult;
}

impl std::fmt::Debug for dyn Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.describe().name)
            .finish()
    }
}
