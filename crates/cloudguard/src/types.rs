//! Shared value types for the cgctl domain.
//!
//! These types cross every boundary in the workspace: the client returns
//! [`RequestResult`], every extension returns [`OperationResult`], and the
//! registry lists [`ExtensionDescriptor`]s.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiError;

// ---------------------------------------------------------------------------
// HTTP method
// ---------------------------------------------------------------------------

/// The four HTTP methods the API client dispatches.
///
/// Anything else fails with [`ApiError::InvalidMethod`] at parse time,
/// before a request is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl Method {
    /// Returns the method as its lowercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "delete" => Ok(Method::Delete),
            other => Err(ApiError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request result
// ---------------------------------------------------------------------------

/// A structurally successful HTTP exchange: a 2xx status and a JSON body.
///
/// Non-success statuses never produce a [`RequestResult`] — they surface as
/// [`ApiError::RequestFailed`] instead, so `ok` is `true` on every value of
/// this type that exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResult {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Response body, parsed as JSON.
    pub body: Value,
    /// Always `true`; carried so results serialise with an explicit flag.
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Extension descriptor
// ---------------------------------------------------------------------------

/// Human-readable identity of an extension, produced by its `describe`
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    /// The name the registry resolves this extension under.
    pub name: String,
    /// One-line description of what the extension does, including the input
    /// fields it understands.
    pub description: String,
}

impl ExtensionDescriptor {
    /// Creates a descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for ExtensionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// ---------------------------------------------------------------------------
// Operation result
// ---------------------------------------------------------------------------

/// The uniform value every extension's `execute` operation returns,
/// regardless of the operation performed.
///
/// Invariant: `ok` implies `error.is_none()`, and `!ok` implies
/// `response.is_none()`. The constructors maintain this; there is no other
/// way to build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the operation completed as intended.
    pub ok: bool,
    /// Failure description when `ok` is `false`.
    pub error: Option<String>,
    /// Structured payload when `ok` is `true`.
    pub response: Option<Value>,
}

impl OperationResult {
    /// A successful result carrying a structured payload.
    pub fn success(response: Value) -> Self {
        Self {
            ok: true,
            error: None,
            response: Some(response),
        }
    }

    /// A failed result carrying a failure description.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn the_four_supported_methods_parse() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("put".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    }

    #[test]
    fn unsupported_methods_are_rejected_before_any_request_exists() {
        match "patch".parse::<Method>() {
            Err(ApiError::InvalidMethod { method }) => assert_eq!(method, "patch"),
            other => panic!("expected InvalidMethod, got {other:?}"),
        }
        assert!("GET".parse::<Method>().is_err());
        assert!("head".parse::<Method>().is_err());
    }

    #[test]
    fn success_result_carries_payload_and_no_error() {
        let result = OperationResult::success(json!({"count": 3}));
        assert!(result.ok);
        assert_eq!(result.error, None);
        assert_eq!(result.response, Some(json!({"count": 3})));
    }

    #[test]
    fn failure_result_carries_error_and_no_payload() {
        let result = OperationResult::failure("request failed with status 403: Forbidden");
        assert!(!result.ok);
        assert!(result.error.unwrap().contains("403"));
        assert_eq!(result.response, None);
    }

    #[test]
    fn descriptor_renders_name_and_description() {
        let descriptor = ExtensionDescriptor::new("list-users", "Lists tenant users");
        assert_eq!(descriptor.to_string(), "list-users: Lists tenant users");
    }
}
