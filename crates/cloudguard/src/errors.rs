//! Error taxonomy for the cgctl workspace.
//!
//! [`ApiError`] covers everything that can go wrong between configuration and
//! a parsed API response. [`ExtensionError`] covers the registry boundary,
//! where failures are contained per unit rather than propagated.
//!
//! Propagation policy: configuration and authentication errors abort the
//! process; request and parse errors propagate to the immediate caller of
//! `send` as typed failures; extension load errors are converted into
//! per-unit diagnostics by the registry and never abort a listing. No
//! automatic retries anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// API errors
// ---------------------------------------------------------------------------

/// Errors produced while configuring, constructing, or using the API client.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// A region code outside the six recognised values was supplied.
    ///
    /// Produced by: [`crate::Region`] parsing, before any network activity.
    /// Unknown regions are a construction-time failure, never a runtime
    /// default.
    #[error("invalid region '{region}': expected one of us, eu, au, ca, in, sg")]
    InvalidRegion {
        /// The region code as supplied by the caller.
        region: String,
    },

    /// An HTTP method outside get/post/put/delete was supplied.
    ///
    /// Produced by: [`crate::Method`] parsing, before any network activity.
    #[error("invalid method '{method}': expected get, post, put or delete")]
    InvalidMethod {
        /// The method string as supplied by the caller.
        method: String,
    },

    /// The connection configuration is unusable (e.g. an empty credential).
    ///
    /// Produced at construction time; no client is ever built from an invalid
    /// configuration.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The connectivity self-check at client construction was rejected.
    ///
    /// Produced when the `GET /user` probe completes with a non-success
    /// status. The client value is never returned to the caller.
    #[error("authentication failed against {endpoint}: check that the endpoint and credentials match")]
    Authentication {
        /// Base URL the self-check was issued against.
        endpoint: String,
    },

    /// The request never completed an HTTP exchange (connection refused,
    /// DNS failure, TLS failure).
    #[error("transport error: {message}")]
    Transport {
        /// Underlying transport failure, rendered as text.
        message: String,
    },

    /// A completed HTTP exchange with a non-success status.
    ///
    /// This is a hard failure of the `send` operation, not a returned value;
    /// the caller decides whether it is fatal for the operation at hand.
    #[error("request failed with status {status_code}: {reason}")]
    RequestFailed {
        /// HTTP status code of the response.
        status_code: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// A successful response whose body is not valid JSON.
    ///
    /// Propagated, never silently defaulted.
    #[error("response body is not valid JSON: {message}")]
    ResponseParse {
        /// Parser failure, rendered as text.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Extension errors
// ---------------------------------------------------------------------------

/// Errors at the extension registry boundary.
///
/// [`ExtensionError::Load`] is the one category the system explicitly
/// recovers from: the registry converts it into a per-unit diagnostic so one
/// broken unit never blocks visibility of the others.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ExtensionError {
    /// No registered unit carries the requested name.
    #[error("no extension named '{name}' is registered")]
    NotFound {
        /// The name the caller asked for.
        name: String,
    },

    /// A registered unit failed to construct.
    #[error("extension '{unit}' failed to load: {message}")]
    Load {
        /// Name of the unit as registered.
        unit: String,
        /// Description of the construction failure.
        message: String,
    },
}
