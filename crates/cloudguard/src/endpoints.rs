//! Region codes and deterministic endpoint resolution.
//!
//! CloudGuard is region-partitioned and reachable in two flavours: direct
//! tenants talk to a `dome9.com/v2` host, Infinity Portal tenants talk to a
//! `cgn.portal.checkpoint.com` host. The mapping is a static lookup — it is
//! never computed from the region code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Geographic deployment code selecting which backend cluster serves requests.
///
/// Exactly six codes are recognised. Anything else fails with
/// [`ApiError::InvalidRegion`] at parse time — there is no fallback region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States (the default cluster).
    Us,
    /// Europe.
    Eu,
    /// Australia.
    Au,
    /// Canada.
    Ca,
    /// India.
    In,
    /// Singapore.
    Sg,
}

impl Region {
    /// All recognised region codes, in documentation order.
    pub const ALL: [Region; 6] = [
        Region::Us,
        Region::Eu,
        Region::Au,
        Region::Ca,
        Region::In,
        Region::Sg,
    ];

    /// Returns the region code as its lowercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Au => "au",
            Region::Ca => "ca",
            Region::In => "in",
            Region::Sg => "sg",
        }
    }
}

impl FromStr for Region {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "au" => Ok(Region::Au),
            "ca" => Ok(Region::Ca),
            "in" => Ok(Region::In),
            "sg" => Ok(Region::Sg),
            other => Err(ApiError::InvalidRegion {
                region: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResolvedEndpoint
// ---------------------------------------------------------------------------

/// The base URL all requests for one client are issued against.
///
/// Derived deterministically from `(Region, infinity_tenant)` by
/// [`ResolvedEndpoint::resolve`]. Direct-tenant URLs carry the `/v2` API
/// prefix; Infinity Portal URLs do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEndpoint(String);

impl ResolvedEndpoint {
    /// Resolves the base URL for a region and tenant flavour.
    ///
    /// The `sg` cluster is served through a single host and does not consult
    /// the tenant flavour at all.
    pub fn resolve(region: Region, infinity_tenant: bool) -> Self {
        let base = match (region, infinity_tenant) {
            (Region::Us, true) => "https://api.us1.cgn.portal.checkpoint.com",
            (Region::Us, false) => "https://api.dome9.com/v2",
            (Region::Eu, true) => "https://api.eu1.cgn.portal.checkpoint.com",
            (Region::Eu, false) => "https://api.eu1.dome9.com/v2",
            (Region::Au, true) => "https://api.ap2.cgn.portal.checkpoint.com",
            (Region::Au, false) => "https://api.ap2.dome9.com/v2",
            (Region::Ca, true) => "https://api.cace1.cgn.portal.checkpoint.com",
            (Region::Ca, false) => "https://api.cace1.dome9.com/v2",
            (Region::In, true) => "https://api.ap3.cgn.portal.checkpoint.com",
            (Region::In, false) => "https://api.ap3.dome9.com/v2",
            (Region::Sg, _) => "https://api.ap1.dome9.com/v2",
        };
        Self(base.to_string())
    }

    /// Creates an endpoint from an explicit base URL.
    ///
    /// Used when the caller already knows where the API lives — test
    /// harnesses and non-standard gateways. Production resolution goes
    /// through [`ResolvedEndpoint::resolve`].
    pub fn from_base_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the base URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins an operation path onto the base URL.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl std::fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
