//! Connection configuration.

use serde::{Deserialize, Serialize};

use crate::endpoints::Region;
use crate::errors::ApiError;

/// Everything needed to reach one CloudGuard tenant: region, API credentials,
/// and the tenant flavour.
///
/// Immutable once constructed — fields are private and there are no setters.
/// Reading credentials from the process environment is the orchestrator's
/// job; this type only ever receives them as explicit values.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    region: Region,
    api_key: String,
    api_secret: String,
    infinity_tenant: bool,
}

impl ConnectionConfig {
    /// Creates a connection configuration.
    ///
    /// Fails with [`ApiError::Configuration`] if either credential is empty;
    /// an unusable configuration is rejected before any network activity.
    pub fn new(
        region: Region,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        infinity_tenant: bool,
    ) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() {
            return Err(ApiError::Configuration {
                message: "API key is empty".to_string(),
            });
        }
        if api_secret.is_empty() {
            return Err(ApiError::Configuration {
                message: "API secret is empty".to_string(),
            });
        }
        Ok(Self {
            region,
            api_key,
            api_secret,
            infinity_tenant,
        })
    }

    /// The region this configuration targets.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The API key used as the basic-auth username.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API secret used as the basic-auth password.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Whether this tenant is fronted by the Infinity Portal.
    pub fn infinity_tenant(&self) -> bool {
        self.infinity_tenant
    }
}

// Manual Debug: the secret must never reach logs or error output.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("region", &self.region)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("infinity_tenant", &self.infinity_tenant)
            .finish()
    }
}
