//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::HabiticaError;

/// Base URL of the public Habitica API.
pub const DEFAULT_API_BASE: &str = "https://habitica.com/api/v3";

/// Value sent in the `x-client` header unless overridden.
pub const DEFAULT_CLIENT_ID: &str = "user-habiticaImportScript";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Account credentials sent as `x-api-user` / `x-api-key`.
#[derive(Clone)]
pub struct Credentials {
    user_id: String,
    api_token: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    pub fn new(
        user_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, HabiticaError> {
        let user_id = user_id.into().trim().to_string();
        let api_token = api_token.into().trim().to_string();

        if user_id.is_empty() {
            return Err(HabiticaError::Config("Habitica user id is required".to_string()));
        }
        if api_token.is_empty() {
            return Err(HabiticaError::Config(
                "Habitica API token is required".to_string(),
            ));
        }

        Ok(Self { user_id, api_token })
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Everything needed to build a [`HabiticaClient`](crate::HabiticaClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Account credentials.
    pub credentials: Credentials,
    /// Value of the `x-client` header.
    pub client_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration pointing at the public API with default settings.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            credentials,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }
}
