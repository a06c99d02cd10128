//! Habitica API client implementation.
//!
//! API Documentation: <https://habitica.com/apidoc/>

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::HabiticaError;
use crate::models::{CreatedTag, Envelope, NewTag, NewTask, Tag, TagId, TagName};
use crate::service::TaskService;

const HEADER_API_USER: &str = "x-api-user";
const HEADER_API_KEY: &str = "x-api-key";
const HEADER_CLIENT: &str = "x-client";

/// HTTP client for the Habitica v3 API.
#[derive(Debug, Clone)]
pub struct HabiticaClient {
    /// HTTP client with authentication headers preset.
    client: Client,
    /// API base URL.
    base_url: String,
}

impl HabiticaClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns error if a credential cannot be encoded as a header value or
    /// the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, HabiticaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(HEADER_API_USER),
            header_value(HEADER_API_USER, config.credentials.user_id())?,
        );
        let mut api_key = header_value(HEADER_API_KEY, config.credentials.api_token())?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(HEADER_API_KEY), api_key);
        headers.insert(
            HeaderName::from_static(HEADER_CLIENT),
            header_value(HEADER_CLIENT, &config.client_id)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The API base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Make an authenticated GET request and unwrap the `data` envelope.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HabiticaError> {
        let url = self.url(path);
        debug!(url = %url, "GET request");

        let response = self.client.get(&url).send().await?;
        read_data(response).await
    }

    /// Make an authenticated POST request.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, HabiticaError> {
        let url = self.url(path);
        debug!(url = %url, "POST request");

        let response = self.client.post(&url).json(body).send().await?;
        ensure_success(response).await
    }
}

#[async_trait]
impl TaskService for HabiticaClient {
    async fn list_tags(&self) -> Result<Vec<Tag>, HabiticaError> {
        self.get("/tags").await
    }

    async fn create_tag(&self, name: &TagName) -> Result<TagId, HabiticaError> {
        let response = self
            .post("/tags", &NewTag {
                name: name.as_str(),
            })
            .await?;
        let created: CreatedTag = decode_data(response).await?;
        Ok(created.id)
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), HabiticaError> {
        self.post("/tasks/user", task).await?;
        Ok(())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, HabiticaError> {
    HeaderValue::from_str(value)
        .map_err(|_| HabiticaError::Config(format!("{name} contains invalid characters")))
}

/// Turn a non-success response into [`HabiticaError::Rejected`].
async fn ensure_success(response: Response) -> Result<Response, HabiticaError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, body = %body, "Request rejected");
        Err(HabiticaError::Rejected { status, body })
    }
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, HabiticaError> {
    let response = ensure_success(response).await?;
    decode_data(response).await
}

async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T, HabiticaError> {
    let body = response.text().await?;
    let envelope: Envelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}
