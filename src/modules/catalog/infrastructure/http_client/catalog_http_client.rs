//! HTTP executor for the catalog provider
//!
//! One call per invocation. There is no retry and no rate limiting here: the
//! shared worker pool is the only throttle in front of the provider.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Instant;

/// Name of the query parameter carrying the provider credential
const CREDENTIAL_PARAM: &str = "api_key";

pub struct CatalogHttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
    provider_name: String,
}

impl CatalogHttpClient {
    pub fn new(provider_name: &str, base_url: &str, api_key: &str, user_agent: &str) -> Self {
        Self::with_client(Client::new(), provider_name, base_url, api_key, user_agent)
    }

    /// Create a client around an existing reqwest client (connection pool sharing, tests)
    pub fn with_client(
        client: Client,
        provider_name: &str,
        base_url: &str,
        api_key: &str,
        user_agent: &str,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            user_agent: user_agent.to_string(),
            provider_name: provider_name.to_string(),
        }
    }

    /// Build URL with the credential and additional query parameters.
    ///
    /// A caller-supplied credential parameter is ignored.
    pub fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!(
            "{}{}?{}={}",
            self.base_url,
            endpoint,
            CREDENTIAL_PARAM,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            if key != CREDENTIAL_PARAM {
                url.push_str(&format!(
                    "&{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                ));
            }
        }
        url
    }

    /// GET an endpoint and decode the body into `T`
    pub async fn get<T>(&self, endpoint: &str, params: &[(String, String)]) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(endpoint, params).await?;
        self.parse_response(endpoint, response).await
    }

    /// GET an endpoint and return the raw JSON document
    pub async fn get_raw(&self, endpoint: &str, params: &[(String, String)]) -> AppResult<Value> {
        self.get(endpoint, params).await
    }

    async fn send(&self, endpoint: &str, params: &[(String, String)]) -> AppResult<Response> {
        let url = self.build_url(endpoint, params);
        let start = Instant::now();
        LogContext::api_call(&self.provider_name, endpoint, "started", None);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL, which carries the credential
                let e = e.without_url();
                log::warn!(
                    "{} API request to {} failed: {}",
                    self.provider_name,
                    endpoint,
                    e
                );
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            endpoint,
            status.as_str(),
            Some(start.elapsed().as_millis() as u64),
        );

        if status.is_success() {
            return Ok(response);
        }

        Err(self.status_error(endpoint, status))
    }

    fn status_error(&self, endpoint: &str, status: StatusCode) -> AppError {
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound(format!(
                "{} has no resource at {}",
                self.provider_name, endpoint
            )),
            StatusCode::TOO_MANY_REQUESTS => {
                log::warn!(
                    "{} API rate limited on {}; not retrying",
                    self.provider_name,
                    endpoint
                );
                AppError::ProviderUnavailable(format!(
                    "{} API rate limit exceeded on {}",
                    self.provider_name, endpoint
                ))
            }
            _ => AppError::ProviderUnavailable(format!(
                "{} API returned error {} for {}",
                self.provider_name, status, endpoint
            )),
        }
    }

    async fn parse_response<T>(&self, endpoint: &str, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::ProviderUnavailable(format!(
                "Failed to read {} response for {}: {}",
                self.provider_name,
                endpoint,
                e.without_url()
            ))
        })?;

        decode_body(&self.provider_name, endpoint, &response_text)
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Decode a response body, keeping a short excerpt of it in the error
pub(crate) fn decode_body<T>(provider_name: &str, endpoint: &str, body: &str) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        let excerpt: String = body.chars().take(200).collect();
        AppError::SerializationError(format!(
            "Failed to parse {} response for {}: {}. Response: {}{}",
            provider_name,
            endpoint,
            e,
            excerpt,
            if body.chars().count() > 200 { "..." } else { "" }
        ))
    })
}
