//! Random dog image lookup used by the demo's fetch effect.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response status '{status}'")]
    Status { status: String },
}

/// Response shape of the dog image endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DogResponse {
    /// Image URL.
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct DogClient {
    http: reqwest::Client,
    url: String,
}

impl DogClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the endpoint and return the image URL it names.
    pub async fn fetch_random_image(&self) -> Result<String, FetchError> {
        let body = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_dog_response(&body)
    }
}

/// Extract the image URL, rejecting any status other than `"success"`.
pub fn parse_dog_response(body: &str) -> Result<String, FetchError> {
    let response: DogResponse = serde_json::from_str(body)?;
    if response.status != "success" {
        return Err(FetchError::Status {
            status: response.status,
        });
    }
    Ok(response.message)
}
