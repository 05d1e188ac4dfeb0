use std::time::Duration;

use anyhow::anyhow;
use explorer_api_types_common::responses::JSON_CONTENT_TYPE;
use reqwest::{
    Client, Request, RequestBuilder, Response, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};

#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
}

impl ClientWithBaseUrl {
    pub fn new(url: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| anyhow!("Failed to build HTTP client {err:?}"))?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// JSON POST against `path`, resolved relative to the base url.
    pub fn post(&self, path: &str) -> anyhow::Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE)))
    }

    pub async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.client.execute(request).await
    }
}
