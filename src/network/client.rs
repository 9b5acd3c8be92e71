//! HTTP client for outbound requests

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// Flattened HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client wrapper carrying the outgoing settings and a browser user agent
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a client from outgoing settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: generate_user_agent(),
        })
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language())
            .send()
            .await?;

        Self::flatten(response).await
    }

    /// POST request with form-urlencoded body
    pub async fn post_form(
        &self,
        url: &str,
        form: HashMap<String, String>,
    ) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language())
            .form(&form)
            .send()
            .await?;

        Self::flatten(response).await
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    async fn flatten(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_success_range() {
        let ok = HttpResponse {
            status: 204,
            text: String::new(),
            url: String::new(),
        };
        assert!(ok.is_success());

        let not_found = HttpResponse {
            status: 404,
            text: String::new(),
            url: String::new(),
        };
        assert!(!not_found.is_success());
    }
}
