//! HTTP client for the hosted data service
//!
//! The backend exposes a PostgREST-style interface: rows are read with
//! `GET {endpoint}/rest/v1/{collection}` plus query parameters, authenticated
//! by an `apikey` header and a bearer token carrying the same key.

use crate::{ClientError, ProbeConfig, Record, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use tracing::debug;

/// The two read operations the probe exercises. A trait so tests can drive
/// the probe with a scripted collaborator instead of a live backend.
pub trait DataService {
    /// Read up to `limit` rows from a collection.
    fn fetch_rows(
        &self,
        collection: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Record>>> + Send;

    /// Read up to `limit` rows where `field` equals `value`.
    fn fetch_rows_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Record>>> + Send;
}

/// Client handle for the remote data service.
///
/// Construction builds headers and the underlying HTTP client but performs
/// no network call.
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("apikey", HeaderValue::from_str(&config.api_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
        );

        let client = Client::builder()
            .user_agent("TableProbe/0.1")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.service_endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn get_rows(&self, url: String) -> Result<Vec<Record>> {
        debug!(url = url, "Issuing read query");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let rows: Vec<Record> = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!(count = rows.len(), "Query returned rows");
        Ok(rows)
    }
}

impl DataService for ServiceClient {
    async fn fetch_rows(&self, collection: &str, limit: u32) -> Result<Vec<Record>> {
        self.get_rows(collection_url(&self.base_url, collection, limit))
            .await
    }

    async fn fetch_rows_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: u32,
    ) -> Result<Vec<Record>> {
        self.get_rows(filtered_url(&self.base_url, collection, field, value, limit))
            .await
    }
}

fn collection_url(base: &str, collection: &str, limit: u32) -> String {
    format!("{}/rest/v1/{}?select=*&limit={}", base, collection, limit)
}

fn filtered_url(base: &str, collection: &str, field: &str, value: &str, limit: u32) -> String {
    format!(
        "{}/rest/v1/{}?select=*&{}=eq.{}&limit={}",
        base, collection, field, value, limit
    )
}

/// Error body returned by the service. Decoded best-effort; any field may be
/// absent, and the body may not be JSON at all.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    hint: Option<String>,
}

fn api_error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return if body.is_empty() {
            "no error detail provided".to_string()
        } else {
            body.to_string()
        };
    };

    let mut message = parsed.message.unwrap_or_else(|| "unknown error".to_string());
    if let Some(code) = parsed.code {
        message = format!("{} (code {})", message, code);
    }
    if let Some(hint) = parsed.hint {
        message = format!("{} — hint: {}", message, hint);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_unfiltered_url() {
        let url = collection_url("https://x.example.co", "products", 5);
        assert_eq!(url, "https://x.example.co/rest/v1/products?select=*&limit=5");
    }

    #[test]
    fn builds_filtered_url() {
        let url = filtered_url("https://x.example.co", "products", "is_active", "true", 5);
        assert_eq!(
            url,
            "https://x.example.co/rest/v1/products?select=*&is_active=eq.true&limit=5"
        );
    }

    #[test]
    fn client_strips_trailing_slash_from_endpoint() {
        let config = ProbeConfig::new(
            Some("https://x.example.co/".into()),
            Some("anon-key".into()),
        )
        .unwrap();

        let client = ServiceClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://x.example.co");
    }

    #[test]
    fn rejects_api_key_with_invalid_header_characters() {
        let config =
            ProbeConfig::new(Some("https://x.example.co".into()), Some("bad\nkey".into())).unwrap();

        assert!(matches!(
            ServiceClient::new(&config),
            Err(ClientError::Credential(_))
        ));
    }

    #[test]
    fn decodes_structured_error_body() {
        let body = r#"{"message":"relation \"public.products\" does not exist","code":"42P01"}"#;
        assert_eq!(
            api_error_message(body),
            "relation \"public.products\" does not exist (code 42P01)"
        );
    }

    #[test]
    fn keeps_raw_body_when_not_json() {
        assert_eq!(api_error_message("gateway timeout"), "gateway timeout");
        assert_eq!(api_error_message(""), "no error detail provided");
    }
}
