//! Blocking HTTP client for the sales API.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SalesError};
use crate::types::SaleRecord;

/// Header carrying the project's anonymous API key on every request.
const APIKEY_HEADER: &str = "apikey";

/// Client for the sales backend.
///
/// The whole pipeline is synchronous, so this client blocks; the two calls
/// it makes (login, listing) happen once per run before any row is built.
#[derive(Debug, Clone)]
pub struct SalesClient {
    client: reqwest::blocking::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SalesResponse {
    #[serde(default)]
    vendas: Vec<SaleRecord>,
}

impl SalesClient {
    /// Create a client against `base_url` using the given anonymous key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        })
    }

    /// Authenticate with email/password, returning the access token.
    pub fn login(&self, email: &str, password: &str) -> Result<String> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        tracing::debug!(%url, "authenticating against sales API");

        let response = self
            .client
            .post(&url)
            .header(APIKEY_HEADER, &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(SalesError::Auth {
                status: response.status().as_u16(),
            });
        }
        let token: TokenResponse = response
            .json()
            .map_err(|error| SalesError::Malformed(error.to_string()))?;
        Ok(token.access_token)
    }

    /// List all sales visible to the authenticated user.
    pub fn list_sales(&self, access_token: &str) -> Result<Vec<SaleRecord>> {
        let url = format!("{}/functions/v1/api-vendas", self.base_url);
        tracing::debug!(%url, "listing sales");

        let response = self
            .client
            .get(&url)
            .header(APIKEY_HEADER, &self.anon_key)
            .bearer_auth(access_token)
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(SalesError::Listing {
                status: response.status().as_u16(),
            });
        }
        let sales: SalesResponse = response
            .json()
            .map_err(|error| SalesError::Malformed(error.to_string()))?;
        tracing::info!(count = sales.vendas.len(), "sales listing loaded");
        Ok(sales.vendas)
    }

    /// Find one sale by the client's legal name, exact match.
    pub fn find_sale(&self, access_token: &str, client_name: &str) -> Result<Option<SaleRecord>> {
        let sales = self.list_sales(access_token)?;
        Ok(sales
            .into_iter()
            .find(|sale| sale.razao_social == client_name))
    }
}
