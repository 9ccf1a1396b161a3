//! HTTP client for the Buxfer API.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::types::{Account, AddTransactionRequest, Transaction, TransactionQuery, TransactionsPage};

/// Base URL of the Buxfer web API.
pub const API_BASE: &str = "https://www.buxfer.com/api";

/// Upper bound on every upstream call; expiry surfaces as
/// [`ClientError::Timeout`], not a hang.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Buxfer API.
///
/// Holds the credential for its whole lifetime as an immutable value; it is
/// injected into the query string of every request (GET and POST alike),
/// never into headers or body. The credential is never logged.
pub struct BuxferClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BuxferClient {
    /// Create a client against the production API base.
    ///
    /// An absent or empty token does not fail construction; every subsequent
    /// call returns [`ClientError::MissingCredential`] instead.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Fetch every account visible to the credential.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let payload = self.request(Method::GET, "accounts", &[], None).await?;
        let accounts = payload
            .get("accounts")
            .cloned()
            .ok_or_else(|| ClientError::UnexpectedShape("missing accounts key".to_string()))?;
        serde_json::from_value(accounts).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch one page of transactions matching the filter set.
    pub async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionsPage> {
        let pairs = query.query_pairs();
        let payload = self.request(Method::GET, "transactions", &pairs, None).await?;
        if payload.get("transactions").is_none() {
            return Err(ClientError::UnexpectedShape(
                "missing transactions key".to_string(),
            ));
        }
        serde_json::from_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Create one transaction upstream. A single atomic call: no partial
    /// writes are possible.
    pub async fn add_transaction(&self, req: &AddTransactionRequest) -> Result<Transaction> {
        let form = req.form_pairs();
        let payload = self
            .request(Method::POST, "transaction_add", &[], Some(&form))
            .await?;
        serde_json::from_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Execute one request and return the decoded `response` envelope.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
        form: Option<&[(&'static str, String)]>,
    ) -> Result<Value> {
        if method != Method::GET && method != Method::POST {
            return Err(ClientError::UnsupportedMethod(method.to_string()));
        }

        let token = self
            .token
            .as_deref()
            .ok_or(ClientError::MissingCredential)?;

        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("{method} {url}");

        let mut query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("token", token));

        let builder = if method == Method::POST {
            self.http
                .post(&url)
                .query(&query)
                .form(form.unwrap_or(&[]))
        } else {
            self.http.get(&url).query(&query)
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        tracing::debug!("Response Status: {status}");
        if !status.is_success() {
            return Err(ClientError::Transport {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Network(format!("failed to read response body: {e}"))
            }
        })?;

        decode_payload(&text)
    }
}

/// Decode a response body and unwrap the top-level `response` envelope.
///
/// A `status` field beginning with the upstream error marker turns a
/// transport-level success into a logical failure.
fn decode_payload(text: &str) -> Result<Value> {
    let mut value: Value =
        serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))?;

    let payload = value
        .get_mut("response")
        .map(Value::take)
        .ok_or_else(|| ClientError::UnexpectedShape("missing response envelope".to_string()))?;

    if let Some(status) = payload.get("status").and_then(Value::as_str) {
        if status.starts_with("ERROR") {
            tracing::warn!("Buxfer API rejected the request: {status}");
            return Err(ClientError::Api(status.to_string()));
        }
    }

    Ok(payload)
}
