//! HTTP client for the alert backend.
//!
//! The sole asynchronous boundary of the dashboard core. Normalizes
//! backend responses into [`AlertRecord`] collections and never touches
//! the store; applying results is the render coordinator's job.

use crate::format::metric_label;
use crate::model::{AlertRecord, NewAlert, SearchCriteria};

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Client error types.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("rejected by backend: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct AlertsResponse {
    #[serde(default)]
    alerts: Vec<AlertRecord>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    message: String,
}

/// Client for the alert backend's three routes.
pub struct AlertClient {
    http: reqwest::Client,
    base_url: String,
}

impl AlertClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full alert collection from `GET /alerts/`.
    pub async fn fetch_all(&self) -> Result<Vec<AlertRecord>, ClientError> {
        let url = format!("{}/alerts/", self.base_url);
        tracing::debug!("Fetching alerts from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        decode_alerts(response).await
    }

    /// Fetch a filtered collection from `GET /alerts/search`.
    ///
    /// Only present, trimmed criteria become query parameters. Empty
    /// criteria still hit the search route; the backend treats that as
    /// an unfiltered query, but the route itself is part of the
    /// contract and must not collapse into `fetch_all`. Time bounds
    /// the backend's parser would choke on are rejected before the
    /// request goes out.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<AlertRecord>, ClientError> {
        if let Err(bad) = criteria.validate_time_bounds() {
            tracing::warn!("Rejecting search with unparseable time bound {}", bad);
            return Err(ClientError::Validation(format!("无效的时间格式: {}", bad)));
        }

        let url = format!("{}/alerts/search", self.base_url);
        let params = criteria.query_params();
        tracing::debug!("Searching alerts with {} filter(s)", params.len());

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        decode_alerts(response).await
    }

    /// Submit a new alert via form-encoded `POST /alerts/`.
    ///
    /// Trims the hostname, submits the value as an integer, and
    /// defaults a blank message to "<metric label>异常". Returns the
    /// backend's confirmation message.
    pub async fn submit(&self, alert: &NewAlert) -> Result<String, ClientError> {
        let url = format!("{}/alerts/", self.base_url);

        let message = match alert.message.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => m.to_string(),
            None => format!("{}异常", metric_label(&alert.metric)),
        };
        let form = [
            ("hostname", alert.hostname.trim().to_string()),
            ("metric", alert.metric.clone()),
            ("value", (alert.value as i64).to_string()),
            ("message", message),
        ];
        tracing::debug!("Submitting alert for host {}", alert.hostname.trim());

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!("Alert submission rejected: {} {}", status, detail);
            return Err(ClientError::Validation(detail));
        }
        if !status.is_success() {
            return Err(ClientError::Network(format!("backend returned {}", status)));
        }

        let payload: SubmitResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        Ok(payload.message)
    }
}

async fn decode_alerts(response: reqwest::Response) -> Result<Vec<AlertRecord>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Alert request failed with status {}", status);
        return Err(ClientError::Network(format!("backend returned {}", status)));
    }

    let payload: AlertsResponse = response.json().await.map_err(|e| {
        if e.is_decode() {
            ClientError::MalformedResponse(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    })?;

    Ok(payload.alerts)
}
