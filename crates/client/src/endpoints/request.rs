//! Single-attempt HTTP request helper.
//!
//! Sends a request once and turns non-success responses into a
//! [`RequestFailure`] carrying the status, URL, Splunk request id and a
//! readable message. Requests are never retried; each endpoint maps the
//! failure into its own error category.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::models::SplunkMessages;

/// Why a request did not produce a successful response.
#[derive(Debug)]
pub(crate) enum RequestFailure {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    Transport(reqwest::Error),
    /// The server answered with a non-2xx status.
    Status {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },
}

impl RequestFailure {
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::Transport(e) if e.is_timeout() => "request timed out".to_string(),
            Self::Transport(e) if e.is_connect() => format!("connection failed: {e}"),
            Self::Transport(e) => e.to_string(),
            Self::Status { message, .. } => message.clone(),
        }
    }
}

/// Sends an HTTP request once, returning the response only on a 2xx status.
///
/// `endpoint` is the path template used for logging (for example
/// `/services/search/jobs/{sid}`), never the concrete URL.
pub(crate) async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
) -> Result<Response, RequestFailure> {
    debug!(endpoint, "Sending request");

    let response = builder.send().await.map_err(RequestFailure::Transport)?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.summary(),
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => body,
    };

    debug!(endpoint, status, "Request failed");
    Err(RequestFailure::Status {
        status,
        url,
        message,
        request_id,
    })
}
