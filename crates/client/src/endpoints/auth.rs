//! Authentication endpoints.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
///
/// Accepts both the flat `{"sessionKey": ...}` body and the
/// `entry[0].content.sessionKey` shape.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &SecretString,
) -> Result<SecretString> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .query(&[("output_mode", "json")])
        .form(&[("username", username), ("password", password.expose_secret())]);
    let response = send_request(builder, "/services/auth/login")
        .await
        .map_err(|f| ClientError::Auth {
            message: f.message(),
            status: f.status(),
        })?;

    let resp: serde_json::Value = response.json().await.map_err(|e| ClientError::Auth {
        message: format!("invalid login response: {e}"),
        status: None,
    })?;

    let key = resp
        .get("sessionKey")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sessionKey")?
                .as_str()
        })
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ClientError::Auth {
            message: "Missing sessionKey in response".to_string(),
            status: None,
        })?;

    debug!("Login succeeded for {}", username);
    Ok(SecretString::new(key.to_string().into()))
}
