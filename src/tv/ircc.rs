//! IRCC command dispatch.
//!
//! One dispatch is one `POST` of a SOAP envelope carrying a single IR code to
//! the TV's IRCC service. Nothing is queued or retried here: concurrent calls
//! are independent and a failed call is reported once.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::tv::codes::CommandTable;
use crate::tv::config::DeviceConfig;

pub const SOAP_ACTION: &str = "urn:schemas-sony-com:service:IRCC:1#X_SendIRCC";
pub const PSK_HEADER: &str = "X-Auth-PSK";
pub const SOAP_ACTION_HEADER: &str = "SOAPACTION";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

const NO_BODY_PLACEHOLDER: &str = "<no response body available>";

/// Why a dispatch failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no TV address or pre-shared key configured")]
    Misconfigured,

    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("TV returned status {status} for {url} (key: {key}, response: \"{body}\")")]
    HttpError {
        status: u16,
        url: String,
        key: String,
        body: String,
    },

    #[error("network error: {0}")]
    NetworkError(#[source] reqwest::Error),
}

impl DispatchError {
    /// Status the local API answers with for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::Misconfigured => StatusCode::SERVICE_UNAVAILABLE,
            DispatchError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            DispatchError::HttpError { .. } | DispatchError::NetworkError(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Message safe to hand to remote callers; never includes the key.
    pub fn client_message(&self) -> String {
        match self {
            DispatchError::HttpError { status, body, .. } => {
                format!("TV returned status {status} (response: \"{body}\")")
            }
            other => other.to_string(),
        }
    }
}

/// SOAP body for one `X_SendIRCC` call. The code is inserted verbatim.
pub fn build_envelope(code: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
  <s:Body>
    <u:X_SendIRCC xmlns:u="urn:schemas-sony-com:service:IRCC:1">
      <IRCCCode>{code}</IRCCCode>
    </u:X_SendIRCC>
  </s:Body>
</s:Envelope>"#
    )
}

fn build_headers(preshared_key: &str) -> Result<HeaderMap, DispatchError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/xml; charset=UTF-8"),
    );
    // The TV answers "Invalid Action" unless the value keeps its quotes.
    let action = format!("\"{}\"", SOAP_ACTION);
    headers.insert(
        SOAP_ACTION_HEADER,
        HeaderValue::from_str(&action).map_err(|_| DispatchError::Misconfigured)?,
    );
    headers.insert(
        PSK_HEADER,
        HeaderValue::from_str(preshared_key).map_err(|_| DispatchError::Misconfigured)?,
    );
    headers.insert(CONNECTION, HeaderValue::from_static("Keep-Alive"));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Ok(headers)
}

/// Sends IR codes to one configured TV.
#[derive(Debug, Clone)]
pub struct IrccClient {
    config: Arc<DeviceConfig>,
    client: Client,
}

impl IrccClient {
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: Client::new(),
        }
    }

    /// Send one command code and wait for the TV's verdict.
    pub async fn dispatch(&self, code: &str) -> Result<(), DispatchError> {
        let name = CommandTable::global().name_for(code).unwrap_or("raw");

        if !self.config.is_configured() {
            error!(command = name, "no TV address or pre-shared key setup yet");
            return Err(DispatchError::Misconfigured);
        }

        let url = self.config.endpoint_url();
        let headers = build_headers(&self.config.preshared_key)?;
        let timeout = self.config.timeout();

        debug!(
            command = name,
            code = %code,
            url = %url,
            timeout_ms = %timeout.as_millis(),
            "sending IRCC command"
        );

        let send = self
            .client
            .post(&url)
            .headers(headers)
            .body(build_envelope(code))
            .send();

        // Dropping `send` on elapse aborts the in-flight request.
        let resp = match tokio::time::timeout(timeout, send).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!(command = name, code = %code, url = %url, error = %e, "IRCC request failed");
                return Err(DispatchError::NetworkError(e));
            }
            Err(_) => {
                error!(
                    command = name,
                    code = %code,
                    timeout_ms = %timeout.as_millis(),
                    "IRCC request timed out"
                );
                return Err(DispatchError::Timeout(timeout));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| NO_BODY_PLACEHOLDER.to_string());
            let err = DispatchError::HttpError {
                status: status.as_u16(),
                url,
                key: self.config.preshared_key.clone(),
                body,
            };
            error!(command = name, code = %code, "{}", err);
            return Err(err);
        }

        debug!(command = name, status = %status.as_u16(), "IRCC command accepted");
        Ok(())
    }

    /// Look up `name` in the command table and dispatch its code.
    /// Returns `None` when the name is unknown.
    pub async fn press(&self, name: &str) -> Option<Result<(), DispatchError>> {
        let code = CommandTable::global().lookup(name)?;
        Some(self.dispatch(code).await)
    }
}
