// Synchronous uploader for serialized test executions

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::AuthMethod;
use crate::error::XrayError;
use crate::model::Deployment;

/// Import endpoint of an Xray server/DC deployment.
pub const TEST_EXECUTION_ENDPOINT: &str = "/rest/raven/2.0/import/execution";
/// Import endpoint of an Xray cloud deployment.
pub const TEST_EXECUTION_ENDPOINT_CLOUD: &str = "/api/v2/import/execution";

fn import_endpoint(deployment: Deployment) -> &'static str {
    match deployment {
        Deployment::Server => TEST_EXECUTION_ENDPOINT,
        Deployment::Cloud => TEST_EXECUTION_ENDPOINT_CLOUD,
    }
}

/// Where the key of the created test execution lives in the response.
fn issue_key(deployment: Deployment, body: &Value) -> Option<&str> {
    match deployment {
        Deployment::Server => body.get("testExecIssue")?.get("key")?.as_str(),
        Deployment::Cloud => body.get("key")?.as_str(),
    }
}

/// Error detail for a non-2xx response: the server-supplied `error` field
/// when the body carries one, otherwise the body itself.
fn api_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = value.get("error").and_then(Value::as_str) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        trimmed.to_string()
    }
}

/// Publishes serialized test executions to one Xray deployment.
pub struct XrayPublisher {
    base_url: String,
    deployment: Deployment,
    auth: AuthMethod,
    client: Client,
}

impl XrayPublisher {
    /// Build a publisher for `base_url`. A trailing slash is stripped.
    pub fn new(
        base_url: &str,
        deployment: Deployment,
        auth: AuthMethod,
    ) -> Result<Self, XrayError> {
        Self::with_timeout(base_url, deployment, auth, None)
    }

    /// Like [`XrayPublisher::new`] with an explicit request timeout.
    pub fn with_timeout(
        base_url: &str,
        deployment: Deployment,
        auth: AuthMethod,
        timeout: Option<Duration>,
    ) -> Result<Self, XrayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(XrayError::Client)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            deployment,
            auth,
            client,
        })
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    /// Full URL of the import endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, import_endpoint(self.deployment))
    }

    /// POST `payload` and return the key of the created test execution.
    ///
    /// One attempt, no retry. A connection failure or a non-2xx response
    /// comes back as an error and the caller decides whether it is fatal.
    pub fn publish(&self, payload: &Value) -> Result<String, XrayError> {
        let url = self.endpoint_url();
        debug!("posting test execution to {url}");
        let request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(payload);
        let request = self.auth.apply(&self.client, request)?;
        let response = request.send().map_err(|source| XrayError::Connection {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().map_err(|source| XrayError::Connection {
            url: url.clone(),
            source,
        })?;
        if !status.is_success() {
            return Err(XrayError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }
        let body: Value = serde_json::from_str(&body)
            .map_err(|err| XrayError::UnexpectedResponse(format!("invalid JSON body: {err}")))?;
        let key = issue_key(self.deployment, &body)
            .ok_or_else(|| {
                XrayError::UnexpectedResponse(format!("no test execution key in {body}"))
            })?
            .to_string();
        info!("uploaded results to {url}, test execution {key}");
        Ok(key)
    }
}

/// Check that every status carried by an import payload is a spelling the
/// deployment accepts. Examples of outline scenarios are checked too.
pub fn validate_payload(payload: &Value, deployment: Deployment) -> Result<(), XrayError> {
    let tests = payload
        .get("tests")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            XrayError::UnexpectedResponse("payload has no `tests` array".to_string())
        })?;
    for test in tests {
        if let Some(status) = test.get("status").and_then(Value::as_str) {
            deployment.parse_status(status)?;
        }
        if let Some(examples) = test.get("examples").and_then(Value::as_array) {
            for example in examples {
                if let Some(status) = example.as_str() {
                    deployment.parse_status(status)?;
                }
            }
        }
    }
    Ok(())
}
