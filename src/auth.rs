// Credential handling for the Xray import endpoints

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::json;

use crate::error::XrayError;

/// Token exchange endpoint of an Xray cloud deployment.
pub const AUTHENTICATE_ENDPOINT: &str = "/api/v2/authenticate";

/// How requests against the import endpoint authenticate.
///
/// Built from [`JiraConfig::auth`](crate::config::JiraConfig::auth); a
/// client id/secret pair wins over a personal access token, which wins over
/// basic auth.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// Username/password pair, sent as HTTP basic auth.
    Basic { username: String, password: String },
    /// Client id/secret pair exchanged for a short-lived bearer token
    /// before every request (Xray cloud).
    Bearer(BearerAuth),
    /// Static personal access token.
    Token(String),
}

impl AuthMethod {
    pub fn bearer(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        AuthMethod::Bearer(BearerAuth::new(base_url, client_id, client_secret))
    }

    /// Apply the credentials to `request`, performing the token exchange
    /// when needed.
    pub(crate) fn apply(
        &self,
        client: &Client,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, XrayError> {
        match self {
            AuthMethod::Basic { username, password } => {
                Ok(request.basic_auth(username, Some(password)))
            }
            AuthMethod::Token(token) => Ok(request.bearer_auth(token)),
            AuthMethod::Bearer(bearer) => {
                let token = bearer.obtain_token(client)?;
                Ok(request.bearer_auth(token))
            }
        }
    }
}

/// Bearer authentication for Xray cloud: exchanges the client id/secret for
/// a token via the authenticate endpoint.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl BearerAuth {
    pub fn new(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, AUTHENTICATE_ENDPOINT)
    }

    /// POST the client credentials and return the bearer token. The token
    /// arrives either as a JSON-encoded string or as plain text.
    fn obtain_token(&self, client: &Client) -> Result<String, XrayError> {
        let url = self.endpoint_url();
        let response = client
            .post(&url)
            .header("Accept", "text/plain")
            .json(&json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
            }))
            .send()
            .map_err(|source| {
                tracing::error!("cannot authenticate with {url}: {source}");
                XrayError::Connection {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| XrayError::Connection {
            url: url.clone(),
            source,
        })?;
        if !status.is_success() {
            return Err(XrayError::Auth {
                url,
                message: format!("HTTP {}: {}", status.as_u16(), body.trim()),
            });
        }
        // Xray cloud wraps the token in JSON string quoting.
        let token = serde_json::from_str::<String>(&body)
            .unwrap_or_else(|_| body.trim().to_string());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_url_strips_trailing_slash() {
        let bearer = BearerAuth::new("https://xray.cloud.getxray.app/", "id", "secret");
        assert_eq!(
            bearer.endpoint_url(),
            "https://xray.cloud.getxray.app/api/v2/authenticate"
        );
    }
}
