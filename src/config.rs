// Jira connection settings, read from the process environment

use url::Url;

use crate::auth::AuthMethod;
use crate::error::XrayError;

pub const ENV_BASE_URL: &str = "XRAY_API_BASE_URL";
pub const ENV_USER: &str = "XRAY_API_USER";
pub const ENV_PASSWORD: &str = "XRAY_API_PASSWORD";
pub const ENV_CLIENT_ID: &str = "XRAY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "XRAY_CLIENT_SECRET";
pub const ENV_TOKEN: &str = "XRAY_TOKEN";

/// Jira connection settings.
///
/// Only the base URL is mandatory. Which of the credential pairs is set
/// decides the authentication method, see [`JiraConfig::auth`].
#[derive(Debug, Clone, Default)]
pub struct JiraConfig {
    pub base_url: String,
    pub user: String,
    pub password: String,
    pub client_id: String,
    pub client_secret: String,
    pub token: String,
}

impl JiraConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, XrayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, XrayError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL).ok_or(XrayError::MissingEnv(ENV_BASE_URL))?;
        Url::parse(&base_url).map_err(|source| XrayError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;
        let get = |name| lookup(name).unwrap_or_default();
        Ok(Self {
            base_url,
            user: get(ENV_USER),
            password: get(ENV_PASSWORD),
            client_id: get(ENV_CLIENT_ID),
            client_secret: get(ENV_CLIENT_SECRET),
            token: get(ENV_TOKEN),
        })
    }

    /// Select the credentials to use: a client id/secret pair wins over a
    /// personal access token, which wins over basic auth.
    pub fn auth(&self) -> AuthMethod {
        if !self.client_id.is_empty() && !self.client_secret.is_empty() {
            AuthMethod::bearer(&self.base_url, &self.client_id, &self.client_secret)
        } else if !self.token.is_empty() {
            AuthMethod::Token(self.token.clone())
        } else {
            AuthMethod::Basic {
                username: self.user.clone(),
                password: self.password.clone(),
            }
        }
    }
}
