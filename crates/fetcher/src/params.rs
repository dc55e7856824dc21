//! Connection parameters for the entry-point node.

use url::Url;

use crate::error::FetchError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;

/// Where and how to reach the single node the snapshot is taken from.
///
/// An explicit `url` takes precedence over `host` and `port`; credentials
/// are applied on top of whichever form is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionParams {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
        }
    }
}

impl ConnectionParams {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn from_host(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    /// Resolve to a `redis://` url.
    pub fn to_url(&self) -> Result<Url, FetchError> {
        let mut url = match &self.url {
            Some(url) => Url::parse(url)?,
            None if self.host.contains(':') && !self.host.starts_with('[') => {
                Url::parse(&format!("redis://[{}]:{}", self.host, self.port))?
            }
            None => Url::parse(&format!("redis://{}:{}", self.host, self.port))?,
        };

        if let Some(username) = &self.username {
            url.set_username(username)
                .map_err(|_| FetchError::UrlCredentials(url.to_string()))?;
        }
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|_| FetchError::UrlCredentials(url.to_string()))?;
        }
        Ok(url)
    }

    /// `host:port` of the entry point with credentials left out, for logs.
    pub fn display_target(&self) -> String {
        match self.to_url() {
            Ok(url) => format!(
                "{}:{}",
                url.host_str().unwrap_or_default(),
                url.port().unwrap_or(DEFAULT_PORT)
            ),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}
