use config::{Config, ConfigError, File, FileFormat};
use derivative::*;
use reqwest::Url;
use serde_derive::Deserialize;
use std::path::PathBuf;

/// Content of the TestRail configuration file:
///
/// ```ini
/// [API]
/// url = https://example.testrail.net
/// email = qa@example.com
/// password = <api key>
/// ```
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(alias = "API")]
    pub api: ApiSettings,
}

#[derive(Deserialize, Derivative)]
#[derivative(Debug)]
pub struct ApiSettings {
    #[serde(with = "crate::configuration::deserialize::url")]
    pub url: Url,
    #[serde(alias = "user")]
    pub email: String,
    #[serde(alias = "api_key", default)]
    #[derivative(Debug(format_with = "crate::configuration::deserialize::secret::fmt_optional_secret"))]
    pub password: Option<String>,
}

/// Basic authentication credentials for the TestRail API.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Credentials {
    pub user: String,
    #[derivative(Debug(format_with = "crate::configuration::deserialize::secret::fmt_secret"))]
    pub password: String,
}

impl Settings {
    pub fn from(file: PathBuf) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file).format(FileFormat::Ini))?;
        config.try_into()
    }
}

impl ApiSettings {
    /// Credentials to use, a runtime supplied secret taking precedence over
    /// the password of the file.
    pub fn credentials(&self, secret: Option<String>) -> Result<Credentials, ConfigError> {
        let password = secret
            .or_else(|| self.password.clone())
            .filter(|password| !password.is_empty())
            .ok_or_else(|| ConfigError::NotFound("api.password".to_owned()))?;
        Ok(Credentials {
            user: self.email.clone(),
            password,
        })
    }
}
