use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Https,
    Http,
}

impl Transport {
    pub fn scheme(&self) -> &'static str {
        match self {
            Transport::Https => "https",
            Transport::Http => "http",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Transport::Https => 443,
            Transport::Http => 80,
        }
    }
}

/// Management-plane access to one member of a device pair.
///
/// Only one member of an MLAG pair needs to be queried; single-homed hosts on
/// the partner are learned across the peer link.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DeviceConfig {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub transport: Transport,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: Option<String>,

    /// Read the password from this environment variable instead.
    #[serde(default)]
    pub password_env: Option<String>,

    /// Sent with `enable` before every command batch. Falls back to the
    /// login password when unset.
    #[serde(default)]
    pub enable_password: Option<String>,

    #[serde(default)]
    pub verify_tls: bool,
}

impl DeviceConfig {
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.transport.default_port())
    }

    pub fn command_api_url(&self) -> String {
        format!(
            "{}://{}:{}/command-api",
            self.transport.scheme(),
            self.host,
            self.effective_port()
        )
    }

    pub fn resolve_password(&self) -> Result<String, ConfigError> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        if let Some(var) = &self.password_env {
            return std::env::var(var).map_err(|_| ConfigError::MissingEnv(var.clone()));
        }
        Ok(String::new())
    }

    pub fn resolve_enable_password(&self) -> Result<String, ConfigError> {
        match &self.enable_password {
            Some(secret) => Ok(secret.clone()),
            None => self.resolve_password(),
        }
    }

    pub(crate) fn validate(&self, role: &str) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} host is not set", role)));
        }
        if self.username.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} username is not set",
                role
            )));
        }
        Ok(())
    }
}
