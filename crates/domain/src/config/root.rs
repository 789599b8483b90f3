use serde::{Deserialize, Serialize};

use super::device::DeviceConfig;
use super::discovery::DiscoveryConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, SinkKind};

const LOCAL_CONFIG_PATH: &str = "hostlist.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/hostlist/config.toml";

/// Main configuration structure for hostlist
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Access/leaf pair the hosts attach to
    #[serde(default)]
    pub leaf: DeviceConfig,

    /// Router pair serving VLANs not routed on the leaf
    #[serde(default)]
    pub router: DeviceConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hostlist.toml in current directory
    /// 3. /etc/hostlist/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.leaf_host {
            self.leaf.host = host;
        }
        if let Some(host) = overrides.router_host {
            self.router.host = host;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.directory = dir;
        }
        if overrides.stdout {
            self.output.sink = SinkKind::Stdout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.leaf.validate("leaf")?;
        self.router.validate("router")?;

        if self.discovery.device_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "device_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.discovery.max_concurrent_vlan_queries == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_vlan_queries must be at least 1".to_string(),
            ));
        }
        if self.dns.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "dns timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.dns.max_concurrent_lookups == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_lookups must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub leaf_host: Option<String>,
    pub router_host: Option<String>,
    pub output_dir: Option<String>,
    pub stdout: bool,
    pub log_level: Option<String>,
}
