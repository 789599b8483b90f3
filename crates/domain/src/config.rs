pub mod device;
pub mod discovery;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use device::{DeviceConfig, Transport};
pub use discovery::DiscoveryConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, SinkKind};
pub use root::{CliOverrides, Config};
