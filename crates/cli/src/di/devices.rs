use hostlist_application::ports::DeviceCommandSource;
use hostlist_domain::Config;
use hostlist_infrastructure::eapi::EapiClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Devices {
    pub leaf: Arc<dyn DeviceCommandSource>,
    pub router: Arc<dyn DeviceCommandSource>,
}

impl Devices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.discovery.device_timeout_secs);

        let leaf = EapiClient::new(&config.leaf, timeout)?;
        info!(url = %leaf.url(), "Leaf command API client ready");

        let router = EapiClient::new(&config.router, timeout)?;
        info!(url = %router.url(), "Router command API client ready");

        Ok(Self {
            leaf: Arc::new(leaf),
            router: Arc::new(router),
        })
    }
}
