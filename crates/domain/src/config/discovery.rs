use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_device_timeout_secs")]
    pub device_timeout_secs: u64,

    /// Upper bound on simultaneous per-VLAN ARP queries sent to the router
    /// pair's management plane.
    #[serde(default = "default_max_concurrent_vlan_queries")]
    pub max_concurrent_vlan_queries: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            device_timeout_secs: default_device_timeout_secs(),
            max_concurrent_vlan_queries: default_max_concurrent_vlan_queries(),
        }
    }
}

fn default_device_timeout_secs() -> u64 {
    30
}

fn default_max_concurrent_vlan_queries() -> usize {
    4
}
