use hostlist_domain::{AddressTableEntry, DomainError, L3InterfaceEntry};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::device_query::run_commands;
use crate::device_output::{
    decode_hostname, decode_ip_interfaces, decode_mac_table, decode_vlan_brief, SHOW_HOSTNAME,
    SHOW_IP_INTERFACE, SHOW_MAC_TABLE, SHOW_VLAN_BRIEF,
};
use crate::ports::DeviceCommandSource;

/// Point-in-time view of the leaf pair.
#[derive(Debug, Clone)]
pub struct LeafSnapshot {
    pub hostname: String,
    pub address_table: Vec<AddressTableEntry>,
    pub interfaces: Vec<L3InterfaceEntry>,
    /// Raw VLAN database keys.
    pub vlans: Vec<String>,
}

pub struct FetchLeafSnapshotUseCase {
    leaf: Arc<dyn DeviceCommandSource>,
    deadline: Duration,
}

impl FetchLeafSnapshotUseCase {
    pub fn new(leaf: Arc<dyn DeviceCommandSource>, deadline: Duration) -> Self {
        Self { leaf, deadline }
    }

    #[instrument(skip(self), fields(device = %self.leaf.device_name()))]
    pub async fn execute(&self) -> Result<LeafSnapshot, DomainError> {
        let commands: Vec<String> = [SHOW_MAC_TABLE, SHOW_IP_INTERFACE, SHOW_VLAN_BRIEF, SHOW_HOSTNAME]
            .iter()
            .map(|c| c.to_string())
            .collect();

        debug!("Collecting leaf snapshot");
        let mut results = run_commands(self.leaf.as_ref(), &commands, self.deadline)
            .await?
            .into_iter();

        // run_commands guarantees one result per command.
        let mut next = || results.next().unwrap_or_default();
        let address_table = decode_mac_table(next())?;
        let interfaces = decode_ip_interfaces(next())?;
        let vlans = decode_vlan_brief(next())?;
        let hostname = decode_hostname(next())?;

        info!(
            hostname = %hostname,
            mac_entries = address_table.len(),
            svis = interfaces.len(),
            vlans = vlans.len(),
            "Leaf snapshot collected"
        );

        Ok(LeafSnapshot {
            hostname,
            address_table,
            interfaces,
            vlans,
        })
    }
}
