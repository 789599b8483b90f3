use hostlist_domain::{AddressTableEntry, Locality, MacAddress, VlanId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, trace};

use super::LocalityMap;

/// Where a MAC address was learned on the leaf pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLocation {
    pub interface: Arc<str>,
    pub vlan: VlanId,
}

pub type MacPartition = BTreeMap<MacAddress, HostLocation>;

/// End-host MACs split by how their VLAN is routed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacPartitions {
    pub local: MacPartition,
    pub remote: MacPartition,
}

impl MacPartitions {
    /// Entries on VLANs missing from `localities` are dropped. A MAC seen more
    /// than once keeps the location of its last row.
    pub fn partition(entries: &[AddressTableEntry], localities: &LocalityMap) -> Self {
        let mut partitions = Self::default();
        let mut dropped = 0usize;

        for entry in entries {
            let Some(locality) = localities.get(&entry.vlan) else {
                trace!(mac = %entry.mac, vlan = %entry.vlan, "VLAN not classified, dropping");
                dropped += 1;
                continue;
            };
            let location = HostLocation {
                interface: Arc::clone(&entry.interface),
                vlan: entry.vlan,
            };
            match locality {
                Locality::Local => partitions.local.insert(entry.mac, location),
                Locality::Remote => partitions.remote.insert(entry.mac, location),
            };
        }

        debug!(
            local = partitions.local.len(),
            remote = partitions.remote.len(),
            dropped,
            "MAC addresses partitioned"
        );
        partitions
    }

    pub fn get(&self, locality: Locality) -> &MacPartition {
        match locality {
            Locality::Local => &self.local,
            Locality::Remote => &self.remote,
        }
    }

    /// Distinct VLANs that carry at least one remotely routed host.
    pub fn remote_vlans(&self) -> BTreeSet<VlanId> {
        self.remote.values().map(|location| location.vlan).collect()
    }
}
