use hostlist_domain::{ResolutionOutcome, UnresolvedHost};
use std::net::Ipv4Addr;
use std::sync::Arc;

use super::{ArpIndex, MacPartition};

/// Outcomes of one partition, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: Vec<Ipv4Addr>,
    pub unresolved: Vec<UnresolvedHost>,
}

impl Resolution {
    pub fn merge(mut self, other: Resolution) -> Self {
        self.resolved.extend(other.resolved);
        self.unresolved.extend(other.unresolved);
        self
    }
}

pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Every MAC yields either all of its ARP addresses or exactly one
    /// unresolved record.
    pub fn outcomes(partition: &MacPartition, index: &ArpIndex) -> Vec<ResolutionOutcome> {
        let mut outcomes = Vec::with_capacity(partition.len());
        for (mac, location) in partition {
            let addresses = index.addresses_for(mac);
            if addresses.is_empty() {
                outcomes.push(ResolutionOutcome::Unresolved(UnresolvedHost {
                    mac: *mac,
                    vlan: location.vlan,
                    interface: Arc::clone(&location.interface),
                }));
            } else {
                outcomes.extend(addresses.iter().copied().map(ResolutionOutcome::Resolved));
            }
        }
        outcomes
    }

    pub fn resolve(partition: &MacPartition, index: &ArpIndex) -> Resolution {
        let mut resolution = Resolution::default();
        for outcome in Self::outcomes(partition, index) {
            match outcome {
                ResolutionOutcome::Resolved(address) => resolution.resolved.push(address),
                ResolutionOutcome::Unresolved(host) => resolution.unresolved.push(host),
            }
        }
        resolution
    }
}
