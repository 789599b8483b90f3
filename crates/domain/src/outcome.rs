use crate::{MacAddress, VlanId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A locally learned MAC with no matching ARP entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedHost {
    pub mac: MacAddress,
    pub vlan: VlanId,
    pub interface: Arc<str>,
}

impl fmt::Display for UnresolvedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAC Address: {} in VLAN: {} on port {} does not resolve to an IP address",
            self.mac, self.vlan, self.interface
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(Ipv4Addr),
    Unresolved(UnresolvedHost),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameOutcome {
    Named { address: Ipv4Addr, name: Arc<str> },
    Unnamed { address: Ipv4Addr },
}

impl NameOutcome {
    pub fn address(&self) -> Ipv4Addr {
        match self {
            NameOutcome::Named { address, .. } | NameOutcome::Unnamed { address } => *address,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, NameOutcome::Named { .. })
    }
}

impl fmt::Display for NameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameOutcome::Named { address, name } => write!(f, "{}  {}", address, name),
            NameOutcome::Unnamed { address } => write!(f, "{} does not resolve in DNS", address),
        }
    }
}
