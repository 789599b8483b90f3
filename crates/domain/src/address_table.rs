use crate::{MacAddress, VlanId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a MAC address-table row was populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryClass {
    /// Dynamically learned on a physical or port-channel interface.
    EndHost,
    /// Learned through the VXLAN tunnel interface.
    Overlay,
    /// Statically configured entry.
    Static,
    /// The router's own virtual (VARP) MAC.
    RouterVirtual,
}

impl EntryClass {
    /// Classifies a row from its interface name and entry type.
    ///
    /// Interface checks win over the entry type: an overlay-learned static
    /// entry is reported as `Overlay`.
    pub fn classify(interface: &str, entry_type: &str) -> Self {
        if interface.contains("Vx") {
            EntryClass::Overlay
        } else if interface.contains("Ro") {
            EntryClass::RouterVirtual
        } else if entry_type.contains("st") {
            EntryClass::Static
        } else {
            EntryClass::EndHost
        }
    }

    pub fn is_end_host(&self) -> bool {
        matches!(self, EntryClass::EndHost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnedVia {
    Local,
    Overlay,
}

/// One row of the leaf pair's unicast MAC address table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTableEntry {
    pub mac: MacAddress,
    pub vlan: VlanId,
    pub interface: Arc<str>,
    pub entry_type: Arc<str>,
}

impl AddressTableEntry {
    pub fn new(mac: MacAddress, vlan: VlanId, interface: &str, entry_type: &str) -> Self {
        Self {
            mac,
            vlan,
            interface: Arc::from(interface),
            entry_type: Arc::from(entry_type),
        }
    }

    pub fn class(&self) -> EntryClass {
        EntryClass::classify(&self.interface, &self.entry_type)
    }

    pub fn learned_via(&self) -> LearnedVia {
        match self.class() {
            EntryClass::Overlay => LearnedVia::Overlay,
            _ => LearnedVia::Local,
        }
    }
}
