use crate::VlanId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line-protocol state of a routed interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperStatus {
    Up,
    Down,
    Other,
}

impl OperStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "up" => OperStatus::Up,
            "down" | "lowerLayerDown" | "notPresent" => OperStatus::Down,
            _ => OperStatus::Other,
        }
    }
}

/// A VLAN SVI present on the leaf pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L3InterfaceEntry {
    pub vlan: VlanId,
    pub status: OperStatus,
}

impl L3InterfaceEntry {
    pub fn new(vlan: VlanId, status: OperStatus) -> Self {
        Self { vlan, status }
    }

    pub fn is_up(&self) -> bool {
        self.status == OperStatus::Up
    }
}

/// Where a VLAN is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    /// The leaf pair owns an active SVI for the VLAN.
    Local,
    /// Routing happens on the router pair (VXLAN-bridged VLAN).
    Remote,
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locality::Local => write!(f, "local"),
            Locality::Remote => write!(f, "remote"),
        }
    }
}
