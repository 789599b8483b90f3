//! Decoding of structured command output returned by the device command API.
//!
//! Each decoder turns one JSON result into domain values. Rows that cannot be
//! parsed are skipped with a warning; a result that does not have the expected
//! shape at all is a `MalformedOutput` error.

mod arp;
mod leaf;

pub use arp::{decode_arp_table, decode_vrf_arp_table, VrfArpSummary};
pub use leaf::{decode_hostname, decode_ip_interfaces, decode_mac_table, decode_vlan_brief};

use hostlist_domain::{DomainError, VlanId};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const SHOW_MAC_TABLE: &str = "show mac address-table";
pub const SHOW_IP_INTERFACE: &str = "show ip interface";
pub const SHOW_VLAN_BRIEF: &str = "show vlan brief";
pub const SHOW_HOSTNAME: &str = "show hostname";
pub const SHOW_ARP: &str = "show arp";

/// ARP rows learned on one VLAN's SVI, across every VRF on the router.
pub fn show_vrf_arp_command(vlan: VlanId) -> String {
    format!("show arp vrf all interface vlan{}", vlan)
}

fn decode<T: DeserializeOwned>(value: Value, command: &str) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::MalformedOutput(format!("'{}': {}", command, e)))
}
