use hostlist_domain::{
    AddressTableEntry, DomainError, L3InterfaceEntry, MacAddress, OperStatus, VlanId,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{decode, SHOW_HOSTNAME, SHOW_IP_INTERFACE, SHOW_MAC_TABLE, SHOW_VLAN_BRIEF};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MacTableOutput {
    unicast_table: UnicastTable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnicastTable {
    #[serde(default)]
    table_entries: Vec<MacTableRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MacTableRow {
    #[serde(default)]
    mac_address: String,
    #[serde(default)]
    vlan_id: Value,
    interface: String,
    entry_type: String,
}

#[derive(Debug, Deserialize)]
struct IpInterfaceOutput {
    #[serde(default)]
    interfaces: BTreeMap<String, IpInterfaceRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpInterfaceRow {
    line_protocol_status: String,
}

#[derive(Debug, Deserialize)]
struct VlanBriefOutput {
    #[serde(default)]
    vlans: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct HostnameOutput {
    hostname: String,
}

/// Unicast MAC table rows, in device order.
pub fn decode_mac_table(value: Value) -> Result<Vec<AddressTableEntry>, DomainError> {
    let output: MacTableOutput = decode(value, SHOW_MAC_TABLE)?;

    let mut entries = Vec::with_capacity(output.unicast_table.table_entries.len());
    for row in output.unicast_table.table_entries {
        let mac = match row.mac_address.parse::<MacAddress>() {
            Ok(mac) => mac,
            Err(e) => {
                warn!(error = %e, "Skipping MAC table row");
                continue;
            }
        };
        let vlan = match row_vlan(&row.vlan_id) {
            Ok(vlan) => vlan,
            Err(e) => {
                warn!(error = %e, mac = %mac, "Skipping MAC table row");
                continue;
            }
        };
        entries.push(AddressTableEntry::new(
            mac,
            vlan,
            &row.interface,
            &row.entry_type,
        ));
    }

    debug!(entries = entries.len(), "MAC table decoded");
    Ok(entries)
}

/// Devices report `vlanId` as a number; anything else is rejected per row.
fn row_vlan(value: &Value) -> Result<VlanId, DomainError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|id| u16::try_from(id).ok())
            .ok_or_else(|| DomainError::InvalidVlan(n.to_string()))
            .and_then(VlanId::new),
        Value::String(s) => s.parse(),
        other => Err(DomainError::InvalidVlan(other.to_string())),
    }
}

/// VLAN SVIs only; physical, loopback and management interfaces are ignored.
pub fn decode_ip_interfaces(value: Value) -> Result<Vec<L3InterfaceEntry>, DomainError> {
    let output: IpInterfaceOutput = decode(value, SHOW_IP_INTERFACE)?;

    Ok(output
        .interfaces
        .iter()
        .filter_map(|(name, row)| {
            VlanId::from_interface_name(name).map(|vlan| {
                L3InterfaceEntry::new(vlan, OperStatus::parse(&row.line_protocol_status))
            })
        })
        .collect())
}

/// Raw VLAN identifiers as keyed in the VLAN database.
pub fn decode_vlan_brief(value: Value) -> Result<Vec<String>, DomainError> {
    let output: VlanBriefOutput = decode(value, SHOW_VLAN_BRIEF)?;
    Ok(output.vlans.into_keys().collect())
}

pub fn decode_hostname(value: Value) -> Result<String, DomainError> {
    let output: HostnameOutput = decode(value, SHOW_HOSTNAME)?;
    if output.hostname.trim().is_empty() {
        return Err(DomainError::MalformedOutput(format!(
            "'{}': empty hostname",
            SHOW_HOSTNAME
        )));
    }
    Ok(output.hostname)
}
