use hostlist_domain::{DomainError, MacAddress, NeighborEntry};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use tracing::{debug, warn};

use super::{decode, SHOW_ARP};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArpOutput {
    #[serde(default)]
    ip_v4_neighbors: Vec<ArpRow>,
}

#[derive(Debug, Deserialize)]
struct VrfArpOutput {
    #[serde(default)]
    vrfs: BTreeMap<String, VrfArpTable>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VrfArpTable {
    #[serde(default)]
    dynamic_entries: u64,
    #[serde(default)]
    ip_v4_neighbors: Vec<ArpRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArpRow {
    address: String,
    #[serde(default)]
    hw_address: String,
}

/// Neighbor rows gathered from one scoped router query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VrfArpSummary {
    pub entries: Vec<NeighborEntry>,
    /// VRFs that reported at least one dynamic entry.
    pub vrfs: Vec<String>,
}

fn parse_rows(rows: Vec<ArpRow>, into: &mut Vec<NeighborEntry>) {
    for row in rows {
        let address = match row.address.parse::<Ipv4Addr>() {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, address = %row.address, "Skipping ARP row");
                continue;
            }
        };
        // Incomplete entries carry no hardware address.
        if row.hw_address.is_empty() {
            continue;
        }
        match row.hw_address.parse::<MacAddress>() {
            Ok(mac) => into.push(NeighborEntry::new(address, mac)),
            Err(e) => warn!(error = %e, address = %address, "Skipping ARP row"),
        }
    }
}

/// Unscoped ARP table of the default routing context.
pub fn decode_arp_table(value: Value) -> Result<Vec<NeighborEntry>, DomainError> {
    let output: ArpOutput = decode(value, SHOW_ARP)?;
    let mut entries = Vec::with_capacity(output.ip_v4_neighbors.len());
    parse_rows(output.ip_v4_neighbors, &mut entries);
    debug!(entries = entries.len(), "ARP table decoded");
    Ok(entries)
}

/// ARP rows of a per-VRF query. VRFs without dynamic entries are skipped.
pub fn decode_vrf_arp_table(value: Value, command: &str) -> Result<VrfArpSummary, DomainError> {
    let output: VrfArpOutput = decode(value, command)?;
    let mut summary = VrfArpSummary::default();

    for (vrf, table) in output.vrfs {
        if table.dynamic_entries == 0 {
            continue;
        }
        parse_rows(table.ip_v4_neighbors, &mut summary.entries);
        summary.vrfs.push(vrf);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_arp_table() {
        let value = json!({
            "dynamicEntries": 2,
            "ipV4Neighbors": [
                {"address": "10.0.10.5", "hwAddress": "aabb.cc00.1122", "interface": "Vlan10, Ethernet1", "age": 0},
                {"address": "10.0.10.6", "hwAddress": "", "interface": "Vlan10"},
                {"address": "bogus", "hwAddress": "aabb.cc00.3344"}
            ]
        });

        let entries = decode_arp_table(value).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].address, Ipv4Addr::new(10, 0, 10, 5));
        assert_eq!(entries[0].mac.to_string(), "aabb.cc00.1122");
    }

    #[test]
    fn test_decode_vrf_arp_table_skips_empty_vrfs() {
        let value = json!({
            "vrfs": {
                "default": {"dynamicEntries": 0, "ipV4Neighbors": [
                    {"address": "192.0.2.1", "hwAddress": "0000.5e00.0101"}
                ]},
                "prod": {"dynamicEntries": 1, "ipV4Neighbors": [
                    {"address": "10.0.20.7", "hwAddress": "aabb.cc00.2222"}
                ]}
            }
        });

        let summary = decode_vrf_arp_table(value, "show arp vrf all interface vlan20").unwrap();
        assert_eq!(summary.vrfs, vec!["prod".to_string()]);
        assert_eq!(summary.entries.len(), 1);
        assert_eq!(summary.entries[0].address, Ipv4Addr::new(10, 0, 20, 7));
    }

    #[test]
    fn test_decode_vrf_arp_table_rejects_wrong_shape() {
        let result = decode_vrf_arp_table(json!([1, 2, 3]), "show arp vrf all interface vlan20");
        assert!(matches!(result, Err(DomainError::MalformedOutput(_))));
    }
}
