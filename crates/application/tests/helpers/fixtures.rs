use hostlist_application::device_output::{
    SHOW_ARP, SHOW_HOSTNAME, SHOW_IP_INTERFACE, SHOW_MAC_TABLE, SHOW_VLAN_BRIEF,
};
use serde_json::{json, Map, Value};

use super::MockDeviceCommandSource;

pub fn mac_row(mac: &str, vlan: u16, interface: &str, entry_type: &str) -> Value {
    json!({
        "macAddress": mac,
        "vlanId": vlan,
        "interface": interface,
        "entryType": entry_type,
        "moves": 1,
        "lastMove": 1700000000.0
    })
}

pub fn mac_table(rows: Vec<Value>) -> Value {
    json!({
        "unicastTable": { "tableEntries": rows },
        "multicastTable": { "tableEntries": [] }
    })
}

pub fn ip_interfaces(svis: &[(&str, &str)]) -> Value {
    let mut interfaces = Map::new();
    for (name, status) in svis {
        interfaces.insert(
            name.to_string(),
            json!({ "lineProtocolStatus": status, "interfaceStatus": "connected" }),
        );
    }
    json!({ "interfaces": interfaces })
}

pub fn vlan_brief(ids: &[&str]) -> Value {
    let mut vlans = Map::new();
    for id in ids {
        vlans.insert(id.to_string(), json!({ "name": format!("VLAN{}", id), "status": "active" }));
    }
    json!({ "vlans": vlans })
}

pub fn hostname(name: &str) -> Value {
    json!({ "hostname": name, "fqdn": format!("{}.example.net", name) })
}

pub fn arp(rows: &[(&str, &str)]) -> Value {
    let neighbors: Vec<Value> = rows
        .iter()
        .map(|(address, mac)| json!({ "address": address, "hwAddress": mac, "age": 0 }))
        .collect();
    json!({ "dynamicEntries": neighbors.len(), "ipV4Neighbors": neighbors })
}

pub fn vrf_arp(vrfs: &[(&str, u64, &[(&str, &str)])]) -> Value {
    let mut map = Map::new();
    for (name, dynamic, rows) in vrfs {
        let neighbors: Vec<Value> = rows
            .iter()
            .map(|(address, mac)| json!({ "address": address, "hwAddress": mac }))
            .collect();
        map.insert(
            name.to_string(),
            json!({ "dynamicEntries": dynamic, "ipV4Neighbors": neighbors }),
        );
    }
    json!({ "vrfs": map })
}

/// A leaf whose snapshot commands answer with the given pieces.
pub fn leaf(
    name: &str,
    rows: Vec<Value>,
    svis: &[(&str, &str)],
    vlans: &[&str],
    arp_rows: &[(&str, &str)],
) -> MockDeviceCommandSource {
    MockDeviceCommandSource::new(name)
        .respond(SHOW_MAC_TABLE, mac_table(rows))
        .respond(SHOW_IP_INTERFACE, ip_interfaces(svis))
        .respond(SHOW_VLAN_BRIEF, vlan_brief(vlans))
        .respond(SHOW_HOSTNAME, hostname(name))
        .respond(SHOW_ARP, arp(arp_rows))
}
