use hostlist_domain::{L3InterfaceEntry, Locality, VlanId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

pub type LocalityMap = BTreeMap<VlanId, Locality>;

/// Decides, per configured VLAN, whether the leaf pair routes it.
pub struct TopologyClassifier;

impl TopologyClassifier {
    /// `configured` holds the raw VLAN database keys. Keys that are not VLAN
    /// numbers, and the excluded VLANs, are left out of the map.
    pub fn classify(interfaces: &[L3InterfaceEntry], configured: &[String]) -> LocalityMap {
        let active: BTreeSet<VlanId> = interfaces
            .iter()
            .filter(|i| i.is_up() && !i.vlan.is_excluded())
            .map(|i| i.vlan)
            .collect();

        let mut localities = LocalityMap::new();
        for raw in configured {
            let vlan = match raw.parse::<VlanId>() {
                Ok(vlan) if !vlan.is_excluded() => vlan,
                _ => {
                    trace!(vlan = %raw, "VLAN not considered");
                    continue;
                }
            };
            let locality = if active.contains(&vlan) {
                Locality::Local
            } else {
                Locality::Remote
            };
            localities.insert(vlan, locality);
        }

        debug!(
            local = localities.values().filter(|l| **l == Locality::Local).count(),
            remote = localities.values().filter(|l| **l == Locality::Remote).count(),
            "VLANs classified"
        );
        localities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostlist_domain::OperStatus;

    fn svi(id: u16, status: OperStatus) -> L3InterfaceEntry {
        L3InterfaceEntry::new(VlanId::new(id).unwrap(), status)
    }

    fn vlans(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_active_svi_makes_vlan_local() {
        let map = TopologyClassifier::classify(
            &[svi(10, OperStatus::Up), svi(30, OperStatus::Down)],
            &vlans(&["10", "20", "30"]),
        );

        assert_eq!(map.get(&VlanId::new(10).unwrap()), Some(&Locality::Local));
        assert_eq!(map.get(&VlanId::new(20).unwrap()), Some(&Locality::Remote));
        assert_eq!(map.get(&VlanId::new(30).unwrap()), Some(&Locality::Remote));
    }

    #[test]
    fn test_excluded_and_malformed_vlans_are_dropped() {
        let map = TopologyClassifier::classify(
            &[svi(4094, OperStatus::Up), svi(1, OperStatus::Up)],
            &vlans(&["1", "4093", "4094", "default", "12a", "11"]),
        );

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&VlanId::new(11).unwrap()), Some(&Locality::Remote));
    }

    #[test]
    fn test_svi_without_vlan_database_entry_is_ignored() {
        let map = TopologyClassifier::classify(&[svi(50, OperStatus::Up)], &vlans(&["10"]));
        assert!(!map.contains_key(&VlanId::new(50).unwrap()));
    }
}
