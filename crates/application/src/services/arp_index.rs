use hostlist_domain::{MacAddress, NeighborEntry};
use std::collections::{BTreeMap, HashMap};
use std::net::Ipv4Addr;

/// Reverse-searchable ARP evidence for one locality.
///
/// Rows are keyed by network address; a later row for the same address
/// replaces the earlier one. Lookups go the other way, from MAC to every
/// address currently claimed by it.
#[derive(Debug, Clone, Default)]
pub struct ArpIndex {
    by_address: BTreeMap<Ipv4Addr, MacAddress>,
    by_mac: HashMap<MacAddress, Vec<Ipv4Addr>>,
}

impl ArpIndex {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = NeighborEntry>,
    {
        let mut by_address = BTreeMap::new();
        for entry in entries {
            by_address.insert(entry.address, entry.mac);
        }

        let mut by_mac: HashMap<MacAddress, Vec<Ipv4Addr>> = HashMap::new();
        for (address, mac) in &by_address {
            by_mac.entry(*mac).or_default().push(*address);
        }

        Self { by_address, by_mac }
    }

    /// Addresses mapped to `mac`, ascending. Empty when the MAC is unknown.
    pub fn addresses_for(&self, mac: &MacAddress) -> &[Ipv4Addr] {
        self.by_mac.get(mac).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn mac_for(&self, address: &Ipv4Addr) -> Option<&MacAddress> {
        self.by_address.get(address)
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(s: &str) -> MacAddress {
        s.parse().unwrap()
    }

    #[test]
    fn test_secondary_addresses_are_all_returned() {
        let index = ArpIndex::from_entries([
            NeighborEntry::new(Ipv4Addr::new(10, 0, 10, 9), mac("aabb.cc00.1122")),
            NeighborEntry::new(Ipv4Addr::new(10, 0, 10, 5), mac("aabb.cc00.1122")),
            NeighborEntry::new(Ipv4Addr::new(10, 0, 10, 6), mac("aabb.cc00.3344")),
        ]);

        assert_eq!(
            index.addresses_for(&mac("aa:bb:cc:00:11:22")),
            &[Ipv4Addr::new(10, 0, 10, 5), Ipv4Addr::new(10, 0, 10, 9)]
        );
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_later_row_for_same_address_wins() {
        let address = Ipv4Addr::new(10, 0, 10, 5);
        let index = ArpIndex::from_entries([
            NeighborEntry::new(address, mac("aabb.cc00.1122")),
            NeighborEntry::new(address, mac("aabb.cc00.3344")),
        ]);

        assert!(index.addresses_for(&mac("aabb.cc00.1122")).is_empty());
        assert_eq!(index.addresses_for(&mac("aabb.cc00.3344")), &[address]);
        assert_eq!(index.mac_for(&address), Some(&mac("aabb.cc00.3344")));
    }

    #[test]
    fn test_unknown_mac_has_no_addresses() {
        let index = ArpIndex::default();
        assert!(index.is_empty());
        assert!(index.addresses_for(&mac("aabb.cc00.1122")).is_empty());
    }
}
