use crate::MacAddress;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One ARP cache row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighborEntry {
    pub address: Ipv4Addr,
    pub mac: MacAddress,
}

impl NeighborEntry {
    pub fn new(address: Ipv4Addr, mac: MacAddress) -> Self {
        Self { address, mac }
    }
}
