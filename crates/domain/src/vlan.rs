use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// VLANs never considered for host discovery: the default VLAN and the two
/// MLAG peer-link VLANs.
pub const EXCLUDED_VLANS: [u16; 3] = [1, 4093, 4094];

const MAX_VLAN: u16 = 4094;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    pub fn new(id: u16) -> Result<Self, DomainError> {
        if id == 0 || id > MAX_VLAN {
            return Err(DomainError::InvalidVlan(id.to_string()));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn is_excluded(&self) -> bool {
        EXCLUDED_VLANS.contains(&self.0)
    }

    /// Name of the routed SVI for this VLAN, e.g. `Vlan10`.
    pub fn interface_name(&self) -> String {
        format!("Vlan{}", self.0)
    }

    /// Parses the numeric suffix of an SVI name such as `Vlan10`.
    pub fn from_interface_name(name: &str) -> Option<Self> {
        name.strip_prefix("Vlan")?.parse().ok()
    }
}

impl FromStr for VlanId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidVlan(s.to_string()));
        }
        let id: u16 = s
            .parse()
            .map_err(|_| DomainError::InvalidVlan(s.to_string()))?;
        Self::new(id)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> Self {
        vlan.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
