//! Hostlist Domain Layer
pub mod address_table;
pub mod config;
pub mod errors;
pub mod mac_address;
pub mod neighbor;
pub mod outcome;
pub mod topology;
pub mod vlan;

pub use address_table::{AddressTableEntry, EntryClass, LearnedVia};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use mac_address::MacAddress;
pub use neighbor::NeighborEntry;
pub use outcome::{NameOutcome, ResolutionOutcome, UnresolvedHost};
pub use topology::{L3InterfaceEntry, Locality, OperStatus};
pub use vlan::{VlanId, EXCLUDED_VLANS};
