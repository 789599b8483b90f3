mod address_table_filter;
mod arp_index;
mod mac_partitioner;
mod resolution_engine;
mod topology_classifier;

pub use address_table_filter::AddressTableFilter;
pub use arp_index::ArpIndex;
pub use mac_partitioner::{HostLocation, MacPartition, MacPartitions};
pub use resolution_engine::{Resolution, ResolutionEngine};
pub use topology_classifier::{LocalityMap, TopologyClassifier};
