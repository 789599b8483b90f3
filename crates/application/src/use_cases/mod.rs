mod correlate_arp;
mod device_query;
mod discover_hosts;
mod fetch_leaf_snapshot;
mod resolve_names;

pub use correlate_arp::{CorrelateArpUseCase, RemoteArp, VlanArpResult, VlanQueryFailure};
pub use discover_hosts::{DiscoverHostsUseCase, DiscoveryReport};
pub use fetch_leaf_snapshot::{FetchLeafSnapshotUseCase, LeafSnapshot};
pub use resolve_names::ResolveNamesUseCase;
