use hostlist_domain::{DomainError, Locality, NameOutcome, UnresolvedHost};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    CorrelateArpUseCase, FetchLeafSnapshotUseCase, ResolveNamesUseCase, VlanQueryFailure,
};
use crate::ports::ResultSink;
use crate::services::{
    AddressTableFilter, MacPartitions, Resolution, ResolutionEngine, TopologyClassifier,
};

/// Summary of one discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    pub hostname: String,
    pub local_hosts: usize,
    pub remote_hosts: usize,
    pub resolved_addresses: usize,
    pub unresolved: Vec<UnresolvedHost>,
    pub names: Vec<NameOutcome>,
    pub failed_vlans: Vec<VlanQueryFailure>,
}

impl DiscoveryReport {
    pub fn named_count(&self) -> usize {
        self.names.iter().filter(|o| o.is_named()).count()
    }

    pub fn unnamed_count(&self) -> usize {
        self.names.len() - self.named_count()
    }
}

/// Snapshot the leaf, reconcile its MAC table against ARP evidence, resolve
/// names and hand both reports to the sink.
pub struct DiscoverHostsUseCase {
    snapshot: Arc<FetchLeafSnapshotUseCase>,
    correlate: Arc<CorrelateArpUseCase>,
    names: Arc<ResolveNamesUseCase>,
    sink: Arc<dyn ResultSink>,
}

impl DiscoverHostsUseCase {
    pub fn new(
        snapshot: Arc<FetchLeafSnapshotUseCase>,
        correlate: Arc<CorrelateArpUseCase>,
        names: Arc<ResolveNamesUseCase>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            snapshot,
            correlate,
            names,
            sink,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<DiscoveryReport, DomainError> {
        let snapshot = self.snapshot.execute().await?;

        let localities = TopologyClassifier::classify(&snapshot.interfaces, &snapshot.vlans);
        let end_hosts = AddressTableFilter::end_hosts(snapshot.address_table);
        let partitions = MacPartitions::partition(&end_hosts, &localities);
        let remote_vlans = partitions.remote_vlans();

        let (local_index, remote) = tokio::try_join!(
            self.correlate.local_index(),
            self.correlate.remote_index(&remote_vlans)
        )?;

        // Each partition is only ever matched against its own ARP source.
        let local = ResolutionEngine::resolve(partitions.get(Locality::Local), &local_index);
        let routed = ResolutionEngine::resolve(partitions.get(Locality::Remote), &remote.index);
        let Resolution {
            resolved,
            unresolved,
        } = local.merge(routed);
        let resolved_addresses = resolved.len();

        info!(
            resolved = resolved_addresses,
            unresolved = unresolved.len(),
            "MAC addresses reconciled"
        );

        let names = self.names.execute(resolved).await;

        self.sink
            .write_unresolved(&snapshot.hostname, &unresolved)
            .await?;
        self.sink.write_names(&snapshot.hostname, &names).await?;

        Ok(DiscoveryReport {
            hostname: snapshot.hostname,
            local_hosts: partitions.local.len(),
            remote_hosts: partitions.remote.len(),
            resolved_addresses,
            unresolved,
            names,
            failed_vlans: remote.failures,
        })
    }
}
