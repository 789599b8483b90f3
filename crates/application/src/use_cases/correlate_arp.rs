use futures::stream::{self, StreamExt};
use hostlist_domain::{DomainError, NeighborEntry, VlanId};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::device_query::run_commands;
use crate::device_output::{decode_arp_table, decode_vrf_arp_table, show_vrf_arp_command, SHOW_ARP};
use crate::ports::DeviceCommandSource;
use crate::services::ArpIndex;

/// A per-VLAN router query that failed without taking the run down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanQueryFailure {
    pub vlan: VlanId,
    pub error: DomainError,
}

/// Result of one per-VLAN query, kept distinct from an empty answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VlanArpResult {
    Entries(Vec<NeighborEntry>),
    Failed(DomainError),
}

#[derive(Debug, Clone, Default)]
pub struct RemoteArp {
    pub index: ArpIndex,
    pub failures: Vec<VlanQueryFailure>,
}

/// Gathers ARP evidence: the leaf's own table for locally routed VLANs, and
/// the router pair's per-VLAN tables for remotely routed ones.
pub struct CorrelateArpUseCase {
    leaf: Arc<dyn DeviceCommandSource>,
    router: Arc<dyn DeviceCommandSource>,
    deadline: Duration,
    max_concurrent: usize,
}

impl CorrelateArpUseCase {
    pub fn new(
        leaf: Arc<dyn DeviceCommandSource>,
        router: Arc<dyn DeviceCommandSource>,
        deadline: Duration,
        max_concurrent: usize,
    ) -> Self {
        Self {
            leaf,
            router,
            deadline,
            max_concurrent: max_concurrent.max(1),
        }
    }

    #[instrument(skip(self), fields(device = %self.leaf.device_name()))]
    pub async fn local_index(&self) -> Result<ArpIndex, DomainError> {
        let commands = vec![SHOW_ARP.to_string()];
        let results = run_commands(self.leaf.as_ref(), &commands, self.deadline).await?;
        let entries = decode_arp_table(results.into_iter().next().unwrap_or_default())?;

        let index = ArpIndex::from_entries(entries);
        info!(entries = index.len(), "Leaf ARP table indexed");
        Ok(index)
    }

    /// Queries each VLAN independently, at most `max_concurrent` at a time.
    /// A connection failure aborts; any other per-VLAN failure is recorded
    /// and that VLAN contributes nothing. When every queried VLAN fails the
    /// router itself is unusable and the first failure aborts the run.
    #[instrument(skip(self, vlans), fields(device = %self.router.device_name(), vlans = vlans.len()))]
    pub async fn remote_index(&self, vlans: &BTreeSet<VlanId>) -> Result<RemoteArp, DomainError> {
        let results: Vec<(VlanId, VlanArpResult)> = stream::iter(vlans.iter().copied())
            .map(|vlan| async move { (vlan, self.query_vlan(vlan).await) })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let mut entries = Vec::new();
        let mut failures = Vec::new();
        for (vlan, result) in results {
            match result {
                VlanArpResult::Entries(rows) => entries.extend(rows),
                VlanArpResult::Failed(error) if error.is_fatal_for_run() => return Err(error),
                VlanArpResult::Failed(error) => {
                    warn!(vlan = %vlan, error = %error, "Router ARP query failed, VLAN contributes no entries");
                    failures.push(VlanQueryFailure { vlan, error });
                }
            }
        }

        if !failures.is_empty() && failures.len() == vlans.len() {
            error!(
                failed_vlans = failures.len(),
                "Every router ARP query failed, refusing to report all remote hosts as unresolved"
            );
            return Err(failures.swap_remove(0).error);
        }

        let index = ArpIndex::from_entries(entries);
        info!(
            entries = index.len(),
            failed_vlans = failures.len(),
            "Router ARP tables indexed"
        );
        Ok(RemoteArp { index, failures })
    }

    pub async fn query_vlan(&self, vlan: VlanId) -> VlanArpResult {
        let command = show_vrf_arp_command(vlan);
        let commands = vec![command.clone()];

        let outcome = match run_commands(self.router.as_ref(), &commands, self.deadline).await {
            Ok(results) => {
                decode_vrf_arp_table(results.into_iter().next().unwrap_or_default(), &command)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(summary) => {
                debug!(
                    vlan = %vlan,
                    entries = summary.entries.len(),
                    vrfs = ?summary.vrfs,
                    "VLAN ARP table fetched"
                );
                VlanArpResult::Entries(summary.entries)
            }
            Err(e) => VlanArpResult::Failed(e),
        }
    }
}
