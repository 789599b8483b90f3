use futures::stream::{self, StreamExt};
use hostlist_domain::{DomainError, NameOutcome};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::ports::NameResolver;

/// Sorts resolved addresses numerically and looks up a name for each.
///
/// Lookups run concurrently but outcomes are emitted in sorted order.
/// Duplicate addresses are looked up and reported once per occurrence.
pub struct ResolveNamesUseCase {
    resolver: Arc<dyn NameResolver>,
    deadline: Duration,
    max_concurrent: usize,
}

impl ResolveNamesUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>, deadline: Duration, max_concurrent: usize) -> Self {
        Self {
            resolver,
            deadline,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn sorted(mut addresses: Vec<Ipv4Addr>) -> Vec<Ipv4Addr> {
        addresses.sort();
        addresses
    }

    pub async fn execute(&self, addresses: Vec<Ipv4Addr>) -> Vec<NameOutcome> {
        let ordered = Self::sorted(addresses);
        debug!(addresses = ordered.len(), "Resolving names");

        let outcomes: Vec<NameOutcome> = stream::iter(ordered)
            .map(|address| self.lookup(address))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        info!(
            total = outcomes.len(),
            named = outcomes.iter().filter(|o| o.is_named()).count(),
            "Name resolution complete"
        );
        outcomes
    }

    async fn lookup(&self, address: Ipv4Addr) -> NameOutcome {
        let result = match timeout(self.deadline, self.resolver.resolve(address)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::Resolution(format!(
                "lookup timed out after {}s",
                self.deadline.as_secs()
            ))),
        };

        match result {
            Ok(name) => NameOutcome::Named {
                address,
                name: Arc::from(name),
            },
            Err(e) => {
                debug!(address = %address, error = %e, "Address does not resolve");
                NameOutcome::Unnamed { address }
            }
        }
    }
}
