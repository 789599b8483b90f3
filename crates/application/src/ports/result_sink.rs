use async_trait::async_trait;
use hostlist_domain::{DomainError, NameOutcome, UnresolvedHost};

/// Destination for the two per-run reports, keyed by the leaf's hostname.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn write_unresolved(
        &self,
        hostname: &str,
        hosts: &[UnresolvedHost],
    ) -> Result<(), DomainError>;

    async fn write_names(&self, hostname: &str, outcomes: &[NameOutcome])
        -> Result<(), DomainError>;
}
