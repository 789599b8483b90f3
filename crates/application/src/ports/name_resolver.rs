use async_trait::async_trait;
use hostlist_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, address: Ipv4Addr) -> Result<String, DomainError>;
}
