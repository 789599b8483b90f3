use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hostlist_application::ports::NameResolver;
use hostlist_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// Reverse (PTR) lookups through the system's configured resolvers.
pub struct PtrNameResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl PtrNameResolver {
    pub fn from_system_conf(timeout: Duration) -> Result<Self, DomainError> {
        let builder = TokioResolver::builder_tokio().map_err(|e| {
            DomainError::ConfigError(format!("Failed to read system resolver config: {}", e))
        })?;
        Ok(Self {
            resolver: builder.build(),
            timeout,
        })
    }

    pub fn ip_to_reverse_domain(address: &Ipv4Addr) -> String {
        let octets = address.octets();
        format!(
            "{}.{}.{}.{}.in-addr.arpa",
            octets[3], octets[2], octets[1], octets[0]
        )
    }
}

#[async_trait]
impl NameResolver for PtrNameResolver {
    async fn resolve(&self, address: Ipv4Addr) -> Result<String, DomainError> {
        debug!(
            ip = %address,
            reverse_domain = %Self::ip_to_reverse_domain(&address),
            "Performing PTR lookup"
        );

        let lookup = tokio::time::timeout(
            self.timeout,
            self.resolver.reverse_lookup(IpAddr::V4(address)),
        )
        .await
        .map_err(|_| DomainError::Resolution(format!("PTR lookup for {} timed out", address)))?
        .map_err(|e| DomainError::Resolution(format!("PTR lookup for {} failed: {}", address, e)))?;

        let hostname = lookup
            .iter()
            .next()
            .map(|ptr| ptr.to_string().trim_end_matches('.').to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                DomainError::Resolution(format!("PTR lookup for {} returned no records", address))
            })?;

        debug!(ip = %address, hostname = %hostname, "PTR lookup successful");
        Ok(hostname)
    }
}
