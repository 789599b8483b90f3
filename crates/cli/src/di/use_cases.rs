use super::Devices;
use hostlist_application::ports::ResultSink;
use hostlist_application::use_cases::{
    CorrelateArpUseCase, DiscoverHostsUseCase, FetchLeafSnapshotUseCase, ResolveNamesUseCase,
};
use hostlist_domain::config::SinkKind;
use hostlist_domain::Config;
use hostlist_infrastructure::output::{FileResultSink, StdoutResultSink};
use hostlist_infrastructure::system::PtrNameResolver;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub discover_hosts: Arc<DiscoverHostsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, devices: &Devices) -> anyhow::Result<Self> {
        let device_deadline = Duration::from_secs(config.discovery.device_timeout_secs);
        let dns_deadline = Duration::from_secs(config.dns.timeout_secs);

        let resolver = Arc::new(PtrNameResolver::from_system_conf(dns_deadline)?);

        let sink: Arc<dyn ResultSink> = match config.output.sink {
            SinkKind::File => Arc::new(FileResultSink::new(
                &config.output.directory,
                config.output.overwrite,
            )),
            SinkKind::Stdout => Arc::new(StdoutResultSink::new()),
        };

        let snapshot = Arc::new(FetchLeafSnapshotUseCase::new(
            devices.leaf.clone(),
            device_deadline,
        ));
        let correlate = Arc::new(CorrelateArpUseCase::new(
            devices.leaf.clone(),
            devices.router.clone(),
            device_deadline,
            config.discovery.max_concurrent_vlan_queries,
        ));
        let names = Arc::new(ResolveNamesUseCase::new(
            resolver,
            dns_deadline,
            config.dns.max_concurrent_lookups,
        ));

        Ok(Self {
            discover_hosts: Arc::new(DiscoverHostsUseCase::new(
                snapshot, correlate, names, sink,
            )),
        })
    }
}
