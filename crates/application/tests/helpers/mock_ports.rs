use async_trait::async_trait;
use hostlist_application::ports::{DeviceCommandSource, NameResolver, ResultSink};
use hostlist_domain::{DomainError, NameOutcome, UnresolvedHost};
use serde_json::Value;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

#[derive(Clone)]
pub struct MockDeviceCommandSource {
    name: String,
    responses: Arc<RwLock<HashMap<String, Result<Value, DomainError>>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockDeviceCommandSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(self, command: &str, value: Value) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(command.to_string(), Ok(value));
        self
    }

    pub fn fail(self, command: &str, error: DomainError) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(command.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands_issued(&self) -> Vec<String> {
        self.calls().into_iter().flatten().collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceCommandSource for MockDeviceCommandSource {
    fn device_name(&self) -> &str {
        &self.name
    }

    async fn run(&self, commands: &[String]) -> Result<Vec<Value>, DomainError> {
        self.calls.lock().unwrap().push(commands.to_vec());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let responses = self.responses.read().unwrap();
        commands
            .iter()
            .map(|command| match responses.get(command) {
                Some(result) => result.clone(),
                None => Err(DomainError::Command {
                    device: self.name.clone(),
                    reason: format!("no mock response for '{}'", command),
                }),
            })
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct MockNameResolver {
    names: Arc<RwLock<HashMap<Ipv4Addr, String>>>,
    slow: Arc<RwLock<HashMap<Ipv4Addr, Duration>>>,
    calls: Arc<Mutex<Vec<Ipv4Addr>>>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(self, address: &str, name: &str) -> Self {
        self.names
            .write()
            .unwrap()
            .insert(address.parse().unwrap(), name.to_string());
        self
    }

    pub fn with_delay(self, address: &str, delay: Duration) -> Self {
        self.slow
            .write()
            .unwrap()
            .insert(address.parse().unwrap(), delay);
        self
    }

    pub fn calls(&self) -> Vec<Ipv4Addr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve(&self, address: Ipv4Addr) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(address);

        let delay = self.slow.read().unwrap().get(&address).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.names
            .read()
            .unwrap()
            .get(&address)
            .cloned()
            .ok_or_else(|| DomainError::Resolution(format!("NXDOMAIN for {}", address)))
    }
}

/// Captures report lines exactly as a file sink would write them.
#[derive(Clone, Default)]
pub struct MemoryResultSink {
    unresolved: Arc<Mutex<Vec<(String, String)>>>,
    names: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unresolved_lines(&self) -> Vec<String> {
        self.unresolved
            .lock()
            .unwrap()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn name_lines(&self) -> Vec<String> {
        self.names
            .lock()
            .unwrap()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn hostnames(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .unresolved
            .lock()
            .unwrap()
            .iter()
            .chain(self.names.lock().unwrap().iter())
            .map(|(host, _)| host.clone())
            .collect();
        keys.dedup();
        keys
    }
}

#[async_trait]
impl ResultSink for MemoryResultSink {
    async fn write_unresolved(
        &self,
        hostname: &str,
        hosts: &[UnresolvedHost],
    ) -> Result<(), DomainError> {
        let mut lines = self.unresolved.lock().unwrap();
        for host in hosts {
            lines.push((hostname.to_string(), host.to_string()));
        }
        Ok(())
    }

    async fn write_names(
        &self,
        hostname: &str,
        outcomes: &[NameOutcome],
    ) -> Result<(), DomainError> {
        let mut lines = self.names.lock().unwrap();
        for outcome in outcomes {
            lines.push((hostname.to_string(), outcome.to_string()));
        }
        Ok(())
    }
}
