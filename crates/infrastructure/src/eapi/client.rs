use async_trait::async_trait;
use hostlist_application::ports::DeviceCommandSource;
use hostlist_domain::config::DeviceConfig;
use hostlist_domain::DomainError;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

use super::rpc::{RunCmdsRequest, RunCmdsResponse};

/// EOS command API client for one member of a device pair.
///
/// Every batch is prefixed with `enable` so privileged show commands work the
/// same way they do from an interactive session.
pub struct EapiClient {
    name: String,
    url: String,
    username: String,
    password: String,
    enable_password: String,
    http: reqwest::Client,
    timeout: Duration,
    next_id: AtomicU64,
}

impl EapiClient {
    pub fn new(config: &DeviceConfig, timeout: Duration) -> Result<Self, DomainError> {
        let password = config
            .resolve_password()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        let enable_password = config
            .resolve_enable_password()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Connection {
                device: config.host.clone(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            name: config.host.clone(),
            url: config.command_api_url(),
            username: config.username.clone(),
            password,
            enable_password,
            http,
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_cmds(&self, commands: &[String]) -> Vec<Value> {
        let mut cmds = Vec::with_capacity(commands.len() + 1);
        cmds.push(json!({ "cmd": "enable", "input": self.enable_password }));
        cmds.extend(commands.iter().map(|c| Value::String(c.clone())));
        cmds
    }

    /// Unwraps a `runCmds` response, dropping the `enable` result.
    ///
    /// A refused `enable` means the session has no usable privilege level,
    /// so it is reported as a connection failure rather than a bad command.
    fn parse_response(
        &self,
        response: RunCmdsResponse,
        expected: usize,
    ) -> Result<Vec<Value>, DomainError> {
        if let Some(error) = response.error {
            if error.failed_command() == Some(0) {
                return Err(DomainError::Connection {
                    device: self.name.clone(),
                    reason: format!("privileged mode refused: [{}] {}", error.code, error.message),
                });
            }
            return Err(DomainError::Command {
                device: self.name.clone(),
                reason: format!("[{}] {}", error.code, error.message),
            });
        }

        let mut results = response.result.ok_or_else(|| {
            DomainError::MalformedOutput(format!("{}: response has no result", self.name))
        })?;

        if results.len() != expected + 1 {
            return Err(DomainError::MalformedOutput(format!(
                "{}: expected {} results, got {}",
                self.name,
                expected + 1,
                results.len()
            )));
        }

        results.remove(0);
        Ok(results)
    }
}

#[async_trait]
impl DeviceCommandSource for EapiClient {
    fn device_name(&self) -> &str {
        &self.name
    }

    async fn run(&self, commands: &[String]) -> Result<Vec<Value>, DomainError> {
        let id = format!("hostlist-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let request = RunCmdsRequest::new(&id, self.build_cmds(commands));

        debug!(device = %self.name, id = %id, commands = ?commands, "Sending runCmds");

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Timeout {
                        device: self.name.clone(),
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    DomainError::Connection {
                        device: self.name.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Connection {
                device: self.name.clone(),
                reason: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let body: RunCmdsResponse = response.json().await.map_err(|e| {
            DomainError::MalformedOutput(format!("{}: invalid JSON-RPC body: {}", self.name, e))
        })?;

        let results = self.parse_response(body, commands.len())?;
        debug!(device = %self.name, id = %id, results = results.len(), "runCmds complete");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EapiClient {
        let config = DeviceConfig {
            host: "leaf1.example.net".to_string(),
            username: "admin".to_string(),
            password: Some("secret".to_string()),
            enable_password: Some("enable-secret".to_string()),
            ..Default::default()
        };
        EapiClient::new(&config, Duration::from_secs(5)).unwrap()
    }

    fn response(body: Value) -> RunCmdsResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_client_targets_command_api() {
        let client = client();
        assert_eq!(client.url(), "https://leaf1.example.net:443/command-api");
        assert_eq!(client.device_name(), "leaf1.example.net");
    }

    #[test]
    fn test_request_prefixes_enable() {
        let client = client();
        let cmds = client.build_cmds(&["show arp".to_string()]);
        let request = RunCmdsRequest::new("hostlist-1", cmds);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["method"], "runCmds");
        assert_eq!(body["params"]["version"], 1);
        assert_eq!(body["params"]["format"], "json");
        assert_eq!(body["params"]["cmds"][0]["cmd"], "enable");
        assert_eq!(body["params"]["cmds"][0]["input"], "enable-secret");
        assert_eq!(body["params"]["cmds"][1], "show arp");
    }

    #[test]
    fn test_parse_response_drops_enable_result() {
        let client = client();
        let results = client
            .parse_response(
                response(json!({
                    "jsonrpc": "2.0",
                    "id": "hostlist-1",
                    "result": [{}, {"hostname": "leaf1"}]
                })),
                1,
            )
            .unwrap();

        assert_eq!(results, vec![json!({"hostname": "leaf1"})]);
    }

    #[test]
    fn test_parse_response_maps_rpc_error_to_command_error() {
        let client = client();
        let result = client.parse_response(
            response(json!({
                "jsonrpc": "2.0",
                "id": "hostlist-1",
                "error": {"code": 1002, "message": "CLI command 2 of 2 'show foo' failed: invalid command", "data": [{}, {"errors": ["Invalid input"]}]}
            })),
            1,
        );

        assert!(matches!(result, Err(DomainError::Command { reason, .. }) if reason.contains("1002")));
    }

    #[test]
    fn test_parse_response_maps_refused_enable_to_connection_error() {
        let client = client();
        let result = client.parse_response(
            response(json!({
                "jsonrpc": "2.0",
                "id": "hostlist-1",
                "error": {"code": 1002, "message": "CLI command 1 of 2 'enable' failed: could not run command", "data": [{"errors": ["Bad secret"]}]}
            })),
            1,
        );

        assert!(matches!(&result, Err(DomainError::Connection { reason, .. }) if reason.contains("privileged")));
        assert!(result.unwrap_err().is_fatal_for_run());
    }

    #[test]
    fn test_parse_response_finds_refused_enable_from_message_alone() {
        let client = client();
        let result = client.parse_response(
            response(json!({
                "error": {"code": 1002, "message": "CLI command 1 of 3 'enable' failed: invalid command"}
            })),
            2,
        );

        assert!(matches!(result, Err(DomainError::Connection { .. })));
    }

    #[test]
    fn test_parse_response_rejects_short_result() {
        let client = client();
        let result = client.parse_response(response(json!({"result": [{}]})), 2);
        assert!(matches!(result, Err(DomainError::MalformedOutput(_))));
    }
}
