//! JSON-RPC 2.0 envelope for the `runCmds` method.
//!
//! ```text
//! POST /command-api HTTP/1.1
//! Content-Type: application/json
//!
//! {"jsonrpc": "2.0", "method": "runCmds", "id": "hostlist-1",
//!  "params": {"version": 1, "format": "json", "cmds": [...]}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct RunCmdsRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: RunCmdsParams,
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RunCmdsParams {
    pub version: u32,
    pub format: &'static str,
    pub cmds: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunCmdsResponse {
    #[serde(default)]
    pub result: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcError {
    pub code: i64,
    pub message: String,
    /// One entry per command up to the failing one; the failing entry
    /// carries an `errors` array.
    #[serde(default)]
    pub data: Vec<Value>,
}

impl RpcError {
    /// Zero-based position of the command that failed, if the device said.
    pub fn failed_command(&self) -> Option<usize> {
        if let Some(index) = self
            .data
            .iter()
            .position(|entry| entry.get("errors").is_some())
        {
            return Some(index);
        }

        // "CLI command 2 of 3 'show arp' failed: ..."
        let rest = self.message.strip_prefix("CLI command ")?;
        let ordinal: usize = rest.split_whitespace().next()?.parse().ok()?;
        ordinal.checked_sub(1)
    }
}

impl<'a> RunCmdsRequest<'a> {
    pub fn new(id: &'a str, cmds: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "runCmds",
            params: RunCmdsParams {
                version: 1,
                format: "json",
                cmds,
            },
            id,
        }
    }
}
