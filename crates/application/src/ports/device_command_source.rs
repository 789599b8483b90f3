use async_trait::async_trait;
use hostlist_domain::DomainError;
use serde_json::Value;

/// Command execution against one device-pair role (leaf or router).
///
/// Returns one structured result per command, in command order.
#[async_trait]
pub trait DeviceCommandSource: Send + Sync {
    /// Name used in logs and error messages.
    fn device_name(&self) -> &str;

    async fn run(&self, commands: &[String]) -> Result<Vec<Value>, DomainError>;
}
