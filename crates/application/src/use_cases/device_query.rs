use hostlist_domain::DomainError;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use crate::ports::DeviceCommandSource;

/// Runs a command batch with a deadline and checks that one result came
/// back per command.
pub(crate) async fn run_commands(
    source: &dyn DeviceCommandSource,
    commands: &[String],
    deadline: Duration,
) -> Result<Vec<Value>, DomainError> {
    let results = timeout(deadline, source.run(commands))
        .await
        .map_err(|_| DomainError::Timeout {
            device: source.device_name().to_string(),
            seconds: deadline.as_secs(),
        })??;

    if results.len() != commands.len() {
        return Err(DomainError::MalformedOutput(format!(
            "{} returned {} results for {} commands",
            source.device_name(),
            results.len(),
            commands.len()
        )));
    }

    Ok(results)
}
