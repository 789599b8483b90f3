use async_trait::async_trait;
use hostlist_application::ports::ResultSink;
use hostlist_domain::{DomainError, NameOutcome, UnresolvedHost};
use tokio::io::{self, AsyncWriteExt};

use super::render_lines;

/// Prints both reports to stdout, each under a header line.
#[derive(Default)]
pub struct StdoutResultSink;

impl StdoutResultSink {
    pub fn new() -> Self {
        Self
    }

    async fn print(&self, header: String, body: String) -> Result<(), DomainError> {
        let mut stdout = io::stdout();
        let text = format!("{}\n{}", header, body);
        stdout
            .write_all(text.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ResultSink for StdoutResultSink {
    async fn write_unresolved(
        &self,
        hostname: &str,
        hosts: &[UnresolvedHost],
    ) -> Result<(), DomainError> {
        self.print(format!("# {}-noip", hostname), render_lines(hosts))
            .await
    }

    async fn write_names(
        &self,
        hostname: &str,
        outcomes: &[NameOutcome],
    ) -> Result<(), DomainError> {
        self.print(format!("# {}-ip", hostname), render_lines(outcomes))
            .await
    }
}
