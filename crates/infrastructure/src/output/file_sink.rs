use async_trait::async_trait;
use hostlist_application::ports::ResultSink;
use hostlist_domain::{DomainError, NameOutcome, UnresolvedHost};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::render_lines;

/// Writes `{hostname}-noip.txt` and `{hostname}-ip.txt`.
///
/// Files are appended to. With `overwrite`, each file is truncated the first
/// time this sink writes to it.
pub struct FileResultSink {
    directory: PathBuf,
    overwrite: bool,
    truncated: Mutex<HashSet<PathBuf>>,
}

impl FileResultSink {
    pub fn new(directory: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            directory: directory.into(),
            overwrite,
            truncated: Mutex::new(HashSet::new()),
        }
    }

    pub fn unresolved_path(&self, hostname: &str) -> PathBuf {
        self.directory
            .join(format!("{}-noip.txt", sanitize(hostname)))
    }

    pub fn names_path(&self, hostname: &str) -> PathBuf {
        self.directory.join(format!("{}-ip.txt", sanitize(hostname)))
    }

    fn should_truncate(&self, path: &Path) -> bool {
        if !self.overwrite {
            return false;
        }
        match self.truncated.lock() {
            Ok(mut seen) => seen.insert(path.to_path_buf()),
            Err(poisoned) => poisoned.into_inner().insert(path.to_path_buf()),
        }
    }

    async fn write(&self, path: PathBuf, contents: String) -> Result<(), DomainError> {
        let truncate = self.should_truncate(&path);
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(!truncate)
            .truncate(truncate)
            .open(&path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

/// Hostnames become file names; keep them on one path component.
fn sanitize(hostname: &str) -> String {
    hostname
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn write_unresolved(
        &self,
        hostname: &str,
        hosts: &[UnresolvedHost],
    ) -> Result<(), DomainError> {
        let path = self.unresolved_path(hostname);
        self.write(path.clone(), render_lines(hosts)).await?;
        info!(path = %path.display(), records = hosts.len(), "Unresolved MAC report written");
        Ok(())
    }

    async fn write_names(
        &self,
        hostname: &str,
        outcomes: &[NameOutcome],
    ) -> Result<(), DomainError> {
        let path = self.names_path(hostname);
        self.write(path.clone(), render_lines(outcomes)).await?;
        info!(path = %path.display(), records = outcomes.len(), "Host name report written");
        Ok(())
    }
}
